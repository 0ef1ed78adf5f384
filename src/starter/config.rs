//! Configuration for the [`DownloadStarter`](super::DownloadStarter).

use crate::dispatch::Dispatcher;
use crate::job::{JobKeyGenerator, AUDIO_DOWNLOAD_KEY};
use crate::resolve::{AudioSourceResolver, KeyLabels, LabelLookup, PathResolver, QuranStructure};

use std::fmt;
use std::sync::Arc;

/// Label given to database-only jobs.
pub const DEFAULT_DATABASE_LABEL: &str = "Audio database";

/// Configuration structure for the starter.
///
/// Collaborators are optional here only so the builder can fill them in one
/// at a time; building fails if any required one is missing.
#[derive(Clone)]
pub struct StarterConfig {
    /// Namespace prefix of every job key.
    pub key_namespace: String,
    /// Display label of database-only jobs.
    pub database_label: String,
    pub paths: Option<Arc<dyn PathResolver>>,
    pub sources: Option<Arc<dyn AudioSourceResolver>>,
    pub structure: Option<Arc<dyn QuranStructure>>,
    pub dispatcher: Option<Arc<dyn Dispatcher>>,
    pub labels: Arc<dyn LabelLookup>,
}

impl StarterConfig {
    pub(crate) fn key_generator(&self) -> JobKeyGenerator {
        JobKeyGenerator::new(&self.key_namespace)
    }
}

impl fmt::Debug for StarterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarterConfig")
            .field("key_namespace", &self.key_namespace)
            .field("database_label", &self.database_label)
            .field("paths", &self.paths.is_some())
            .field("sources", &self.sources.is_some())
            .field("structure", &self.structure.is_some())
            .field("dispatcher", &self.dispatcher.is_some())
            .finish()
    }
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            key_namespace: String::from(AUDIO_DOWNLOAD_KEY),
            database_label: String::from(DEFAULT_DATABASE_LABEL),
            paths: None,
            sources: None,
            structure: None,
            dispatcher: None,
            labels: Arc::new(KeyLabels),
        }
    }
}
