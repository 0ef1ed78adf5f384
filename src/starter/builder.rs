//! Builder pattern implementation for creating [`DownloadStarter`] instances.
//!
//! # Examples
//!
//! ```rust
//! use qari_dl::dispatch::ChannelDispatcher;
//! use qari_dl::resolve::{AudioSourceResolver, PathResolver, QuranStructure};
//! use qari_dl::{DownloadStarterBuilder, Error, Reciter, Result, Url};
//! use std::path::{Path, PathBuf};
//!
//! struct Paths;
//! impl PathResolver for Paths {
//!     fn base_audio_directory(&self) -> Result<PathBuf> {
//!         Ok(PathBuf::from("/storage/audio"))
//!     }
//!     fn database_url(&self, reciter: &Reciter) -> Result<Url> {
//!         Err(Error::NoDatabaseAvailable(reciter.id))
//!     }
//! }
//!
//! struct Sources;
//! impl AudioSourceResolver for Sources {
//!     fn source_url(&self, _reciter: &Reciter) -> Result<Url> {
//!         qari_dl::utils::parse_url("https://audio.example.org/minshawi/")
//!     }
//! }
//!
//! struct Structure;
//! impl QuranStructure for Structure {
//!     fn unit_length(&self, sura: u16) -> Option<u16> {
//!         (sura == 1).then_some(7)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let (dispatcher, _rx) = ChannelDispatcher::new();
//! let starter = DownloadStarterBuilder::new()
//!     .paths(Paths)
//!     .sources(Sources)
//!     .structure(Structure)
//!     .dispatcher(dispatcher)
//!     .build()?;
//!
//! let reciter = Reciter::new(3, "qari_minshawi", "/minshawi", false);
//! let job = starter.build_range_job(&reciter, 1, 1, false)?;
//! assert_eq!(job.destination_directory(), Path::new("/storage/audio/minshawi"));
//! # Ok(())
//! # }
//! ```

use super::{config::StarterConfig, starter::DownloadStarter};
use crate::dispatch::Dispatcher;
use crate::error::{Error, Result};
use crate::resolve::{AudioSourceResolver, LabelLookup, PathResolver, QuranStructure};

use std::sync::Arc;

/// A builder used to create a [`DownloadStarter`].
#[derive(Default, Debug)]
pub struct DownloadStarterBuilder {
    config: StarterConfig,
}

impl DownloadStarterBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloadStarterBuilder::default()
    }

    /// Sets the namespace prefix of job keys.
    pub fn key_namespace(mut self, namespace: &str) -> Self {
        self.config.key_namespace = String::from(namespace);
        self
    }

    /// Sets the display label of database-only jobs.
    pub fn database_label(mut self, label: &str) -> Self {
        self.config.database_label = String::from(label);
        self
    }

    /// Sets the storage path resolver.
    pub fn paths<P: PathResolver + 'static>(mut self, paths: P) -> Self {
        self.config.paths = Some(Arc::new(paths));
        self
    }

    /// Sets the audio source resolver.
    pub fn sources<S: AudioSourceResolver + 'static>(mut self, sources: S) -> Self {
        self.config.sources = Some(Arc::new(sources));
        self
    }

    /// Sets the Quran structure lookup used for range boundaries.
    pub fn structure<Q: QuranStructure + 'static>(mut self, structure: Q) -> Self {
        self.config.structure = Some(Arc::new(structure));
        self
    }

    /// Sets the dispatcher receiving requested jobs.
    pub fn dispatcher<D: Dispatcher + 'static>(mut self, dispatcher: D) -> Self {
        self.config.dispatcher = Some(Arc::new(dispatcher));
        self
    }

    /// Sets a dispatcher that is shared with other owners.
    pub fn shared_dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.config.dispatcher = Some(dispatcher);
        self
    }

    /// Sets the display name lookup. Defaults to showing the name key.
    pub fn labels<L: LabelLookup + 'static>(mut self, labels: L) -> Self {
        self.config.labels = Arc::new(labels);
        self
    }

    /// Create the [`DownloadStarter`] with the specified options.
    ///
    /// Fails with [`Error::Internal`] if a collaborator was not provided.
    pub fn build(self) -> Result<DownloadStarter> {
        let config = self.config;
        let missing = [
            ("paths", config.paths.is_none()),
            ("sources", config.sources.is_none()),
            ("structure", config.structure.is_none()),
            ("dispatcher", config.dispatcher.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(Error::Internal(format!(
                "download starter is missing: {}",
                missing.join(", ")
            )));
        }
        DownloadStarter::new(config)
    }
}
