//! Core request construction.
//!
//! The [`DownloadStarter`] turns "download this reciter's audio" requests into
//! [`JobDescriptor`]s and hands them to the dispatcher.
//!
//! Building never touches the dispatcher: the `build_*` methods are pure with
//! respect to this crate and can be used to inspect a job before it is
//! requested. The `request_*` methods build and submit in one step.

use super::config::StarterConfig;
use crate::dispatch::{CancelSignal, Dispatcher};
use crate::error::{Error, Result};
use crate::job::selection::validate_range;
use crate::job::{JobDescriptor, JobKey, JobKeyGenerator, UnitSelection};
use crate::reciter::Reciter;
use crate::resolve::{AudioSourceResolver, LabelLookup, PathResolver, QuranStructure};
use crate::utils::join_relative;

use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds and requests download jobs.
///
/// Cloning is cheap; clones share their collaborators.
#[derive(Clone)]
pub struct DownloadStarter {
    keys: JobKeyGenerator,
    database_label: String,
    paths: Arc<dyn PathResolver>,
    sources: Arc<dyn AudioSourceResolver>,
    structure: Arc<dyn QuranStructure>,
    dispatcher: Arc<dyn Dispatcher>,
    labels: Arc<dyn LabelLookup>,
}

impl fmt::Debug for DownloadStarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadStarter")
            .field("keys", &self.keys)
            .field("database_label", &self.database_label)
            .finish_non_exhaustive()
    }
}

fn require<T: ?Sized>(value: Option<Arc<T>>, name: &str) -> Result<Arc<T>> {
    value.ok_or_else(|| Error::Internal(format!("download starter is missing: {}", name)))
}

impl DownloadStarter {
    /// Creates a new starter from a complete configuration.
    pub(crate) fn new(config: StarterConfig) -> Result<Self> {
        Ok(Self {
            keys: config.key_generator(),
            database_label: config.database_label,
            paths: require(config.paths, "paths")?,
            sources: require(config.sources, "sources")?,
            structure: require(config.structure, "structure")?,
            dispatcher: require(config.dispatcher, "dispatcher")?,
            labels: config.labels,
        })
    }

    /// Gets the namespace prefix of job keys.
    pub fn key_namespace(&self) -> &str {
        self.keys.namespace()
    }

    /// Gets the display label of database-only jobs.
    pub fn database_label(&self) -> &str {
        &self.database_label
    }

    /// Builds an audio job for an explicit, possibly non-contiguous, list of suras.
    ///
    /// The job key is derived from the first sura as given. The companion
    /// database is included only when requested and the reciter is gapless.
    pub fn build_batch_job(
        &self,
        reciter: &Reciter,
        units: &[u16],
        include_database: bool,
    ) -> Result<JobDescriptor> {
        let selection = UnitSelection::batch(units.to_vec())?;
        self.build_audio_job(reciter, selection, include_database)
    }

    /// Builds an audio job for the contiguous suras `start_unit..=end_unit`.
    ///
    /// The range ends on the last verse of `end_unit`, as reported by the
    /// Quran structure.
    pub fn build_range_job(
        &self,
        reciter: &Reciter,
        start_unit: u16,
        end_unit: u16,
        include_database: bool,
    ) -> Result<JobDescriptor> {
        validate_range(start_unit, end_unit)?;
        let end_length = self.structure.unit_length(end_unit).ok_or_else(|| {
            Error::InvalidSelection(format!("sura {} does not exist", end_unit))
        })?;
        let selection = UnitSelection::range(start_unit, end_unit, end_length)?;
        self.build_audio_job(reciter, selection, include_database)
    }

    /// Builds a single-file job fetching the reciter's companion database.
    ///
    /// The gapless flag is not consulted; a reciter without a database fails
    /// with [`Error::NoDatabaseAvailable`].
    pub fn build_database_job(&self, reciter: &Reciter) -> Result<JobDescriptor> {
        let database_url = self.paths.database_url(reciter)?;
        let destination = self.destination(reciter)?;
        let key = self.keys.derive_database(reciter.id);

        debug!(
            "Built database job {} for {:?} into {:?}",
            key, database_url.as_str(), destination
        );
        Ok(JobDescriptor::database(
            database_url,
            destination,
            self.database_label.clone(),
            key,
            reciter.id,
        ))
    }

    /// Produces the signal that cancels every download.
    pub fn cancel_all(&self) -> CancelSignal {
        CancelSignal
    }

    /// Builds a batch job and submits it. Returns the submitted job's key.
    pub fn request_batch_download(
        &self,
        reciter: &Reciter,
        units: &[u16],
        include_database: bool,
    ) -> Result<JobKey> {
        let job = self.build_batch_job(reciter, units, include_database)?;
        Ok(self.submit(job))
    }

    /// Builds a range job and submits it. Returns the submitted job's key.
    pub fn request_range_download(
        &self,
        reciter: &Reciter,
        start_unit: u16,
        end_unit: u16,
        include_database: bool,
    ) -> Result<JobKey> {
        let job = self.build_range_job(reciter, start_unit, end_unit, include_database)?;
        Ok(self.submit(job))
    }

    /// Builds a database job and submits it. Returns the submitted job's key.
    pub fn request_database_only_download(&self, reciter: &Reciter) -> Result<JobKey> {
        let job = self.build_database_job(reciter)?;
        Ok(self.submit(job))
    }

    /// Asks the dispatcher to stop every in-flight and queued download.
    pub fn cancel_all_downloads(&self) {
        info!("Cancelling all downloads");
        self.dispatcher.cancel_all(self.cancel_all());
    }

    fn build_audio_job(
        &self,
        reciter: &Reciter,
        selection: UnitSelection,
        include_database: bool,
    ) -> Result<JobDescriptor> {
        let destination = self.destination(reciter)?;
        let source_url = self.sources.source_url(reciter)?;
        let first_unit = selection.first_unit().ok_or_else(|| {
            Error::InvalidSelection(String::from("the selection covers no sura"))
        })?;
        let key = self.keys.derive(reciter.id, first_unit);
        let database_url = self.companion_database(reciter, include_database)?;

        debug!(
            "Built audio job {} ({} suras) for {:?} into {:?}",
            key,
            selection.len(),
            source_url.as_str(),
            destination
        );
        Ok(JobDescriptor::audio(
            source_url,
            destination,
            self.labels.display_name(&reciter.name_key),
            key,
            reciter.is_gapless,
            selection,
            reciter.id,
            database_url,
        ))
    }

    fn companion_database(&self, reciter: &Reciter, include_database: bool) -> Result<Option<Url>> {
        if include_database && reciter.is_gapless {
            self.paths.database_url(reciter).map(Some)
        } else {
            Ok(None)
        }
    }

    fn destination(&self, reciter: &Reciter) -> Result<PathBuf> {
        let base = self.paths.base_audio_directory()?;
        Ok(join_relative(&base, &reciter.relative_path))
    }

    fn submit(&self, job: JobDescriptor) -> JobKey {
        let key = job.job_key().clone();
        info!("Submitting download job {}", key);
        self.dispatcher.submit(job);
        key
    }
}
