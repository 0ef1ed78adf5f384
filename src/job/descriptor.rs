//! The job handed to the dispatcher.
//!
//! A [`JobDescriptor`] is built fresh for each request and cannot be changed
//! afterwards; the dispatcher owns it once submitted.

use super::key::JobKey;
use super::selection::UnitSelection;
use crate::reciter::ReciterId;

use reqwest::Url;
use std::path::{Path, PathBuf};

/// What a job downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Recitation audio for a selection of suras.
    Audio,
    /// A single file: the reciter's timing database.
    Database,
}

/// Metadata attached to every job so finished downloads can be traced back
/// to their reciter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioDownloadMetadata {
    /// Reciter whose audio or database the job fetches.
    pub reciter_id: ReciterId,
}

/// A fully specified download job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    source_url: Url,
    destination: PathBuf,
    display_label: String,
    key: JobKey,
    kind: JobKind,
    is_gapless: bool,
    selection: Option<UnitSelection>,
    metadata: AudioDownloadMetadata,
    database_url: Option<Url>,
}

impl JobDescriptor {
    /// Creates an audio job.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn audio(
        source_url: Url,
        destination: PathBuf,
        display_label: String,
        key: JobKey,
        is_gapless: bool,
        selection: UnitSelection,
        reciter_id: ReciterId,
        database_url: Option<Url>,
    ) -> Self {
        Self {
            source_url,
            destination,
            display_label,
            key,
            kind: JobKind::Audio,
            is_gapless,
            selection: Some(selection),
            metadata: AudioDownloadMetadata { reciter_id },
            database_url,
        }
    }

    /// Creates a single-file database job.
    pub(crate) fn database(
        database_url: Url,
        destination: PathBuf,
        display_label: String,
        key: JobKey,
        reciter_id: ReciterId,
    ) -> Self {
        Self {
            source_url: database_url,
            destination,
            display_label,
            key,
            kind: JobKind::Database,
            is_gapless: false,
            selection: None,
            metadata: AudioDownloadMetadata { reciter_id },
            database_url: None,
        }
    }

    /// URL the job downloads from.
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    /// Directory the files are stored in.
    pub fn destination_directory(&self) -> &Path {
        &self.destination
    }

    /// Human readable label, usually the reciter's name.
    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    /// Identity used by the dispatcher to deduplicate jobs.
    pub fn job_key(&self) -> &JobKey {
        &self.key
    }

    /// Whether the job fetches audio or a database.
    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// Whether the audio is gapless. Always false for database jobs.
    pub fn is_gapless(&self) -> bool {
        self.is_gapless
    }

    /// Suras covered. `None` for database jobs.
    pub fn selection(&self) -> Option<&UnitSelection> {
        self.selection.as_ref()
    }

    /// Metadata tying the job to its reciter.
    pub fn metadata(&self) -> AudioDownloadMetadata {
        self.metadata
    }

    /// Companion database fetched alongside the audio, if any.
    pub fn companion_database_url(&self) -> Option<&Url> {
        self.database_url.as_ref()
    }
}
