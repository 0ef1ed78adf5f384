//! Collaborators consulted while building jobs.
//!
//! Storage layout, audio hosting, sura lengths and name localization live
//! outside this crate. The starter reaches them through these traits and
//! propagates their errors unchanged.

use crate::error::Result;
use crate::reciter::Reciter;

use reqwest::Url;
use std::path::PathBuf;

/// Maps reciters to storage locations.
pub trait PathResolver: Send + Sync {
    /// Base directory under which every reciter's audio is stored.
    fn base_audio_directory(&self) -> Result<PathBuf>;

    /// URL of the reciter's companion database.
    ///
    /// Fails with [`Error::NoDatabaseAvailable`](crate::Error::NoDatabaseAvailable)
    /// when the reciter has none, or
    /// [`Error::UnknownReciter`](crate::Error::UnknownReciter).
    fn database_url(&self, reciter: &Reciter) -> Result<Url>;
}

/// Resolves where a reciter's audio is hosted.
pub trait AudioSourceResolver: Send + Sync {
    fn source_url(&self, reciter: &Reciter) -> Result<Url>;
}

/// Knowledge of the Quran's structure.
pub trait QuranStructure: Send + Sync {
    /// Number of verses in `sura`, or `None` if there is no such sura.
    fn unit_length(&self, sura: u16) -> Option<u16>;
}

/// Turns a reciter's name key into a display name.
pub trait LabelLookup: Send + Sync {
    fn display_name(&self, name_key: &str) -> String;
}

/// A [`LabelLookup`] that shows the name key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLabels;

impl LabelLookup for KeyLabels {
    fn display_name(&self, name_key: &str) -> String {
        String::from(name_key)
    }
}
