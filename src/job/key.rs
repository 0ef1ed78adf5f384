//! Job identity keys.
//!
//! A [`JobKey`] lets the dispatcher recognize a request it has already seen,
//! so a retry resumes the existing job instead of queueing a second one.
//!
//! # Examples
//!
//! ```rust
//! use qari_dl::job::key::{derive_key, JobKeyGenerator};
//! use qari_dl::ReciterId;
//!
//! let key = derive_key(ReciterId(7), 2);
//! assert_eq!(key.as_str(), "AudioDownload.DownloadKey.7.2");
//!
//! let custom = JobKeyGenerator::new("Test.").derive(ReciterId(7), 2);
//! assert_eq!(custom.as_str(), "Test.7.2");
//! ```

use crate::reciter::ReciterId;

use std::fmt;

/// Namespace prepended to every audio download key.
pub const AUDIO_DOWNLOAD_KEY: &str = "AudioDownload.DownloadKey.";

const DATABASE_SUFFIX: &str = "database";

/// Stable identity of a download job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobKey(String);

impl JobKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JobKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<JobKey> for String {
    fn from(key: JobKey) -> Self {
        key.0
    }
}

/// Derives job keys within a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobKeyGenerator {
    namespace: String,
}

impl Default for JobKeyGenerator {
    fn default() -> Self {
        Self::new(AUDIO_DOWNLOAD_KEY)
    }
}

impl JobKeyGenerator {
    /// Creates a generator for the given namespace.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: String::from(namespace),
        }
    }

    /// Gets the namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key of an audio job starting at `first_unit`.
    ///
    /// The `.` between reciter id and unit keeps `(1, 23)` and `(12, 3)` apart.
    pub fn derive(&self, reciter_id: ReciterId, first_unit: u16) -> JobKey {
        JobKey(format!("{}{}.{}", self.namespace, reciter_id, first_unit))
    }

    /// Key of a reciter's database-only job.
    pub fn derive_database(&self, reciter_id: ReciterId) -> JobKey {
        JobKey(format!("{}{}.{}", self.namespace, reciter_id, DATABASE_SUFFIX))
    }
}

/// Derives the key of an audio job in the default namespace.
pub fn derive_key(reciter_id: ReciterId, first_unit: u16) -> JobKey {
    JobKeyGenerator::default().derive(reciter_id, first_unit)
}
