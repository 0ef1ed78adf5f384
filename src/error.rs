//! Error handling for qari-dl.
//!
//! Every failure aborts the request that produced it: no job is built and
//! nothing reaches the dispatcher. Errors raised by collaborators (path and
//! URL resolution) are propagated unchanged.

use crate::reciter::ReciterId;
use thiserror::Error;

/// Errors that can happen when building or requesting download jobs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The unit selection cannot describe a download.
    ///
    /// Returned for an empty batch, a zero unit, a range whose start is past
    /// its end, or an end unit the Quran structure does not know about.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// A collaborator could not find the reciter.
    #[error("Unknown reciter: {0}")]
    UnknownReciter(ReciterId),

    /// A database job was requested for a reciter without a companion database.
    #[error("No database available for reciter {0}")]
    NoDatabaseAvailable(ReciterId),

    /// A resolved URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error from an underlying component.
    ///
    /// Used for misconfiguration, such as building a starter without one of
    /// its collaborators.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that can fail with a qari-dl error.
pub type Result<T> = std::result::Result<T, Error>;
