//! Reciter metadata as provided by the catalog.

use std::fmt;

/// Catalog identity of a reciter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReciterId(pub u32);

impl fmt::Display for ReciterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReciterId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A reciter (qari) whose audio can be downloaded.
///
/// Reciters are read-only here: they come from the catalog and are never
/// mutated while building jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reciter {
    /// Catalog identity.
    pub id: ReciterId,
    /// Key used to look up the localized display name.
    pub name_key: String,
    /// Storage path relative to the base audio directory, e.g. `/saad`.
    pub relative_path: String,
    /// Whether the recitation is gapless (one file per sura plus a timing database).
    pub is_gapless: bool,
}

impl Reciter {
    /// Creates a new [`Reciter`].
    pub fn new(
        id: impl Into<ReciterId>,
        name_key: &str,
        relative_path: &str,
        is_gapless: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name_key: String::from(name_key),
            relative_path: String::from(relative_path),
            is_gapless,
        }
    }
}
