//! Which suras a job downloads.
//!
//! A batch enumerates every sura and may be non-contiguous. A range is
//! contiguous and stored as its two boundary verses.
//!
//! # Examples
//!
//! ```rust
//! use qari_dl::job::{UnitSelection, VerseRef};
//!
//! let batch = UnitSelection::batch(vec![18, 1, 36]).unwrap();
//! assert_eq!(batch.first_unit(), Some(18));
//!
//! let range = UnitSelection::range(2, 3, 200).unwrap();
//! assert_eq!(range.first_unit(), Some(2));
//! assert_eq!(range.units().collect::<Vec<_>>(), vec![2, 3]);
//! assert_eq!(range.end(), Some(VerseRef::new(3, 200)));
//! ```

use crate::error::{Error, Result};

use std::fmt;

/// A verse position: sura number and ayah number, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseRef {
    pub sura: u16,
    pub ayah: u16,
}

impl VerseRef {
    pub fn new(sura: u16, ayah: u16) -> Self {
        Self { sura, ayah }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sura, self.ayah)
    }
}

/// The suras a download job covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSelection {
    /// Explicit suras in caller order.
    Batch(Vec<u16>),
    /// Contiguous suras from the first verse of `start.sura` to the last
    /// verse of `end.sura`.
    Range { start: VerseRef, end: VerseRef },
}

impl UnitSelection {
    /// Creates a batch selection.
    ///
    /// Fails with [`Error::InvalidSelection`] if `units` is empty or contains zero.
    pub fn batch(units: Vec<u16>) -> Result<Self> {
        if units.is_empty() {
            return Err(Error::InvalidSelection(String::from(
                "a batch must contain at least one sura",
            )));
        }
        if units.contains(&0) {
            return Err(Error::InvalidSelection(String::from(
                "sura numbers start at 1",
            )));
        }
        Ok(UnitSelection::Batch(units))
    }

    /// Creates a range selection ending on verse `end_length` of `end_unit`.
    ///
    /// Fails with [`Error::InvalidSelection`] if `start_unit` is zero, if it is
    /// greater than `end_unit`, or if `end_length` is zero.
    pub fn range(start_unit: u16, end_unit: u16, end_length: u16) -> Result<Self> {
        validate_range(start_unit, end_unit)?;
        if end_length == 0 {
            return Err(Error::InvalidSelection(format!(
                "sura {} has no verses",
                end_unit
            )));
        }
        Ok(UnitSelection::Range {
            start: VerseRef::new(start_unit, 1),
            end: VerseRef::new(end_unit, end_length),
        })
    }

    /// The sura the job key is derived from.
    ///
    /// For a batch this is the first sura as given by the caller, not the
    /// smallest one. `None` if the selection covers no sura, which only a
    /// selection built without [`UnitSelection::batch`] or
    /// [`UnitSelection::range`] can do.
    pub fn first_unit(&self) -> Option<u16> {
        match self {
            UnitSelection::Batch(units) => units.first().copied(),
            UnitSelection::Range { start, end } if start.sura <= end.sura => Some(start.sura),
            UnitSelection::Range { .. } => None,
        }
    }

    /// Every sura covered, in download order.
    pub fn units(&self) -> Box<dyn Iterator<Item = u16> + '_> {
        match self {
            UnitSelection::Batch(units) => Box::new(units.iter().copied()),
            UnitSelection::Range { start, end } => Box::new(start.sura..=end.sura),
        }
    }

    /// Number of suras covered.
    pub fn len(&self) -> usize {
        match self {
            UnitSelection::Batch(units) => units.len(),
            UnitSelection::Range { start, end } if start.sura <= end.sura => {
                usize::from(end.sura - start.sura) + 1
            }
            UnitSelection::Range { .. } => 0,
        }
    }

    /// Whether no sura is covered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start boundary of a range selection.
    pub fn start(&self) -> Option<VerseRef> {
        match self {
            UnitSelection::Batch(_) => None,
            UnitSelection::Range { start, .. } => Some(*start),
        }
    }

    /// End boundary of a range selection.
    pub fn end(&self) -> Option<VerseRef> {
        match self {
            UnitSelection::Batch(_) => None,
            UnitSelection::Range { end, .. } => Some(*end),
        }
    }
}

/// Checks range bounds before any collaborator is consulted.
pub(crate) fn validate_range(start_unit: u16, end_unit: u16) -> Result<()> {
    if start_unit == 0 {
        return Err(Error::InvalidSelection(String::from(
            "sura numbers start at 1",
        )));
    }
    if start_unit > end_unit {
        return Err(Error::InvalidSelection(format!(
            "range start {} is after range end {}",
            start_unit, end_unit
        )));
    }
    Ok(())
}
