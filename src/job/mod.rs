//! Job module containing the values produced for the dispatcher.
//!
//! # Overview
//!
//! - [`key`] - Job identity keys and their derivation
//! - [`selection`] - Batch and range sura selections
//! - [`descriptor`] - The immutable job descriptor handed to the dispatcher

pub mod descriptor;
pub mod key;
pub mod selection;

pub use descriptor::{AudioDownloadMetadata, JobDescriptor, JobKind};
pub use key::{derive_key, JobKey, JobKeyGenerator, AUDIO_DOWNLOAD_KEY};
pub use selection::{UnitSelection, VerseRef};
