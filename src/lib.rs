//! qari-dl turns requests for a reciter's audio into deduplicated download
//! jobs for a background download service.
//!
//! # Quick Start
//!
//! ```rust
//! use qari_dl::dispatch::{ChannelDispatcher, DispatchMessage};
//! use qari_dl::resolve::{AudioSourceResolver, PathResolver, QuranStructure};
//! use qari_dl::utils::parse_url;
//! use qari_dl::{DownloadStarterBuilder, Reciter, Result, Url};
//! use std::path::PathBuf;
//!
//! struct Paths;
//! impl PathResolver for Paths {
//!     fn base_audio_directory(&self) -> Result<PathBuf> {
//!         Ok(PathBuf::from("/storage/audio"))
//!     }
//!     fn database_url(&self, reciter: &Reciter) -> Result<Url> {
//!         parse_url(&format!("https://db.example.org/{}.zip", reciter.id))
//!     }
//! }
//!
//! struct Sources;
//! impl AudioSourceResolver for Sources {
//!     fn source_url(&self, reciter: &Reciter) -> Result<Url> {
//!         parse_url(&format!("https://audio.example.org{}/", reciter.relative_path))
//!     }
//! }
//!
//! struct Structure;
//! impl QuranStructure for Structure {
//!     fn unit_length(&self, sura: u16) -> Option<u16> {
//!         [7, 286].get(usize::from(sura).checked_sub(1)?).copied()
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let (dispatcher, mut rx) = ChannelDispatcher::new();
//! let starter = DownloadStarterBuilder::new()
//!     .paths(Paths)
//!     .sources(Sources)
//!     .structure(Structure)
//!     .dispatcher(dispatcher)
//!     .build()?;
//!
//! let saad = Reciter::new(7, "qari_saad", "/saad", true);
//! let key = starter.request_range_download(&saad, 2, 2, true)?;
//!
//! if let Some(DispatchMessage::Submit(job)) = rx.recv().await {
//!     assert_eq!(job.job_key(), &key);
//!     assert!(job.companion_database_url().is_some());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`starter`] - The `DownloadStarter`, its builder and configuration
//! - [`job`] - Job descriptors, sura selections and job keys
//! - [`resolve`] - Collaborator traits for paths, sources and Quran structure
//! - [`dispatch`] - The dispatcher trait and a channel-backed dispatcher
//! - [`reciter`] - Reciter metadata
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod dispatch;
pub mod error;
pub mod job;
pub mod reciter;
pub mod resolve;
pub mod starter;
pub mod utils;

pub use dispatch::{CancelSignal, ChannelDispatcher, DispatchMessage, Dispatcher};
pub use error::{Error, Result};
pub use job::{
    derive_key, AudioDownloadMetadata, JobDescriptor, JobKey, JobKeyGenerator, JobKind,
    UnitSelection, VerseRef,
};
pub use reciter::{Reciter, ReciterId};
pub use reqwest::Url;
pub use starter::{DownloadStarter, DownloadStarterBuilder, StarterConfig};
