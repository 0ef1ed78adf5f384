//! Starter module containing request construction, its builder and configuration.
//!
//! - `starter` - [`DownloadStarter`] building and requesting jobs
//! - `builder` - [`DownloadStarterBuilder`] wiring collaborators together
//! - `config` - [`StarterConfig`] and its defaults

pub mod builder;
pub mod config;
pub mod starter;

pub use builder::DownloadStarterBuilder;
pub use config::{StarterConfig, DEFAULT_DATABASE_LABEL};
pub use starter::DownloadStarter;
