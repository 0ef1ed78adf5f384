//! Shared utility functions.
//!
//! - [`url`] - URL parsing with crate errors
//! - [`path`] - Joining reciter storage paths

pub mod path;
pub mod url;

pub use path::join_relative;
pub use url::parse_url;
