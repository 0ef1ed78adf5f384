//! URL parsing for collaborator-supplied addresses.

use crate::error::Error;

use reqwest::Url;

/// Parses an absolute URL.
///
/// Resolvers that keep their URLs as strings use this to produce the
/// [`Url`] values the starter works with.
///
/// ```rust
/// use qari_dl::utils::parse_url;
///
/// let url = parse_url("https://download.example.org/saad/").unwrap();
/// assert_eq!(url.host_str(), Some("download.example.org"));
/// assert!(parse_url("not a url").is_err());
/// ```
pub fn parse_url(value: &str) -> Result<Url, Error> {
    Url::parse(value)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e)))
}
