//! Parsing and relative/absolute classification.

use super::UrlError;

/// Structured view of an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Absent for host-less schemes such as `mailto:` or `javascript:`.
    pub host: Option<String>,
    pub path: String,
    pub query: Option<String>,
}

/// Classification of a raw destination string.
///
/// A destination is relative when it carries no scheme component at all.
/// That covers bare paths (`/dashboard`), bare names (`example.com/x`) and
/// protocol-relative forms (`//host/x`). Everything else is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUrl {
    Relative,
    Absolute(UrlParts),
}

/// Parses `raw` into a [`ParsedUrl`].
///
/// Strings the `url` crate rejects for any reason other than a missing
/// scheme are reported as [`UrlError::Malformed`]; callers treat those the
/// same as an absolute URL with no extractable host.
pub fn parse(raw: &str) -> Result<ParsedUrl, UrlError> {
    match url::Url::parse(raw) {
        Ok(parsed) => Ok(ParsedUrl::Absolute(UrlParts {
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().map(|h| h.to_string()),
            path: parsed.path().to_string(),
            query: parsed.query().map(|q| q.to_string()),
        })),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(ParsedUrl::Relative),
        Err(source) => Err(UrlError::Malformed {
            url: raw.to_string(),
            source,
        }),
    }
}
