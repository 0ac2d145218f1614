//! URL modeling for redirect validation.
//!
//! Parses raw destination strings into structured form, classifies them as
//! relative or absolute, produces the canonical sanitized form used by
//! strict mode, and recognises localhost/private-network hosts. Purely
//! syntactic; nothing here touches the network.

mod parse;
mod private;
mod sanitize;

pub use parse::{parse, ParsedUrl, UrlParts};
pub use private::is_localhost_or_private;
pub use sanitize::sanitize_url;

use thiserror::Error;

/// Error for strings that are neither a parseable absolute URL nor a
/// relative reference. Never escapes the validation pipeline; the evaluator
/// maps it to a blocking decision.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("malformed URL {url:?}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
