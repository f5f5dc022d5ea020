//! Errors produced while recognizing an HTTP/1.1 request-line.

use std::fmt;
use std::io;

/// An error that terminates request-line parsing.
///
/// None of these are retried internally. Once the codec reports one it stays
/// failed until [`crate::H1Codec::reset`] is called.
#[derive(Debug)]
pub enum H1Error {
    /// The line did not split into exactly three whitespace-separated fields.
    ///
    /// ## Examples:
    /// ```text
    /// /coffee HTTP/1.1
    /// GET / something HTTP/1.1
    /// ```
    MissingFieldCount { found: usize },

    /// The method was empty or contained something other than `A`-`Z`.
    ///
    /// ## Examples:
    /// ```text
    /// get / HTTP/1.1
    /// G3T / HTTP/1.1
    /// ```
    InvalidMethod(String),

    /// The request-target was empty.
    EmptyTarget,

    /// The request-line was not valid UTF-8. `valid_up_to` is the length of
    /// the valid prefix.
    ///
    /// ## Example:
    /// ```text
    /// GET /\xFFa HTTP/1.1
    /// ```
    InvalidEncoding { valid_up_to: usize },

    /// The version field did not contain exactly one `/`.
    ///
    /// ## Examples:
    /// ```text
    /// GET / HTTP1.1
    /// GET / HTTP/1/1
    /// ```
    MalformedVersionToken(String),

    /// The part before `/` in the version field was not `HTTP`.
    UnrecognizedVersionScheme(String),

    /// The part after `/` in the version field was not `1.1`.
    UnsupportedVersion(String),

    /// The request-line is longer than the configured maximum.
    RequestLineTooLong { limit: usize },

    /// The stream ended before a complete request-line was seen.
    IncompleteRequest { buffered: usize },

    /// The byte source failed with something other than a clean end-of-stream.
    SourceReadFailure(io::Error),
}

impl H1Error {
    /// Whether this error comes from the request-line grammar rather than
    /// from the stream or the length limit.
    pub fn is_grammar_error(&self) -> bool {
        matches!(
            self,
            H1Error::MissingFieldCount { .. }
                | H1Error::InvalidMethod(_)
                | H1Error::EmptyTarget
                | H1Error::InvalidEncoding { .. }
                | H1Error::MalformedVersionToken(_)
                | H1Error::UnrecognizedVersionScheme(_)
                | H1Error::UnsupportedVersion(_)
        )
    }
}

impl fmt::Display for H1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            H1Error::MissingFieldCount { found } => write!(
                f,
                "malformed request line: expected 3 parts but got {}",
                found
            ),
            H1Error::InvalidMethod(method) => write!(
                f,
                "invalid method: must be all uppercase letters, got '{}'",
                method
            ),
            H1Error::EmptyTarget => write!(f, "empty request target"),
            H1Error::InvalidEncoding { valid_up_to } => write!(
                f,
                "request line is not valid UTF-8 (invalid byte at offset {})",
                valid_up_to
            ),
            H1Error::MalformedVersionToken(token) => {
                write!(f, "malformed HTTP version: '{}'", token)
            }
            H1Error::UnrecognizedVersionScheme(scheme) => {
                write!(f, "unrecognized version scheme: '{}'", scheme)
            }
            H1Error::UnsupportedVersion(version) => {
                write!(f, "unsupported HTTP version: '{}'", version)
            }
            H1Error::RequestLineTooLong { limit } => {
                write!(f, "request line too long (max {} bytes)", limit)
            }
            H1Error::IncompleteRequest { buffered } => write!(
                f,
                "stream ended before a complete request line ({} bytes buffered)",
                buffered
            ),
            H1Error::SourceReadFailure(error) => {
                write!(f, "failed to read from source: {}", error)
            }
        }
    }
}

impl std::error::Error for H1Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            H1Error::SourceReadFailure(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for H1Error {
    fn from(error: io::Error) -> Self {
        H1Error::SourceReadFailure(error)
    }
}
