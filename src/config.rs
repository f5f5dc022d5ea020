//! Parser configuration.
//!
//! Every field has a default, so a partial (or empty) document deserializes
//! into a usable config.

use serde::Deserialize;

/// Default cap on the request-line length, terminator excluded (8 KiB).
pub const DEFAULT_MAX_REQUEST_LINE_LENGTH: usize = 8 * 1024;

/// Default number of bytes requested from the source per read.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Limits and read sizing for [`crate::H1Codec`] and [`crate::RequestReader`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Longest accepted request-line in bytes, excluding CRLF.
    /// `None` lets the buffer grow without bound while waiting for a terminator.
    #[serde(default = "default_max_request_line_length")]
    pub max_request_line_length: Option<usize>,

    /// Upper bound on the bytes pulled from the source in one read.
    #[serde(default = "default_read_chunk_size")]
    pub read_chunk_size: usize,
}

fn default_max_request_line_length() -> Option<usize> {
    Some(DEFAULT_MAX_REQUEST_LINE_LENGTH)
}

fn default_read_chunk_size() -> usize {
    DEFAULT_READ_CHUNK_SIZE
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_request_line_length: default_max_request_line_length(),
            read_chunk_size: default_read_chunk_size(),
        }
    }
}

impl ParserConfig {
    /// Config with no request-line length limit.
    pub fn unbounded() -> Self {
        Self {
            max_request_line_length: None,
            ..Self::default()
        }
    }

    /// Read size actually used; a zero chunk size would never make progress.
    pub(crate) fn effective_chunk_size(&self) -> usize {
        self.read_chunk_size.max(1)
    }
}
