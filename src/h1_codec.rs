//! HTTP/1.1 start-line codec.
//!
//! This is a minimal, sans-I/O parser for the request-line of an HTTP/1.1
//! message. It does no reading of its own: the caller feeds whatever bytes the
//! transport handed over, in chunks of any size, and the codec reports the
//! request-line once a full CRLF-terminated line is buffered.
//!
//! Reference: RFC 9112 (HTTP/1.1), Section 3

use bytes::{Buf, Bytes, BytesMut};
use log::{debug, trace, warn};

use crate::config::ParserConfig;
use crate::error::H1Error;
use crate::request_line::RequestLine;

/// Line terminator. A bare LF does not end a line.
pub const CRLF: &[u8] = b"\r\n";

/// Find the offset of the first CRLF in `data`.
pub fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|window| window == CRLF)
}

/// Where the codec is in the message.
///
/// Only `AwaitingLine` and `AwaitingHeaders` are reached today; the later
/// stages are where header and body parsing will slot in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No request-line yet, bytes are being accumulated.
    #[default]
    AwaitingLine,
    /// The request-line was recognized. Anything fed from here on is kept in
    /// the buffer, unparsed and uncapped, until the header stage drains it
    /// with `take_remaining()`.
    AwaitingHeaders,
    /// Reserved for the body stage.
    AwaitingBody,
    /// Reserved for a fully parsed message.
    Complete,
    /// A terminal error was returned. Input is dropped until `reset()`.
    Failed,
}

/// Events emitted by the codec
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum H1Event {
    /// A complete, validated request-line
    RequestLine {
        request_line: RequestLine,
        /// Bytes taken off the front of the stream, CRLF included
        consumed: usize,
    },
}

/// Incremental HTTP/1.1 request-line parser.
#[derive(Debug, Default)]
pub struct H1Codec {
    /// Bytes not yet consumed by a parse step
    buffer: BytesMut,
    /// Prefix of `buffer` already searched for CRLF
    scanned: usize,
    state: ParserState,
    config: ParserConfig,
    /// Set once on the `AwaitingLine -> AwaitingHeaders` transition
    request_line: Option<RequestLine>,
}

impl H1Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Process incoming data and return parsed events.
    ///
    /// This is the main entry point - feed raw bytes and get back events. An
    /// empty result means more data is needed. Errors are terminal: the codec
    /// moves to [`ParserState::Failed`].
    ///
    /// Once the request-line is recognized the length limit no longer applies:
    /// later input accumulates until the caller drains it with
    /// [`take_remaining`](Self::take_remaining).
    pub fn process(&mut self, data: &[u8]) -> Result<Vec<H1Event>, H1Error> {
        match self.state {
            ParserState::AwaitingLine => {}
            ParserState::Failed => {
                trace!("codec failed, dropping {} bytes", data.len());
                return Ok(Vec::new());
            }
            _ => {
                self.buffer.extend_from_slice(data);
                return Ok(Vec::new());
            }
        }

        self.buffer.extend_from_slice(data);
        trace!("buffered {} bytes ({} pending)", data.len(), self.buffer.len());

        let mut events = Vec::new();
        match self.parse_request_line() {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(err) => {
                warn!("rejecting request line: {}", err);
                self.state = ParserState::Failed;
                return Err(err);
            }
        }
        Ok(events)
    }

    /// Try to take one request-line off the front of the buffer.
    fn parse_request_line(&mut self) -> Result<Option<H1Event>, H1Error> {
        // Back up one byte: a CR ending the previous chunk may pair with an
        // LF starting this one.
        let start = self.scanned.saturating_sub(1);
        let found = find_crlf(&self.buffer[start..]).map(|offset| start + offset);
        let Some(line_end) = found else {
            self.scanned = self.buffer.len();
            // A trailing CR may be the first half of the terminator.
            let pending = if self.buffer.ends_with(b"\r") {
                self.buffer.len() - 1
            } else {
                self.buffer.len()
            };
            self.check_line_length(pending)?;
            return Ok(None);
        };
        self.check_line_length(line_end)?;

        let line = std::str::from_utf8(&self.buffer[..line_end]).map_err(|error| {
            H1Error::InvalidEncoding {
                valid_up_to: error.valid_up_to(),
            }
        })?;
        let request_line = RequestLine::parse(line)?;

        let consumed = line_end + CRLF.len();
        self.buffer.advance(consumed);
        self.scanned = 0;
        self.state = ParserState::AwaitingHeaders;
        self.request_line = Some(request_line.clone());
        debug!(
            "request line {} ({} bytes, {} left over)",
            request_line,
            consumed,
            self.buffer.len()
        );

        Ok(Some(H1Event::RequestLine {
            request_line,
            consumed,
        }))
    }

    fn check_line_length(&self, length: usize) -> Result<(), H1Error> {
        match self.config.max_request_line_length {
            Some(limit) if length > limit => Err(H1Error::RequestLineTooLong { limit }),
            _ => Ok(()),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The recognized request-line, once the codec has left `AwaitingLine`.
    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request_line.as_ref()
    }

    /// Number of bytes held but not consumed
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes held but not consumed, e.g. header bytes that arrived together
    /// with the request-line.
    pub fn remaining(&self) -> &[u8] {
        &self.buffer
    }

    /// Hand the unconsumed bytes to the next stage, leaving the buffer empty.
    pub fn take_remaining(&mut self) -> Bytes {
        self.buffer.split().freeze()
    }

    /// Reset codec state (e.g., to parse a fresh stream)
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.scanned = 0;
        self.state = ParserState::AwaitingLine;
        self.request_line = None;
    }
}
