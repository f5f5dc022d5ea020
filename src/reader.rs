//! Blocking driver that pulls bytes from a [`Read`] source into an [`H1Codec`].

use std::io::{self, Read};

use bytes::Bytes;
use log::{debug, trace};

use crate::config::ParserConfig;
use crate::error::H1Error;
use crate::h1_codec::{H1Codec, H1Event};
use crate::request_line::RequestLine;

/// Everything the start-line stage produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub request_line: RequestLine,
    /// Offset in the stream where the start-line (CRLF included) ends
    pub consumed: usize,
    /// Bytes read past the start-line, kept for a header stage
    pub remaining: Bytes,
}

/// Reads one request-line from a blocking source.
///
/// The source decides how many bytes each read returns; the result does not
/// depend on it.
#[derive(Debug)]
pub struct RequestReader<R> {
    source: R,
    codec: H1Codec,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: R, config: ParserConfig) -> Self {
        Self {
            source,
            codec: H1Codec::with_config(config),
        }
    }

    /// Read until a request-line is recognized, the source ends, or an error
    /// occurs.
    pub fn read_request(mut self) -> Result<Request, H1Error> {
        let mut chunk = vec![0u8; self.codec.config().effective_chunk_size()];

        loop {
            let read = match self.source.read(&mut chunk) {
                Ok(read) => read,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(H1Error::SourceReadFailure(error)),
            };

            if read == 0 {
                let buffered = self.codec.buffered();
                debug!("source ended with {} bytes buffered and no request line", buffered);
                return Err(H1Error::IncompleteRequest { buffered });
            }
            trace!("read {} bytes from source", read);

            for event in self.codec.process(&chunk[..read])? {
                match event {
                    H1Event::RequestLine {
                        request_line,
                        consumed,
                    } => {
                        return Ok(Request {
                            request_line,
                            consumed,
                            remaining: self.codec.take_remaining(),
                        });
                    }
                }
            }
        }
    }

    /// Give back the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }
}

/// Parse a request-line from `source` with the default [`ParserConfig`].
pub fn request_from_reader<R: Read>(source: R) -> Result<Request, H1Error> {
    RequestReader::new(source).read_request()
}
