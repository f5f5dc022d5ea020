//! h1-sans-io: A minimal, sans-I/O HTTP/1.1 request-line parser
//!
//! This crate recognizes the start-line of an HTTP/1.1 request from a byte
//! stream that may be fragmented arbitrarily, down to one byte per read.
//!
//! # Features
//!
//! - **Sans-I/O Design**: [`H1Codec`] only sees the bytes you give it
//! - **Chunking-Independent**: the same input yields the same result no matter
//!   how it is split
//! - **Strict Grammar**: uppercase method, non-empty target, `HTTP/1.1` only
//! - **Bounded Buffering**: configurable maximum request-line length
//! - **Handoff**: bytes past the request-line are kept for a header stage
//!
//! # Quick Start
//!
//! ```rust
//! use h1_sans_io::{H1Codec, H1Event};
//!
//! let mut codec = H1Codec::new();
//!
//! // Nothing yet: the line is not terminated
//! assert!(codec.process(b"GET /cof").unwrap().is_empty());
//!
//! let events = codec.process(b"fee HTTP/1.1\r\nHost: localhost\r\n").unwrap();
//! for event in events {
//!     match event {
//!         H1Event::RequestLine { request_line, consumed } => {
//!             assert_eq!(request_line.method(), "GET");
//!             assert_eq!(request_line.target(), "/coffee");
//!             assert_eq!(consumed, 22);
//!         }
//!         _ => {}
//!     }
//! }
//! assert_eq!(codec.remaining(), b"Host: localhost\r\n");
//! ```
//!
//! With a blocking source, let [`RequestReader`] drive the codec:
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let request = h1_sans_io::request_from_reader(Cursor::new("PUT /item HTTP/1.1\r\n")).unwrap();
//! assert_eq!(request.request_line.version(), "1.1");
//! ```
//!
//! # Architecture
//!
//! It provides:
//! - Line framing (bytes → CRLF-terminated line)
//! - Request-line validation (line → [`RequestLine`])
//! - A blocking driver over `std::io::Read`
//!
//! It does NOT provide:
//! - TCP transport or an accept loop (you provide the bytes)
//! - Header or body parsing
//! - Logger installation (the crate logs through the `log` facade)

pub mod config;
pub mod error;
pub mod h1_codec;
pub mod reader;
pub mod request_line;

pub use config::{ParserConfig, DEFAULT_MAX_REQUEST_LINE_LENGTH, DEFAULT_READ_CHUNK_SIZE};
pub use error::H1Error;
pub use h1_codec::{find_crlf, H1Codec, H1Event, ParserState, CRLF};
pub use reader::{request_from_reader, Request, RequestReader};
pub use request_line::{RequestLine, HTTP_1_1};
