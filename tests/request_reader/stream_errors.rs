//! Tests for errors surfaced by the streaming driver

use std::io;

use h1_sans_io::{request_from_reader, H1Error, ParserConfig, RequestReader};
use rstest::rstest;

use super::{ChunkReader, FailingReader};

#[test]
fn test_empty_stream_is_incomplete() {
    let result = request_from_reader(ChunkReader::new("", 3));
    assert!(matches!(result, Err(H1Error::IncompleteRequest { buffered: 0 })));
}

#[rstest]
#[case(1)]
#[case(3)]
fn test_unterminated_stream_is_incomplete(#[case] bytes_per_read: usize) {
    let result = request_from_reader(ChunkReader::new("GET / HTTP/1.1", bytes_per_read));
    match result {
        Err(H1Error::IncompleteRequest { buffered }) => assert_eq!(buffered, 14),
        other => panic!("Expected IncompleteRequest, got {:?}", other),
    }
}

#[test]
fn test_lone_lf_stream_is_incomplete() {
    let result = request_from_reader(ChunkReader::new("GET / HTTP/1.1\nHost: x\n\n", 4));
    assert!(matches!(result, Err(H1Error::IncompleteRequest { .. })));
}

#[rstest]
#[case(1)]
#[case(3)]
fn test_only_crlf_is_missing_fields(#[case] bytes_per_read: usize) {
    let result = request_from_reader(ChunkReader::new("\r\nHost: localhost\r\n\r\n", bytes_per_read));
    assert!(matches!(result, Err(H1Error::MissingFieldCount { found: 0 })));
}

#[rstest]
#[case("get / HTTP/1.1\r\n")]
#[case("G3T / HTTP/1.1\r\n")]
#[case("GeT / HTTP/1.1\r\n")]
fn test_invalid_method_chunked(#[case] data: &str) {
    let result = request_from_reader(ChunkReader::new(data, 1));
    assert!(matches!(result, Err(H1Error::InvalidMethod(_))));
}

#[test]
fn test_unsupported_version_stops_reading() {
    let result = request_from_reader(ChunkReader::new("GET / HTTP/1.0\r\nHost: localhost\r\n\r\n", 2));
    match result {
        Err(err @ H1Error::UnsupportedVersion(_)) => assert!(err.is_grammar_error()),
        other => panic!("Expected UnsupportedVersion, got {:?}", other),
    }
}

#[test]
fn test_read_failure_is_surfaced() {
    let result = request_from_reader(FailingReader::new("GET / HT", io::ErrorKind::ConnectionReset));
    match result {
        Err(H1Error::SourceReadFailure(err)) => assert_eq!(err.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("Expected SourceReadFailure, got {:?}", other),
    }
}

#[test]
fn test_read_failure_after_line_is_not_observed() {
    let request =
        request_from_reader(FailingReader::new("GET / HTTP/1.1\r\n", io::ErrorKind::BrokenPipe)).unwrap();
    assert_eq!(request.request_line.method(), "GET");
}

#[test]
fn test_configured_limit_applies_to_reader() {
    let config = ParserConfig {
        max_request_line_length: Some(10),
        read_chunk_size: 4,
    };
    let result = RequestReader::with_config(ChunkReader::new("GET /a-long-target HTTP/1.1\r\n", 64), config)
        .read_request();
    assert!(matches!(result, Err(H1Error::RequestLineTooLong { limit: 10 })));
}
