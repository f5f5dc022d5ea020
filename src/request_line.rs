//! The HTTP/1.1 request-line and its grammar.
//!
//! ```text
//! request-line = method SP request-target SP HTTP-version
//! ```
//!
//! Fields are separated by runs of whitespace, and surrounding whitespace is
//! trimmed before splitting. Only `HTTP/1.1` is accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::H1Error;

/// The only version this parser accepts, in normalized form.
pub const HTTP_1_1: &str = "1.1";

/// The scheme part of the version field.
const VERSION_SCHEME: &str = "HTTP";

/// A validated request-line.
///
/// A value of this type only exists if every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestLine {
    method: String,
    target: String,
    version: String,
}

impl RequestLine {
    /// Validate a candidate line (terminator already stripped).
    pub fn parse(line: &str) -> Result<Self, H1Error> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[method, target, version] = fields.as_slice() else {
            return Err(H1Error::MissingFieldCount { found: fields.len() });
        };

        validate_method(method)?;
        validate_target(target)?;
        let version = parse_version(version)?;

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            version: version.to_string(),
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Normalized version, always `"1.1"`.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl FromStr for RequestLine {
    type Err = H1Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}/{}", self.method, self.target, VERSION_SCHEME, self.version)
    }
}

fn validate_method(method: &str) -> Result<(), H1Error> {
    if method.is_empty() || !method.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(H1Error::InvalidMethod(method.to_string()));
    }
    Ok(())
}

// Whitespace splitting never yields an empty field, but the grammar still
// forbids one.
fn validate_target(target: &str) -> Result<(), H1Error> {
    if target.is_empty() {
        return Err(H1Error::EmptyTarget);
    }
    Ok(())
}

/// Check `HTTP/1.1` and return the normalized version part.
fn parse_version(token: &str) -> Result<&str, H1Error> {
    let mut parts = token.split('/');
    let (Some(scheme), Some(version), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(H1Error::MalformedVersionToken(token.to_string()));
    };

    if scheme != VERSION_SCHEME {
        return Err(H1Error::UnrecognizedVersionScheme(scheme.to_string()));
    }
    if version != HTTP_1_1 {
        return Err(H1Error::UnsupportedVersion(version.to_string()));
    }
    Ok(version)
}
