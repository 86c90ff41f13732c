use std::fmt;

use crate::http::request::Request;

pub const CRLF: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than three tokens on the request line.
    InvalidRequest,
    /// Neither HTTP/1.0 nor HTTP/1.1.
    UnsupportedVersion(String),
    /// HTTP/1.1 request with nothing after the request line.
    MissingHost,
    /// HTTP/1.1 request whose second line is not the expected Host line.
    HostMismatch(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidRequest => write!(f, "malformed request line"),
            ParseError::UnsupportedVersion(v) => write!(f, "unsupported protocol {:?}", v),
            ParseError::MissingHost => write!(f, "missing Host line"),
            ParseError::HostMismatch(line) => write!(f, "unexpected host line {:?}", line),
        }
    }
}

impl std::error::Error for ParseError {}

/// Splits a trimmed raw request into its request line tokens and the
/// following line.
pub fn parse_http_request(raw: &str) -> Result<Request, ParseError> {
    let mut lines = raw.split(CRLF);

    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequest)?;
    let resource = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    Ok(Request {
        method: method.to_string(),
        resource: resource.to_string(),
        version: version.to_string(),
        host_line: lines.next().map(str::to_string),
    })
}

/// Decides which parsed requests are served.
///
/// HTTP/1.0 requests are always accepted. HTTP/1.1 requests are accepted
/// only when their second line is exactly `Host: <host>:<port>`.
#[derive(Debug, Clone)]
pub struct HostPolicy {
    expected: String,
}

impl HostPolicy {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            expected: format!("Host: {}:{}", host, port),
        }
    }

    pub fn expected_line(&self) -> &str {
        &self.expected
    }

    pub fn check(&self, request: &Request) -> Result<(), ParseError> {
        if request.version == "HTTP/1.0" {
            return Ok(());
        }
        if !request.version.starts_with("HTTP/1.1") {
            return Err(ParseError::UnsupportedVersion(request.version.clone()));
        }

        match request.host_line.as_deref() {
            None => Err(ParseError::MissingHost),
            Some(line) if line == self.expected => Ok(()),
            Some(line) => Err(ParseError::HostMismatch(line.to_string())),
        }
    }
}
