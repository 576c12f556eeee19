//! Response messages: the two emission variants.

use bytes::Bytes;
use http::{StatusCode, Version};
use serde_json::Value;

use crate::core::headers::{HeaderValues, Headers};
use crate::core::Result;
use crate::encode;

/// A response ready for emission, one of exactly two kinds.
///
/// The emitter matches on this exhaustively; a value outside the two
/// variants is unrepresentable.
#[derive(Debug)]
pub enum Response {
    /// Protocol response with an explicit status line.
    Protocol(ProtocolResponse),
    /// Framework-native response carrying a JSON-encodable payload.
    Framework(FrameworkResponse),
}

impl From<ProtocolResponse> for Response {
    fn from(response: ProtocolResponse) -> Self {
        Response::Protocol(response)
    }
}

impl From<FrameworkResponse> for Response {
    fn from(response: FrameworkResponse) -> Self {
        Response::Framework(response)
    }
}

/// Protocol response: status, reason, version, headers, byte body.
///
/// Note: Clone is intentionally not derived to prevent expensive copies.
#[derive(Debug)]
pub struct ProtocolResponse {
    status: StatusCode,
    reason: Option<String>,
    version: Version,
    headers: Headers,
    body: Bytes,
}

impl ProtocolResponse {
    /// Create a new response builder.
    #[inline]
    pub fn builder() -> ProtocolResponseBuilder {
        ProtocolResponseBuilder::new()
    }

    /// Response whose body is the encoded payload: structured values are
    /// JSON-encoded, a string passes through as-is.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let body = encode::payload_text(payload)?;
        Ok(Self::builder().body(body).build())
    }

    // Modifiers

    /// Set the status code.
    #[inline]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add a header.
    #[inline]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<HeaderValues>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the body.
    #[inline]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    // Getters

    /// Get the status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reason phrase: the explicit override, else the canonical phrase.
    pub fn reason(&self) -> &str {
        match &self.reason {
            Some(reason) => reason,
            None => self.status.canonical_reason().unwrap_or(""),
        }
    }

    /// Get the protocol version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Get the headers.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get the response body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl Default for ProtocolResponse {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for protocol responses.
pub struct ProtocolResponseBuilder {
    status: StatusCode,
    reason: Option<String>,
    version: Version,
    headers: Headers,
    body: Bytes,
}

impl Default for ProtocolResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolResponseBuilder {
    /// Create a new response builder: 200 OK, HTTP/1.1, empty.
    #[inline]
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            reason: None,
            version: Version::HTTP_11,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// Set the status code.
    #[inline]
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Override the reason phrase.
    #[inline]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the protocol version.
    #[inline]
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Add a header.
    #[inline]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<HeaderValues>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the headers wholesale.
    #[inline]
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Set the body.
    #[inline]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Build the response.
    #[inline]
    pub fn build(self) -> ProtocolResponse {
        ProtocolResponse {
            status: self.status,
            reason: self.reason,
            version: self.version,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Framework response: status, headers, and a JSON-encodable payload.
///
/// No protocol version or reason phrase; the host runtime owns the status
/// line for these.
#[derive(Debug)]
pub struct FrameworkResponse {
    status: StatusCode,
    headers: Headers,
    data: Value,
}

impl FrameworkResponse {
    /// Create a 200 response around a payload.
    pub fn new(data: Value) -> Self {
        Self {
            status: StatusCode::OK,
            headers: Headers::new(),
            data,
        }
    }

    /// Set the status code.
    #[inline]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add a header.
    #[inline]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<HeaderValues>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the headers wholesale.
    #[inline]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Get the status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get the data payload.
    #[inline]
    pub fn data(&self) -> &Value {
        &self.data
    }
}
