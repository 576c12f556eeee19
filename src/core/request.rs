//! Request messages: protocol requests and globals-backed server requests.

use bytes::Bytes;
use http::{Method, Uri, Version};

use crate::core::headers::{HeaderValues, Headers};
use crate::core::Result;
use crate::encode;
use crate::globals::Globals;

/// HTTP request message.
///
/// Note: Clone is intentionally not derived to prevent expensive copies.
#[derive(Debug)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: Headers,
    body: Bytes,
    version: Version,
}

impl Request {
    /// Create a request with empty headers and body, HTTP/1.1.
    #[inline]
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            headers: Headers::new(),
            body: Bytes::new(),
            version: Version::HTTP_11,
        }
    }

    /// Build a request from textual method and URI.
    ///
    /// Invalid input surfaces as [`Error::Http`](crate::Error::Http).
    pub fn parse(method: &str, uri: &str) -> Result<Self> {
        let method = Method::from_bytes(method.as_bytes()).map_err(http::Error::from)?;
        let uri = uri.parse::<Uri>().map_err(http::Error::from)?;
        Ok(Self::new(method, uri))
    }

    // Modifiers

    /// Replace the headers wholesale.
    #[inline]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
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

    /// Set the protocol version.
    #[inline]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    // Getters

    /// Get the HTTP method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the full URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Get the request path.
    #[inline]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Get the query string.
    #[inline]
    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Get the headers.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get a header value by name, case-insensitively.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&HeaderValues> {
        self.headers.get(name)
    }

    /// Get the request body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Get the protocol version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }
}

/// Server request: a [`Request`] plus the parsed query parameters.
///
/// Built from an ambient state snapshot. The captured form fields are
/// JSON-encoded into the body stream, not kept urlencoded.
#[derive(Debug)]
pub struct ServerRequest {
    request: Request,
    query_params: Vec<(String, String)>,
}

impl ServerRequest {
    /// Build a server request from the host's state snapshot.
    pub fn from_globals(globals: &Globals) -> Result<Self> {
        let body = encode::json_bytes(&globals.form_map())?;
        let request = Request::parse(globals.method(), globals.uri())?
            .with_headers(globals.headers().clone())
            .with_body(body);

        Ok(Self {
            request,
            query_params: globals.query_params(),
        })
    }

    /// The underlying request.
    #[inline]
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// All query parameters, in order of appearance.
    #[inline]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// First query parameter with the given name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The request body (JSON-encoded form fields).
    #[inline]
    pub fn body(&self) -> &Bytes {
        self.request.body()
    }
}
