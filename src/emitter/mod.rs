//! Response emission.
//!
//! An [`Emitter`] writes exactly one response per lifetime: status line
//! (protocol responses only), normalized headers, then the body. Once the
//! emitter has committed, every further attempt fails before any byte is
//! written.

mod channel;

pub use channel::{OutputChannel, WriteChannel};

use http::Version;
use tracing::debug;

use crate::config::HttpConfig;
use crate::core::headers::Headers;
use crate::core::{Error, FrameworkResponse, ProtocolResponse, Response, Result};
use crate::encode;

/// Emission state. `Committed` is terminal for the emitter's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Ready,
    Committed,
}

/// Writes responses to an injected output channel, at most once.
#[derive(Debug)]
pub struct Emitter<C: OutputChannel> {
    channel: C,
    charset: String,
    state: State,
}

impl<C: OutputChannel> Emitter<C> {
    /// Create an emitter over a channel, sourcing the default charset from
    /// the host configuration.
    pub fn new(channel: C, config: &HttpConfig) -> Self {
        Self {
            channel,
            charset: config.charset.clone(),
            state: State::Ready,
        }
    }

    /// Whether a response has already been emitted.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.state == State::Committed
    }

    /// Borrow the output channel.
    #[inline]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Unwrap into the output channel.
    #[inline]
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Emit a response: status line (protocol responses only), normalized
    /// headers, then the body. Transitions to committed on success.
    ///
    /// Fails with [`Error::AlreadyCommitted`] once committed; the failing
    /// call writes nothing. Partial output left by an I/O failure
    /// mid-emission is not rolled back.
    pub fn emit(&mut self, response: &Response) -> Result<()> {
        if self.is_committed() {
            return Err(Error::AlreadyCommitted);
        }

        match response {
            Response::Protocol(response) => self.emit_protocol(response)?,
            Response::Framework(response) => self.emit_framework(response)?,
        }

        self.state = State::Committed;
        Ok(())
    }

    fn emit_protocol(&mut self, response: &ProtocolResponse) -> Result<()> {
        let status_line = format!(
            "HTTP/{} {} {}",
            version_str(response.version()),
            response.status().as_u16(),
            response.reason(),
        );

        self.channel.write_status_line(&status_line)?;
        self.write_headers(response.headers())?;
        self.channel.write_body(response.body())?;

        debug!(
            status = response.status().as_u16(),
            bytes = response.body().len(),
            "emitted protocol response"
        );
        Ok(())
    }

    fn emit_framework(&mut self, response: &FrameworkResponse) -> Result<()> {
        // Encode before the first channel write; an unencodable payload
        // must not leave partial output.
        let body = encode::payload_text(response.data())?;

        self.write_headers(response.headers())?;
        self.channel.write_body(body.as_bytes())?;

        debug!(
            status = response.status().as_u16(),
            bytes = body.len(),
            "emitted framework response"
        );
        Ok(())
    }

    fn write_headers(&mut self, headers: &Headers) -> Result<()> {
        for (name, values) in headers_with_json(headers, &self.charset).iter() {
            self.channel.write_header(name, &values.to_line())?;
        }
        Ok(())
    }
}

/// Headers with the JSON content-type default applied.
///
/// An existing `Content-Type` (any casing) is left untouched; otherwise
/// `application/json; charset=<charset>` is inserted. No other keys
/// change.
pub fn headers_with_json(headers: &Headers, charset: &str) -> Headers {
    let mut headers = headers.clone();
    if !headers.contains("content-type") {
        headers.insert(
            "Content-Type",
            format!("application/json; charset={}", charset),
        );
    }
    headers
}

fn version_str(version: Version) -> &'static str {
    if version == Version::HTTP_09 {
        "0.9"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_3 {
        "3"
    } else {
        "1.1"
    }
}
