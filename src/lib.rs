//! http_bridge - Bridge between framework-native and protocol HTTP responses.
//!
//! This crate lets request/response handling code emit either of two
//! response conventions uniformly: full protocol responses (status line,
//! headers, byte body) and host-framework responses (status, headers,
//! JSON-encodable payload). Message types wrap the `http` crate; on top of
//! construction the bridge adds a JSON content-type default, a dual-mode
//! emitter, and a guard against double emission.
//!
//! # Features
//!
//! - **Closed response type**: exactly two response kinds, dispatched
//!   exhaustively at compile time
//! - **JSON defaults**: responses without a `Content-Type` gain
//!   `application/json; charset=<configured>` at emission
//! - **Single emission**: an emitter commits once; later attempts fail
//!   before any byte is written
//! - **Server requests**: built from an ambient state snapshot, with
//!   captured form fields JSON-encoded into the body stream
//!
//! # Example
//!
//! ```rust,ignore
//! use http_bridge::config::HttpConfig;
//! use http_bridge::{Emitter, FrameworkResponse, Response, WriteChannel};
//! use serde_json::json;
//!
//! let channel = WriteChannel::new(std::io::stdout().lock());
//! let mut emitter = Emitter::new(channel, &HttpConfig::from_env()?);
//!
//! let response = FrameworkResponse::new(json!({ "key": "value" }));
//! emitter.emit(&Response::from(response))?;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod emitter;
pub mod encode;
pub mod globals;
pub mod logging;

// Re-exports for convenience
pub use crate::config::Config;
pub use crate::core::{
    Error, FrameworkResponse, HeaderValues, Headers, ProtocolResponse, Request, Response, Result,
    ServerRequest,
};
pub use crate::emitter::{Emitter, OutputChannel, WriteChannel};
pub use crate::globals::Globals;
