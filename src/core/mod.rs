//! Core message types for the bridge.
//!
//! This module provides the value types flowing through construction and
//! emission:
//!
//! - [`Request`] / [`ServerRequest`] - request messages
//! - [`ProtocolResponse`] / [`FrameworkResponse`] - the two response kinds,
//!   closed over by [`Response`]
//! - [`Headers`] - header mapping with explicit single/multi values
//! - [`Error`] - error types

pub mod headers;

mod error;
mod request;
mod response;

pub use error::{Error, Result};
pub use headers::{HeaderValues, Headers};
pub use request::{Request, ServerRequest};
pub use response::{FrameworkResponse, ProtocolResponse, Response};
