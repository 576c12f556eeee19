//! Error types for message construction and emission.

use std::fmt;

/// Errors raised while building or emitting messages.
#[derive(Debug)]
pub enum Error {
    /// Emission attempted after output was already committed.
    AlreadyCommitted,

    /// Payload could not be JSON-encoded.
    Encoding(serde_json::Error),

    /// Invalid method, URI, status, or version while building a message.
    Http(http::Error),

    /// Write to the output channel failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyCommitted => {
                write!(f, "output already committed; the response could not be emitted")
            }
            Error::Encoding(e) => write!(f, "payload encoding failed: {}", e),
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encoding(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::AlreadyCommitted => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Encoding(e)
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::Http(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AlreadyCommitted;
        assert_eq!(
            err.to_string(),
            "output already committed; the response could not be emitted"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_http() {
        let parse_err = "no spaces allowed".parse::<http::Uri>().unwrap_err();
        let err: Error = http::Error::from(parse_err).into();

        assert!(matches!(err, Error::Http(_)));
        assert!(err.to_string().contains("HTTP error"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        assert!(Error::AlreadyCommitted.source().is_none());

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: Error = io_err.into();
        assert!(err.source().is_some());
    }
}
