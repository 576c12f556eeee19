//! Output channel abstraction and HTTP/1.1 text framing.

use std::io::{self, Write};

/// Sink for a single response emission.
///
/// The emitter hands over a formatted status line, header lines, and one
/// body write; the channel owns framing and transport.
pub trait OutputChannel {
    /// Write the status line. Protocol responses only.
    fn write_status_line(&mut self, line: &str) -> io::Result<()>;

    /// Write one header line.
    fn write_header(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Write the body. Called last, at most once per emission.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

/// Channel writing standard HTTP/1.1 framing to any [`Write`] sink.
///
/// Lines end with CRLF; a blank line separates headers from the body.
#[derive(Debug)]
pub struct WriteChannel<W: Write> {
    writer: W,
}

impl<W: Write> WriteChannel<W> {
    /// Wrap a writer.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the underlying writer.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap into the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputChannel for WriteChannel<W> {
    fn write_status_line(&mut self, line: &str) -> io::Result<()> {
        write!(self.writer, "{}\r\n", line)
    }

    fn write_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        write!(self.writer, "{}: {}\r\n", name, value)
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.writer.write_all(body)?;
        self.writer.flush()
    }
}
