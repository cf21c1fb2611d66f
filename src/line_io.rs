//! Byte-oriented line reader and writer
//!
//! Lines are arbitrary byte strings; embedded NUL bytes and invalid UTF-8
//! are ordinary content. The terminator convention is fixed at construction
//! and never inferred per line.

use crate::line_ending::LineEnding;
use std::io::{self, BufRead, Write};

/// Reads terminator-delimited lines from a byte stream
pub struct LineReader<R: BufRead> {
    inner: R,
    ending: LineEnding,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, ending: LineEnding) -> Self {
        Self { inner, ending }
    }

    /// Read the next line with its terminator stripped.
    ///
    /// Returns `Ok(None)` only when the stream is exhausted with nothing
    /// buffered. A final line without a terminator is still returned once.
    /// In CRLF mode only the exact `\r\n` sequence ends a line; a lone `\r`
    /// or a bare `\n` is kept as content.
    pub fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        match self.ending {
            LineEnding::Lf => {
                let mut buf = Vec::new();
                let n = self.inner.read_until(b'\n', &mut buf)?;
                if n == 0 {
                    return Ok(None);
                }
                if buf.ends_with(b"\n") {
                    buf.pop();
                }
                Ok(Some(buf))
            }
            LineEnding::Crlf => {
                let mut buf = Vec::new();
                loop {
                    let n = self.inner.read_until(b'\n', &mut buf)?;
                    if n == 0 {
                        // Exhausted mid-line: whatever accumulated is the
                        // final unterminated line, if anything did.
                        return if buf.is_empty() { Ok(None) } else { Ok(Some(buf)) };
                    }
                    if buf.ends_with(b"\r\n") {
                        buf.truncate(buf.len() - 2);
                        return Ok(Some(buf));
                    }
                    // Bare newline inside a CRLF stream is content.
                }
            }
        }
    }
}

/// Writes lines followed by the configured terminator
pub struct LineWriter<W: Write> {
    inner: W,
    ending: LineEnding,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W, ending: LineEnding) -> Self {
        Self { inner, ending }
    }

    /// Write the line bytes plus the terminator. Either write failing is a
    /// hard error; no partial-write recovery is attempted.
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.inner.write_all(line)?;
        self.inner.write_all(self.ending.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
