//! Bounded line framing over a transport.

use bytes::BytesMut;

use crate::error::{ClientError, Result};
use crate::MAX_LINE_LEN;

use super::transport::Transport;

/// Splits the inbound byte stream into `\n`-terminated lines.
///
/// The buffer starts at the protocol line limit and is reused across
/// lines. A line that exceeds the limit without a terminator is a read
/// failure; the reader loop terminates on it.
pub(crate) struct LineReader {
    transport: Transport,
    buf: BytesMut,
}

impl LineReader {
    pub fn new(transport: Transport) -> LineReader {
        LineReader {
            transport,
            buf: BytesMut::with_capacity(MAX_LINE_LEN),
        }
    }

    /// Read the next line, with the `\n` terminator (and a preceding `\r`)
    /// stripped. Returns `None` at end of connection; a partial line with
    /// no terminator at EOF is discarded.
    pub fn read_line(&mut self) -> Result<Option<BytesMut>> {
        loop {
            if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                if pos + 1 > MAX_LINE_LEN {
                    return Err(ClientError::LineTooLong(pos + 1));
                }
                let mut line = self.buf.split_to(pos + 1);
                line.truncate(pos);
                if line.last() == Some(&b'\r') {
                    line.truncate(pos - 1);
                }
                return Ok(Some(line));
            }

            if self.buf.len() > MAX_LINE_LEN {
                return Err(ClientError::LineTooLong(self.buf.len()));
            }

            let mut chunk = [0u8; MAX_LINE_LEN];
            let n = self.transport.read(&mut chunk).map_err(ClientError::Read)?;
            if n == 0 {
                return Ok(None);
            }
            self.buf.extend_from_slice(&chunk[..n]);
        }
    }
}
