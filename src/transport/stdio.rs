// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-delimited transport over stdin/stdout.
//!
//! Each message is a single line terminated by `\n`. Lines are handed on as raw
//! bytes so that invalid UTF-8 is reported by the decoder like any other
//! malformed request.
//!
//! At most `max_line_bytes + 1` bytes of a line are ever buffered. The rest of
//! a longer line is discarded, and the truncated line is still handed on so
//! that the dispatcher answers it with `InvalidRequest`.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, trace};

use crate::config::LimitsConfig;
use crate::error::transport::TransportError;

/// Reads request lines from a reader, writes response lines to a writer.
///
/// Generic over reader/writer so that tests can run it over in-memory buffers.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
    max_line_bytes: usize,
}

impl StdioTransport<tokio::io::Stdin, tokio::io::Stdout> {
    /// Transport over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            max_line_bytes: LimitsConfig::default().max_line_bytes,
        }
    }

    /// Sets the longest line, terminator excluded, that is read in full.
    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.set_max_line_bytes(max_line_bytes);
        self
    }

    /// Changes the line limit of an existing transport.
    pub fn set_max_line_bytes(&mut self, max_line_bytes: usize) {
        self.max_line_bytes = max_line_bytes;
    }

    /// The longest line that is read in full.
    pub fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// Reads the next line, without its `\n` or `\r\n` terminator.
    ///
    /// Returns `None` on EOF. A final line without a terminator is still
    /// returned. A line longer than the limit comes back cut to
    /// `max_line_bytes + 1` bytes, with the remainder skipped.
    pub async fn read_line(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        // One byte over the limit covers the `\n` of a line exactly at it
        let cap = self.max_line_bytes.saturating_add(1);
        let mut line = Vec::new();
        let bytes_read = (&mut self.reader)
            .take(cap as u64)
            .read_until(b'\n', &mut line)
            .await
            .map_err(TransportError::Read)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        } else if line.len() >= cap {
            let skipped = self.skip_line().await?;
            debug!(
                limit = self.max_line_bytes,
                skipped, "Discarded the rest of an oversized line"
            );
        }

        trace!(len = line.len(), "read message");
        Ok(Some(line))
    }

    /// Discards input up to and including the next `\n`, or up to EOF.
    async fn skip_line(&mut self) -> Result<usize, TransportError> {
        let mut skipped = 0;
        loop {
            let (consumed, done) = {
                let available = self.reader.fill_buf().await.map_err(TransportError::Read)?;
                if available.is_empty() {
                    return Ok(skipped);
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(end) => (end + 1, true),
                    None => (available.len(), false),
                }
            };
            self.reader.consume(consumed);
            skipped += consumed;
            if done {
                return Ok(skipped);
            }
        }
    }

    /// Writes one message followed by `\n` and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)?;

        Ok(())
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
