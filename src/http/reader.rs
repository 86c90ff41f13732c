//! Reads one raw request off a connection.

use std::io;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Blank line ending the request head.
pub const TERMINATOR: &[u8] = b"\r\n\r\n";

/// Control command that stops the server.
pub const QUIT: &[u8] = b"QUIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    /// Request text up to and including the terminator, trimmed.
    Request(String),
    /// The first chunk started with `QUIT`.
    Quit,
    /// EOF before a complete request arrived.
    Closed,
}

/// Reads until the first `\r\n\r\n`.
///
/// The first chunk is checked for the `QUIT` prefix before accumulating, so
/// a bare `QUIT` without terminator is recognised. Each read waits for at
/// least one byte or EOF. Anything after the terminator is ignored.
///
/// The buffer is unbounded: a client that never sends the terminator keeps
/// it growing until it disconnects.
pub async fn read_request<R>(stream: &mut R, buf: &mut BytesMut) -> io::Result<Incoming>
where
    R: AsyncRead + Unpin,
{
    if stream.read_buf(buf).await? == 0 {
        return Ok(Incoming::Closed);
    }

    if buf.starts_with(QUIT) {
        return Ok(Incoming::Quit);
    }

    let mut scan_from = 0;
    loop {
        if let Some(pos) = find_terminator(buf, scan_from) {
            let head = &buf[..pos + TERMINATOR.len()];
            let text = String::from_utf8_lossy(head).trim().to_string();
            return Ok(Incoming::Request(text));
        }

        // A terminator may straddle the old end of the buffer.
        scan_from = buf.len().saturating_sub(TERMINATOR.len() - 1);

        if stream.read_buf(buf).await? == 0 {
            return Ok(Incoming::Closed);
        }
    }
}

/// Position of the first terminator starting at or after `from`.
fn find_terminator(buf: &[u8], from: usize) -> Option<usize> {
    buf.get(from..)?
        .windows(TERMINATOR.len())
        .position(|w| w == TERMINATOR)
        .map(|pos| from + pos)
}
