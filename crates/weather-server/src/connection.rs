//! Per-connection request/response loop.
//!
//! Each connection runs a small state machine:
//!
//! ```text
//! AwaitRequest --65 bytes--> Dispatch --> SendResponse --9 bytes--> AwaitRequest
//!      |                                       |
//!      +-- EOF at frame start --> Closed       +-- write error --> error
//!      +-- EOF mid-frame / read error --> error
//! ```
//!
//! Short reads and writes are absorbed here. Bad kinds or cities are not
//! errors: they become status codes in an ordinary response and the
//! connection stays open. Only transport failures end it early.

use std::future::Future;
use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use weather_core::ResponseBuilder;
use weather_protocol::{decode_request, encode_response, RequestFrame, ResponseFrame, REQUEST_LEN};

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("peer closed after {received} of {expected} request bytes")]
    TruncatedRequest { received: usize, expected: usize },

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug)]
enum State {
    AwaitRequest,
    Dispatch(RequestFrame),
    SendResponse(ResponseFrame),
    Closed,
}

/// Serve requests on `stream` until the peer closes it.
///
/// Returns the number of completed exchanges on a graceful close. The
/// stream is owned here and dropped (closed) on every return path.
pub async fn run_connection<S>(
    mut stream: S,
    builder: &ResponseBuilder,
    io_timeout: Option<Duration>,
) -> Result<u64, ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut served = 0u64;
    let mut state = State::AwaitRequest;

    loop {
        state = match state {
            State::AwaitRequest => {
                match with_deadline(io_timeout, read_request(&mut stream)).await? {
                    Some(frame) => State::Dispatch(frame),
                    None => State::Closed,
                }
            }
            State::Dispatch(frame) => {
                let req = decode_request(&frame);
                let resp = builder.process_request(&req);
                debug!(
                    kind = %(req.kind as char).escape_default(),
                    city = %req.city,
                    status = resp.status.code(),
                    value = resp.value,
                    "request handled"
                );
                State::SendResponse(encode_response(&resp))
            }
            State::SendResponse(frame) => {
                with_deadline(io_timeout, write_response(&mut stream, &frame)).await?;
                served += 1;
                State::AwaitRequest
            }
            State::Closed => return Ok(served),
        };
    }
}

/// Read one full request frame.
///
/// `Ok(None)` means the peer closed cleanly before sending anything.
/// EOF after a partial frame is an error.
pub async fn read_request<R>(reader: &mut R) -> Result<Option<RequestFrame>, ConnectionError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; REQUEST_LEN];
    let mut filled = 0;

    while filled < REQUEST_LEN {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(ConnectionError::TruncatedRequest {
                received: filled,
                expected: REQUEST_LEN,
            });
        }
        filled += n;
    }

    Ok(Some(buf))
}

/// Write one full response frame.
pub async fn write_response<W>(writer: &mut W, frame: &ResponseFrame) -> Result<(), ConnectionError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(frame).await?;
    writer.flush().await?;
    Ok(())
}

async fn with_deadline<F, T>(limit: Option<Duration>, fut: F) -> Result<T, ConnectionError>
where
    F: Future<Output = Result<T, ConnectionError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| ConnectionError::Timeout(limit))?,
        None => fut.await,
    }
}
