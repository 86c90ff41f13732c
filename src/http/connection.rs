use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::http::handler::RequestHandler;
use crate::http::reader::{read_request, Incoming};
use crate::http::writer::ResponseWriter;

/// How a connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A response was written.
    Served,
    /// Client went away before sending a full request.
    Closed,
    /// Client sent the QUIT control command.
    Shutdown,
}

pub struct Connection<'a, S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    handler: &'a RequestHandler,
}

pub enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter),
    Closed(Outcome),
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: &'a RequestHandler) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            handler,
        }
    }

    /// Runs the single exchange this connection carries. The stream is
    /// dropped, and so closed, when the connection is.
    pub async fn run(mut self) -> anyhow::Result<Outcome> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match read_request(&mut self.stream, &mut self.buffer).await? {
                        Incoming::Request(raw) => ConnectionState::Processing(raw),
                        Incoming::Quit => {
                            if let Err(e) = self.stream.shutdown().await {
                                debug!(error = %e, "Shutdown after QUIT failed");
                            }
                            ConnectionState::Closed(Outcome::Shutdown)
                        }
                        Incoming::Closed => {
                            debug!(bytes = self.buffer.len(), "Client closed before end of request");
                            ConnectionState::Closed(Outcome::Closed)
                        }
                    };
                }

                ConnectionState::Processing(raw) => {
                    let reply = self.handler.handle(raw).await?;

                    info!(
                        status = reply.response.status.as_u16(),
                        file = %reply.file_name,
                        bytes = reply.response.body.len(),
                        head_only = !reply.include_body,
                        "Response ready"
                    );

                    let writer = ResponseWriter::new(&reply.response, reply.include_body);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed(Outcome::Served);
                }

                ConnectionState::Closed(outcome) => {
                    return Ok(*outcome);
                }
            }
        }
    }
}
