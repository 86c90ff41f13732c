use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::{Connection, Outcome};
use crate::http::handler::RequestHandler;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.server.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    serve(listener, cfg).await
}

/// Accepts connections one at a time until a client sends `QUIT`.
///
/// Each connection is finished before the next is accepted. A failing
/// connection is logged and dropped; accept errors end the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let port = listener.local_addr()?.port();
    let handler = RequestHandler::from_config(cfg, port);

    for page in handler.files().missing_error_pages().await {
        warn!(
            page,
            root = %handler.files().root().display(),
            "Error page missing, requests needing it will fail"
        );
    }

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        match Connection::new(socket, &handler).run().await {
            Ok(Outcome::Shutdown) => {
                info!("Shutting down server");
                break;
            }
            Ok(_) => {}
            Err(e) => error!("Connection error from {}: {:#}", peer, e),
        }
    }

    Ok(())
}
