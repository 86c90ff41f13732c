use tinyweb::config::Config;
use tinyweb::server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let port_arg = std::env::args().nth(1);
    let cfg = Config::load(port_arg.as_deref())?;
    tracing::info!("Starting server, listening on port {}", cfg.server.port);

    tokio::select! {
        res = server::listener::run(&cfg) => {
            if let Err(e) = res {
                tracing::error!("Server failed: {:#}", e);
                return Err(e);
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
