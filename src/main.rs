use bank_api::{logger::configure_logger, routes::make_app, Config};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    configure_logger(&config.log_level);

    let app = make_app(&config).await?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "🚀 JSON API server running");
    axum::serve(listener, app).await?;
    Ok(())
}
