use mock_server::{MockState, Reply, StatusCode};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let mut reply = Reply::default();
    if let Ok(status) = std::env::var("MOCK_STATUS") {
        reply.status = StatusCode::from_u16(status.parse()?)?;
    }
    if let Ok(body) = std::env::var("MOCK_BODY") {
        reply.body = body;
    }

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, status = reply.status.as_u16(), "listening");
    mock_server::run(listener, MockState::new(reply)).await?;
    Ok(())
}
