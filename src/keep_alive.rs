//! Plain HTTP endpoint for uptime monitors. It shares nothing with the bot.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::error::Error;

pub const RUNNING_BODY: &str = "Bot is running!";

pub fn router() -> Router {
    Router::new().route("/", get(|| async { RUNNING_BODY }))
}

pub async fn serve(listener: TcpListener) -> Result<(), Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Keep-alive server listening on {}", addr);
    }
    axum::serve(listener, router()).await?;
    Ok(())
}
