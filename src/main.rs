mod assessment;
mod contact;
mod content;
mod network;
mod protocol;

use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let ws_addr =
        std::env::var("MERIDIAN_WS_ADDR").unwrap_or_else(|_| "127.0.0.1:9001".to_string());
    let http_addr =
        std::env::var("MERIDIAN_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:9002".to_string());

    info!("Starting Meridian site server");

    tokio::spawn(network::http_api::start(http_addr));
    network::server::start(&ws_addr).await;
}
