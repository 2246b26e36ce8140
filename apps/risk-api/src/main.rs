use clap::Parser;
use dotenv::dotenv;
use risk_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::parse();
    risk_api::start_server(config).await
}
