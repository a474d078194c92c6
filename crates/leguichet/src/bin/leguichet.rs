//! leguichet binary entry point

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = leguichet::config::ServerConfig::from_env();

    if config.enable_logging {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    println!("LeGuichet - LeChamp HTTP Server");
    println!("Configuration:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  DB Path: {}", config.db_path);

    let server = leguichet::GuichetServer::new(config)?;

    println!();
    println!("Server starting on: {}", server.server_url());
    println!("Press Ctrl+C to stop");

    server.start().await?;

    Ok(())
}
