use employee_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(
        "Starting employee-server v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    Server::new(config).run().await?;
    Ok(())
}
