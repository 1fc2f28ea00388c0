use local_api::logger::*;
use local_api::server::*;
use local_api::settings::*;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = LogConfig {
        filter: cli.log.unwrap_or_else(|| project_settings.log.filter.clone()),
        json: project_settings.log.json,
    };
    logger.reload_from_config(&logger_config)?;

    let server = Server::try_new(&project_settings)?;

    signal::ctrl_c().await?;

    let shutdown_timeout = std::time::Duration::from_secs(10);
    match tokio::time::timeout(shutdown_timeout, server.shutdown()).await {
        Ok(_) => info!("server shutdown successfully"),
        Err(_) => error!("server shutdown timed out"),
    }

    Ok(())
}
