use carteira_backend::{app, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let _log_guard = utils::logging::init_logging(&utils::config::LoggingConfig::from_env());

    let cfg = match utils::config::ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    let app = app::build_app(&cfg)?;

    let listener = tokio::net::TcpListener::bind(cfg.addr).await?;
    tracing::info!("Servidor rodando em: http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
