use tradeboard::api::router::create_router;
use tradeboard::config::{AppConfig, LogFormat};
use tradeboard::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = tradeboard::metrics::init_metrics(&config.models)
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {e}"))?;

    if !config.data_dir.is_dir() {
        tracing::warn!(
            data_dir = %config.data_dir.display(),
            "Data directory does not exist; every model will report no data"
        );
    }
    if !config.dashboard_dir.join("index.html").is_file() {
        tracing::warn!(
            dashboard_dir = %config.dashboard_dir.display(),
            "Dashboard document not found; / will serve a fallback message"
        );
    }

    tracing::info!(
        models = ?config.models,
        data_dir = %config.data_dir.display(),
        "Serving model stats"
    );

    let state = AppState::new(config, metrics_handle);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dashboard listening on http://{addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}
