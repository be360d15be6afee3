use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voicefocus_pstn::application::CallController;
use voicefocus_pstn::config::Config;
use voicefocus_pstn::domain::action::AudioAssets;
use voicefocus_pstn::interface::api::{build_router, init_metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.logging.level.as_filter()))
        .init();

    info!("Starting VoiceFocus PSTN call control");
    info!("Configuration loaded: {:?}", config);

    let controller = CallController::new(AudioAssets::new(config.audio.bucket.clone()));

    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics()?;

    let app = build_router(AppState::new(controller), prometheus_handle);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Invocation endpoint listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down...");
        })
        .await?;

    Ok(())
}
