use chrono::Utc;
use journey_tracker::{load_data, router, spawn_auto_fill, AppState, Config, Journey};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let stored = load_data(&config.data_path).await;
    let journey = Journey::from_stored(&stored, Utc::now());
    let stats = journey.stats();
    info!(
        "loaded journey {}..{}: {}/{} weeks passed, {} explicit entries",
        journey.range.start(),
        journey.range.end(),
        stats.filled,
        stats.total,
        journey.store.len()
    );

    let state = AppState::new(config.data_path.clone(), journey);
    spawn_auto_fill(state.clone(), config.sweep_interval);

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
