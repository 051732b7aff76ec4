use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use translator_api::{build_app, AppState, Config};

const CONFIG_FILE_NAMES: [&str; 3] = ["config.yaml", "config.yml", "config.json"];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator_api=debug,tower_http=debug")),
        )
        .init();

    // CONFIG_PATH wins, then the working directory, then next to the executable
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    let config_paths: Vec<String> = std::env::var("CONFIG_PATH")
        .ok()
        .into_iter()
        .chain(CONFIG_FILE_NAMES.iter().map(|name| name.to_string()))
        .chain(
            CONFIG_FILE_NAMES
                .iter()
                .filter_map(|name| exe_dir.join(name).to_str().map(|s| s.to_string())),
        )
        .collect();

    let mut config = None;
    let mut loaded_path = String::new();

    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                config = Some(cfg);
                loaded_path = path.clone();
                break;
            }
            Err(e) => {
                debug!("Failed to load config from {}: {:#}", path, e);
                continue;
            }
        }
    }

    let config = config.ok_or_else(|| {
        anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths)
    })?;

    info!("Loaded configuration from: {}", loaded_path);
    info!(
        base_url = %config.openrouter.base_url,
        model = %config.openrouter.model,
        timeout = ?config.openrouter.timeout,
        max_retries = config.openrouter.max_retries,
        retry_delay = ?config.openrouter.retry_delay,
        "Upstream settings (single attempt, transport default timeout)"
    );
    info!(
        max_text_length = config.translation.max_text_length,
        default_temperature = config.translation.default_temperature,
        max_tokens = config.translation.max_tokens,
        "Translation settings (not forwarded upstream)"
    );
    info!("Supported languages: {:?}", config.language_codes());

    let host = config.server.host.clone();
    let port = config.server.port;

    let app = build_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
