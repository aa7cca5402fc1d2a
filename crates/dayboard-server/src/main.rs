//! Binary entry point for the dayboard server.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;

use dayboard_core::{TracingConfig, init_tracing};
use dayboard_providers::FileTokenStore;
use dayboard_providers::google::{GoogleConfig, GoogleProvider};
use dayboard_server::{AppState, ServerConfig, ServerError, ServerResult, app};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerResult<()> {
    init_tracing(TracingConfig::server())?;

    let config = ServerConfig::from_env().map_err(ServerError::config)?;

    let google = GoogleConfig::new(&config.credentials_path, &config.redirect_uri)
        .with_account(&config.account);
    let store = Arc::new(FileTokenStore::new(&config.token_dir));
    let provider =
        GoogleProvider::new(google, store).map_err(|e| ServerError::config(e.to_string()))?;

    let state = AppState::new(Arc::new(provider), &config.dashboard_url);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("dayboard server listening on http://{}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
