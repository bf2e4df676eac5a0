//! HTTP boundary for the trivia quiz-content server.
//!
//! # Responsibility
//! - Parse configuration, bootstrap logging and storage.
//! - Translate REST requests into `trivia_core` use-cases and serialize the
//!   results into the JSON envelopes the quiz front end expects.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use routes::create_router;
pub use state::AppState;

use log::info;
use std::sync::Arc;
use trivia_core::db::open_db;
use trivia_core::db::seed::seed_sample_questions;
use trivia_core::{core_version, init_logging};

/// Boots logging and storage, then serves requests until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let log_dir = config.log_dir();
    let log_dir_str = log_dir
        .to_str()
        .ok_or_else(|| ServerError::NonUtf8Path(log_dir.clone()))?;
    init_logging(config.log_level(), log_dir_str)?;

    let db_path = config.db_path();
    let conn = open_db(&db_path)?;
    if config.seed {
        seed_sample_questions(&conn)?;
    }

    let state = Arc::new(AppState::try_new(conn)?);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        "event=server_start module=server status=ok bind={} db_path={} version={}",
        config.bind,
        db_path.display(),
        core_version()
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=shutdown_signal module=server status=error error={err}");
    }
}
