//! Command-line and environment configuration for the server binary.

use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use trivia_core::default_log_level;

const DB_FILE_NAME: &str = "trivia.sqlite3";
const LOG_DIR_NAME: &str = "trivia-logs";

/// Trivia quiz-content HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "trivia-server", version)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// SQLite database file; defaults to the system temp directory.
    #[arg(long, env = "TRIVIA_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "TRIVIA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files.
    #[arg(long, env = "TRIVIA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Load the bundled sample questions into an empty database.
    #[arg(long)]
    pub seed: bool,
}

impl ServerConfig {
    pub fn db_path(&self) -> PathBuf {
        match &self.db_path {
            Some(path) => absolutize(path),
            None => std::env::temp_dir().join(DB_FILE_NAME),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(path) => absolutize(path),
            None => std::env::temp_dir().join(LOG_DIR_NAME),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| default_log_level())
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
