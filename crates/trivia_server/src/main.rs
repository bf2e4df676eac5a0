//! `trivia-server` binary entry point.

use clap::Parser;
use std::process::ExitCode;
use trivia_server::{run, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=server_exit module=server status=error error={err}");
            eprintln!("trivia-server: {err}");
            ExitCode::FAILURE
        }
    }
}
