//! Server entry point.
//!
//! # Responsibility
//! - Parse CLI configuration, bootstrap logging and the store connection,
//!   and serve the router.
//!
//! Without `--db` the store is in-memory and vanishes on exit; without
//! `--log-dir` logs go to stderr.

use clap::Parser;
use log::info;
use roster_core::db::{open_db, open_db_in_memory};
use roster_core::{default_log_level, init_logging, init_stderr_logging};
use roster_server::{build_router, AppState};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "roster_server", about = "REST CRUD service over student and teacher stores")]
struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, default_value = "127.0.0.1:8888")]
    bind: String,

    /// SQLite database file. Omit for an in-memory store.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files. Omit to log to stderr.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let logging = match &args.log_dir {
        Some(log_dir) => init_logging(&args.log_level, log_dir),
        None => init_stderr_logging(&args.log_level),
    };
    if let Err(message) = logging {
        eprintln!("logging setup failed: {message}");
        return ExitCode::FAILURE;
    }

    let conn = match &args.db {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("store setup failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let app = build_router(AppState::new(conn));

    let listener = match tokio::net::TcpListener::bind(&args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("failed to bind {}: {err}", args.bind);
            return ExitCode::FAILURE;
        }
    };

    info!("event=server_start module=server status=ok bind={}", args.bind);

    if let Err(err) = axum::serve(listener, app).await {
        eprintln!("server terminated: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
