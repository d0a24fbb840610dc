mod app;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use transfer_guard::application::Cli;

/// `--log-level` wins, then `RUST_LOG`, then `info`
fn log_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_level.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let app_cfg = app::AppCfg::load(args.config.as_deref(), args.emptiness, args.legacy_keys)?;

    if app::run(app_cfg, args.command).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
