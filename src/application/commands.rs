//! CLI commands and handlers
use clap::{Parser, Subcommand};
use serde_json::{Number, Value};
use std::path::PathBuf;
use tracing::info;

use crate::application::services::ValidationService;
use crate::domain::transfer::{EmptinessRule, Outcome, TransferInput};
use crate::shared::errors::AppError;
use crate::shared::types::GuardConfig;

#[derive(Parser, Debug)]
#[command(name = "transfer-guard")]
#[command(version, about = "Validate account-to-account transfer requests")]
pub struct Cli {
    /// Path to config file (optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emptiness rule for account identifiers: strict or legacy (overrides config)
    #[arg(long, global = true)]
    pub emptiness: Option<EmptinessRule>,

    /// Also read the legacy `from` / `to` keys (overrides config)
    #[arg(long, global = true)]
    pub legacy_keys: bool,

    /// Log filter, e.g. `info` or `transfer_guard=debug`; wins over RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a single transfer request; prints `success` or `error`
    Validate {
        /// Source account identifier
        #[arg(long)]
        source: Option<String>,

        /// Destination account identifier
        #[arg(long)]
        destination: Option<String>,

        /// Amount to transfer
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<f64>,

        /// Request as inline JSON
        #[arg(long, conflicts_with_all = ["file", "source", "destination", "amount"])]
        json: Option<String>,

        /// Path to a JSON file holding the request
        #[arg(long, conflicts_with_all = ["source", "destination", "amount"])]
        file: Option<PathBuf>,

        /// Print the rejection reason next to the outcome
        #[arg(long)]
        explain: bool,
    },

    /// Validate a file of requests and write a JSON report
    Batch {
        /// JSON array or newline-delimited JSON objects
        #[arg(short, long)]
        input: PathBuf,

        /// Report path (defaults to the configured report directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Build the request for `validate` from whichever source was given.
    /// Flags that were left out become missing keys.
    fn transfer_input(
        source: Option<String>,
        destination: Option<String>,
        amount: Option<f64>,
        json: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<TransferInput, AppError> {
        if let Some(json) = json {
            return TransferInput::from_json(&json);
        }
        if let Some(path) = file {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| AppError::InputError(format!("Failed to read {}: {}", path.display(), e)))?;
            return TransferInput::from_json(&text);
        }

        let mut input = TransferInput::new();
        if let Some(source) = source {
            input = input.with("source_account", source);
        }
        if let Some(destination) = destination {
            input = input.with("destination_account", destination);
        }
        if let Some(amount) = amount {
            // NaN and infinities have no JSON number form; keep them as text
            // so they read as a malformed amount rather than a missing one.
            let value = Number::from_f64(amount)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(amount.to_string()));
            input = input.with("amount", value);
        }
        Ok(input)
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command. Returns `false` when a single validated
    /// request was rejected.
    pub async fn execute(command: Commands, config: GuardConfig) -> Result<bool, AppError> {
        match command {
            Commands::Validate { source, destination, amount, json, file, explain } => {
                let input = Commands::transfer_input(source, destination, amount, json, file)?;
                let outcome = Self::execute_validate_command(&input, &config);
                println!("{}", Self::render_outcome(&outcome, explain));
                Ok(outcome.is_accepted())
            }
            Commands::Batch { input, output } => {
                Self::execute_batch_command(input, output, config).await?;
                Ok(true)
            }
        }
    }

    /// Execute validate command
    fn execute_validate_command(input: &TransferInput, config: &GuardConfig) -> Outcome {
        ValidationService::new(config).validate(input)
    }

    /// Execute batch command
    async fn execute_batch_command(
        input: PathBuf,
        output: Option<PathBuf>,
        config: GuardConfig,
    ) -> Result<PathBuf, AppError> {
        let service = ValidationService::new(&config);
        let report = service.validate_file(&input).await?;
        let path = service.write_report(&report, output).await?;

        println!(
            "total: {}, accepted: {}, rejected: {}, acceptance rate: {:.2}%",
            report.total, report.accepted, report.rejected, report.acceptance_rate
        );
        for (kind, count) in &report.rejection_breakdown {
            info!("   {}: {}", kind, count);
        }
        println!("report: {}", path.display());
        Ok(path)
    }

    fn render_outcome(outcome: &Outcome, explain: bool) -> String {
        match outcome.reason() {
            Some(reason) if explain => format!("{}: {}", outcome.label(), reason),
            _ => outcome.label().to_string(),
        }
    }
}
