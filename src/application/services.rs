//! Application services and use cases

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::transfer::{Outcome, TransferInput, TransferValidator};
use crate::report::ValidationReport;
use crate::shared::errors::{AppError, RejectionReason};
use crate::shared::types::GuardConfig;

/// Application service for validating transfer requests
pub struct ValidationService {
    config: GuardConfig,
    validator: TransferValidator,
}

impl ValidationService {
    /// Create new validation service
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            config: config.clone(),
            validator: TransferValidator::new(config.validation.clone()),
        }
    }

    /// Validate a single request
    pub fn validate(&self, input: &TransferInput) -> Outcome {
        let outcome = self.validator.validate(input);
        match outcome.reason() {
            None => debug!("transfer request accepted"),
            Some(reason) => debug!(%reason, "transfer request rejected"),
        }
        outcome
    }

    /// Validate every request in `path` and build a report.
    ///
    /// The file holds either a JSON array of request objects or one JSON
    /// object per line. Entries that are not JSON objects are recorded as
    /// rejected instead of aborting the batch.
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationReport, AppError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::InputError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let entries = parse_entries(&content)?;
        info!("📥 Validating {} transfer requests from {}", entries.len(), path.display());

        let mut report = ValidationReport::new(self.config.validation.emptiness).with_input(path);
        for (index, entry) in entries.into_iter().enumerate() {
            match entry.and_then(TransferInput::try_from) {
                Ok(input) => report.record(index, &self.validate(&input)),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed entry");
                    report.record_rejection(index, RejectionReason::MalformedInput);
                }
            }
        }

        info!(
            "✅ Accepted {}/{} ({:.2}%)",
            report.accepted, report.total, report.acceptance_rate
        );
        Ok(report)
    }

    /// Write `report` to `output`, or to a timestamped file in the configured
    /// report directory. Returns the path written.
    pub async fn write_report(&self, report: &ValidationReport, output: Option<PathBuf>) -> Result<PathBuf, AppError> {
        let path = output.unwrap_or_else(|| report.default_path(&self.config.report.output_dir));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, report.to_json(self.config.report.pretty)?).await?;

        info!("📄 Report written to {}", path.display());
        Ok(path)
    }
}

/// Splits batch input into entries. A malformed line only poisons itself;
/// a malformed array poisons the whole file.
fn parse_entries(content: &str) -> Result<Vec<Result<Value, AppError>>, AppError> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(trimmed)?;
        return Ok(values.into_iter().map(Ok).collect());
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<Value>(line).map_err(AppError::from))
        .collect())
}
