// src/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::domain::transfer::{EmptinessRule, Outcome, ERROR_LABEL, SUCCESS_LABEL};
use crate::shared::errors::RejectionReason;
use crate::shared::utils::{calculate_percentage, file_timestamp, generate_id};

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    // Metadata
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub emptiness_rule: EmptinessRule,
    pub input: Option<String>,

    // Totals
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub acceptance_rate: f64,
    pub rejection_breakdown: BTreeMap<String, usize>,

    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

impl ValidationReport {
    pub fn new(emptiness_rule: EmptinessRule) -> Self {
        Self {
            report_id: generate_id(),
            generated_at: Utc::now(),
            emptiness_rule,
            input: None,
            total: 0,
            accepted: 0,
            rejected: 0,
            acceptance_rate: 0.0,
            rejection_breakdown: BTreeMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.input = Some(input.as_ref().display().to_string());
        self
    }

    pub fn record(&mut self, index: usize, outcome: &Outcome) {
        match outcome.reason() {
            None => self.push(index, SUCCESS_LABEL, None),
            Some(reason) => self.record_rejection(index, reason),
        }
    }

    /// Records an entry that never reached the validator, e.g. one that failed to parse.
    pub fn record_rejection(&mut self, index: usize, reason: RejectionReason) {
        *self
            .rejection_breakdown
            .entry(reason.kind().to_string())
            .or_insert(0) += 1;
        self.push(index, ERROR_LABEL, Some(reason));
    }

    fn push(&mut self, index: usize, outcome: &'static str, reason: Option<RejectionReason>) {
        if reason.is_none() {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        self.total += 1;
        self.acceptance_rate = calculate_percentage(self.accepted, self.total);
        self.entries.push(ReportEntry { index, outcome, reason });
    }

    /// `validation_report_<timestamp>.json` under `dir`
    pub fn default_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref()
            .join(format!("validation_report_{}.json", file_timestamp(self.generated_at)))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
