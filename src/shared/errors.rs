//! Error handling for the application

use serde::Serialize;
use thiserror::Error;

use crate::domain::transfer::TransferField;

/// Why a transfer request was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("missing required field: {0}")]
    MissingField(TransferField),

    #[error("account identifier is empty: {0}")]
    EmptyAccount(TransferField),

    #[error("field has an unusable value: {0}")]
    MalformedField(TransferField),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("source and destination accounts are the same")]
    SameAccount,

    #[error("entry is not a JSON object")]
    MalformedInput,
}

impl RejectionReason {
    /// Stable short name, used as the key of report breakdowns
    pub fn kind(&self) -> &'static str {
        match self {
            RejectionReason::MissingField(_) => "missing_field",
            RejectionReason::EmptyAccount(_) => "empty_account",
            RejectionReason::MalformedField(_) => "malformed_field",
            RejectionReason::NonPositiveAmount => "non_positive_amount",
            RejectionReason::SameAccount => "same_account",
            RejectionReason::MalformedInput => "malformed_input",
        }
    }
}

/// The single validation failure category.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid transfer request: {reason}")]
pub struct InvalidTransferRequest {
    pub reason: RejectionReason,
}

impl From<RejectionReason> for InvalidTransferRequest {
    fn from(reason: RejectionReason) -> Self {
        Self { reason }
    }
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
