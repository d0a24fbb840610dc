//! Transfer domain - request shape and validation

mod emptiness_rule;
mod transfer_input;
mod transfer_validator;

pub use emptiness_rule::EmptinessRule;
pub use transfer_input::TransferInput;
pub use transfer_validator::TransferValidator;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::{InvalidTransferRequest, RejectionReason};
use crate::shared::types::{AccountId, Amount};

/// Label reported for an accepted request
pub const SUCCESS_LABEL: &str = "success";
/// Label reported for a rejected request
pub const ERROR_LABEL: &str = "error";

/// Named fields of a transfer request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferField {
    SourceAccount,
    DestinationAccount,
    Amount,
}

impl TransferField {
    pub const ALL: [TransferField; 3] = [
        TransferField::SourceAccount,
        TransferField::DestinationAccount,
        TransferField::Amount,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TransferField::SourceAccount => "source_account",
            TransferField::DestinationAccount => "destination_account",
            TransferField::Amount => "amount",
        }
    }

    /// Key used for this field by older clients, if any
    pub fn legacy_key(&self) -> Option<&'static str> {
        match self {
            TransferField::SourceAccount => Some("from"),
            TransferField::DestinationAccount => Some("to"),
            TransferField::Amount => None,
        }
    }
}

impl fmt::Display for TransferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A transfer request that passed every rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequest {
    pub source_account: AccountId,
    pub destination_account: AccountId,
    pub amount: Amount,
}

impl TransferRequest {
    /// Builds a request from already-typed values, applying the same rules as
    /// [`TransferValidator`] in the same order.
    pub fn new(
        source_account: AccountId,
        destination_account: AccountId,
        amount: Amount,
    ) -> Result<Self, InvalidTransferRequest> {
        if source_account.is_empty() {
            return Err(RejectionReason::EmptyAccount(TransferField::SourceAccount).into());
        }
        if destination_account.is_empty() {
            return Err(RejectionReason::EmptyAccount(TransferField::DestinationAccount).into());
        }
        if !amount.is_positive() {
            return Err(RejectionReason::NonPositiveAmount.into());
        }
        if source_account == destination_account {
            return Err(RejectionReason::SameAccount.into());
        }

        Ok(Self {
            source_account,
            destination_account,
            amount,
        })
    }
}

/// Result of validating one request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(TransferRequest),
    Rejected(InvalidTransferRequest),
}

impl Outcome {
    /// `"success"` or `"error"`
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Accepted(_) => SUCCESS_LABEL,
            Outcome::Rejected(_) => ERROR_LABEL,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(err) => Some(err.reason),
        }
    }

    pub fn into_result(self) -> Result<TransferRequest, InvalidTransferRequest> {
        match self {
            Outcome::Accepted(request) => Ok(request),
            Outcome::Rejected(err) => Err(err),
        }
    }
}

impl From<Result<TransferRequest, InvalidTransferRequest>> for Outcome {
    fn from(result: Result<TransferRequest, InvalidTransferRequest>) -> Self {
        match result {
            Ok(request) => Outcome::Accepted(request),
            Err(err) => Outcome::Rejected(err),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
