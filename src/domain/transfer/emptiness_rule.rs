//! How raw JSON values are read as account identifiers and amounts

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::TransferField;
use crate::shared::errors::RejectionReason;
use crate::shared::types::{AccountId, Amount};

/// Policy deciding when an account identifier counts as empty.
///
/// `Strict` only takes JSON strings and treats a zero-length string as empty.
///
/// `Legacy` mirrors the loose checks of older clients: numbers are accepted
/// as identifiers, and `""`, `"0"`, `0`, `0.0`, `false`, `[]` and `{}` are all
/// empty. Note that this makes `"0"` an invalid account, which `Strict`
/// accepts. Legacy also reads numeric strings as amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptinessRule {
    #[default]
    Strict,
    Legacy,
}

impl EmptinessRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptinessRule::Strict => "strict",
            EmptinessRule::Legacy => "legacy",
        }
    }

    /// Reads `value` as the account identifier for `field`.
    pub fn account(&self, field: TransferField, value: &Value) -> Result<AccountId, RejectionReason> {
        match self {
            EmptinessRule::Strict => match value {
                Value::String(s) if s.is_empty() => Err(RejectionReason::EmptyAccount(field)),
                Value::String(s) => Ok(AccountId::new(s.as_str())),
                _ => Err(RejectionReason::MalformedField(field)),
            },
            EmptinessRule::Legacy => {
                if is_loosely_empty(value) {
                    return Err(RejectionReason::EmptyAccount(field));
                }
                match value {
                    Value::String(s) => Ok(AccountId::new(s.as_str())),
                    Value::Number(n) => Ok(AccountId::new(n.to_string())),
                    _ => Err(RejectionReason::MalformedField(field)),
                }
            }
        }
    }

    /// Reads `value` as an amount. The sign is not checked here.
    pub fn amount(&self, value: &Value) -> Result<Amount, RejectionReason> {
        let malformed = RejectionReason::MalformedField(TransferField::Amount);

        let number = match (self, value) {
            (_, Value::Number(n)) => n.as_f64(),
            (EmptinessRule::Legacy, Value::String(s)) => s.parse::<f64>().ok(),
            _ => None,
        };

        number
            .filter(|n| n.is_finite())
            .map(Amount::new)
            .ok_or(malformed)
    }

    /// Type-strict comparison of the two raw account values.
    pub fn same_account(&self, source: &Value, destination: &Value) -> bool {
        source == destination
    }
}

impl fmt::Display for EmptinessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptinessRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(EmptinessRule::Strict),
            "legacy" => Ok(EmptinessRule::Legacy),
            other => Err(format!("unknown emptiness rule '{}', expected 'strict' or 'legacy'", other)),
        }
    }
}

fn is_loosely_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
