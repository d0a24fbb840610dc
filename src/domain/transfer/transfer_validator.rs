//! Transfer request validation

use super::{EmptinessRule, Outcome, TransferField, TransferInput, TransferRequest};
use crate::shared::errors::{InvalidTransferRequest, RejectionReason};
use crate::shared::types::ValidationConfig;

/// Validates transfer requests before any transfer logic runs.
///
/// Rules are checked in a fixed order and the first failure wins:
/// 1. `source_account`, `destination_account` and `amount` are present
/// 2. neither account identifier is empty
/// 3. `amount > 0`
/// 4. the two accounts differ
///
/// The validator is stateless and performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct TransferValidator {
    config: ValidationConfig,
}

impl TransferValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn with_rule(emptiness: EmptinessRule) -> Self {
        Self::new(ValidationConfig {
            emptiness,
            ..ValidationConfig::default()
        })
    }

    pub fn validate(&self, input: &TransferInput) -> Outcome {
        self.validate_request(input).into()
    }

    pub fn validate_request(&self, input: &TransferInput) -> Result<TransferRequest, InvalidTransferRequest> {
        let rule = self.config.emptiness;
        let legacy_keys = self.config.accept_legacy_keys;

        let require = |field: TransferField| {
            input
                .field(field, legacy_keys)
                .ok_or(RejectionReason::MissingField(field))
        };
        let source = require(TransferField::SourceAccount)?;
        let destination = require(TransferField::DestinationAccount)?;
        let amount = require(TransferField::Amount)?;

        let source_account = rule.account(TransferField::SourceAccount, source)?;
        let destination_account = rule.account(TransferField::DestinationAccount, destination)?;

        let amount = rule.amount(amount)?;
        if !amount.is_positive() {
            return Err(RejectionReason::NonPositiveAmount.into());
        }

        if rule.same_account(source, destination) {
            return Err(RejectionReason::SameAccount.into());
        }

        Ok(TransferRequest {
            source_account,
            destination_account,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn input(value: Value) -> TransferInput {
        TransferInput::try_from(value).unwrap()
    }

    #[rstest]
    #[case::successful_transfer(json!({"source_account": "123456", "destination_account": "654321", "amount": 1000}), "success")]
    #[case::zero_amount(json!({"source_account": "123456", "destination_account": "654321", "amount": 0}), "error")]
    #[case::empty_source_account(json!({"source_account": "", "destination_account": "654321", "amount": 1000}), "error")]
    #[case::empty_destination_account(json!({"source_account": "123456", "destination_account": "", "amount": 1000}), "error")]
    #[case::negative_amount(json!({"source_account": "123456", "destination_account": "654321", "amount": -100}), "error")]
    #[case::missing_source_key(json!({"destination_account": "654321", "amount": 1000}), "error")]
    #[case::missing_destination_key(json!({"source_account": "123456", "amount": 1000}), "error")]
    #[case::missing_amount_key(json!({"source_account": "123456", "destination_account": "654321"}), "error")]
    #[case::same_account_transfer(json!({"source_account": "123456", "destination_account": "123456", "amount": 1000}), "error")]
    fn test_transfer_scenarios(#[case] request: Value, #[case] expected: &str) {
        let validator = TransferValidator::default();
        assert_eq!(validator.validate(&input(request)).label(), expected);
    }

    #[rstest]
    #[case(json!({"destination_account": "2", "amount": 1}), RejectionReason::MissingField(TransferField::SourceAccount))]
    #[case(json!({"source_account": "1", "destination_account": null, "amount": 1}), RejectionReason::MissingField(TransferField::DestinationAccount))]
    #[case(json!({"source_account": "", "destination_account": "2", "amount": 1}), RejectionReason::EmptyAccount(TransferField::SourceAccount))]
    #[case(json!({"source_account": "1", "destination_account": "", "amount": 1}), RejectionReason::EmptyAccount(TransferField::DestinationAccount))]
    #[case(json!({"source_account": 1, "destination_account": "2", "amount": 1}), RejectionReason::MalformedField(TransferField::SourceAccount))]
    #[case(json!({"source_account": "1", "destination_account": "2", "amount": "1"}), RejectionReason::MalformedField(TransferField::Amount))]
    #[case(json!({"source_account": "1", "destination_account": "2", "amount": -0.01}), RejectionReason::NonPositiveAmount)]
    #[case(json!({"source_account": "1", "destination_account": "1", "amount": 1}), RejectionReason::SameAccount)]
    fn test_rejection_reasons(#[case] request: Value, #[case] reason: RejectionReason) {
        let validator = TransferValidator::default();
        let err = validator.validate_request(&input(request)).unwrap_err();
        assert_eq!(err.reason, reason);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let validator = TransferValidator::default();

        // Missing amount is reported before the empty source.
        let err = validator
            .validate_request(&input(json!({"source_account": "", "destination_account": "x"})))
            .unwrap_err();
        assert_eq!(err.reason, RejectionReason::MissingField(TransferField::Amount));

        // Empty account is reported before the negative amount.
        let err = validator
            .validate_request(&input(json!({"source_account": "", "destination_account": "", "amount": -1})))
            .unwrap_err();
        assert_eq!(err.reason, RejectionReason::EmptyAccount(TransferField::SourceAccount));

        // Non-positive amount is reported before identical accounts.
        let err = validator
            .validate_request(&input(json!({"source_account": "a", "destination_account": "a", "amount": 0})))
            .unwrap_err();
        assert_eq!(err.reason, RejectionReason::NonPositiveAmount);
    }

    #[test]
    fn test_accepted_request_carries_typed_values() {
        let validator = TransferValidator::default();
        let request = validator
            .validate_request(&input(json!({"source_account": "A-1", "destination_account": "B-2", "amount": 12.5})))
            .unwrap();
        assert_eq!(request.source_account.as_str(), "A-1");
        assert_eq!(request.destination_account.as_str(), "B-2");
        assert_eq!(request.amount.value(), 12.5);
    }

    #[test]
    fn test_legacy_keys_follow_config() {
        let legacy_request = input(json!({"from": "123456", "to": "654321", "amount": 1000}));

        assert_eq!(
            TransferValidator::default().validate(&legacy_request).reason(),
            Some(RejectionReason::MissingField(TransferField::SourceAccount))
        );

        let validator = TransferValidator::new(ValidationConfig {
            accept_legacy_keys: true,
            ..ValidationConfig::default()
        });
        assert!(validator.validate(&legacy_request).is_accepted());
    }

    #[test]
    fn test_legacy_key_does_not_stand_in_for_missing_source_by_default() {
        let request = input(json!({"from": "123456", "destination_account": "654321", "amount": 1000}));

        let outcome = TransferValidator::default().validate(&request);
        assert_eq!(outcome.label(), "error");
        assert_eq!(outcome.reason(), Some(RejectionReason::MissingField(TransferField::SourceAccount)));
    }

    #[test]
    fn test_zero_string_account_depends_on_rule() {
        let request = input(json!({"source_account": "0", "destination_account": "654321", "amount": 1000}));

        assert!(TransferValidator::with_rule(EmptinessRule::Strict).validate(&request).is_accepted());
        assert_eq!(
            TransferValidator::with_rule(EmptinessRule::Legacy).validate(&request).reason(),
            Some(RejectionReason::EmptyAccount(TransferField::SourceAccount))
        );
    }

    #[test]
    fn test_legacy_rule_is_type_strict_on_equality() {
        let validator = TransferValidator::with_rule(EmptinessRule::Legacy);

        let mixed = input(json!({"source_account": 123456, "destination_account": "123456", "amount": "1000"}));
        assert!(validator.validate(&mixed).is_accepted());

        let same = input(json!({"source_account": 123456, "destination_account": 123456, "amount": 1000}));
        assert_eq!(validator.validate(&same).reason(), Some(RejectionReason::SameAccount));
    }

    #[test]
    fn test_validator_is_shareable_across_threads() {
        let validator = std::sync::Arc::new(TransferValidator::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let validator = std::sync::Arc::clone(&validator);
                std::thread::spawn(move || {
                    let request = input(json!({"source_account": format!("s{}", i), "destination_account": "d", "amount": i + 1}));
                    validator.validate(&request).is_accepted()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    fn account() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]{1,12}"
    }

    proptest! {
        #[test]
        fn prop_valid_requests_are_accepted(source in account(), destination in account(), amount in 0.01f64..1e12) {
            prop_assume!(source != destination);
            let request = input(json!({"source_account": source, "destination_account": destination, "amount": amount}));
            prop_assert!(TransferValidator::default().validate(&request).is_accepted());
        }

        #[test]
        fn prop_non_positive_amounts_are_rejected(source in account(), destination in account(), amount in -1e12f64..=0.0) {
            let request = input(json!({"source_account": source, "destination_account": destination, "amount": amount}));
            prop_assert_eq!(TransferValidator::default().validate(&request).label(), "error");
        }

        #[test]
        fn prop_same_account_is_rejected(account in account(), amount in 0.01f64..1e12) {
            let request = input(json!({"source_account": account.clone(), "destination_account": account, "amount": amount}));
            prop_assert_eq!(
                TransferValidator::default().validate(&request).reason(),
                Some(RejectionReason::SameAccount)
            );
        }

        #[test]
        fn prop_any_missing_field_is_rejected(missing in 0usize..3, source in account(), destination in account(), amount in 0.01f64..1e12) {
            let mut fields = serde_json::Map::new();
            fields.insert("source_account".to_string(), json!(source));
            fields.insert("destination_account".to_string(), json!(destination));
            fields.insert("amount".to_string(), json!(amount));
            let field = TransferField::ALL[missing];
            fields.remove(field.key());

            let outcome = TransferValidator::default().validate(&TransferInput::from(fields));
            prop_assert_eq!(outcome.reason(), Some(RejectionReason::MissingField(field)));
        }

        #[test]
        fn prop_never_panics_on_arbitrary_objects(key in "[a-z_]{1,20}", text in ".*", number in any::<i64>()) {
            let request = input(json!({key: text, "amount": number, "source_account": number}));
            let _ = TransferValidator::with_rule(EmptinessRule::Legacy).validate(&request);
            let _ = TransferValidator::with_rule(EmptinessRule::Strict).validate(&request);
        }
    }
}
