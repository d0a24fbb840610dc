//! Transfer Guard - transfer request validation
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod application;
pub mod shared;
pub mod report;

// Re-export main types for convenience
pub use domain::transfer::{EmptinessRule, Outcome, TransferInput, TransferRequest, TransferValidator};
pub use shared::errors::{InvalidTransferRequest, RejectionReason};
