//! The module contains the errors the engine can throw.
//!
//! The analytics evaluation itself never fails: incomplete or inconsistent
//! history degrades into absent figures instead of errors. These variants
//! only show up at the parsing/conversion boundary (money, currency codes).
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
}
