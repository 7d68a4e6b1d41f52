//! Self-validating domain primitives for bankval.
//!
//! This crate contains:
//! - `Amount`: non-negative fixed-point monetary quantity
//! - `PercentageRate`: bounded percentage with digit caps and pure application
//! - `DateTimeIso8601`: offset-validated, millisecond-precision timestamp
//! - `DateTimePeriod`: ordered interval with open-bound sentinels
//! - `Currency`: closed ISO 4217 catalog

pub mod domain;
pub mod error;

pub use domain::{
    Amount, Currency, DateTimeIso8601, DateTimePeriod, PercentageRate, MAX_TIMESTAMP,
    MIN_TIMESTAMP,
};
pub use error::ValidationError;
