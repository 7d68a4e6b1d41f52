use rust_decimal::Decimal;
use thiserror::Error;

use time::{OffsetDateTime, UtcOffset};

/// Validation errors raised by the domain value factories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} value {value} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: &'static str,
        max: &'static str,
    },

    #[error("{field} exceeds the allowed precision: '{value}'")]
    PrecisionExceeded { field: &'static str, value: String },

    #[error("not a recognized ISO-8601 timestamp: '{value}'")]
    InvalidFormat { value: String },

    #[error("UTC offset must be between -14:00 and +14:00: {offset}")]
    OffsetOutOfRange { offset: UtcOffset },

    #[error("period start {start} must be earlier than or equal to end {end}")]
    InvalidRange {
        start: OffsetDateTime,
        end: OffsetDateTime,
    },
}
