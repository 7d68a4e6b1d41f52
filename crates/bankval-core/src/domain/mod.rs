//! Canonical domain value types and validation.
//!
//! Every type here is an immutable value object built through a single
//! validating entry point; an instance in memory is always well-formed, so
//! downstream logic never re-validates.

mod amount;
mod currency;
mod period;
mod rate;
mod timestamp;

pub use amount::Amount;
pub use currency::Currency;
pub use period::{DateTimePeriod, MAX_TIMESTAMP, MIN_TIMESTAMP};
pub use rate::PercentageRate;
pub use timestamp::DateTimeIso8601;
