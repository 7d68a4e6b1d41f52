use std::fmt::{Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_TOTAL_DIGITS: usize = 11;
const MAX_FRACTIONAL_DIGITS: usize = 10;

/// Digit counting inspects the value rendered with up to this many fractional digits.
const RENDERED_FRACTIONAL_DIGITS: u32 = 20;

const MAX_RATE: Decimal = dec!(1000);

/// Percentage rate in [0, 1000] with at most 11 total and 10 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct PercentageRate(Decimal);

impl PercentageRate {
    /// Validate and normalize a raw decimal into a `PercentageRate`.
    ///
    /// Digit caps are checked against the plain fixed-point rendering of the
    /// input (no exponent, no grouping, trailing zeros stripped); every digit
    /// counts, including the leading zero of values below one. A value can be
    /// numerically in range and still fail on precision.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value > MAX_RATE {
            return Err(ValidationError::OutOfRange {
                field: "percentage rate",
                value,
                min: "0",
                max: "1000",
            });
        }

        let rendered = value
            .round_dp_with_strategy(
                RENDERED_FRACTIONAL_DIGITS,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .normalize()
            .to_string();

        let total_digits = rendered.chars().filter(char::is_ascii_digit).count();
        let fractional_digits = match rendered.split_once('.') {
            Some((_, fraction)) => fraction.len(),
            None => 0,
        };

        if total_digits > MAX_TOTAL_DIGITS || fractional_digits > MAX_FRACTIONAL_DIGITS {
            return Err(ValidationError::PrecisionExceeded {
                field: "percentage rate",
                value: rendered,
            });
        }

        let normalized = value
            .round_dp_with_strategy(
                MAX_FRACTIONAL_DIGITS as u32,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .normalize();

        Ok(Self(normalized))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    /// Apply this rate to a base value: `base * rate / 100`.
    ///
    /// Pure computation at the stored precision; no further rounding.
    pub fn apply(self, base: Decimal) -> Decimal {
        base * self.0 / Decimal::ONE_HUNDRED
    }
}

impl Display for PercentageRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<Decimal> for PercentageRate {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<PercentageRate> for Decimal {
    fn from(value: PercentageRate) -> Self {
        value.0
    }
}
