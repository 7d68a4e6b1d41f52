use std::fmt::{Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

const FRACTIONAL_DIGITS: u32 = 5;

/// Exclusive upper bound: 10^18, the largest magnitude 18 integer digits can hold.
const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000_000);

/// Non-negative monetary quantity, rounded to at most 5 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Validate and normalize a raw decimal into an `Amount`.
    ///
    /// The range check runs against the raw input; afterwards the sign is
    /// dropped (zero is always positive) and the value is rounded to 5
    /// fractional digits, half away from zero.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value >= MAX_AMOUNT {
            return Err(ValidationError::OutOfRange {
                field: "amount",
                value,
                min: "0",
                max: "10^18",
            });
        }

        let normalized = value
            .abs()
            .round_dp_with_strategy(FRACTIONAL_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .normalize();

        Ok(Self(normalized))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero_to_five_digits() {
        let amount = Amount::create(dec!(1.000005)).expect("must create");
        assert_eq!(amount.value(), dec!(1.00001));
    }

    #[test]
    fn discards_sign_of_negative_zero() {
        let amount = Amount::create(dec!(-0.0)).expect("must create");
        assert_eq!(amount.value(), Decimal::ZERO);
        assert_eq!(amount.to_string(), "0");
    }

    #[test]
    fn rejects_negative_value() {
        let err = Amount::create(dec!(-1)).expect_err("must fail");
        assert!(matches!(err, ValidationError::OutOfRange { field: "amount", .. }));
    }

    #[test]
    fn rejects_upper_bound() {
        let err = Amount::create(MAX_AMOUNT).expect_err("must fail");
        assert!(matches!(err, ValidationError::OutOfRange { .. }));

        let just_below = MAX_AMOUNT - dec!(1);
        assert!(Amount::create(just_below).is_ok());
    }

    #[test]
    fn renders_minimal_decimal_form() {
        let amount = Amount::create(dec!(12.50000)).expect("must create");
        assert_eq!(amount.to_string(), "12.5");

        let whole = Amount::create(dec!(3.00000)).expect("must create");
        assert_eq!(whole.to_string(), "3");
    }
}
