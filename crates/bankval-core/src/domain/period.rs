use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;
use time::OffsetDateTime;

use crate::ValidationError;

/// Sentinel for an open start bound.
pub const MIN_TIMESTAMP: OffsetDateTime = datetime!(0001-01-01 00:00:00 UTC);

/// Sentinel for an open end bound.
pub const MAX_TIMESTAMP: OffsetDateTime = datetime!(9999-12-31 23:59:59.999999999 UTC);

/// Ordered pair of timestamps with `start <= end` enforced on every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds")]
pub struct DateTimePeriod {
    #[serde(with = "time::serde::rfc3339")]
    start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end: OffsetDateTime,
}

/// Raw wire shape; deserialization funnels through [`DateTimePeriod::create`].
#[derive(Deserialize)]
struct PeriodBounds {
    #[serde(with = "time::serde::rfc3339")]
    start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end: OffsetDateTime,
}

impl TryFrom<PeriodBounds> for DateTimePeriod {
    type Error = ValidationError;

    fn try_from(bounds: PeriodBounds) -> Result<Self, Self::Error> {
        Self::create(bounds.start, bounds.end)
    }
}

impl DateTimePeriod {
    /// Period with both bounds open.
    pub const UNBOUNDED: Self = Self {
        start: MIN_TIMESTAMP,
        end: MAX_TIMESTAMP,
    };

    /// Validate and build a period. Equal bounds are allowed; a zero-length
    /// period is valid.
    pub fn create(start: OffsetDateTime, end: OffsetDateTime) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// New period with a replaced start, re-validated against the unchanged end.
    pub fn with_start(self, start: OffsetDateTime) -> Result<Self, ValidationError> {
        Self::create(start, self.end)
    }

    /// New period with a replaced end, re-validated against the unchanged start.
    pub fn with_end(self, end: OffsetDateTime) -> Result<Self, ValidationError> {
        Self::create(self.start, end)
    }

    pub fn start(self) -> OffsetDateTime {
        self.start
    }

    pub fn end(self) -> OffsetDateTime {
        self.end
    }

    pub fn has_no_start(self) -> bool {
        self.start == MIN_TIMESTAMP
    }

    pub fn has_no_end(self) -> bool {
        self.end == MAX_TIMESTAMP
    }

    /// Closed-interval membership: both bounds included.
    pub fn is_within(self, point: OffsetDateTime) -> bool {
        point >= self.start && point <= self.end
    }

    /// Closed-interval overlap; touching endpoints count.
    pub fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    fn format_bound(bound: OffsetDateTime) -> String {
        bound
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for DateTimePeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            Self::format_bound(self.start),
            Self::format_bound(self.end)
        )
    }
}
