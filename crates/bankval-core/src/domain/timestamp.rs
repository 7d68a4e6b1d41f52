use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::ValidationError;

/// ISO 8601 allows offsets between -14:00 and +14:00.
const MAX_OFFSET_SECONDS: i32 = 14 * 3600;

const NANOS_PER_MILLI: u32 = 1_000_000;

/// UTC form with trailing `Z` and exactly 3 fractional digits.
const LAYOUT_UTC: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Local time with an explicit numeric offset.
const LAYOUT_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour \
     sign:mandatory]:[offset_minute]"
);

/// Local time with no offset, interpreted as UTC.
const LAYOUT_LOCAL: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]");

/// ISO-8601 timestamp with a validated UTC offset and millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeIso8601(OffsetDateTime);

impl DateTimeIso8601 {
    /// Validate an offset-aware timestamp.
    ///
    /// Fails when the offset lies outside ±14:00 or when the value carries
    /// sub-millisecond fractional seconds; finer precision is rejected, not
    /// rounded. An hour-24 wall clock cannot reach this constructor because
    /// `OffsetDateTime` cannot represent it; [`Self::parse`] normalizes the
    /// textual form instead.
    pub fn from_datetime(value: OffsetDateTime) -> Result<Self, ValidationError> {
        let offset = value.offset();
        if offset.whole_seconds().abs() > MAX_OFFSET_SECONDS {
            return Err(ValidationError::OffsetOutOfRange { offset });
        }

        let nanos = value.nanosecond();
        if nanos % NANOS_PER_MILLI != 0 {
            let fraction = format!("{nanos:09}");
            return Err(ValidationError::PrecisionExceeded {
                field: "fractional seconds",
                value: fraction.trim_end_matches('0').to_owned(),
            });
        }

        Ok(Self(value))
    }

    /// Parse one of the three accepted ISO-8601 layouts.
    ///
    /// Surrounding whitespace is tolerated; an empty input or any other
    /// layout fails. A `24:00:00` time component (ISO-8601 end of day)
    /// normalizes to `00:00:00` of the following day, same offset.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidFormat {
                value: input.to_owned(),
            });
        }

        let invalid = || ValidationError::InvalidFormat {
            value: trimmed.to_owned(),
        };

        let end_of_day =
            trimmed.get(10..11) == Some("T") && trimmed.get(11..19) == Some("24:00:00");
        let text = if end_of_day {
            format!("{}00:00:00{}", &trimmed[..11], &trimmed[19..])
        } else {
            trimmed.to_owned()
        };

        let mut parsed = Self::parse_layouts(&text).ok_or_else(invalid)?;
        if end_of_day {
            parsed = parsed.checked_add(Duration::days(1)).ok_or_else(invalid)?;
        }

        Self::from_datetime(parsed)
    }

    fn parse_layouts(text: &str) -> Option<OffsetDateTime> {
        if let Ok(parsed) = PrimitiveDateTime::parse(text, LAYOUT_UTC) {
            return Some(parsed.assume_utc());
        }

        if let Ok(parsed) = OffsetDateTime::parse(text, LAYOUT_OFFSET) {
            return Some(parsed);
        }

        PrimitiveDateTime::parse(text, LAYOUT_LOCAL)
            .ok()
            .map(PrimitiveDateTime::assume_utc)
    }

    pub fn value(self) -> OffsetDateTime {
        self.0
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    /// Canonical rendering: 3 fractional digits, `Z` for a zero offset and
    /// the numeric offset otherwise.
    pub fn format_iso8601(self) -> String {
        let layout = if self.0.offset().is_utc() {
            LAYOUT_UTC
        } else {
            LAYOUT_OFFSET
        };

        self.0
            .format(layout)
            .expect("validated timestamp must be ISO-8601 formattable")
    }
}

impl Display for DateTimeIso8601 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso8601())
    }
}

impl Serialize for DateTimeIso8601 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso8601())
    }
}

impl<'de> Deserialize<'de> for DateTimeIso8601 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
