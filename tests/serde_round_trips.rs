//! Wire-format tests for the domain primitives
//!
//! Serialization goes through the same validating factories as direct
//! construction, so a deserialized value carries the same guarantees.

use bankval_core::{Amount, DateTimeIso8601, DateTimePeriod, PercentageRate};
use rust_decimal_macros::dec;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[test]
fn amount_serializes_as_a_plain_decimal() {
    let amount = Amount::create(dec!(12.50000)).expect("valid amount");
    let json = serde_json::to_string(&amount).expect("serializable");
    assert_eq!(json, "\"12.5\"");

    let back: Amount = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, amount);
}

#[test]
fn amount_deserialization_rejects_invalid_input() {
    let result: Result<Amount, _> = serde_json::from_str("\"-3\"");
    assert!(result.is_err(), "negative amounts must not deserialize");
}

#[test]
fn rate_round_trips_through_json() {
    let rate = PercentageRate::create(dec!(0.1234567895)).expect("valid rate");
    let json = serde_json::to_string(&rate).expect("serializable");

    let back: PercentageRate = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, rate);
}

#[test]
fn timestamp_serializes_to_its_canonical_string() {
    let ts = DateTimeIso8601::parse("2021-06-01T10:00:00.500+05:30").expect("valid timestamp");
    let json = serde_json::to_string(&ts).expect("serializable");
    assert_eq!(json, "\"2021-06-01T10:00:00.500+05:30\"");

    let back: DateTimeIso8601 = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, ts);
}

#[test]
fn timestamp_deserialization_enforces_the_accepted_layouts() {
    let result: Result<DateTimeIso8601, _> = serde_json::from_str("\"2021-06-01T10:00:00Z\"");
    assert!(result.is_err(), "missing fractional digits must not deserialize");
}

#[test]
fn period_round_trips_through_rfc3339_bounds() {
    let at = |text: &str| OffsetDateTime::parse(text, &Rfc3339).expect("valid timestamp");
    let period = DateTimePeriod::create(at("2021-06-01T00:00:00Z"), at("2021-06-02T00:00:00Z"))
        .expect("valid period");

    let json = serde_json::to_string(&period).expect("serializable");
    let back: DateTimePeriod = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, period);
}

#[test]
fn period_deserialization_rejects_inverted_bounds() {
    let json = r#"{"start":"2021-06-02T00:00:00Z","end":"2021-06-01T00:00:00Z"}"#;
    let result: Result<DateTimePeriod, _> = serde_json::from_str(json);
    assert!(result.is_err(), "inverted bounds must not deserialize");
}
