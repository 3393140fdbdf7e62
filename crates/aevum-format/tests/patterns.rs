//! End-to-end formatting behavior across named formats and custom patterns

use aevum_core::{Timespan, TimespanBuilder};
use aevum_format::{TimespanFormatter, GENERAL_LONG, ROUND_TRIP};
use num_bigint::BigUint;
use proptest::prelude::*;

fn fmt() -> TimespanFormatter {
    TimespanFormatter::new()
}

#[test]
fn test_zero_under_general_long() {
    // One zero digit per single-character field, two per double
    assert_eq!(fmt().format(&Timespan::ZERO, GENERAL_LONG), "0 0 00:00:00");
    assert_eq!(fmt().format(&Timespan::ZERO, ""), "0 0 00:00:00");
}

#[test]
fn test_general_long_full_value() {
    let span = TimespanBuilder::new()
        .years(3)
        .days(12)
        .hours(7)
        .minutes(40)
        .seconds(5)
        .build()
        .unwrap();
    assert_eq!(fmt().format(&span, "F"), "3 12 07:40:05");
    assert_eq!(fmt().format(&span, "g"), "3 12 07:40");
    assert_eq!(fmt().format(&span, "T"), "07:40:05");
    assert_eq!(fmt().format(&span, "t"), "07:40");
    assert_eq!(fmt().format(&span, "d"), "3 12");
}

#[test]
fn test_extensible_ninety_seconds() {
    let span = Timespan::from_seconds(90.0).unwrap();
    assert_eq!(fmt().format(&span, "X"), "1 min 30 s");
}

#[test]
fn test_extensible_zero_and_ordering() {
    assert_eq!(fmt().format(&Timespan::ZERO, "X"), "0");
    let span = TimespanBuilder::new()
        .days(2)
        .millis(12)
        .picos(4)
        .build()
        .unwrap();
    assert_eq!(fmt().format(&span, "X"), "2 d 12 ms 4 ps");
}

#[test]
fn test_extensible_with_aeons() {
    let span = TimespanBuilder::new()
        .aeons(BigUint::from(5u32))
        .years(17)
        .hours(1)
        .build()
        .unwrap();
    assert_eq!(fmt().format(&span, "X"), "5000017 y 1 h");
}

#[test]
fn test_perpetual_ignores_pattern_content() {
    let formatter = fmt();
    for spec in ["F", "T", "o", "E", "'literal'HH:mm", GENERAL_LONG] {
        assert_eq!(
            formatter.format(&Timespan::POSITIVE_INFINITY, spec),
            "∞",
            "spec {spec:?}"
        );
        assert_eq!(
            formatter.format(&Timespan::NEGATIVE_INFINITY, spec),
            "-∞",
            "spec {spec:?}"
        );
    }
}

#[test]
fn test_extensible_infinity_asymmetry() {
    // Long-standing output: the extensible writer emits the positive symbol
    // for both perpetual signs
    let formatter = fmt();
    assert_eq!(formatter.format(&Timespan::POSITIVE_INFINITY, "X"), "∞");
    assert_eq!(formatter.format(&Timespan::NEGATIVE_INFINITY, "X"), "∞");
}

#[test]
fn test_round_trip_pattern_shape() {
    let span = TimespanBuilder::new()
        .aeons(BigUint::from(2u32))
        .years(7)
        .nanos(123)
        .yoctos(45)
        .planck(6)
        .build()
        .unwrap();
    // aeon+year text, then the three in-tier aggregates, colon separated
    assert_eq!(fmt().format(&span, ROUND_TRIP), "2000007-123:45:6");
    assert_eq!(fmt().format(&span, "o"), "2000007-123:45:6");
}

#[test]
fn test_round_trip_zero() {
    assert_eq!(fmt().format(&Timespan::ZERO, "O"), "0-0:0:0");
}

#[test]
fn test_extended_pattern_covers_all_scales() {
    let span = TimespanBuilder::new()
        .years(1)
        .days(2)
        .hours(3)
        .minutes(4)
        .seconds(5)
        .millis(6)
        .micros(7)
        .nanos(8)
        .picos(9)
        .femtos(10)
        .attos(11)
        .zeptos(12)
        .yoctos(13)
        .planck(14)
        .build()
        .unwrap();
    assert_eq!(
        fmt().format(&span, "E"),
        "1 2 03:04:05:006:007:008:009:010:011:012:013:14"
    );
}

#[test]
fn test_unrecognized_characters_echo() {
    let span = Timespan::from_seconds(5.0).unwrap();
    assert_eq!(fmt().format(&span, "s sec!"), "5 5ec!");
}

#[test]
fn test_negative_finite_values() {
    let span = Timespan::from_seconds(-90.0).unwrap();
    assert_eq!(fmt().format(&span, "T"), "-00:01:30");
    assert_eq!(fmt().format(&span, "X"), "-1 min 30 s");
}

#[test]
fn test_format_into_no_partial_writes() {
    let formatter = fmt();
    let span = TimespanBuilder::new().hours(12).minutes(34).build().unwrap();
    let mut buf = [0u8; 64];
    let written = formatter.format_into(&span, "t", &mut buf).unwrap();
    assert_eq!(std::str::from_utf8(&buf[..written]).unwrap(), "12:34");

    let mut tiny = [0xFFu8; 4];
    assert!(formatter.format_into(&span, "t", &mut tiny).is_err());
    assert_eq!(tiny, [0xFFu8; 4]);
}

proptest! {
    #[test]
    fn prop_repeat_width_only_pads(secs in 0u64..86_400) {
        let span = Timespan::from_seconds(secs as f64).unwrap();
        let formatter = TimespanFormatter::new();
        let narrow = formatter.format(&span, "%s");
        let wide = formatter.format(&span, "ssss");
        // Same leftover value, only differently padded
        prop_assert_eq!(
            narrow.trim_start_matches('0'),
            wide.trim_start_matches('0')
        );
        prop_assert_eq!(wide.chars().count(), 4);
    }

    #[test]
    fn prop_formatting_is_deterministic(
        secs in 0u64..1_000_000,
        nanos in 0u64..1_000_000_000,
    ) {
        let span = TimespanBuilder::new()
            .seconds(secs)
            .nanos(nanos)
            .build()
            .unwrap();
        let formatter = TimespanFormatter::new();
        prop_assert_eq!(
            formatter.format(&span, "F"),
            formatter.format(&span, "F")
        );
        prop_assert_eq!(
            formatter.format(&span, "s n"),
            formatter.format(&span, "s n")
        );
    }
}
