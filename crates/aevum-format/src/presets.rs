//! Named formats: selector table, predefined pattern literals, and the
//! extensible human-readable writer

use aevum_core::Timespan;

use crate::locale::Locale;
use crate::table::{UnitKind, UNIT_TABLE};

/// General date + long time
pub const GENERAL_LONG: &str = "y d HH:mm:ss";
/// General date + short time
pub const GENERAL_SHORT: &str = "y d HH:mm";
/// Long date (aeons and days)
pub const LONG_DATE: &str = "e d";
/// Long time
pub const LONG_TIME: &str = "HH:mm:ss";
/// Short date
pub const SHORT_DATE: &str = "y d";
/// Short time
pub const SHORT_TIME: &str = "HH:mm";
/// Round-trip: every stored digit, losslessly re-parseable in principle
pub const ROUND_TRIP: &str = "e'-'n':'Y':'P";
/// Extended: every unit scale down to the Planck remainder
pub const EXTENDED: &str = "y d HH:mm:ss:MMM:uuu:nnn:ppp:fff:aaa:zzz:YYY:P";

/// A format spec resolved to something the engine can run
pub(crate) enum ResolvedSpec<'a> {
    /// The extensible writer; bypasses the tokenizer entirely
    Extensible,
    /// A pattern string for the tokenizer
    Pattern(&'a str),
}

/// Resolve a spec string: blank selects general date + long time, a single
/// character selects a named format (unknown selectors fall back to general
/// date + long time), anything longer is a custom pattern
pub(crate) fn resolve(spec: &str) -> ResolvedSpec<'_> {
    if spec.trim().is_empty() {
        return ResolvedSpec::Pattern(GENERAL_LONG);
    }
    let mut chars = spec.chars();
    let first = chars.next();
    if let (Some(selector), None) = (first, chars.next()) {
        return match selector {
            'd' => ResolvedSpec::Pattern(SHORT_DATE),
            'D' => ResolvedSpec::Pattern(LONG_DATE),
            'E' => ResolvedSpec::Pattern(EXTENDED),
            'f' | 'g' => ResolvedSpec::Pattern(GENERAL_SHORT),
            'F' => ResolvedSpec::Pattern(GENERAL_LONG),
            'o' | 'O' => ResolvedSpec::Pattern(ROUND_TRIP),
            't' => ResolvedSpec::Pattern(SHORT_TIME),
            'T' => ResolvedSpec::Pattern(LONG_TIME),
            'X' => ResolvedSpec::Extensible,
            _ => ResolvedSpec::Pattern(GENERAL_LONG),
        };
    }
    ResolvedSpec::Pattern(spec)
}

/// Write the extensible form: non-zero components in descending magnitude,
/// `<value> <abbreviation>` joined by single spaces; `0` when all are zero.
///
/// A perpetual value renders as the positive infinity symbol regardless of
/// its sign; the asymmetry is long-standing output and is kept as-is.
pub(crate) fn write_extensible(span: &Timespan, locale: &Locale) -> String {
    if span.is_perpetual() {
        return locale.infinity.clone();
    }

    let mut parts: Vec<String> = Vec::new();
    if !span.aeon_digits().is_empty() {
        parts.push(format!(
            "{}{:06} {}",
            span.aeons(),
            span.years(),
            abbreviation_of(UnitKind::Year)
        ));
    } else if span.years() > 0 {
        parts.push(format!("{} {}", span.years(), abbreviation_of(UnitKind::Year)));
    }
    push_component(&mut parts, span.days() as u128, UnitKind::Day);
    push_component(&mut parts, span.hours() as u128, UnitKind::Hour);
    push_component(&mut parts, span.minutes() as u128, UnitKind::Minute);
    push_component(&mut parts, span.seconds() as u128, UnitKind::Second);
    push_component(&mut parts, span.milliseconds() as u128, UnitKind::Milli);
    push_component(&mut parts, span.microseconds() as u128, UnitKind::Micro);
    push_component(&mut parts, span.nanoseconds() as u128, UnitKind::Nano);
    push_component(&mut parts, span.picoseconds() as u128, UnitKind::Pico);
    push_component(&mut parts, span.femtoseconds() as u128, UnitKind::Femto);
    push_component(&mut parts, span.attoseconds() as u128, UnitKind::Atto);
    push_component(&mut parts, span.zeptoseconds() as u128, UnitKind::Zepto);
    push_component(&mut parts, span.yoctoseconds() as u128, UnitKind::Yocto);
    push_component(&mut parts, span.planck_time(), UnitKind::Planck);

    if parts.is_empty() {
        return "0".to_string();
    }
    let body = parts.join(" ");
    if span.is_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

fn push_component(parts: &mut Vec<String>, value: u128, unit: UnitKind) {
    if value > 0 {
        parts.push(format!("{} {}", value, abbreviation_of(unit)));
    }
}

fn abbreviation_of(unit: UnitKind) -> &'static str {
    UNIT_TABLE
        .iter()
        .find(|descriptor| descriptor.unit == unit)
        .map(|descriptor| descriptor.abbreviation)
        .unwrap_or("")
}
