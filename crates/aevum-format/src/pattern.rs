//! The pattern engine
//!
//! A pattern is processed one character at a time: quote runs and escapes
//! copy text verbatim, `:` and `/` emit locale separators, unit characters
//! accumulate into a (unit, width) pair that is flushed when the unit
//! changes, a non-unit character arrives, or the pattern ends. Width is the
//! repeat count and drives zero-padding.
//!
//! The nano and yocto units are balanced lazily: each starts the call as its
//! tier's full aggregate and is reduced to the leftover digit at most once,
//! the first time any sibling unit in the tier is flushed.

use aevum_core::units::{NANOS_PER_MICRO, NANOS_PER_SECOND, YOCTOS_PER_NANO, YOCTOS_PER_ZEPTO};
use aevum_core::{AevumError, AevumResult, Timespan};

use crate::locale::Locale;
use crate::presets::{resolve, write_extensible, ResolvedSpec};
use crate::table::{unit_for, UnitKind};

/// Formats timespans against pattern strings and named formats
#[derive(Clone, Debug, Default)]
pub struct TimespanFormatter {
    locale: Locale,
}

/// Per-call balancing state for the nano and yocto units.
///
/// Local to one invocation and never shared; the flags guarantee each tier
/// is rebalanced at most once no matter how often its units recur.
struct BalanceScratch {
    nanos: u64,
    nano_balanced: bool,
    yoctos: u64,
    yocto_balanced: bool,
}

impl BalanceScratch {
    fn new(span: &Timespan) -> Self {
        BalanceScratch {
            nanos: span.nanos_in_year(),
            nano_balanced: false,
            yoctos: span.yoctos_in_nano(),
            yocto_balanced: false,
        }
    }

    /// A day/hour/minute/second/milli/micro unit flushed: reduce the nano
    /// value to its leftover digit, once
    fn on_nano_sibling(&mut self) {
        if !self.nano_balanced {
            self.nanos %= NANOS_PER_MICRO;
            self.nano_balanced = true;
        }
    }

    /// A pico/femto/atto/zepto unit flushed: reduce the yocto value to its
    /// leftover digit, once
    fn on_yocto_sibling(&mut self) {
        if !self.yocto_balanced {
            self.yoctos %= YOCTOS_PER_ZEPTO;
            self.yocto_balanced = true;
        }
    }
}

impl TimespanFormatter {
    /// Formatter using the invariant locale
    pub fn new() -> Self {
        TimespanFormatter::default()
    }

    /// Formatter using the given locale
    pub fn with_locale(locale: Locale) -> Self {
        TimespanFormatter { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Format against a spec: blank or a single character selects a named
    /// format, anything longer runs as a custom pattern. Pattern text is
    /// never rejected; unrecognized characters are echoed literally.
    pub fn format(&self, span: &Timespan, spec: &str) -> String {
        match resolve(spec) {
            ResolvedSpec::Extensible => write_extensible(span, &self.locale),
            ResolvedSpec::Pattern(pattern) => self.format_pattern(span, pattern),
        }
    }

    /// Format into a caller-supplied buffer, returning the bytes written.
    ///
    /// On insufficient capacity nothing is written and the call reports
    /// `BufferTooShort`; there is no partial output.
    pub fn format_into(
        &self,
        span: &Timespan,
        spec: &str,
        buf: &mut [u8],
    ) -> AevumResult<usize> {
        let rendered = self.format(span, spec);
        let bytes = rendered.as_bytes();
        if bytes.len() > buf.len() {
            return Err(AevumError::BufferTooShort {
                expected: bytes.len(),
                actual: buf.len(),
            });
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    fn format_pattern(&self, span: &Timespan, pattern: &str) -> String {
        // Perpetual values ignore pattern content entirely
        if span.is_perpetual() {
            return if span.is_negative() {
                self.locale.negative_infinity.clone()
            } else {
                self.locale.infinity.clone()
            };
        }

        let mut out = String::new();
        if span.is_negative() {
            out.push('-');
        }

        let mut scratch = BalanceScratch::new(span);
        let mut open_quote: Option<char> = None;
        let mut escaped = false;
        let mut pending: Option<(UnitKind, usize)> = None;

        for c in pattern.chars() {
            // Inside a quote run everything is literal until the matching
            // closer, the other quote character and the escape included
            if let Some(quote) = open_quote {
                if c == quote {
                    open_quote = None;
                } else {
                    out.push(c);
                }
                continue;
            }
            if escaped {
                out.push(c);
                escaped = false;
                continue;
            }
            match c {
                '"' | '\'' => {
                    self.flush_pending(span, &mut pending, &mut scratch, &mut out);
                    open_quote = Some(c);
                }
                '\\' => {
                    self.flush_pending(span, &mut pending, &mut scratch, &mut out);
                    escaped = true;
                }
                ':' => {
                    self.flush_pending(span, &mut pending, &mut scratch, &mut out);
                    out.push_str(&self.locale.time_separator);
                }
                '/' => {
                    self.flush_pending(span, &mut pending, &mut scratch, &mut out);
                    out.push_str(&self.locale.date_separator);
                }
                // Consumed without effect; does not even flush
                '%' => {}
                _ => match unit_for(c) {
                    Some(unit) => match pending {
                        Some((current, width)) if current == unit => {
                            pending = Some((unit, width + 1));
                        }
                        Some((current, width)) => {
                            self.flush_unit(span, current, width, &mut scratch, &mut out);
                            pending = Some((unit, 1));
                        }
                        None => pending = Some((unit, 1)),
                    },
                    None => {
                        self.flush_pending(span, &mut pending, &mut scratch, &mut out);
                        out.push(c);
                    }
                },
            }
        }
        self.flush_pending(span, &mut pending, &mut scratch, &mut out);
        out
    }

    fn flush_pending(
        &self,
        span: &Timespan,
        pending: &mut Option<(UnitKind, usize)>,
        scratch: &mut BalanceScratch,
        out: &mut String,
    ) {
        if let Some((unit, width)) = pending.take() {
            self.flush_unit(span, unit, width, scratch, out);
        }
    }

    fn flush_unit(
        &self,
        span: &Timespan,
        unit: UnitKind,
        width: usize,
        scratch: &mut BalanceScratch,
        out: &mut String,
    ) {
        match unit {
            UnitKind::Aeon => {
                if span.aeon_digits().is_empty() {
                    push_padded(out, span.years() as u128, width);
                } else {
                    // Aeon text then the years, fixed at six digits so the
                    // juxtaposition stays unambiguous
                    out.push_str(&span.aeons().to_string());
                    push_padded(out, span.years() as u128, 6);
                }
            }
            UnitKind::Year => push_padded(out, span.years() as u128, width),
            UnitKind::Day => {
                scratch.on_nano_sibling();
                push_padded(out, span.days() as u128, width);
            }
            UnitKind::Hour => {
                scratch.on_nano_sibling();
                push_padded(out, span.hours() as u128, width);
            }
            UnitKind::Minute => {
                scratch.on_nano_sibling();
                push_padded(out, span.minutes() as u128, width);
            }
            UnitKind::Second => {
                scratch.on_nano_sibling();
                push_padded(out, span.seconds() as u128, width);
            }
            UnitKind::Milli => {
                scratch.on_nano_sibling();
                push_padded(out, span.milliseconds() as u128, width);
            }
            UnitKind::Micro => {
                scratch.on_nano_sibling();
                push_padded(out, span.microseconds() as u128, width);
            }
            UnitKind::Nano => push_padded(out, scratch.nanos as u128, width),
            UnitKind::Pico => {
                scratch.on_yocto_sibling();
                push_padded(out, span.picoseconds() as u128, width);
            }
            UnitKind::Femto => {
                scratch.on_yocto_sibling();
                push_padded(out, span.femtoseconds() as u128, width);
            }
            UnitKind::Atto => {
                scratch.on_yocto_sibling();
                push_padded(out, span.attoseconds() as u128, width);
            }
            UnitKind::Zepto => {
                scratch.on_yocto_sibling();
                push_padded(out, span.zeptoseconds() as u128, width);
            }
            UnitKind::Yocto => push_padded(out, scratch.yoctos as u128, width),
            UnitKind::SecondFraction => push_second_fraction(span, width, out),
            UnitKind::Planck => match span.planck_remainder() {
                Some(planck) => out.push_str(&planck.to_string()),
                None => out.push('0'),
            },
        }
    }
}

/// Zero-pad a value to the accumulated width
fn push_padded(out: &mut String, value: u128, width: usize) {
    let text = value.to_string();
    for _ in text.len()..width {
        out.push('0');
    }
    out.push_str(&text);
}

/// The first `width` decimal digits of the sub-second remainder, truncated;
/// positions finer than the yoctosecond scale render as zeros
fn push_second_fraction(span: &Timespan, width: usize, out: &mut String) {
    let sub_second_nanos = span.nanos_in_year() % NANOS_PER_SECOND;
    let total_yoctos =
        sub_second_nanos as u128 * YOCTOS_PER_NANO as u128 + span.yoctos_in_nano() as u128;
    // total_yoctos < 10^24: exactly 24 fractional positions are available
    let mut scale = 10u128.pow(23);
    for position in 0..width {
        if position < 24 {
            let digit = (total_yoctos / scale % 10) as u8;
            out.push((b'0' + digit) as char);
            scale /= 10;
        } else {
            out.push('0');
        }
    }
}

#[cfg(test)]
mod tests {
    use aevum_core::TimespanBuilder;

    use super::*;

    fn fmt() -> TimespanFormatter {
        TimespanFormatter::new()
    }

    #[test]
    fn test_width_accumulates_padding() {
        let span = Timespan::from_seconds(90.0).unwrap();
        assert_eq!(fmt().format(&span, "%s"), "30");
        assert_eq!(fmt().format(&span, "ssss"), "0030");
    }

    #[test]
    fn test_unit_change_flushes() {
        let span = TimespanBuilder::new()
            .hours(7)
            .minutes(5)
            .build()
            .unwrap();
        assert_eq!(fmt().format(&span, "HHmm"), "0705");
        // Both hour cases accumulate into one field
        assert_eq!(fmt().format(&span, "hH"), "07");
    }

    #[test]
    fn test_literals_quotes_and_escape() {
        let span = Timespan::from_hours(5.0).unwrap();
        assert_eq!(fmt().format(&span, "'h'H"), "h5");
        assert_eq!(fmt().format(&span, "\"m's\"H"), "m's5");
        assert_eq!(fmt().format(&span, "\\sH"), "s5");
        assert_eq!(fmt().format(&span, "H!"), "5!");
    }

    #[test]
    fn test_separators_from_locale() {
        let span = TimespanBuilder::new()
            .hours(1)
            .minutes(2)
            .seconds(3)
            .build()
            .unwrap();
        assert_eq!(fmt().format(&span, "HH:mm:ss"), "01:02:03");
        let mut locale = Locale::default();
        locale.time_separator = "h".to_string();
        let custom = TimespanFormatter::with_locale(locale);
        assert_eq!(custom.format(&span, "HH:mm"), "01h02");
    }

    #[test]
    fn test_percent_has_no_effect() {
        let span = Timespan::from_seconds(90.0).unwrap();
        // Not even a flush: the two halves accumulate into one field
        assert_eq!(fmt().format(&span, "s%s"), "30");
    }

    #[test]
    fn test_nano_balances_once_after_sibling_flush() {
        let span = TimespanBuilder::new()
            .seconds(90)
            .nanos(7)
            .build()
            .unwrap();
        // Before any sibling flush the nano unit is the full in-year aggregate
        assert_eq!(fmt().format(&span, "%n"), "90000000007");
        // After a second flush it is the leftover digit
        assert_eq!(fmt().format(&span, "s n"), "30 7");
        // Order matters: nano first sees the aggregate
        assert_eq!(fmt().format(&span, "n s"), "90000000007 30");
        // Repeats balance only once
        assert_eq!(fmt().format(&span, "s n n"), "30 7 7");
    }

    #[test]
    fn test_yocto_balances_once_after_sibling_flush() {
        let span = TimespanBuilder::new()
            .picos(3)
            .yoctos(9)
            .build()
            .unwrap();
        assert_eq!(fmt().format(&span, "%Y"), "3000000000009");
        assert_eq!(fmt().format(&span, "p Y"), "3 9");
        assert_eq!(fmt().format(&span, "Y p"), "3000000000009 3");
    }

    #[test]
    fn test_second_fraction_digits() {
        let span = TimespanBuilder::new()
            .seconds(5)
            .millis(250)
            .build()
            .unwrap();
        assert_eq!(fmt().format(&span, "FFF"), "250");
        assert_eq!(fmt().format(&span, "FFFFFF"), "250000");
        // Truncation, not rounding
        let fine = TimespanBuilder::new().micros(999).build().unwrap();
        assert_eq!(fmt().format(&fine, "FFF"), "000");
    }

    #[test]
    fn test_planck_unit() {
        let tracked = TimespanBuilder::new().planck(42).build().unwrap();
        assert_eq!(fmt().format(&tracked, "%P"), "42");
        let untracked = Timespan::from_seconds(1.0).unwrap();
        assert_eq!(fmt().format(&untracked, "%P"), "0");
    }

    #[test]
    fn test_aeon_flush_forms() {
        let with_aeons = TimespanBuilder::new()
            .aeons(3u32.into())
            .years(42)
            .build()
            .unwrap();
        assert_eq!(fmt().format(&with_aeons, "e d"), "3000042 0");
        let without = TimespanBuilder::new().years(42).build().unwrap();
        assert_eq!(fmt().format(&without, "e d"), "42 0");
        assert_eq!(fmt().format(&without, "eeee d"), "0042 0");
    }

    #[test]
    fn test_negative_prefix() {
        let span = Timespan::from_seconds(-90.0).unwrap();
        assert_eq!(fmt().format(&span, "mm:ss"), "-01:30");
    }

    #[test]
    fn test_format_into_reports_length_and_capacity() {
        let span = Timespan::from_seconds(90.0).unwrap();
        let mut buf = [0u8; 32];
        let written = fmt().format_into(&span, "mm:ss", &mut buf).unwrap();
        assert_eq!(&buf[..written], b"01:30");

        let mut tiny = [0u8; 3];
        let err = fmt().format_into(&span, "mm:ss", &mut tiny).unwrap_err();
        assert_eq!(
            err,
            AevumError::BufferTooShort {
                expected: 5,
                actual: 3
            }
        );
        // Nothing was written on failure
        assert_eq!(tiny, [0u8; 3]);
    }
}
