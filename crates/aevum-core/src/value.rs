//! The mixed-radix timespan value
//!
//! A `Timespan` is a single quantity of elapsed time, exact from below one
//! Planck time up to arbitrarily many aeons. The magnitude is stored as a
//! mixed-radix chain: an unbounded little-endian aeon digit sequence
//! (base 10^18), whole years within the current aeon, nanoseconds within the
//! current year, yoctoseconds within the current nanosecond, and an optional
//! Planck-time remainder below that. Every field is kept strictly below its
//! modulus; values are canonicalized on construction and never mutated.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::error::{AevumError, AevumResult};
use crate::units::*;

/// A duration from sub-Planck-time to cosmological scale, exact at every scale
#[derive(Clone, Debug, Default)]
pub struct Timespan {
    /// Infinite duration; sign per `negative`, all other fields meaningless
    pub(crate) perpetual: bool,
    /// Sign; canonical zero is non-negative
    pub(crate) negative: bool,
    /// Whole aeons, little-endian base-10^18 digits, no trailing zero digit
    pub(crate) aeon_digits: Vec<u64>,
    /// Whole years beyond the aeon count, < 1_000_000
    pub(crate) years_in_aeon: u32,
    /// Nanoseconds elapsed within the current year, < NANOS_PER_YEAR
    pub(crate) nanos_in_year: u64,
    /// Yoctoseconds within the current nanosecond, < YOCTOS_PER_NANO
    pub(crate) yoctos_in_nano: u64,
    /// Sub-yoctosecond remainder; None means not tracked
    pub(crate) planck_remainder: Option<u128>,
}

impl Timespan {
    /// The zero duration
    pub const ZERO: Timespan = Timespan {
        perpetual: false,
        negative: false,
        aeon_digits: Vec::new(),
        years_in_aeon: 0,
        nanos_in_year: 0,
        yoctos_in_nano: 0,
        planck_remainder: None,
    };

    /// Positive perpetual (infinite) duration
    pub const POSITIVE_INFINITY: Timespan = Timespan {
        perpetual: true,
        negative: false,
        aeon_digits: Vec::new(),
        years_in_aeon: 0,
        nanos_in_year: 0,
        yoctos_in_nano: 0,
        planck_remainder: None,
    };

    /// Negative perpetual (infinite) duration
    pub const NEGATIVE_INFINITY: Timespan = Timespan {
        perpetual: true,
        negative: true,
        aeon_digits: Vec::new(),
        years_in_aeon: 0,
        nanos_in_year: 0,
        yoctos_in_nano: 0,
        planck_remainder: None,
    };

    // ---- Factories ----

    /// Duration of the given number of Julian years
    pub fn from_years(years: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(years, plancks_per_nano_unit(NANOS_PER_YEAR))
    }

    /// Duration of the given number of days
    pub fn from_days(days: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(days, plancks_per_nano_unit(NANOS_PER_DAY))
    }

    /// Duration of the given number of hours
    pub fn from_hours(hours: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(hours, plancks_per_nano_unit(NANOS_PER_HOUR))
    }

    /// Duration of the given number of minutes
    pub fn from_minutes(minutes: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(minutes, plancks_per_nano_unit(NANOS_PER_MINUTE))
    }

    /// Duration of the given number of seconds
    pub fn from_seconds(seconds: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(seconds, plancks_per_nano_unit(NANOS_PER_SECOND))
    }

    /// Duration of the given number of milliseconds
    pub fn from_millis(millis: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(millis, plancks_per_nano_unit(NANOS_PER_MILLI))
    }

    /// Duration of the given number of microseconds
    pub fn from_micros(micros: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(micros, plancks_per_nano_unit(NANOS_PER_MICRO))
    }

    /// Duration of the given number of nanoseconds
    pub fn from_nanos(nanos: f64) -> AevumResult<Timespan> {
        Self::from_unit_count(nanos, plancks_per_nano_unit(1))
    }

    /// Scale a unit count into a timespan; NaN is rejected, infinities map to
    /// the signed perpetual values, the fraction below one Planck time is cut
    fn from_unit_count(value: f64, plancks_per_unit: BigUint) -> AevumResult<Timespan> {
        if value.is_nan() {
            return Err(AevumError::FactorNotANumber);
        }
        if value == 0.0 {
            return Ok(Timespan::ZERO);
        }
        let negative = value < 0.0;
        if value.is_infinite() {
            return Ok(if negative {
                Timespan::NEGATIVE_INFINITY
            } else {
                Timespan::POSITIVE_INFINITY
            });
        }

        // The binary double expands to an exact rational, so scaling is exact
        let ratio =
            BigRational::from_float(value.abs()).ok_or(AevumError::FactorNotANumber)?;
        let total = (ratio * BigRational::from_integer(BigInt::from(plancks_per_unit)))
            .floor()
            .to_integer()
            .to_biguint()
            .unwrap_or_default();

        let parts = decompose_plancks(&total)?;
        Ok(Timespan::assemble(negative, parts, PlanckTracking::WhenNonZero))
    }

    /// Rebuild a timespan from its raw field set, re-normalizing carries.
    ///
    /// This is the deserialization re-entry point: out-of-range fields carry
    /// upward, trailing zero aeon digits are stripped, and a zero magnitude
    /// loses its sign. Planck trackedness is preserved as given.
    pub fn from_parts(
        perpetual: bool,
        negative: bool,
        aeon_digits: Vec<u64>,
        years_in_aeon: u64,
        nanos_in_year: u64,
        yoctos_in_nano: u64,
        planck_remainder: Option<u128>,
    ) -> AevumResult<Timespan> {
        if perpetual {
            return Ok(if negative {
                Timespan::NEGATIVE_INFINITY
            } else {
                Timespan::POSITIVE_INFINITY
            });
        }
        let mut total = aeons_from_digits(&aeon_digits) * YEARS_PER_AEON;
        total += years_in_aeon;
        total *= NANOS_PER_YEAR;
        total += nanos_in_year;
        total *= YOCTOS_PER_NANO;
        total += yoctos_in_nano;
        total *= PLANCK_PER_YOCTO;
        total += planck_remainder.unwrap_or(0);

        let parts = decompose_plancks(&total)?;
        let tracking = if planck_remainder.is_some() {
            PlanckTracking::Always
        } else {
            PlanckTracking::Never
        };
        Ok(Timespan::assemble(negative, parts, tracking))
    }

    /// Assemble from decomposed parts, canonicalizing the sign
    pub(crate) fn assemble(
        negative: bool,
        parts: DigitParts,
        tracking: PlanckTracking,
    ) -> Timespan {
        let (aeon_digits, years_in_aeon, nanos_in_year, yoctos_in_nano, planck) = parts;
        let planck_remainder = match tracking {
            PlanckTracking::Always => Some(planck),
            PlanckTracking::Never => None,
            PlanckTracking::WhenNonZero => (planck != 0).then_some(planck),
        };
        let mut span = Timespan {
            perpetual: false,
            negative,
            aeon_digits,
            years_in_aeon,
            nanos_in_year,
            yoctos_in_nano,
            planck_remainder,
        };
        if span.magnitude_is_zero() {
            span.negative = false;
        }
        span
    }

    // ---- Predicates ----

    /// True for the positive and negative infinite durations
    #[inline]
    pub fn is_perpetual(&self) -> bool {
        self.perpetual
    }

    /// Sign of the value, meaningful for perpetual values too
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True only for the finite zero duration
    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.perpetual && self.magnitude_is_zero()
    }

    /// Whether the sub-yoctosecond remainder is tracked at all
    #[inline]
    pub fn tracks_planck(&self) -> bool {
        self.planck_remainder.is_some()
    }

    pub(crate) fn magnitude_is_zero(&self) -> bool {
        self.aeon_digits.is_empty()
            && self.years_in_aeon == 0
            && self.nanos_in_year == 0
            && self.yoctos_in_nano == 0
            && self.planck_remainder.unwrap_or(0) == 0
    }

    // ---- Raw field access (serialization boundary) ----

    /// Little-endian base-10^18 aeon digits; empty means zero aeons
    #[inline]
    pub fn aeon_digits(&self) -> &[u64] {
        &self.aeon_digits
    }

    /// Whole years beyond the aeon count
    #[inline]
    pub fn years_in_aeon(&self) -> u32 {
        self.years_in_aeon
    }

    /// Nanoseconds elapsed within the current year
    #[inline]
    pub fn nanos_in_year(&self) -> u64 {
        self.nanos_in_year
    }

    /// Yoctoseconds within the current nanosecond
    #[inline]
    pub fn yoctos_in_nano(&self) -> u64 {
        self.yoctos_in_nano
    }

    /// Sub-yoctosecond remainder, if tracked
    #[inline]
    pub fn planck_remainder(&self) -> Option<u128> {
        self.planck_remainder
    }

    // ---- Leftover-digit accessors ----
    //
    // Each returns the remainder for its unit after all coarser units are
    // removed, never a widened running total.

    /// Whole aeons as an arbitrary-precision count
    pub fn aeons(&self) -> BigUint {
        aeons_from_digits(&self.aeon_digits)
    }

    /// Whole years beyond the aeons, in [0, 1_000_000)
    #[inline]
    pub fn years(&self) -> u32 {
        self.years_in_aeon
    }

    /// Whole days beyond the years, in [0, 366)
    #[inline]
    pub fn days(&self) -> u32 {
        (self.nanos_in_year / NANOS_PER_DAY) as u32
    }

    /// Whole hours beyond the days, in [0, 24)
    #[inline]
    pub fn hours(&self) -> u32 {
        (self.nanos_in_year % NANOS_PER_DAY / NANOS_PER_HOUR) as u32
    }

    /// Whole minutes beyond the hours, in [0, 60)
    #[inline]
    pub fn minutes(&self) -> u32 {
        (self.nanos_in_year % NANOS_PER_HOUR / NANOS_PER_MINUTE) as u32
    }

    /// Whole seconds beyond the minutes, in [0, 60)
    #[inline]
    pub fn seconds(&self) -> u32 {
        (self.nanos_in_year % NANOS_PER_MINUTE / NANOS_PER_SECOND) as u32
    }

    /// Whole milliseconds beyond the seconds, in [0, 1000)
    #[inline]
    pub fn milliseconds(&self) -> u32 {
        (self.nanos_in_year % NANOS_PER_SECOND / NANOS_PER_MILLI) as u32
    }

    /// Whole microseconds beyond the milliseconds, in [0, 1000)
    #[inline]
    pub fn microseconds(&self) -> u32 {
        (self.nanos_in_year % NANOS_PER_MILLI / NANOS_PER_MICRO) as u32
    }

    /// Whole nanoseconds beyond the microseconds, in [0, 1000)
    #[inline]
    pub fn nanoseconds(&self) -> u32 {
        (self.nanos_in_year % NANOS_PER_MICRO) as u32
    }

    /// Whole picoseconds beyond the nanoseconds, in [0, 1000)
    #[inline]
    pub fn picoseconds(&self) -> u32 {
        (self.yoctos_in_nano / YOCTOS_PER_PICO) as u32
    }

    /// Whole femtoseconds beyond the picoseconds, in [0, 1000)
    #[inline]
    pub fn femtoseconds(&self) -> u32 {
        (self.yoctos_in_nano % YOCTOS_PER_PICO / YOCTOS_PER_FEMTO) as u32
    }

    /// Whole attoseconds beyond the femtoseconds, in [0, 1000)
    #[inline]
    pub fn attoseconds(&self) -> u32 {
        (self.yoctos_in_nano % YOCTOS_PER_FEMTO / YOCTOS_PER_ATTO) as u32
    }

    /// Whole zeptoseconds beyond the attoseconds, in [0, 1000)
    #[inline]
    pub fn zeptoseconds(&self) -> u32 {
        (self.yoctos_in_nano % YOCTOS_PER_ATTO / YOCTOS_PER_ZEPTO) as u32
    }

    /// Whole yoctoseconds beyond the zeptoseconds, in [0, 1000)
    #[inline]
    pub fn yoctoseconds(&self) -> u32 {
        (self.yoctos_in_nano % YOCTOS_PER_ZEPTO) as u32
    }

    /// Planck times below the yoctoseconds; 0 when not tracked
    #[inline]
    pub fn planck_time(&self) -> u128 {
        self.planck_remainder.unwrap_or(0)
    }

    // ---- Widened aggregates ----

    /// Total magnitude in Planck times, unsigned
    pub(crate) fn total_plancks(&self) -> BigUint {
        let mut total = aeons_from_digits(&self.aeon_digits) * YEARS_PER_AEON;
        total += self.years_in_aeon as u64;
        total *= NANOS_PER_YEAR;
        total += self.nanos_in_year;
        total *= YOCTOS_PER_NANO;
        total += self.yoctos_in_nano;
        total *= PLANCK_PER_YOCTO;
        total += self.planck_remainder.unwrap_or(0);
        total
    }

    /// Total magnitude in yoctoseconds, unsigned, Planck remainder cut
    pub(crate) fn total_yoctos(&self) -> BigUint {
        let mut total = aeons_from_digits(&self.aeon_digits) * YEARS_PER_AEON;
        total += self.years_in_aeon as u64;
        total *= NANOS_PER_YEAR;
        total += self.nanos_in_year;
        total *= YOCTOS_PER_NANO;
        total += self.yoctos_in_nano;
        total
    }

    pub(crate) fn signed_total_plancks(&self) -> BigInt {
        let magnitude = BigInt::from(self.total_plancks());
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    fn signed_infinity(&self) -> f64 {
        if self.negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    /// Exact widened value in the unit with the given Planck-time modulus;
    /// None iff perpetual
    fn exact_in(&self, plancks_per_unit: BigUint) -> Option<BigRational> {
        if self.perpetual {
            return None;
        }
        Some(BigRational::new(
            self.signed_total_plancks(),
            BigInt::from(plancks_per_unit),
        ))
    }

    /// Saturating float view of an exact aggregate; out-of-range magnitudes
    /// reuse the float's own infinity sentinel
    fn widen(&self, exact: Option<BigRational>) -> f64 {
        match exact {
            Some(ratio) => ratio.to_f64().unwrap_or_else(|| self.signed_infinity()),
            None => self.signed_infinity(),
        }
    }

    /// Exact total in Julian years; None iff perpetual
    pub fn to_years_exact(&self) -> Option<BigRational> {
        self.exact_in(plancks_per_nano_unit(NANOS_PER_YEAR))
    }

    /// Exact total in seconds; None iff perpetual
    pub fn to_seconds_exact(&self) -> Option<BigRational> {
        self.exact_in(plancks_per_nano_unit(NANOS_PER_SECOND))
    }

    /// Exact total in nanoseconds; None iff perpetual
    pub fn to_nanos_exact(&self) -> Option<BigRational> {
        self.exact_in(plancks_per_nano_unit(1))
    }

    /// Exact total in Planck times; None iff perpetual
    pub fn to_planck_exact(&self) -> Option<BigRational> {
        self.exact_in(BigUint::from(1u32))
    }

    /// Total in Julian years as a float, infinite when out of range
    pub fn to_years(&self) -> f64 {
        self.widen(self.to_years_exact())
    }

    /// Total in days as a float
    pub fn to_days(&self) -> f64 {
        self.widen(self.exact_in(plancks_per_nano_unit(NANOS_PER_DAY)))
    }

    /// Total in hours as a float
    pub fn to_hours(&self) -> f64 {
        self.widen(self.exact_in(plancks_per_nano_unit(NANOS_PER_HOUR)))
    }

    /// Total in minutes as a float
    pub fn to_minutes(&self) -> f64 {
        self.widen(self.exact_in(plancks_per_nano_unit(NANOS_PER_MINUTE)))
    }

    /// Total in seconds as a float
    pub fn to_seconds(&self) -> f64 {
        self.widen(self.to_seconds_exact())
    }

    /// Total in milliseconds as a float
    pub fn to_millis(&self) -> f64 {
        self.widen(self.exact_in(plancks_per_nano_unit(NANOS_PER_MILLI)))
    }

    /// Total in microseconds as a float
    pub fn to_micros(&self) -> f64 {
        self.widen(self.exact_in(plancks_per_nano_unit(NANOS_PER_MICRO)))
    }

    /// Total in nanoseconds as a float
    pub fn to_nanos(&self) -> f64 {
        self.widen(self.to_nanos_exact())
    }

    /// Total in Planck times as a float
    pub fn to_planck_time(&self) -> f64 {
        self.widen(self.to_planck_exact())
    }
}

impl fmt::Display for Timespan {
    /// Compact diagnostic rendering; pattern-based text lives in aevum-format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.perpetual {
            return write!(f, "{}", if self.negative { "-∞" } else { "∞" });
        }
        if self.negative {
            write!(f, "-")?;
        }
        if self.aeon_digits.is_empty() {
            write!(f, "{}y", self.years_in_aeon)?;
        } else {
            write!(f, "{}e{:06}y", self.aeons(), self.years_in_aeon)?;
        }
        write!(
            f,
            "+{}ns+{}ys",
            self.nanos_in_year, self.yoctos_in_nano
        )?;
        if let Some(planck) = self.planck_remainder {
            write!(f, "+{}tP", planck)?;
        }
        Ok(())
    }
}

/// Decomposed magnitude: aeon digits, years, nanos, yoctos, planck remainder
pub(crate) type DigitParts = (Vec<u64>, u32, u64, u64, u128);

/// How the Planck remainder field is materialized on assembly
pub(crate) enum PlanckTracking {
    Always,
    Never,
    WhenNonZero,
}

/// Planck times per unit of `nanos_per_unit` nanoseconds
pub(crate) fn plancks_per_nano_unit(nanos_per_unit: u64) -> BigUint {
    BigUint::from(nanos_per_unit) * YOCTOS_PER_NANO * PLANCK_PER_YOCTO
}

/// Split a total Planck-time magnitude into canonical mixed-radix parts
pub(crate) fn decompose_plancks(total: &BigUint) -> AevumResult<DigitParts> {
    let planck = (total % PLANCK_PER_YOCTO).to_u128().unwrap_or(0);
    let rest = total / PLANCK_PER_YOCTO;
    let yoctos = (&rest % YOCTOS_PER_NANO).to_u64().unwrap_or(0);
    let rest = rest / YOCTOS_PER_NANO;
    let nanos = (&rest % NANOS_PER_YEAR).to_u64().unwrap_or(0);
    let rest = rest / NANOS_PER_YEAR;
    let years = (&rest % YEARS_PER_AEON).to_u32().unwrap_or(0);
    let aeons = rest / YEARS_PER_AEON;

    let digits = digits_from_aeons(&aeons);
    if digits.len() > MAX_AEON_DIGITS {
        return Err(AevumError::AeonOverflow {
            digits: digits.len(),
            max: MAX_AEON_DIGITS,
        });
    }
    Ok((digits, years, nanos, yoctos, planck))
}

/// Split a total yoctosecond magnitude; the Planck digit is zero
pub(crate) fn decompose_yoctos(total: &BigUint) -> AevumResult<DigitParts> {
    let yoctos = (total % YOCTOS_PER_NANO).to_u64().unwrap_or(0);
    let rest = total / YOCTOS_PER_NANO;
    let nanos = (&rest % NANOS_PER_YEAR).to_u64().unwrap_or(0);
    let rest = rest / NANOS_PER_YEAR;
    let years = (&rest % YEARS_PER_AEON).to_u32().unwrap_or(0);
    let aeons = rest / YEARS_PER_AEON;

    let digits = digits_from_aeons(&aeons);
    if digits.len() > MAX_AEON_DIGITS {
        return Err(AevumError::AeonOverflow {
            digits: digits.len(),
            max: MAX_AEON_DIGITS,
        });
    }
    Ok((digits, years, nanos, yoctos, 0))
}

/// Widen a little-endian digit sequence into the aeon count
pub(crate) fn aeons_from_digits(digits: &[u64]) -> BigUint {
    digits
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &digit| acc * AEON_DIGIT_BASE + digit)
}

/// Canonical little-endian digits of an aeon count; empty for zero
pub(crate) fn digits_from_aeons(aeons: &BigUint) -> Vec<u64> {
    let mut digits = Vec::new();
    let mut rest = aeons.clone();
    while !rest.is_zero() {
        digits.push((&rest % AEON_DIGIT_BASE).to_u64().unwrap_or(0));
        rest /= AEON_DIGIT_BASE;
    }
    digits
}

/// Builder assembling a timespan from whole per-unit counts
///
/// Carries are normalized on `build`, so any field may exceed its modulus.
#[derive(Default)]
pub struct TimespanBuilder {
    negative: bool,
    aeons: BigUint,
    years: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    millis: u64,
    micros: u64,
    nanos: u64,
    picos: u64,
    femtos: u64,
    attos: u64,
    zeptos: u64,
    yoctos: u64,
    planck: Option<u128>,
}

impl TimespanBuilder {
    pub fn new() -> Self {
        TimespanBuilder::default()
    }

    pub fn negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    pub fn aeons(mut self, aeons: BigUint) -> Self {
        self.aeons = aeons;
        self
    }

    pub fn years(mut self, years: u64) -> Self {
        self.years = years;
        self
    }

    pub fn days(mut self, days: u64) -> Self {
        self.days = days;
        self
    }

    pub fn hours(mut self, hours: u64) -> Self {
        self.hours = hours;
        self
    }

    pub fn minutes(mut self, minutes: u64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn seconds(mut self, seconds: u64) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn millis(mut self, millis: u64) -> Self {
        self.millis = millis;
        self
    }

    pub fn micros(mut self, micros: u64) -> Self {
        self.micros = micros;
        self
    }

    pub fn nanos(mut self, nanos: u64) -> Self {
        self.nanos = nanos;
        self
    }

    pub fn picos(mut self, picos: u64) -> Self {
        self.picos = picos;
        self
    }

    pub fn femtos(mut self, femtos: u64) -> Self {
        self.femtos = femtos;
        self
    }

    pub fn attos(mut self, attos: u64) -> Self {
        self.attos = attos;
        self
    }

    pub fn zeptos(mut self, zeptos: u64) -> Self {
        self.zeptos = zeptos;
        self
    }

    pub fn yoctos(mut self, yoctos: u64) -> Self {
        self.yoctos = yoctos;
        self
    }

    /// Track a sub-yoctosecond remainder; untracked when never called
    pub fn planck(mut self, planck: u128) -> Self {
        self.planck = Some(planck);
        self
    }

    pub fn build(self) -> AevumResult<Timespan> {
        // Nano tier
        let mut nano_sum = self.days as u128 * NANOS_PER_DAY as u128;
        nano_sum += self.hours as u128 * NANOS_PER_HOUR as u128;
        nano_sum += self.minutes as u128 * NANOS_PER_MINUTE as u128;
        nano_sum += self.seconds as u128 * NANOS_PER_SECOND as u128;
        nano_sum += self.millis as u128 * NANOS_PER_MILLI as u128;
        nano_sum += self.micros as u128 * NANOS_PER_MICRO as u128;
        nano_sum += self.nanos as u128;

        // Yocto tier
        let mut yocto_sum = self.picos as u128 * YOCTOS_PER_PICO as u128;
        yocto_sum += self.femtos as u128 * YOCTOS_PER_FEMTO as u128;
        yocto_sum += self.attos as u128 * YOCTOS_PER_ATTO as u128;
        yocto_sum += self.zeptos as u128 * YOCTOS_PER_ZEPTO as u128;
        yocto_sum += self.yoctos as u128;

        // Planck carry into yoctos
        let planck_rem = match self.planck {
            Some(planck) => {
                yocto_sum += planck / PLANCK_PER_YOCTO;
                Some(planck % PLANCK_PER_YOCTO)
            }
            None => None,
        };

        // Yocto carry into nanos
        nano_sum += yocto_sum / YOCTOS_PER_NANO as u128;
        let yoctos = (yocto_sum % YOCTOS_PER_NANO as u128) as u64;

        // Nano carry into years, year carry into aeons
        let mut year_sum = BigUint::from(self.years);
        year_sum += nano_sum / NANOS_PER_YEAR as u128;
        let nanos = (nano_sum % NANOS_PER_YEAR as u128) as u64;
        let mut aeons = self.aeons;
        aeons += &year_sum / YEARS_PER_AEON;
        let years = (year_sum % YEARS_PER_AEON).to_u32().unwrap_or(0);

        let digits = digits_from_aeons(&aeons);
        if digits.len() > MAX_AEON_DIGITS {
            return Err(AevumError::AeonOverflow {
                digits: digits.len(),
                max: MAX_AEON_DIGITS,
            });
        }

        let tracking = if planck_rem.is_some() {
            PlanckTracking::Always
        } else {
            PlanckTracking::Never
        };
        Ok(Timespan::assemble(
            self.negative,
            (digits, years, nanos, yoctos, planck_rem.unwrap_or(0)),
            tracking,
        ))
    }
}
