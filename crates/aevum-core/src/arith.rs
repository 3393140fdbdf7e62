//! Arithmetic and ordering over timespans
//!
//! Every operation returns a new value; operands are never mutated. Scaling
//! is exact: the f64 factor expands to its exact binary rational and the
//! product is truncated at the finest tracked digit.

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;

use crate::error::{AevumError, AevumResult};
use crate::value::{decompose_plancks, decompose_yoctos, PlanckTracking, Timespan};

impl Timespan {
    /// Scale by a factor.
    ///
    /// NaN is an invalid argument; a factor of zero or below yields `ZERO`;
    /// a perpetual receiver or an infinite factor yields `POSITIVE_INFINITY`;
    /// growth beyond the aeon digit ceiling reports overflow.
    pub fn multiply(&self, factor: f64) -> AevumResult<Timespan> {
        if factor.is_nan() {
            return Err(AevumError::FactorNotANumber);
        }
        if factor <= 0.0 {
            return Ok(Timespan::ZERO);
        }
        if self.perpetual || factor == f64::INFINITY {
            return Ok(Timespan::POSITIVE_INFINITY);
        }

        let ratio = BigRational::from_float(factor).ok_or(AevumError::FactorNotANumber)?;
        if self.planck_remainder.is_some() {
            let total = BigRational::from_integer(BigInt::from(self.total_plancks()));
            let product = (total * ratio)
                .floor()
                .to_integer()
                .to_biguint()
                .unwrap_or_default();
            let parts = decompose_plancks(&product)?;
            Ok(Timespan::assemble(
                self.negative,
                parts,
                PlanckTracking::Always,
            ))
        } else {
            let total = BigRational::from_integer(BigInt::from(self.total_yoctos()));
            let product = (total * ratio)
                .floor()
                .to_integer()
                .to_biguint()
                .unwrap_or_default();
            let parts = decompose_yoctos(&product)?;
            Ok(Timespan::assemble(
                self.negative,
                parts,
                PlanckTracking::Never,
            ))
        }
    }

    /// Divide by a divisor.
    ///
    /// Zero over zero is `ZERO`; a perpetual receiver or zero divisor yields
    /// `POSITIVE_INFINITY`; a negative or infinite divisor yields `ZERO`;
    /// everything else delegates to `multiply(1.0 / divisor)`, so a NaN
    /// divisor is an invalid argument.
    pub fn divide(&self, divisor: f64) -> AevumResult<Timespan> {
        if self.is_zero() && divisor == 0.0 {
            return Ok(Timespan::ZERO);
        }
        if self.perpetual || divisor == 0.0 {
            return Ok(Timespan::POSITIVE_INFINITY);
        }
        if divisor < 0.0 || divisor == f64::INFINITY {
            return Ok(Timespan::ZERO);
        }
        self.multiply(1.0 / divisor)
    }

    /// Exact signed addition.
    ///
    /// Opposite-sign perpetual operands cancel to `ZERO`; the result tracks
    /// the Planck remainder when either operand does.
    pub fn checked_add(&self, other: &Timespan) -> AevumResult<Timespan> {
        match (self.perpetual, other.perpetual) {
            (true, true) => {
                if self.negative == other.negative {
                    Ok(self.clone())
                } else {
                    Ok(Timespan::ZERO)
                }
            }
            (true, false) => Ok(self.clone()),
            (false, true) => Ok(other.clone()),
            (false, false) => {
                let sum = self.signed_total_plancks() + other.signed_total_plancks();
                let negative = sum.sign() == Sign::Minus;
                let parts = decompose_plancks(sum.magnitude())?;
                let tracking = if self.planck_remainder.is_some()
                    || other.planck_remainder.is_some()
                {
                    PlanckTracking::Always
                } else {
                    PlanckTracking::Never
                };
                Ok(Timespan::assemble(negative, parts, tracking))
            }
        }
    }

    /// Exact signed subtraction; see `checked_add`
    pub fn checked_sub(&self, other: &Timespan) -> AevumResult<Timespan> {
        self.checked_add(&other.negated())
    }

    /// Same magnitude, opposite sign; zero stays canonical non-negative
    pub fn negated(&self) -> Timespan {
        let mut flipped = self.clone();
        if !flipped.is_zero() {
            flipped.negative = !flipped.negative;
        }
        flipped
    }

    /// Magnitude order ignoring sign; perpetual outranks every finite value
    fn magnitude_cmp(&self, other: &Timespan) -> Ordering {
        match (self.perpetual, other.perpetual) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .aeon_digits
                .len()
                .cmp(&other.aeon_digits.len())
                .then_with(|| {
                    self.aeon_digits
                        .iter()
                        .rev()
                        .cmp(other.aeon_digits.iter().rev())
                })
                .then_with(|| self.years_in_aeon.cmp(&other.years_in_aeon))
                .then_with(|| self.nanos_in_year.cmp(&other.nanos_in_year))
                .then_with(|| self.yoctos_in_nano.cmp(&other.yoctos_in_nano))
                .then_with(|| {
                    self.planck_remainder
                        .unwrap_or(0)
                        .cmp(&other.planck_remainder.unwrap_or(0))
                }),
        }
    }
}

impl Ord for Timespan {
    /// Total order: sign first, then magnitude; perpetual values compare as
    /// signed infinities. An untracked Planck remainder compares as zero.
    fn cmp(&self, other: &Timespan) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude_cmp(other),
            (true, true) => other.magnitude_cmp(self),
        }
    }
}

impl PartialOrd for Timespan {
    fn partial_cmp(&self, other: &Timespan) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Timespan {
    fn eq(&self, other: &Timespan) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timespan {}

impl Add for Timespan {
    type Output = Timespan;

    /// Panics on aeon digit overflow; use `checked_add` to handle it
    fn add(self, rhs: Timespan) -> Timespan {
        self.checked_add(&rhs).expect("aeon overflow in addition")
    }
}

impl Sub for Timespan {
    type Output = Timespan;

    /// Panics on aeon digit overflow; use `checked_sub` to handle it
    fn sub(self, rhs: Timespan) -> Timespan {
        self.checked_sub(&rhs).expect("aeon overflow in subtraction")
    }
}

impl Neg for Timespan {
    type Output = Timespan;

    fn neg(self) -> Timespan {
        self.negated()
    }
}
