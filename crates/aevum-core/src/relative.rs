//! Relative timespans
//!
//! A `RelativeTimespan` is either an absolute `Timespan` or a proportion of
//! an unspecified local day or year. Proportions only become comparable or
//! convertible once the local day/year lengths are supplied.

use std::cmp::Ordering;

use crate::error::{AevumError, AevumResult};
use crate::value::Timespan;

/// Which interpretation a relative timespan carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relativity {
    /// The `duration` field carries the value
    Absolute,
    /// The `proportion` field scales the local day length
    ProportionOfDay,
    /// The `proportion` field scales the local year length
    ProportionOfYear,
}

/// A duration expressed absolutely or relative to a local day/year length
///
/// The field not selected by `relativity` is kept at its default and must
/// never be read as meaningful.
#[derive(Clone, Debug)]
pub struct RelativeTimespan {
    relativity: Relativity,
    duration: Timespan,
    proportion: f64,
}

impl RelativeTimespan {
    /// An absolute relative timespan carrying the given value
    pub fn absolute(duration: Timespan) -> Self {
        RelativeTimespan {
            relativity: Relativity::Absolute,
            duration,
            proportion: 0.0,
        }
    }

    /// A proportion of the local day length; negatives clamp to zero, NaN
    /// passes through untouched (caller's responsibility)
    pub fn from_proportion_of_day(proportion: f64) -> Self {
        RelativeTimespan {
            relativity: Relativity::ProportionOfDay,
            duration: Timespan::ZERO,
            proportion: clamp_proportion(proportion),
        }
    }

    /// A proportion of the local year length; negatives clamp to zero, NaN
    /// passes through untouched
    pub fn from_proportion_of_year(proportion: f64) -> Self {
        RelativeTimespan {
            relativity: Relativity::ProportionOfYear,
            duration: Timespan::ZERO,
            proportion: clamp_proportion(proportion),
        }
    }

    /// Deserialization re-entry from the three logical fields; the field not
    /// selected by `relativity` is reset to its default
    pub fn from_parts(relativity: Relativity, duration: Timespan, proportion: f64) -> Self {
        match relativity {
            Relativity::Absolute => RelativeTimespan::absolute(duration),
            Relativity::ProportionOfDay => RelativeTimespan::from_proportion_of_day(proportion),
            Relativity::ProportionOfYear => RelativeTimespan::from_proportion_of_year(proportion),
        }
    }

    /// The active interpretation
    #[inline]
    pub fn relativity(&self) -> Relativity {
        self.relativity
    }

    /// The absolute value; `ZERO` unless `relativity` is `Absolute`
    #[inline]
    pub fn duration(&self) -> &Timespan {
        &self.duration
    }

    /// The proportion scalar; `0.0` when `relativity` is `Absolute`
    #[inline]
    pub fn proportion(&self) -> f64 {
        self.proportion
    }

    /// Scale by a factor, preserving the active variant.
    ///
    /// The absolute branch follows `Timespan::multiply`; the proportion
    /// branches apply the same NaN/zero/infinity ladder to the scalar.
    pub fn multiply(&self, factor: f64) -> AevumResult<RelativeTimespan> {
        match self.relativity {
            Relativity::Absolute => Ok(RelativeTimespan::absolute(self.duration.multiply(factor)?)),
            _ => Ok(RelativeTimespan {
                relativity: self.relativity,
                duration: Timespan::ZERO,
                proportion: scale_proportion(self.proportion, factor)?,
            }),
        }
    }

    /// Divide by a divisor, preserving the active variant; edge cases follow
    /// `Timespan::divide`
    pub fn divide(&self, divisor: f64) -> AevumResult<RelativeTimespan> {
        match self.relativity {
            Relativity::Absolute => Ok(RelativeTimespan::absolute(self.duration.divide(divisor)?)),
            _ => {
                let proportion = self.proportion;
                if proportion == 0.0 && divisor == 0.0 {
                    return Ok(self.with_proportion(0.0));
                }
                if proportion == f64::INFINITY || divisor == 0.0 {
                    return Ok(self.with_proportion(f64::INFINITY));
                }
                if divisor < 0.0 || divisor == f64::INFINITY {
                    return Ok(self.with_proportion(0.0));
                }
                Ok(self.with_proportion(scale_proportion(proportion, 1.0 / divisor)?))
            }
        }
    }

    fn with_proportion(&self, proportion: f64) -> RelativeTimespan {
        RelativeTimespan {
            relativity: self.relativity,
            duration: Timespan::ZERO,
            proportion,
        }
    }

    /// Resolve against concrete local day/year lengths.
    ///
    /// Absolute values pass through unchanged; proportions scale the
    /// supplied local length with `Timespan::multiply`.
    pub fn to_universal(
        &self,
        local_year: &Timespan,
        local_day: &Timespan,
    ) -> AevumResult<Timespan> {
        match self.relativity {
            Relativity::Absolute => Ok(self.duration.clone()),
            Relativity::ProportionOfDay => local_day.multiply(self.proportion),
            Relativity::ProportionOfYear => local_year.multiply(self.proportion),
        }
    }

    /// Order two relative timespans after resolving both against the same
    /// local lengths; there is no direct cross-variant order
    pub fn cmp_universal(
        &self,
        other: &RelativeTimespan,
        local_year: &Timespan,
        local_day: &Timespan,
    ) -> AevumResult<Ordering> {
        let left = self.to_universal(local_year, local_day)?;
        let right = other.to_universal(local_year, local_day)?;
        Ok(left.cmp(&right))
    }

    /// The smaller of two relative timespans under the given local lengths
    pub fn min_universal(
        &self,
        other: &RelativeTimespan,
        local_year: &Timespan,
        local_day: &Timespan,
    ) -> AevumResult<RelativeTimespan> {
        Ok(
            match self.cmp_universal(other, local_year, local_day)? {
                Ordering::Greater => other.clone(),
                _ => self.clone(),
            },
        )
    }

    /// The larger of two relative timespans under the given local lengths
    pub fn max_universal(
        &self,
        other: &RelativeTimespan,
        local_year: &Timespan,
        local_day: &Timespan,
    ) -> AevumResult<RelativeTimespan> {
        Ok(
            match self.cmp_universal(other, local_year, local_day)? {
                Ordering::Less => other.clone(),
                _ => self.clone(),
            },
        )
    }
}

fn clamp_proportion(proportion: f64) -> f64 {
    // NaN fails the comparison and passes through unclamped
    if proportion < 0.0 {
        0.0
    } else {
        proportion
    }
}

/// The multiply edge-case ladder applied to a bare proportion scalar
fn scale_proportion(proportion: f64, factor: f64) -> AevumResult<f64> {
    if factor.is_nan() {
        return Err(AevumError::FactorNotANumber);
    }
    if factor <= 0.0 {
        return Ok(0.0);
    }
    if proportion == f64::INFINITY || factor == f64::INFINITY {
        return Ok(f64::INFINITY);
    }
    Ok(proportion * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_proportion_clamps() {
        let rel = RelativeTimespan::from_proportion_of_day(-5.0);
        assert_eq!(rel.proportion(), 0.0);
        assert_eq!(rel.relativity(), Relativity::ProportionOfDay);
    }

    #[test]
    fn test_nan_proportion_passes_through() {
        let rel = RelativeTimespan::from_proportion_of_year(f64::NAN);
        assert!(rel.proportion().is_nan());
    }

    #[test]
    fn test_inactive_fields_are_default() {
        let rel = RelativeTimespan::from_proportion_of_day(0.25);
        assert!(rel.duration().is_zero());
        let abs = RelativeTimespan::absolute(Timespan::from_hours(2.0).unwrap());
        assert_eq!(abs.proportion(), 0.0);
    }

    #[test]
    fn test_from_parts_resets_inactive() {
        let rel = RelativeTimespan::from_parts(
            Relativity::ProportionOfYear,
            Timespan::from_hours(5.0).unwrap(),
            0.5,
        );
        assert!(rel.duration().is_zero());
        assert_eq!(rel.proportion(), 0.5);
    }

    #[test]
    fn test_half_year_resolves_exactly() {
        let local_year = Timespan::from_days(365.0).unwrap();
        let local_day = Timespan::from_hours(24.0).unwrap();
        let rel = RelativeTimespan::from_proportion_of_year(0.5);
        let resolved = rel.to_universal(&local_year, &local_day).unwrap();
        assert_eq!(resolved, Timespan::from_days(182.5).unwrap());
    }

    #[test]
    fn test_proportion_of_day_resolves() {
        let local_year = Timespan::from_days(365.0).unwrap();
        let local_day = Timespan::from_hours(20.0).unwrap();
        let rel = RelativeTimespan::from_proportion_of_day(1.5);
        let resolved = rel.to_universal(&local_year, &local_day).unwrap();
        assert_eq!(resolved, Timespan::from_hours(30.0).unwrap());
    }

    #[test]
    fn test_multiply_preserves_variant() {
        let rel = RelativeTimespan::from_proportion_of_day(0.5).multiply(3.0).unwrap();
        assert_eq!(rel.relativity(), Relativity::ProportionOfDay);
        assert_eq!(rel.proportion(), 1.5);
        assert_eq!(
            rel.multiply(f64::NAN).unwrap_err(),
            AevumError::FactorNotANumber
        );
    }

    #[test]
    fn test_divide_ladder_on_proportion() {
        let rel = RelativeTimespan::from_proportion_of_year(2.0);
        assert_eq!(rel.divide(0.0).unwrap().proportion(), f64::INFINITY);
        assert_eq!(rel.divide(-1.0).unwrap().proportion(), 0.0);
        assert_eq!(rel.divide(f64::INFINITY).unwrap().proportion(), 0.0);
        assert_eq!(rel.divide(4.0).unwrap().proportion(), 0.5);
        let zero = RelativeTimespan::from_proportion_of_year(0.0);
        assert_eq!(zero.divide(0.0).unwrap().proportion(), 0.0);
    }

    #[test]
    fn test_cross_variant_min_converts_first() {
        let local_year = Timespan::from_days(360.0).unwrap();
        let local_day = Timespan::from_hours(24.0).unwrap();
        // A tenth of a year (36 days) vs. 40 absolute days
        let tenth = RelativeTimespan::from_proportion_of_year(0.1);
        let forty = RelativeTimespan::absolute(Timespan::from_days(40.0).unwrap());
        let smaller = tenth
            .min_universal(&forty, &local_year, &local_day)
            .unwrap();
        assert_eq!(smaller.relativity(), Relativity::ProportionOfYear);
        let larger = tenth
            .max_universal(&forty, &local_year, &local_day)
            .unwrap();
        assert_eq!(larger.relativity(), Relativity::Absolute);
    }
}
