//! Aevum Core - Mixed-radix cosmological durations
//!
//! This crate defines the duration value used throughout Aevum:
//! - `Timespan`: exact elapsed time from sub-Planck intervals to aeons
//! - Arithmetic: scaling, exact signed addition, total ordering
//! - `RelativeTimespan`: proportions of an unknown local day/year
//! - Unit moduli for the mixed-radix representation

pub mod error;
pub mod relative;
pub mod units;
pub mod value;

mod arith;

pub use error::*;
pub use relative::*;
pub use value::*;
