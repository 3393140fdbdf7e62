//! Aevum Format - Pattern-based timespan text
//!
//! This crate renders `Timespan` values as text:
//! - Unit table mapping pattern characters to semantic units
//! - Tokenizing pattern engine with lazy per-call tier balancing
//! - Named formats and predefined pattern literals
//! - Locale boundary for separators and symbols
//!
//! Writing only: no parser exists for the pattern grammar, and the
//! round-trip pattern is re-parseable in principle but not read here.

pub mod locale;
pub mod pattern;
pub mod presets;
pub mod table;

pub use locale::*;
pub use pattern::*;
pub use presets::*;
pub use table::*;
