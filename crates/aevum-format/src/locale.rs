//! Locale boundary for separator and symbol text
//!
//! Culture data sources live outside this crate; a `Locale` carries the few
//! strings the formatter needs, defaulting to the invariant culture.

/// Separator and symbol strings supplied by an external culture source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    /// Emitted for `:` in a pattern
    pub time_separator: String,
    /// Emitted for `/` in a pattern
    pub date_separator: String,
    /// Separator between whole seconds and the fraction; the fraction unit
    /// emits only the digits after it
    pub decimal_separator: String,
    /// Symbol for the positive perpetual duration
    pub infinity: String,
    /// Symbol for the negative perpetual duration
    pub negative_infinity: String,
}

impl Default for Locale {
    /// The invariant culture
    fn default() -> Self {
        Locale {
            time_separator: ":".to_string(),
            date_separator: "/".to_string(),
            decimal_separator: ".".to_string(),
            infinity: "∞".to_string(),
            negative_infinity: "-∞".to_string(),
        }
    }
}
