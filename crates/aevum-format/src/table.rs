//! Unit table mapping pattern characters to semantic units

/// Semantic unit selected by a pattern character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Aeon,
    Year,
    Day,
    Hour,
    Minute,
    Second,
    /// Fractional seconds; emits only the digits after the decimal separator
    SecondFraction,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
    Planck,
}

/// One unit table entry: the unit, its selector characters, and the label
/// used by the extensible writer
#[derive(Debug)]
pub struct UnitDescriptor {
    pub unit: UnitKind,
    pub chars: &'static [char],
    pub abbreviation: &'static str,
}

/// The full unit registry. Every selector is a single character; only the
/// hour unit accepts both case variants of its letter.
pub static UNIT_TABLE: &[UnitDescriptor] = &[
    UnitDescriptor { unit: UnitKind::Aeon, chars: &['e'], abbreviation: "y" },
    UnitDescriptor { unit: UnitKind::Year, chars: &['y'], abbreviation: "y" },
    UnitDescriptor { unit: UnitKind::Day, chars: &['d'], abbreviation: "d" },
    UnitDescriptor { unit: UnitKind::Hour, chars: &['h', 'H'], abbreviation: "h" },
    UnitDescriptor { unit: UnitKind::Minute, chars: &['m'], abbreviation: "min" },
    UnitDescriptor { unit: UnitKind::Second, chars: &['s'], abbreviation: "s" },
    UnitDescriptor { unit: UnitKind::SecondFraction, chars: &['F'], abbreviation: "" },
    UnitDescriptor { unit: UnitKind::Milli, chars: &['M'], abbreviation: "ms" },
    UnitDescriptor { unit: UnitKind::Micro, chars: &['u'], abbreviation: "µs" },
    UnitDescriptor { unit: UnitKind::Nano, chars: &['n'], abbreviation: "ns" },
    UnitDescriptor { unit: UnitKind::Pico, chars: &['p'], abbreviation: "ps" },
    UnitDescriptor { unit: UnitKind::Femto, chars: &['f'], abbreviation: "fs" },
    UnitDescriptor { unit: UnitKind::Atto, chars: &['a'], abbreviation: "as" },
    UnitDescriptor { unit: UnitKind::Zepto, chars: &['z'], abbreviation: "zs" },
    UnitDescriptor { unit: UnitKind::Yocto, chars: &['Y'], abbreviation: "ys" },
    UnitDescriptor { unit: UnitKind::Planck, chars: &['P'], abbreviation: "tP" },
];

/// Resolve a pattern character to its unit, if any
pub fn unit_for(c: char) -> Option<UnitKind> {
    match c {
        'e' => Some(UnitKind::Aeon),
        'y' => Some(UnitKind::Year),
        'd' => Some(UnitKind::Day),
        'h' | 'H' => Some(UnitKind::Hour),
        'm' => Some(UnitKind::Minute),
        's' => Some(UnitKind::Second),
        'F' => Some(UnitKind::SecondFraction),
        'M' => Some(UnitKind::Milli),
        'u' => Some(UnitKind::Micro),
        'n' => Some(UnitKind::Nano),
        'p' => Some(UnitKind::Pico),
        'f' => Some(UnitKind::Femto),
        'a' => Some(UnitKind::Atto),
        'z' => Some(UnitKind::Zepto),
        'Y' => Some(UnitKind::Yocto),
        'P' => Some(UnitKind::Planck),
        _ => None,
    }
}
