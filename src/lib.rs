//! Mensura - culture-aware quantity parsing and dimensional algebra.
//!
//! Parses free-form strings such as `"2.5 kg"`, `"5 m/s"` or `"2' 4\""` into
//! strongly-typed [`Quantity`] values, and combines quantities of different
//! dimensions through a closed multiply/divide rule network (length ÷ time =
//! speed, length × length = area, ...).
//!
//! Dimensions shipped in the default catalog:
//! - Length (m, km, ft, in, mi, ...)
//! - Area (m², sq ft, acre, ...)
//! - Volume (m³, L, mL, gal, ...)
//! - Speed (m/s, km/h, mph, kn, ...)
//! - Force (N, kN, lbf)
//! - Torque (N·m, lb·ft)
//! - Mass (g, kg, t, lb, oz, ...)
//! - Duration (s, ms, min, h, d)
//! - Temperature (K, °C, °F)
//!
//! All catalog data is loaded once and immutable afterwards; compiled unit
//! patterns are cached per (unit, culture) for the engine's lifetime, so an
//! [`Engine`] can be shared freely across threads.

use std::fmt;

mod algebra;
mod api;
mod catalog;
mod engine;
mod error;
mod number;
mod quantity;

pub use algebra::{divide, multiply};
pub use api::{parse, parse_in, try_parse, try_parse_in};
pub use catalog::{Catalog, CompositeFormat, Conversion, Prefix, UnitDef, catalog};
pub use engine::Engine;
pub use error::{AlgebraError, ParseError};
pub use number::{Culture, DE, DEFAULT_CULTURE, EN, NumberFormat, SV, culture};
pub use quantity::Quantity;

// --- Core type tags ---------------------------------------------------------

/// A physical dimension family. Every unit in the catalog belongs to exactly
/// one dimension, and every dimension has exactly one base unit that all
/// conversions route through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Area,
    Volume,
    Speed,
    Force,
    Torque,
    Mass,
    Duration,
    Temperature,
}

impl Dimension {
    /// Every dimension in the default catalog, in declaration order.
    pub const ALL: [Dimension; 9] = [
        Dimension::Length,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Speed,
        Dimension::Force,
        Dimension::Torque,
        Dimension::Mass,
        Dimension::Duration,
        Dimension::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Speed => "speed",
            Dimension::Force => "force",
            Dimension::Torque => "torque",
            Dimension::Mass => "mass",
            Dimension::Duration => "duration",
            Dimension::Temperature => "temperature",
        }
    }

    /// Inverse of [`Dimension::name`]; used by the CLI.
    pub fn from_name(name: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
