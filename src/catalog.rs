//! The unit definition table.
//!
//! The catalog is the pre-built, read-only table the engine consumes: per
//! dimension a base unit and a set of convertible units, each with a
//! conversion to/from the base unit, optional metric prefixes, and per-culture
//! abbreviation lists. It is assembled once behind a `Lazy` and never mutated
//! afterwards.
//!
//! One source file per dimension keeps the data reviewable; the assembly
//! order here is load-bearing: **declaration order is the documented
//! tie-break** when several units of one dimension share an abbreviation
//! (the first declared unit wins).

use once_cell::sync::Lazy;

use crate::Dimension;

#[path = "catalog/length.rs"]
mod length;

#[path = "catalog/area.rs"]
mod area;

#[path = "catalog/volume.rs"]
mod volume;

#[path = "catalog/speed.rs"]
mod speed;

#[path = "catalog/force.rs"]
mod force;

#[path = "catalog/torque.rs"]
mod torque;

#[path = "catalog/mass.rs"]
mod mass;

#[path = "catalog/duration.rs"]
mod duration;

#[path = "catalog/temperature.rs"]
mod temperature;


// --- Unit definition model ---------------------------------------------------

/// Conversion between a unit and its dimension's base unit. Both shapes are
/// monotonic; the linear shape round-trips exactly up to float tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Linear { factor: f64 },
    Affine { factor: f64, offset: f64 },
}

impl Conversion {
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { factor, offset } => value * factor + offset,
        }
    }

    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value / factor,
            Conversion::Affine { factor, offset } => (value - offset) / factor,
        }
    }

    /// True for the identity conversion that marks a dimension's base unit.
    pub fn is_identity(&self) -> bool {
        matches!(*self, Conversion::Linear { factor } if factor == 1.0)
    }
}

/// A metric prefix a unit may combine with (e.g. gram + kilo = kilogram).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub factor: f64,
}

pub const KILO: Prefix = Prefix { name: "kilo", abbreviation: "k", factor: 1e3 };
pub const CENTI: Prefix = Prefix { name: "centi", abbreviation: "c", factor: 1e-2 };
pub const MILLI: Prefix = Prefix { name: "milli", abbreviation: "m", factor: 1e-3 };

/// One unit of the definition table.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub name: &'static str,
    pub dimension: Dimension,
    pub conversion: Conversion,
    /// Prefixes this unit composes with. A prefixed abbreviation never takes
    /// a second prefix.
    pub prefixes: &'static [Prefix],
    /// Per-culture abbreviation lists, declaration order preserved.
    pub abbreviations: &'static [(&'static str, &'static [&'static str])],
}

impl UnitDef {
    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    pub fn from_base(&self, value: f64) -> f64 {
        self.conversion.from_base(value)
    }

    pub fn is_base(&self) -> bool {
        self.conversion.is_identity()
    }

    pub(crate) fn culture_abbreviations(&self, id: &str) -> Option<&'static [&'static str]> {
        self.abbreviations.iter().find(|(culture, _)| *culture == id).map(|(_, list)| *list)
    }
}

/// A composite textual format: an ordered sequence of sub-units joined by
/// separator patterns (e.g. feet + inches). Any dimension may register one;
/// the parser treats them uniformly.
#[derive(Debug, Clone, Copy)]
pub struct CompositeFormat {
    pub dimension: Dimension,
    /// Unit names, leading to trailing.
    pub parts: &'static [&'static str],
    /// Regex fragments joining consecutive parts; `separators.len()` is
    /// `parts.len() - 1`.
    pub separators: &'static [&'static str],
}

// --- Catalog -----------------------------------------------------------------

/// The assembled table. Immutable after construction.
#[derive(Debug)]
pub struct Catalog {
    units: Vec<UnitDef>,
    composites: Vec<CompositeFormat>,
}

impl Catalog {
    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    /// Units of one dimension, in declaration order.
    pub fn units_of(&self, dimension: Dimension) -> impl Iterator<Item = &UnitDef> {
        self.units.iter().filter(move |u| u.dimension == dimension)
    }

    pub fn unit(&self, name: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn base_unit(&self, dimension: Dimension) -> Option<&UnitDef> {
        self.units_of(dimension).find(|u| u.is_base())
    }

    pub fn composites_of(&self, dimension: Dimension) -> impl Iterator<Item = &CompositeFormat> {
        self.composites.iter().filter(move |c| c.dimension == dimension)
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let mut units = Vec::new();
    units.extend(length::units());
    units.extend(area::units());
    units.extend(volume::units());
    units.extend(speed::units());
    units.extend(force::units());
    units.extend(torque::units());
    units.extend(mass::units());
    units.extend(duration::units());
    units.extend(temperature::units());

    let composites = length::composites();

    Catalog { units, composites }
});

/// The process-wide default catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
