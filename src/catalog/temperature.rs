//! Temperature units. Base unit: kelvin. Celsius and Fahrenheit are the
//! catalog's affine conversions.

use super::{Conversion, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "kelvin",
            dimension: Dimension::Temperature,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[],
            abbreviations: &[("en", &["K"])],
        },
        UnitDef {
            name: "celsius",
            dimension: Dimension::Temperature,
            conversion: Conversion::Affine { factor: 1.0, offset: 273.15 },
            prefixes: &[],
            abbreviations: &[("en", &["\u{b0}C"])],
        },
        UnitDef {
            name: "fahrenheit",
            dimension: Dimension::Temperature,
            conversion: Conversion::Affine { factor: 5.0 / 9.0, offset: 255.372_222_222_222_24 },
            prefixes: &[],
            abbreviations: &[("en", &["\u{b0}F"])],
        },
    ]
}
