//! Volume units. Base unit: cubic meter.

use super::{Conversion, MILLI, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "cubic_meter",
            dimension: Dimension::Volume,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[],
            abbreviations: &[("en", &["m\u{b3}", "m^3"])],
        },
        UnitDef {
            name: "liter",
            dimension: Dimension::Volume,
            conversion: Conversion::Linear { factor: 0.001 },
            prefixes: &[MILLI],
            abbreviations: &[("en", &["L", "l"])],
        },
        UnitDef {
            name: "gallon",
            dimension: Dimension::Volume,
            conversion: Conversion::Linear { factor: 0.003_785_411_784 },
            prefixes: &[],
            abbreviations: &[("en", &["gal"])],
        },
    ]
}
