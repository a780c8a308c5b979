//! Force units. Base unit: newton.

use super::{Conversion, KILO, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "newton",
            dimension: Dimension::Force,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[KILO],
            abbreviations: &[("en", &["N"])],
        },
        UnitDef {
            name: "pound_force",
            dimension: Dimension::Force,
            conversion: Conversion::Linear { factor: 4.448_221_615_260_5 },
            prefixes: &[],
            abbreviations: &[("en", &["lbf"])],
        },
    ]
}
