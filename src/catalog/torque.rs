//! Torque units. Base unit: newton meter.

use super::{Conversion, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "newton_meter",
            dimension: Dimension::Torque,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[],
            abbreviations: &[("en", &["N\u{b7}m", "N m", "Nm"])],
        },
        UnitDef {
            name: "pound_foot",
            dimension: Dimension::Torque,
            conversion: Conversion::Linear { factor: 1.355_817_948_331_400_4 },
            prefixes: &[],
            abbreviations: &[("en", &["lb\u{b7}ft", "lbft"])],
        },
    ]
}
