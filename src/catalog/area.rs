//! Area units. Base unit: square meter.

use super::{Conversion, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "square_meter",
            dimension: Dimension::Area,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[],
            abbreviations: &[("en", &["m\u{b2}", "m^2", "sq m"])],
        },
        UnitDef {
            name: "square_foot",
            dimension: Dimension::Area,
            conversion: Conversion::Linear { factor: 0.092_903_04 },
            prefixes: &[],
            abbreviations: &[("en", &["ft\u{b2}", "ft^2", "sq ft"])],
        },
        UnitDef {
            name: "acre",
            dimension: Dimension::Area,
            conversion: Conversion::Linear { factor: 4_046.856_422_4 },
            prefixes: &[],
            abbreviations: &[("en", &["ac", "acre"])],
        },
        UnitDef {
            name: "hectare",
            dimension: Dimension::Area,
            conversion: Conversion::Linear { factor: 10_000.0 },
            prefixes: &[],
            abbreviations: &[("en", &["ha"])],
        },
    ]
}
