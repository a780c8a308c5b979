//! Speed units. Base unit: meter per second.

use super::{Conversion, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "meter_per_second",
            dimension: Dimension::Speed,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[],
            abbreviations: &[("en", &["m/s"])],
        },
        UnitDef {
            name: "kilometer_per_hour",
            dimension: Dimension::Speed,
            conversion: Conversion::Linear { factor: 1000.0 / 3600.0 },
            prefixes: &[],
            abbreviations: &[("en", &["km/h", "kph"])],
        },
        UnitDef {
            name: "mile_per_hour",
            dimension: Dimension::Speed,
            conversion: Conversion::Linear { factor: 0.447_04 },
            prefixes: &[],
            abbreviations: &[("en", &["mph"])],
        },
        UnitDef {
            name: "knot",
            dimension: Dimension::Speed,
            conversion: Conversion::Linear { factor: 1852.0 / 3600.0 },
            prefixes: &[],
            abbreviations: &[("en", &["kn", "kt"])],
        },
    ]
}
