//! Duration units. Base unit: second.

use super::{Conversion, MILLI, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "second",
            dimension: Dimension::Duration,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[MILLI],
            abbreviations: &[("en", &["s", "sec"])],
        },
        UnitDef {
            name: "minute",
            dimension: Dimension::Duration,
            conversion: Conversion::Linear { factor: 60.0 },
            prefixes: &[],
            abbreviations: &[("en", &["min"])],
        },
        UnitDef {
            name: "hour",
            dimension: Dimension::Duration,
            conversion: Conversion::Linear { factor: 3600.0 },
            prefixes: &[],
            abbreviations: &[("en", &["h", "hr"])],
        },
        UnitDef {
            name: "day",
            dimension: Dimension::Duration,
            conversion: Conversion::Linear { factor: 86_400.0 },
            prefixes: &[],
            abbreviations: &[("en", &["d"])],
        },
    ]
}
