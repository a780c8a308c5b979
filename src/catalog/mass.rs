//! Mass units. Base unit: gram.
//!
//! `tonne` and `short_ton` deliberately share "t"; the tie-break is
//! declaration order, so "3 t" always resolves to the tonne.

use super::{Conversion, KILO, MILLI, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "gram",
            dimension: Dimension::Mass,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[KILO, MILLI],
            abbreviations: &[("en", &["g"])],
        },
        UnitDef {
            name: "tonne",
            dimension: Dimension::Mass,
            conversion: Conversion::Linear { factor: 1e6 },
            prefixes: &[],
            abbreviations: &[("en", &["t"])],
        },
        UnitDef {
            name: "short_ton",
            dimension: Dimension::Mass,
            conversion: Conversion::Linear { factor: 907_184.74 },
            prefixes: &[],
            abbreviations: &[("en", &["ton", "t"])],
        },
        UnitDef {
            name: "pound",
            dimension: Dimension::Mass,
            conversion: Conversion::Linear { factor: 453.592_37 },
            prefixes: &[],
            abbreviations: &[("en", &["lb", "lbs"])],
        },
        UnitDef {
            name: "ounce",
            dimension: Dimension::Mass,
            conversion: Conversion::Linear { factor: 28.349_523_125 },
            prefixes: &[],
            abbreviations: &[("en", &["oz"])],
        },
    ]
}
