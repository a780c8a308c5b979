//! Length units. Base unit: meter.
//!
//! `scandinavian_mile` is declared before `thou` on purpose: both answer to
//! "mil" (the former only under `sv`, the latter under `en` with culture
//! fallback), and declaration order decides who wins per culture.

use super::{CENTI, CompositeFormat, Conversion, KILO, MILLI, UnitDef};
use crate::Dimension;

pub(super) fn units() -> Vec<UnitDef> {
    vec![
        UnitDef {
            name: "meter",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 1.0 },
            prefixes: &[KILO, CENTI, MILLI],
            abbreviations: &[("en", &["m"])],
        },
        UnitDef {
            name: "foot",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 0.3048 },
            prefixes: &[],
            abbreviations: &[("en", &["ft", "\u{2032}", "'"])],
        },
        UnitDef {
            name: "inch",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 0.0254 },
            prefixes: &[],
            abbreviations: &[("en", &["in", "\u{2033}", "\""])],
        },
        UnitDef {
            name: "yard",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 0.9144 },
            prefixes: &[],
            abbreviations: &[("en", &["yd"])],
        },
        UnitDef {
            name: "mile",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 1609.344 },
            prefixes: &[],
            abbreviations: &[("en", &["mi"])],
        },
        UnitDef {
            name: "scandinavian_mile",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 10_000.0 },
            prefixes: &[],
            abbreviations: &[("sv", &["mil"])],
        },
        UnitDef {
            name: "thou",
            dimension: Dimension::Length,
            conversion: Conversion::Linear { factor: 2.54e-5 },
            prefixes: &[],
            abbreviations: &[("en", &["mil", "thou"])],
        },
    ]
}

pub(super) fn composites() -> Vec<CompositeFormat> {
    vec![CompositeFormat { dimension: Dimension::Length, parts: &["foot", "inch"], separators: &[r"\s*"] }]
}
