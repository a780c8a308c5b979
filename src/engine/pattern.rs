//! Pattern construction.
//!
//! Builds, per (unit, culture), a regex fragment of the shape
//! `<number><optional whitespace><abbreviation alternation>`. Fragments are
//! unanchored so they can be embedded into a composite pattern; whole-string
//! matching anchors them with `^…$`. All abbreviation text is escaped before
//! insertion — symbols like `°`, `′` and `″` are common in unit notation.

use regex::Regex;

use super::abbrev::{AbbrevEntry, abbreviations_for};
use crate::catalog::{Catalog, CompositeFormat, UnitDef};
use crate::error::ParseError;
use crate::number::Culture;

/// A compiled whole-string pattern for one unit, plus the abbreviation
/// entries needed to map the matched symbol back to its prefix factor.
#[derive(Debug)]
pub(crate) struct UnitPattern {
    pub regex: Regex,
    pub entries: Vec<AbbrevEntry>,
}

/// A compiled composite pattern. `parts` holds, in order, each sub-unit's
/// name and abbreviation entries; capture groups `v{i}`/`u{i}` carry the
/// literal and symbol of part `i`.
#[derive(Debug)]
pub(crate) struct CompositePattern {
    pub regex: Regex,
    pub parts: Vec<(&'static str, Vec<AbbrevEntry>)>,
}

/// Build the unanchored fragment for one unit. `index` keeps the capture
/// group names unique when several fragments are embedded into one composite
/// pattern.
///
/// Fails with `NoAbbreviationsForUnit` when the unit has nothing resolvable
/// in this culture; callers treat that as "unit is not parseable here".
pub(crate) fn unit_fragment(
    unit: &UnitDef,
    culture: &Culture,
    index: usize,
) -> Result<(String, Vec<AbbrevEntry>), ParseError> {
    let entries = abbreviations_for(unit, culture)
        .map_err(|_| ParseError::NoAbbreviationsForUnit { unit: unit.name, culture: culture.id })?;
    if entries.is_empty() {
        return Err(ParseError::NoAbbreviationsForUnit { unit: unit.name, culture: culture.id });
    }

    let alternation = entries.iter().map(|e| regex::escape(&e.text)).collect::<Vec<_>>().join("|");
    let number = culture.number_format.pattern();
    let fragment = format!(r"(?P<v{index}>{number})\s*(?P<u{index}>{alternation})");
    Ok((fragment, entries))
}

pub(crate) fn compile_unit(unit: &UnitDef, culture: &Culture) -> Result<UnitPattern, ParseError> {
    let (fragment, entries) = unit_fragment(unit, culture, 0)?;
    // Escaped literals plus the culture number fragment always form a valid
    // pattern.
    let regex = Regex::new(&format!("^{fragment}$")).unwrap();
    Ok(UnitPattern { regex, entries })
}

pub(crate) fn compile_composite(
    format: &CompositeFormat,
    catalog: &Catalog,
    culture: &Culture,
) -> Result<CompositePattern, ParseError> {
    let mut pattern = String::from("^");
    let mut parts = Vec::with_capacity(format.parts.len());

    for (index, name) in format.parts.iter().enumerate() {
        let unit = catalog.unit(name).ok_or_else(|| ParseError::UnknownUnit((*name).to_string()))?;
        if index > 0 {
            pattern.push_str(format.separators.get(index - 1).copied().unwrap_or(r"\s*"));
        }
        let (fragment, entries) = unit_fragment(unit, culture, index)?;
        pattern.push_str(&fragment);
        parts.push((unit.name, entries));
    }

    pattern.push('$');
    let regex = Regex::new(&pattern).unwrap();
    Ok(CompositePattern { regex, parts })
}
