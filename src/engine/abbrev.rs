//! Abbreviation resolution.
//!
//! Expands (unit, culture) into the concrete strings that may denote the unit
//! in text, and answers the reverse question (string → candidate units). The
//! same string may denote different units across dimensions or cultures;
//! that ambiguity is expected and resolved downstream by declaration order.

use crate::catalog::{Catalog, UnitDef};
use crate::error::ParseError;
use crate::number::{Culture, DEFAULT_CULTURE};

/// One concrete abbreviation: its text and the metric-prefix factor applied
/// to the numeric literal before the unit's own `to_base` conversion (1.0 for
/// unprefixed abbreviations).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AbbrevEntry {
    pub text: String,
    pub factor: f64,
}

/// All abbreviations denoting `unit` under `culture`, longest-first.
///
/// Falls back to the default culture when the requested culture defines no
/// list for the unit; fails with `AbbreviationNotFound` when neither does.
/// Prefixes combine with base abbreviations only; a prefixed abbreviation
/// never takes a second prefix. The longest-first ordering biases regex
/// alternation toward the greedy match ("kg" before "g"); the sort is stable,
/// so declaration order survives among equal lengths.
pub(crate) fn abbreviations_for(unit: &UnitDef, culture: &Culture) -> Result<Vec<AbbrevEntry>, ParseError> {
    let base = unit
        .culture_abbreviations(culture.id)
        .or_else(|| unit.culture_abbreviations(DEFAULT_CULTURE.id))
        .ok_or(ParseError::AbbreviationNotFound { unit: unit.name, culture: culture.id })?;

    let mut entries = Vec::with_capacity(base.len() * (1 + unit.prefixes.len()));
    for abbr in base {
        entries.push(AbbrevEntry { text: (*abbr).to_string(), factor: 1.0 });
        for prefix in unit.prefixes {
            entries.push(AbbrevEntry { text: format!("{}{}", prefix.abbreviation, abbr), factor: prefix.factor });
        }
    }

    entries.sort_by(|a, b| b.text.len().cmp(&a.text.len()));
    Ok(entries)
}

/// Reverse lookup: every (unit, prefix factor) whose expanded abbreviation
/// set contains `text` under `culture`, in catalog declaration order.
pub(crate) fn units_for<'c>(text: &str, culture: &Culture, catalog: &'c Catalog) -> Vec<(&'c UnitDef, f64)> {
    let mut found = Vec::new();
    for unit in catalog.units() {
        let Ok(entries) = abbreviations_for(unit, culture) else {
            continue;
        };
        if let Some(entry) = entries.iter().find(|e| e.text == text) {
            found.push((unit, entry.factor));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;
    use crate::catalog::catalog;
    use crate::number::{EN, SV};

    #[test]
    fn prefixes_expand_against_every_base_abbreviation() {
        let gram = catalog().unit("gram").unwrap();
        let entries = abbreviations_for(gram, &EN).unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["kg", "mg", "g"]);
        assert_eq!(entries.iter().find(|e| e.text == "kg").unwrap().factor, 1e3);
        assert_eq!(entries.iter().find(|e| e.text == "g").unwrap().factor, 1.0);
    }

    #[test]
    fn longest_abbreviations_come_first() {
        let second = catalog().unit("second").unwrap();
        let entries = abbreviations_for(second, &EN).unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        // Milli expands against both base abbreviations.
        assert_eq!(texts, vec!["msec", "sec", "ms", "s"]);
    }

    #[test]
    fn missing_culture_falls_back_to_default() {
        let thou = catalog().unit("thou").unwrap();
        let entries = abbreviations_for(thou, &SV).unwrap();
        assert!(entries.iter().any(|e| e.text == "mil"));
    }

    #[test]
    fn culture_only_unit_is_absent_elsewhere() {
        let sm = catalog().unit("scandinavian_mile").unwrap();
        assert!(abbreviations_for(sm, &SV).is_ok());
        assert_eq!(
            abbreviations_for(sm, &EN),
            Err(ParseError::AbbreviationNotFound { unit: "scandinavian_mile", culture: "en" })
        );
    }

    #[test]
    fn reverse_lookup_reports_all_candidates_in_declaration_order() {
        let hits = units_for("t", &EN, catalog());
        let names: Vec<&str> = hits.iter().map(|(u, _)| u.name).collect();
        assert_eq!(names, vec!["tonne", "short_ton"]);
        assert!(hits.iter().all(|(u, _)| u.dimension == Dimension::Mass));
    }

    #[test]
    fn reverse_lookup_respects_culture() {
        let en: Vec<&str> = units_for("mil", &EN, catalog()).iter().map(|(u, _)| u.name).collect();
        assert_eq!(en, vec!["thou"]);
        let sv: Vec<&str> = units_for("mil", &SV, catalog()).iter().map(|(u, _)| u.name).collect();
        assert_eq!(sv, vec!["scandinavian_mile", "thou"]);
    }
}
