//! Parse orchestration.
//!
//! The [`Engine`] owns the pattern cache and runs the two-stage algorithm:
//!
//! 1. **Single-unit pass**: try every unit of the requested dimension, in
//!    catalog declaration order, against its whole-string pattern. The first
//!    full match wins — this is the documented tie-break when several units
//!    share an abbreviation.
//! 2. **Composite pass**: try every composite grammar registered for the
//!    dimension (e.g. feet + inches). Each named sub-match is resolved with
//!    the single-unit logic for its own sub-unit, and the parts are summed
//!    through same-dimension addition.
//!
//! A quirk preserved on purpose: in a negative composite like `"-2 ft 4 in"`
//! the sign binds to the leading component only, so the result is
//! −(2 ft) + 4 in, not −(2 ft + 4 in). Each part's pattern carries its own
//! optional sign and nothing distributes the leading one.

use log::{debug, trace};
use regex::Captures;

use super::abbrev::AbbrevEntry;
use super::cache::PatternCache;
use super::pattern::{compile_composite, compile_unit};
use crate::Dimension;
use crate::catalog::{Catalog, catalog};
use crate::error::ParseError;
use crate::number::Culture;
use crate::quantity::Quantity;

/// A parsing engine over one catalog. Construct once and share: all state is
/// read-only apart from the idempotent pattern cache.
#[derive(Debug)]
pub struct Engine {
    catalog: &'static Catalog,
    cache: PatternCache,
}

impl Engine {
    /// Engine over the default catalog.
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Engine { catalog, cache: PatternCache::default() }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Like [`Engine::parse`], discarding the failure diagnostics.
    pub fn try_parse(&self, text: &str, dimension: Dimension, culture: &Culture) -> Option<Quantity> {
        self.parse(text, dimension, culture).ok()
    }

    /// Parse `text` as a quantity of `dimension` under `culture`.
    ///
    /// Empty or whitespace-only input is a parse failure, never a zero
    /// quantity. On failure the error carries the input and every unit whose
    /// pattern was attempted.
    pub fn parse(&self, text: &str, dimension: Dimension, culture: &Culture) -> Result<Quantity, ParseError> {
        let trimmed = text.trim();
        let mut attempted: Vec<&'static str> = Vec::new();

        if trimmed.is_empty() {
            return Err(ParseError::Failure { text: text.to_string(), dimension, attempted });
        }
        if let Some(quantity) = self.single_unit_pass(trimmed, dimension, culture, &mut attempted) {
            return Ok(quantity);
        }
        if let Some(quantity) = self.composite_pass(trimmed, dimension, culture, &mut attempted) {
            return Ok(quantity);
        }
        Err(ParseError::Failure { text: trimmed.to_string(), dimension, attempted })
    }

    /// Like [`Engine::parse_composite`], discarding the failure diagnostics.
    pub fn try_parse_composite(&self, text: &str, dimension: Dimension, culture: &Culture) -> Option<Quantity> {
        self.parse_composite(text, dimension, culture).ok()
    }

    /// Parse `text` against the dimension's registered composite grammars
    /// only, skipping the single-unit pass. `"2 ft"` fails here even though
    /// [`Engine::parse`] accepts it.
    pub fn parse_composite(&self, text: &str, dimension: Dimension, culture: &Culture) -> Result<Quantity, ParseError> {
        let trimmed = text.trim();
        let mut attempted: Vec<&'static str> = Vec::new();

        if trimmed.is_empty() {
            return Err(ParseError::Failure { text: text.to_string(), dimension, attempted });
        }
        if let Some(quantity) = self.composite_pass(trimmed, dimension, culture, &mut attempted) {
            return Ok(quantity);
        }
        Err(ParseError::Failure { text: trimmed.to_string(), dimension, attempted })
    }

    /// Whole-string single-unit pass, in catalog declaration order. Units
    /// whose pattern cannot be built in this culture are skipped, not errors.
    fn single_unit_pass(
        &self,
        text: &str,
        dimension: Dimension,
        culture: &Culture,
        attempted: &mut Vec<&'static str>,
    ) -> Option<Quantity> {
        for unit in self.catalog.units_of(dimension) {
            let pattern = match self.cache.unit((unit.name, culture.id), || compile_unit(unit, culture)) {
                Ok(pattern) => pattern,
                Err(err) => {
                    trace!("skipping {}: {err}", unit.name);
                    continue;
                }
            };
            attempted.push(unit.name);

            let Some(caps) = pattern.regex.captures(text) else {
                continue;
            };
            let Some(quantity) = resolve_match(&caps, 0, &pattern.entries, unit.name, culture, self.catalog) else {
                continue;
            };
            debug!("parsed {text:?} as {} ({} base units)", unit.name, quantity.base_value());
            return Some(quantity);
        }
        None
    }

    /// Composite pass over the dimension's registered grammars. A grammar
    /// whose pattern cannot be built in this culture is skipped like an
    /// unparseable unit.
    fn composite_pass(
        &self,
        text: &str,
        dimension: Dimension,
        culture: &Culture,
        attempted: &mut Vec<&'static str>,
    ) -> Option<Quantity> {
        for (index, format) in self.catalog.composites_of(dimension).enumerate() {
            let pattern = match self
                .cache
                .composite((dimension, index, culture.id), || compile_composite(format, self.catalog, culture))
            {
                Ok(pattern) => pattern,
                Err(err) => {
                    trace!("skipping composite {dimension}#{index}: {err}");
                    continue;
                }
            };
            for (name, _) in pattern.parts.iter() {
                attempted.push(*name);
            }

            let Some(caps) = pattern.regex.captures(text) else {
                continue;
            };
            let mut total: Option<Quantity> = None;
            for (part_index, (name, entries)) in pattern.parts.iter().enumerate() {
                let part = resolve_match(&caps, part_index, entries, name, culture, self.catalog)?;
                total = Some(match total {
                    None => part,
                    // Parts share the grammar's dimension, so this cannot
                    // fail with a mismatch.
                    Some(acc) => acc.try_add(part).ok()?,
                });
            }
            if let Some(quantity) = total {
                debug!("parsed {text:?} via composite {dimension}#{index} ({} base units)", quantity.base_value());
                return Some(quantity);
            }
        }
        None
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn the `v{i}`/`u{i}` captures of a match into a quantity: parse the
/// literal with the culture's number format, map the matched symbol back to
/// its prefix factor, and normalize through the unit's `to_base`.
fn resolve_match(
    caps: &Captures<'_>,
    index: usize,
    entries: &[AbbrevEntry],
    unit_name: &str,
    culture: &Culture,
    catalog: &Catalog,
) -> Option<Quantity> {
    let literal = caps.name(&format!("v{index}"))?.as_str();
    let symbol = caps.name(&format!("u{index}"))?.as_str();
    let factor = entries.iter().find(|e| e.text == symbol)?.factor;
    let value = culture.number_format.parse(literal)?;
    let unit = catalog.unit(unit_name)?;
    Some(Quantity::new(value * factor, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{DE, EN, SV};
    use approx::assert_relative_eq;

    #[test]
    fn composite_notations_agree() {
        let engine = Engine::new();
        let expected = 2.0 * 0.3048 + 4.0 * 0.0254;
        for input in ["2' 4\"", "2 ft 4 in", "2\u{2032}4\u{2033}"] {
            let q = engine.parse(input, Dimension::Length, &EN).unwrap_or_else(|e| panic!("{input:?}: {e}"));
            assert_relative_eq!(q.base_value(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn plain_single_unit_avoids_the_composite_path() {
        let engine = Engine::new();
        let mut attempted = Vec::new();
        assert!(engine.single_unit_pass("2 ft", Dimension::Length, &EN, &mut attempted).is_some());
        assert!(engine.single_unit_pass("2' 4\"", Dimension::Length, &EN, &mut attempted).is_none());
        // The composite-only entry point is the mirror image.
        assert!(engine.try_parse_composite("2' 4\"", Dimension::Length, &EN).is_some());
        assert!(engine.try_parse_composite("2 ft", Dimension::Length, &EN).is_none());
    }

    #[test]
    fn negative_composite_sign_binds_to_the_leading_part_only() {
        let engine = Engine::new();
        let q = engine.parse("-2 ft 4 in", Dimension::Length, &EN).unwrap();
        // -(2 ft) + 4 in, not -(2 ft + 4 in).
        assert_relative_eq!(q.base_value(), -2.0 * 0.3048 + 4.0 * 0.0254, max_relative = 1e-12);
    }

    #[test]
    fn empty_and_garbage_inputs_fail() {
        let engine = Engine::new();
        assert!(engine.try_parse("", Dimension::Length, &EN).is_none());
        assert!(engine.try_parse("   \t ", Dimension::Length, &EN).is_none());
        let err = engine.parse("garbage", Dimension::Length, &EN).unwrap_err();
        match err {
            ParseError::Failure { text, dimension, attempted } => {
                assert_eq!(text, "garbage");
                assert_eq!(dimension, Dimension::Length);
                assert!(attempted.contains(&"meter"));
                assert!(attempted.contains(&"foot"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failure_reports_the_trimmed_input() {
        let engine = Engine::new();
        let err = engine.parse("  nonsense  ", Dimension::Mass, &EN).unwrap_err();
        assert!(matches!(err, ParseError::Failure { ref text, .. } if text == "nonsense"));
    }

    #[test]
    fn wrong_dimension_does_not_match() {
        let engine = Engine::new();
        assert!(engine.try_parse("2.5 kg", Dimension::Length, &EN).is_none());
        assert!(engine.try_parse("2.5 kg", Dimension::Mass, &EN).is_some());
    }

    #[test]
    fn repeated_parses_agree_through_the_cache() {
        let engine = Engine::new();
        let first = engine.parse("2.5 km", Dimension::Length, &EN).unwrap();
        for _ in 0..5 {
            let again = engine.parse("2.5 km", Dimension::Length, &EN).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn culture_number_formats_apply() {
        let engine = Engine::new();
        let de = engine.parse("1.234,5 m", Dimension::Length, &DE).unwrap();
        assert_relative_eq!(de.base_value(), 1234.5);
        let sv = engine.parse("1 000 m", Dimension::Length, &SV).unwrap();
        assert_relative_eq!(sv.base_value(), 1000.0);
    }
}
