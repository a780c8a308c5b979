//! Public entry points.
//!
//! Free functions over a lazily-built process-wide [`Engine`]. Callers that
//! want their own catalog or want to control cache lifetime construct an
//! [`Engine`] directly; these helpers cover the common case.

use once_cell::sync::Lazy;

use crate::Dimension;
use crate::engine::Engine;
use crate::error::ParseError;
use crate::number::{Culture, DEFAULT_CULTURE};
use crate::quantity::Quantity;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

/// Parse `text` as a quantity of `dimension` using the default culture.
///
/// # Example
/// ```
/// use mensura::{Dimension, parse};
///
/// let mass = parse("2.5 kg", Dimension::Mass).unwrap();
/// assert!((mass.base_value() - 2500.0).abs() < 1e-9);
/// ```
pub fn parse(text: &str, dimension: Dimension) -> Result<Quantity, ParseError> {
    DEFAULT_ENGINE.parse(text, dimension, DEFAULT_CULTURE)
}

/// Like [`parse`], discarding failure diagnostics.
pub fn try_parse(text: &str, dimension: Dimension) -> Option<Quantity> {
    DEFAULT_ENGINE.try_parse(text, dimension, DEFAULT_CULTURE)
}

/// Parse under an explicit culture.
pub fn parse_in(text: &str, dimension: Dimension, culture: &Culture) -> Result<Quantity, ParseError> {
    DEFAULT_ENGINE.parse(text, dimension, culture)
}

/// Like [`parse_in`], discarding failure diagnostics.
pub fn try_parse_in(text: &str, dimension: Dimension, culture: &Culture) -> Option<Quantity> {
    DEFAULT_ENGINE.try_parse(text, dimension, culture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::SV;
    use approx::assert_relative_eq;

    #[test]
    fn default_culture_entry_points() {
        let q = parse("5 m/s", Dimension::Speed).unwrap();
        assert_relative_eq!(q.base_value(), 5.0);
        assert!(try_parse("5 m/s", Dimension::Speed).is_some());
        assert!(try_parse("", Dimension::Speed).is_none());
        assert!(parse("garbage", Dimension::Speed).is_err());
    }

    #[test]
    fn explicit_culture_entry_points() {
        let q = parse_in("2,5 m", Dimension::Length, &SV).unwrap();
        assert_relative_eq!(q.base_value(), 2.5);
        assert!(try_parse_in("2.5 m", Dimension::Length, &SV).is_none());
    }
}
