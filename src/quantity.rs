//! The quantity value type.
//!
//! A [`Quantity`] is an immutable (base value, dimension) pair: the numeric
//! value is normalized to the dimension's base unit at construction, and
//! callers read it back in whatever unit they ask for. Cross-dimension
//! arithmetic lives in [`crate::algebra`]; this module only carries the
//! always-defined same-dimension operations.

use crate::Dimension;
use crate::catalog::UnitDef;
use crate::error::AlgebraError;
use crate::number::{Culture, DEFAULT_CULTURE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    base_value: f64,
    dimension: Dimension,
}

impl Quantity {
    /// A quantity of `value`, expressed in `unit`.
    pub fn new(value: f64, unit: &UnitDef) -> Self {
        Quantity { base_value: unit.to_base(value), dimension: unit.dimension }
    }

    pub(crate) fn from_base(base_value: f64, dimension: Dimension) -> Self {
        Quantity { base_value, dimension }
    }

    /// The value in the dimension's base unit.
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The value expressed in `unit`, which must belong to this dimension.
    pub fn value_in(&self, unit: &UnitDef) -> Result<f64, AlgebraError> {
        if unit.dimension != self.dimension {
            return Err(AlgebraError::DimensionMismatch { left: self.dimension, right: unit.dimension });
        }
        Ok(unit.from_base(self.base_value))
    }

    /// Same-dimension addition. Always defined for matching dimensions and
    /// never part of the cross-dimension operator network.
    pub fn try_add(self, other: Quantity) -> Result<Quantity, AlgebraError> {
        if self.dimension != other.dimension {
            return Err(AlgebraError::DimensionMismatch { left: self.dimension, right: other.dimension });
        }
        Ok(Quantity { base_value: self.base_value + other.base_value, dimension: self.dimension })
    }

    pub fn try_sub(self, other: Quantity) -> Result<Quantity, AlgebraError> {
        if self.dimension != other.dimension {
            return Err(AlgebraError::DimensionMismatch { left: self.dimension, right: other.dimension });
        }
        Ok(Quantity { base_value: self.base_value - other.base_value, dimension: self.dimension })
    }

    /// Minimal rendering used to validate round-trips: the value in `unit`
    /// followed by the unit's first declared abbreviation. `None` when the
    /// dimensions mismatch or the unit has no abbreviation in the culture
    /// (or the default culture).
    pub fn format(&self, unit: &UnitDef, culture: &Culture) -> Option<String> {
        if unit.dimension != self.dimension {
            return None;
        }
        let abbreviation = unit
            .culture_abbreviations(culture.id)
            .or_else(|| unit.culture_abbreviations(DEFAULT_CULTURE.id))?
            .first()?;
        Some(format!("{} {}", culture.number_format.format(unit.from_base(self.base_value)), abbreviation))
    }

    /// Bridge a Duration quantity into chrono, at millisecond resolution.
    /// `None` for other dimensions or out-of-range values.
    pub fn to_time_delta(&self) -> Option<chrono::TimeDelta> {
        if self.dimension != Dimension::Duration {
            return None;
        }
        chrono::TimeDelta::try_milliseconds((self.base_value * 1000.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::number::{DE, EN};
    use approx::assert_relative_eq;

    #[test]
    fn values_normalize_to_the_base_unit() {
        let foot = catalog().unit("foot").unwrap();
        let q = Quantity::new(3.0, foot);
        assert_eq!(q.dimension(), Dimension::Length);
        assert_relative_eq!(q.base_value(), 0.9144);
        let meter = catalog().unit("meter").unwrap();
        assert_relative_eq!(q.value_in(meter).unwrap(), 0.9144);
        assert_relative_eq!(q.value_in(foot).unwrap(), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn conversions_reject_foreign_dimensions() {
        let gram = catalog().unit("gram").unwrap();
        let meter = catalog().unit("meter").unwrap();
        let q = Quantity::new(5.0, gram);
        assert_eq!(
            q.value_in(meter),
            Err(AlgebraError::DimensionMismatch { left: Dimension::Mass, right: Dimension::Length })
        );
    }

    #[test]
    fn addition_is_same_dimension_only() {
        let foot = catalog().unit("foot").unwrap();
        let inch = catalog().unit("inch").unwrap();
        let gram = catalog().unit("gram").unwrap();
        let sum = Quantity::new(2.0, foot).try_add(Quantity::new(4.0, inch)).unwrap();
        assert_relative_eq!(sum.base_value(), 0.7112, max_relative = 1e-12);
        assert!(Quantity::new(1.0, foot).try_add(Quantity::new(1.0, gram)).is_err());
        let diff = Quantity::new(2.0, foot).try_sub(Quantity::new(1.0, foot)).unwrap();
        assert_relative_eq!(diff.base_value(), 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn format_uses_the_first_declared_abbreviation() {
        let gram = catalog().unit("gram").unwrap();
        let q = Quantity::new(2.5, gram);
        assert_eq!(q.format(gram, &EN), Some("2.5 g".to_string()));
        assert_eq!(q.format(gram, &DE), Some("2,5 g".to_string()));
        let meter = catalog().unit("meter").unwrap();
        assert_eq!(q.format(meter, &EN), None);
    }

    #[test]
    fn duration_bridges_into_chrono() {
        let second = catalog().unit("second").unwrap();
        let q = Quantity::new(90.0, second);
        assert_eq!(q.to_time_delta(), Some(chrono::TimeDelta::seconds(90)));
        let meter = catalog().unit("meter").unwrap();
        assert_eq!(Quantity::new(1.0, meter).to_time_delta(), None);
    }
}
