//! The dimensional operator network.
//!
//! A closed, finite table of cross-dimension product rules, encoded as data
//! plus two pure functions. Division rules are *derived* from the same table
//! (a result-side lookup), so `a × b = c` always implies `c ÷ a = b` and
//! `c ÷ b = a` with numerically inverse semantics — the network cannot drift
//! into contradictions.
//!
//! Every rule converts both operands to base-unit values, applies a single
//! multiplication or division, and wraps the result as the result
//! dimension's base value; nothing re-derives through intermediate units.
//!
//! Zero policy: dividing by an operand whose base value is exactly `0.0`
//! fails with [`AlgebraError::DivisionByZero`], uniformly across all rules.
//! The network never produces IEEE infinities.

use crate::Dimension;
use crate::error::AlgebraError;
use crate::quantity::Quantity;

/// One entry of the product table: `left × right = result` (commutative).
#[derive(Debug, Clone, Copy)]
struct ProductRule {
    left: Dimension,
    right: Dimension,
    result: Dimension,
}

const PRODUCT_RULES: &[ProductRule] = &[
    ProductRule { left: Dimension::Length, right: Dimension::Length, result: Dimension::Area },
    ProductRule { left: Dimension::Area, right: Dimension::Length, result: Dimension::Volume },
    ProductRule { left: Dimension::Speed, right: Dimension::Duration, result: Dimension::Length },
    ProductRule { left: Dimension::Force, right: Dimension::Length, result: Dimension::Torque },
];

/// Multiply two quantities through the operator network.
///
/// # Example
/// ```
/// use mensura::{Dimension, multiply, parse};
///
/// let width = parse("3 m", Dimension::Length).unwrap();
/// let depth = parse("2 m", Dimension::Length).unwrap();
/// let area = multiply(width, depth).unwrap();
/// assert_eq!(area.dimension(), Dimension::Area);
/// assert!((area.base_value() - 6.0).abs() < 1e-12);
/// ```
pub fn multiply(left: Quantity, right: Quantity) -> Result<Quantity, AlgebraError> {
    let rule = PRODUCT_RULES
        .iter()
        .find(|r| {
            (r.left == left.dimension() && r.right == right.dimension())
                || (r.left == right.dimension() && r.right == left.dimension())
        })
        .ok_or(AlgebraError::Undefined { left: left.dimension(), op: '\u{d7}', right: right.dimension() })?;
    Ok(Quantity::from_base(left.base_value() * right.base_value(), rule.result))
}

/// Divide two quantities through the operator network. The rule is derived
/// from the product table: `left` must be the result of a rule in which
/// `right` is one operand; the quotient takes the other operand's dimension.
pub fn divide(left: Quantity, right: Quantity) -> Result<Quantity, AlgebraError> {
    let result = PRODUCT_RULES
        .iter()
        .find_map(|r| {
            if r.result != left.dimension() {
                None
            } else if r.left == right.dimension() {
                Some(r.right)
            } else if r.right == right.dimension() {
                Some(r.left)
            } else {
                None
            }
        })
        .ok_or(AlgebraError::Undefined { left: left.dimension(), op: '\u{f7}', right: right.dimension() })?;
    if right.base_value() == 0.0 {
        return Err(AlgebraError::DivisionByZero(right.dimension()));
    }
    Ok(Quantity::from_base(left.base_value() / right.base_value(), result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn base(value: f64, dimension: Dimension) -> Quantity {
        Quantity::from_base(value, dimension)
    }

    #[test]
    fn length_over_duration_is_speed() {
        let meter = catalog().unit("meter").unwrap();
        let second = catalog().unit("second").unwrap();
        let speed = divide(Quantity::new(100.0, meter), Quantity::new(20.0, second)).unwrap();
        assert_eq!(speed.dimension(), Dimension::Speed);
        assert_relative_eq!(speed.base_value(), 5.0);
    }

    #[test]
    fn products_and_quotients_cover_the_table() {
        let cases = [
            (Dimension::Length, Dimension::Length, Dimension::Area),
            (Dimension::Area, Dimension::Length, Dimension::Volume),
            (Dimension::Length, Dimension::Area, Dimension::Volume),
            (Dimension::Speed, Dimension::Duration, Dimension::Length),
            (Dimension::Duration, Dimension::Speed, Dimension::Length),
            (Dimension::Force, Dimension::Length, Dimension::Torque),
        ];
        for (l, r, expected) in cases {
            let product = multiply(base(2.0, l), base(3.0, r)).unwrap();
            assert_eq!(product.dimension(), expected, "{l} x {r}");
            assert_relative_eq!(product.base_value(), 6.0);
        }
    }

    #[test]
    fn every_product_rule_inverts() {
        let mut rng = StdRng::seed_from_u64(0x6d656e7375726121);
        for rule in PRODUCT_RULES {
            for _ in 0..100 {
                let a = base(rng.gen_range(0.001..1e6), rule.left);
                let b = base(rng.gen_range(0.001..1e6), rule.right);
                let c = multiply(a, b).unwrap();
                assert_eq!(c.dimension(), rule.result);
                let b_again = divide(c, a).unwrap();
                assert_eq!(b_again.dimension(), rule.right);
                assert_relative_eq!(b_again.base_value(), b.base_value(), max_relative = 1e-9);
                let a_again = divide(c, b).unwrap();
                assert_eq!(a_again.dimension(), rule.left);
                assert_relative_eq!(a_again.base_value(), a.base_value(), max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn division_by_zero_is_an_error_not_infinity() {
        let err = divide(base(5.0, Dimension::Length), base(0.0, Dimension::Duration)).unwrap_err();
        assert_eq!(err, AlgebraError::DivisionByZero(Dimension::Duration));
        let err = divide(base(5.0, Dimension::Area), base(0.0, Dimension::Length)).unwrap_err();
        assert_eq!(err, AlgebraError::DivisionByZero(Dimension::Length));
    }

    #[test]
    fn undefined_combinations_are_rejected() {
        assert!(matches!(
            multiply(base(1.0, Dimension::Mass), base(1.0, Dimension::Mass)),
            Err(AlgebraError::Undefined { .. })
        ));
        // Same-dimension division is not part of the cross-type network.
        assert!(matches!(
            divide(base(1.0, Dimension::Length), base(1.0, Dimension::Length)),
            Err(AlgebraError::Undefined { .. })
        ));
    }
}
