//! Error types surfaced by parsing and by the operator network.
//!
//! Nothing here is fatal to the process: pattern-build failures mean "this
//! unit is not parseable in this culture", parse failures are recoverable per
//! call, and algebra failures report a single bad operation.

use crate::Dimension;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The resolver found no abbreviation for a unit, neither in the
    /// requested culture nor in the default culture. A configuration
    /// problem, detected at pattern-build time.
    #[error("unit `{unit}` has no abbreviations for culture `{culture}` or the default culture")]
    AbbreviationNotFound { unit: &'static str, culture: &'static str },

    /// No pattern could be built for a unit in a culture. Callers treat the
    /// unit as not parseable and move on.
    #[error("no pattern can be built for unit `{unit}` in culture `{culture}`")]
    NoAbbreviationsForUnit { unit: &'static str, culture: &'static str },

    /// The input did not match any known unit or composite pattern.
    /// `attempted` lists every unit whose pattern was tried, for diagnostics.
    #[error("`{text}` does not parse as {dimension} (tried: {})", attempted.join(", "))]
    Failure { text: String, dimension: Dimension, attempted: Vec<&'static str> },

    /// A unit name that does not exist in the catalog (e.g. a composite
    /// grammar referencing a missing part).
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Addition, subtraction and conversion require operands of one
    /// dimension.
    #[error("operands have different dimensions: {left} vs {right}")]
    DimensionMismatch { left: Dimension, right: Dimension },

    /// The (left, right, operator) combination has no rule in the operator
    /// network.
    #[error("no operator rule for {left} {op} {right}")]
    Undefined { left: Dimension, op: char, right: Dimension },

    /// The right operand's base value is exactly zero. The network never
    /// produces IEEE infinities.
    #[error("division by a zero-valued {0} operand")]
    DivisionByZero(Dimension),
}
