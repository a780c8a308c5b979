//! Parsing engine.
//!
//! Parsing an input string is a small pipeline over read-only catalog data:
//!
//! ```text
//! catalog (units, composites)
//!        │
//!        │  abbreviations_for          (abbrev.rs)
//!        │    prefix × base expansion, culture fallback, longest-first
//!        ▼
//!   unit_fragment / compile_unit       (pattern.rs)
//!        │    number pattern + escaped abbreviation alternation
//!        ▼
//!   PatternCache                       (cache.rs)
//!        │    compile once per (unit, culture), reuse for the engine's life
//!        ▼
//!   Engine::parse                      (parser.rs)
//!        │    single-unit pass in declaration order, then composite pass
//!        ▼
//!   Quantity
//! ```
//!
//! Everything below the `Engine` is pure and synchronous; the only shared
//! mutable state is the pattern cache, which uses an idempotent
//! insert-if-absent so concurrent callers may race safely.

#[path = "engine/abbrev.rs"]
mod abbrev;
#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/pattern.rs"]
mod pattern;

pub use parser::Engine;

#[allow(unused_imports)]
pub(crate) use abbrev::{AbbrevEntry, abbreviations_for, units_for};
