//! Process-lifetime pattern cache.
//!
//! Patterns are pure functions of immutable catalog data, so the cache only
//! needs an idempotent insert-if-absent: if two threads build the same
//! pattern concurrently, both results are identical and the first insert
//! wins. Entries are never evicted; build failures are not cached (they are
//! cheap to recompute and callers skip the unit anyway).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::pattern::{CompositePattern, UnitPattern};
use crate::Dimension;
use crate::error::ParseError;

/// Unit pattern key: (unit name, culture id).
type UnitKey = (&'static str, &'static str);
/// Composite pattern key: (dimension, registration index, culture id).
type CompositeKey = (Dimension, usize, &'static str);

#[derive(Debug, Default)]
pub(crate) struct PatternCache {
    units: RwLock<HashMap<UnitKey, Arc<UnitPattern>>>,
    composites: RwLock<HashMap<CompositeKey, Arc<CompositePattern>>>,
}

impl PatternCache {
    pub fn unit<F>(&self, key: UnitKey, build: F) -> Result<Arc<UnitPattern>, ParseError>
    where
        F: FnOnce() -> Result<UnitPattern, ParseError>,
    {
        if let Some(hit) = self.units.read().expect("pattern cache poisoned").get(&key) {
            return Ok(Arc::clone(hit));
        }
        let built = Arc::new(build()?);
        let mut map = self.units.write().expect("pattern cache poisoned");
        Ok(Arc::clone(map.entry(key).or_insert(built)))
    }

    pub fn composite<F>(&self, key: CompositeKey, build: F) -> Result<Arc<CompositePattern>, ParseError>
    where
        F: FnOnce() -> Result<CompositePattern, ParseError>,
    {
        if let Some(hit) = self.composites.read().expect("pattern cache poisoned").get(&key) {
            return Ok(Arc::clone(hit));
        }
        let built = Arc::new(build()?);
        let mut map = self.composites.write().expect("pattern cache poisoned");
        Ok(Arc::clone(map.entry(key).or_insert(built)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::engine::pattern::compile_unit;
    use crate::number::EN;

    #[test]
    fn second_lookup_reuses_the_first_build() {
        let cache = PatternCache::default();
        let meter = catalog().unit("meter").unwrap();
        let first = cache.unit(("meter", "en"), || compile_unit(meter, &EN)).unwrap();
        let second = cache
            .unit(("meter", "en"), || panic!("cache hit must not rebuild"))
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn build_failures_are_not_cached() {
        let cache = PatternCache::default();
        let sm = catalog().unit("scandinavian_mile").unwrap();
        assert!(cache.unit(("scandinavian_mile", "en"), || compile_unit(sm, &EN)).is_err());
        assert!(cache.units.read().unwrap().is_empty());
    }
}
