use std::rc::Rc;

use providers::ProviderError;
use providers::codeforces::ProblemMap;
use yewdux::prelude::*;

/// Cross-page shared state. The problemset catalog lives here so every
/// profile lookup after the first reuses the single fetched copy.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Set by the lock screen after a correct PIN; mirrored to
    /// sessionStorage so a reload within the session stays unlocked.
    pub unlocked: bool,

    pub problemset: ProblemsetCache,
}

/// Explicit lifecycle for the once-per-app problemset fetch. A failed fetch
/// poisons the cache instead of retrying: readers then get an empty catalog
/// and the page degrades the charts that need it.
#[derive(Default, Clone)]
pub enum ProblemsetCache {
    #[default]
    Empty,
    Loading,
    Ready(Rc<ProblemMap>),
    Poisoned,
}

impl PartialEq for ProblemsetCache {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty)
            | (Self::Loading, Self::Loading)
            | (Self::Poisoned, Self::Poisoned) => true,
            // The catalog is written once; pointer identity is enough.
            (Self::Ready(a), Self::Ready(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl ProblemsetCache {
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_poisoned(&self) -> bool {
        matches!(self, Self::Poisoned)
    }

    /// The first consumer moves the cache to `Loading` and owns the fetch.
    /// Anyone arriving later, including after a poisoning failure, leaves it
    /// alone and returns false.
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_empty_state() {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Applies the fetch outcome. A failure poisons the cache for the rest
    /// of the app lifetime; there is no retry path.
    pub fn settle(&mut self, result: Result<ProblemMap, ProviderError>) {
        *self = match result {
            Ok(catalog) => Self::Ready(Rc::new(catalog)),
            Err(_) => Self::Poisoned,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_consumer_starts_the_fetch() {
        let mut cache = ProblemsetCache::default();
        assert!(cache.begin_fetch());
        // Already loading; later consumers wait instead of refetching.
        assert!(!cache.begin_fetch());
    }

    #[test]
    fn a_failed_fetch_poisons_with_no_retry() {
        let mut cache = ProblemsetCache::default();
        assert!(cache.begin_fetch());
        cache.settle(Err(ProviderError::upstream("Codeforces API Error: unavailable")));
        assert!(cache.is_poisoned());
        assert!(!cache.begin_fetch());
    }

    #[test]
    fn a_successful_fetch_is_ready_and_stays_ready() {
        let mut cache = ProblemsetCache::default();
        assert!(cache.begin_fetch());
        cache.settle(Ok(ProblemMap::new()));
        assert!(matches!(cache, ProblemsetCache::Ready(_)));
        assert!(!cache.begin_fetch());
    }
}
