/// Ordering guard for overlapping fetches. Rapid successive navigations can
/// leave several requests in flight for the same concern; each one takes a
/// token when it starts, and a resolution is applied only while its token is
/// still current. A slow early response can therefore never overwrite the
/// result of a later request.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    /// Starts a new fetch, superseding everything already in flight, and
    /// returns its token.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a resolution carrying this token may still be applied.
    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_newer_fetch_supersedes_an_older_one() {
        let mut generations = GenerationCounter::default();
        let slow = generations.begin();
        let fast = generations.begin();
        // The slow request resolves last, but its token is stale by then.
        assert!(generations.is_current(fast));
        assert!(!generations.is_current(slow));
    }

    #[test]
    fn the_latest_token_stays_current_until_the_next_begin() {
        let mut generations = GenerationCounter::default();
        let token = generations.begin();
        assert!(generations.is_current(token));
        generations.begin();
        assert!(!generations.is_current(token));
    }

    #[test]
    fn beginning_without_fetching_still_invalidates() {
        // Disabling a fetch concern bumps the counter so anything in flight
        // is discarded rather than applied to the now-idle state.
        let mut generations = GenerationCounter::default();
        let in_flight = generations.begin();
        generations.begin();
        assert!(!generations.is_current(in_flight));
    }
}
