//! Ordering of overlapping reloads.

/// Hands out a number per reload and remembers the newest one.
///
/// Responses can arrive out of order; only the response for the most
/// recently started reload may be applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadGeneration {
    latest: u64,
}

impl ReloadGeneration {
    /// Start a reload and return its generation
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reload_is_current() {
        let mut reloads = ReloadGeneration::default();
        let first = reloads.begin();
        assert!(reloads.is_current(first));
    }

    #[test]
    fn test_older_response_arriving_last_is_dropped() {
        let mut reloads = ReloadGeneration::default();
        let older = reloads.begin();
        let newer = reloads.begin();

        // Newer response lands first and is applied
        assert!(reloads.is_current(newer));
        // Older one lands afterwards and must not overwrite it
        assert!(!reloads.is_current(older));
    }

    #[test]
    fn test_starting_a_reload_invalidates_pending_ones() {
        let mut reloads = ReloadGeneration::default();
        let pending = reloads.begin();
        reloads.begin();
        reloads.begin();
        assert!(!reloads.is_current(pending));
    }
}
