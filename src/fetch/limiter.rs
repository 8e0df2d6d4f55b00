//! Static rate limiting between fetches
//!
//! The site is throttled with fixed delays rather than anything adaptive.
//! The delay source is a trait so tests can run against a zero-delay
//! implementation instead of real wall-clock sleeps.

use crate::config::LimitsConfig;
use std::time::Duration;

/// Which kind of fetch just completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    /// An index page fetch during frontier seeding
    Index,
    /// A poem page or subpage fetch
    Page,
}

/// Source of inter-fetch delays
pub trait Throttle {
    /// Returns how long to pause after a fetch of the given kind
    fn delay_for(&self, kind: Pause) -> Duration;
}

/// Fixed-delay limiter matching the configured per-kind pauses
#[derive(Debug, Clone)]
pub struct FixedDelay {
    index: Duration,
    page: Duration,
}

impl FixedDelay {
    pub fn new(index: Duration, page: Duration) -> Self {
        Self { index, page }
    }

    /// Builds the limiter from the timing configuration
    pub fn from_limits(limits: &LimitsConfig) -> Self {
        Self::new(
            Duration::from_millis(limits.index_delay_ms),
            Duration::from_millis(limits.page_delay_ms),
        )
    }
}

impl Throttle for FixedDelay {
    fn delay_for(&self, kind: Pause) -> Duration {
        match kind {
            Pause::Index => self.index,
            Pause::Page => self.page,
        }
    }
}

/// Zero-delay limiter for tests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Throttle for NoDelay {
    fn delay_for(&self, _kind: Pause) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delay_from_limits() {
        let limits = LimitsConfig {
            index_delay_ms: 1000,
            page_delay_ms: 500,
            ..LimitsConfig::default()
        };
        let limiter = FixedDelay::from_limits(&limits);

        assert_eq!(limiter.delay_for(Pause::Index), Duration::from_millis(1000));
        assert_eq!(limiter.delay_for(Pause::Page), Duration::from_millis(500));
    }

    #[test]
    fn test_no_delay_is_zero() {
        assert_eq!(NoDelay.delay_for(Pause::Index), Duration::ZERO);
        assert_eq!(NoDelay.delay_for(Pause::Page), Duration::ZERO);
    }
}
