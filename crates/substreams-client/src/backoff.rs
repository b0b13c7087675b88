// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Bounded exponential backoff for reconnecting a dropped stream.
///
/// The delay doubles on every attempt, starting from `base_delay` and capped
/// at `max_delay`; after `max_attempts` failed reconnections the stream is
/// given up on.
#[derive(Clone, Copy, Debug)]
pub struct BackoffPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl BackoffPolicy {
    /// Delay before the `attempt`-th retry (1-based), or `None` once the
    /// attempts are exhausted.
    pub fn delay(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        let exponent = (attempt - 1).min(31);
        let delay = self.base_delay.saturating_mul(1u32 << exponent);
        Some(delay.min(self.max_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_from_base_delay() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay(1), Some(Duration::from_millis(500)));
        assert_eq!(policy.delay(2), Some(Duration::from_secs(1)));
        assert_eq!(policy.delay(3), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay(4), Some(Duration::from_secs(4)));
        assert_eq!(policy.delay(5), Some(Duration::from_secs(8)));
    }

    #[test]
    fn capped_at_max_delay() {
        let policy = BackoffPolicy {
            max_attempts: 12,
            ..Default::default()
        };
        assert_eq!(policy.delay(12), Some(Duration::from_secs(30)));
    }

    #[test]
    fn exhausts_after_max_attempts() {
        let policy = BackoffPolicy::default();
        assert!(policy.delay(5).is_some());
        assert!(policy.delay(6).is_none());
        assert!(policy.delay(0).is_none());
    }
}
