// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Latency simulation for mock transports
//!
//! Each draw is uniform over `[0, max_lag)` at microsecond resolution. The
//! RNG belongs to the simulator instance, so seeded simulators replay the
//! same delay sequence.

use crate::config::LatencyConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

/// Produces small random delays to interleave concurrent sends
pub struct LatencySimulator {
    max_lag: Duration,
    rng: Mutex<StdRng>,
}

impl LatencySimulator {
    pub fn new(config: &LatencyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            max_lag: config.max_lag,
            rng: Mutex::new(rng),
        }
    }

    /// Create a simulator with a reproducible delay sequence
    pub fn fixed_seed(max_lag: Duration, seed: u64) -> Self {
        Self::new(&LatencyConfig {
            max_lag,
            seed: Some(seed),
        })
    }

    /// Create a simulator that never sleeps
    pub fn disabled() -> Self {
        Self::fixed_seed(Duration::ZERO, 0)
    }

    pub fn max_lag(&self) -> Duration {
        self.max_lag
    }

    /// Draw the next delay without sleeping
    pub fn next_delay(&self) -> Duration {
        let bound = u64::try_from(self.max_lag.as_micros()).unwrap_or(u64::MAX);
        if bound == 0 {
            return Duration::ZERO;
        }
        let micros = self
            .rng
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .gen_range(0..bound);
        Duration::from_micros(micros)
    }

    /// Suspend the caller for the next drawn delay.
    ///
    /// A zero delay still yields to the scheduler so that concurrent senders interleave.
    pub async fn pause(&self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(&LatencyConfig::default())
    }
}

impl fmt::Debug for LatencySimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatencySimulator")
            .field("max_lag", &self.max_lag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "latency_tests.rs"]
mod tests;
