// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture contract for completion-tracking senders
//!
//! A fixture owns the expected total and observes completion. Senders read
//! the total on every call, so a fixture may raise it while sends are in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Notify;

/// What a completion-tracking sender reads from and reports to
pub trait SendFixture: Send + Sync {
    /// Number of messages the run intends to send in total
    fn total_messages_to_send(&self) -> u64;

    /// Number of sends issued so far (diagnostic only)
    fn total_messages_sent(&self) -> u64;

    /// Called once the last expected send has completed
    fn completed(&self);
}

/// Fixture backed by atomics, with an awaitable completion signal
#[derive(Debug, Default)]
pub struct CountingFixture {
    to_send: AtomicU64,
    sent: AtomicU64,
    completions: AtomicU64,
    notify: Notify,
}

impl CountingFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(total: u64) -> Self {
        let fixture = Self::new();
        fixture.set_total_messages_to_send(total);
        fixture
    }

    pub fn set_total_messages_to_send(&self, total: u64) {
        self.to_send.store(total, Ordering::SeqCst);
    }

    /// Record that the harness issued one more send, returning the issued count
    pub fn record_sent(&self) -> u64 {
        self.sent.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    /// Number of times `completed` has been called
    pub fn completions(&self) -> u64 {
        self.completions.load(Ordering::SeqCst)
    }

    pub fn is_completed(&self) -> bool {
        self.completions() > 0
    }

    /// Wait until at least one completion has been signalled
    pub async fn wait_completed(&self) {
        loop {
            // Registered before the check so a concurrent notify_waiters is not lost
            let notified = self.notify.notified();
            if self.is_completed() {
                return;
            }
            notified.await;
        }
    }
}

impl SendFixture for CountingFixture {
    fn total_messages_to_send(&self) -> u64 {
        self.to_send.load(Ordering::SeqCst)
    }

    fn total_messages_sent(&self) -> u64 {
        self.sent.load(Ordering::SeqCst)
    }

    fn completed(&self) {
        let completions = self.completions.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        if completions > 1 {
            tracing::warn!(completions, "completion signalled more than once");
        }
        self.notify.notify_waiters();
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
