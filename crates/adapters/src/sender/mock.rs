// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion-tracking mock sender
//!
//! Every send sleeps for a simulated latency, then bumps a shared atomic
//! counter. The single call whose post-increment value equals the fixture's
//! expected total fires `SendFixture::completed`. Post-increment values are
//! unique, so no extra "already notified" flag is needed.

use super::{MessageSender, SenderError};
use async_trait::async_trait;
use gw_core::{LatencySimulator, SendFixture, SenderConfig};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Progress of a mock sender towards the fixture's expected total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderState {
    /// No sends processed yet
    Idle,
    /// Sends processed, expected total not reached
    Accumulating,
    /// Completion has fired. Later sends are counted but never fire again.
    Completed,
}

/// Mock sender that discards payloads and reports completion to a fixture.
///
/// Clones share the same counter and fixture.
pub struct MockSender<T, F> {
    fixture: Arc<F>,
    latency: Arc<LatencySimulator>,
    sent: Arc<AtomicU64>,
    /// Counter value at which completion fired, 0 if it has not
    completed_at: Arc<AtomicU64>,
    _message: PhantomData<fn(T)>,
}

impl<T, F: SendFixture> MockSender<T, F> {
    pub fn new(fixture: Arc<F>, latency: LatencySimulator) -> Self {
        Self {
            fixture,
            latency: Arc::new(latency),
            sent: Arc::new(AtomicU64::new(0)),
            completed_at: Arc::new(AtomicU64::new(0)),
            _message: PhantomData,
        }
    }

    pub fn from_config(fixture: Arc<F>, config: &SenderConfig) -> Self {
        Self::new(fixture, LatencySimulator::new(&config.latency))
    }

    pub fn fixture(&self) -> &Arc<F> {
        &self.fixture
    }

    /// Number of sends processed so far
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::SeqCst)
    }

    /// Counter value whose send fired completion
    pub fn completed_at(&self) -> Option<u64> {
        match self.completed_at.load(Ordering::SeqCst) {
            0 => None,
            at => Some(at),
        }
    }

    pub fn state(&self) -> SenderState {
        if self.completed_at().is_some() {
            SenderState::Completed
        } else if self.sent() == 0 {
            SenderState::Idle
        } else {
            SenderState::Accumulating
        }
    }

    /// Perform one simulated send and return its post-increment counter value
    pub async fn send_counted(&self) -> u64 {
        self.latency.pause().await;

        let sent = self.sent.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        let expected = self.fixture.total_messages_to_send();
        tracing::trace!(
            sent,
            expected,
            issued = self.fixture.total_messages_sent(),
            "mock send"
        );

        // A zero total means the fixture has not decided yet
        if expected >= 1 && sent == expected {
            self.completed_at.store(sent, Ordering::SeqCst);
            tracing::info!(sent, "all expected messages sent");
            self.fixture.completed();
        }

        sent
    }
}

impl<T, F> Clone for MockSender<T, F> {
    fn clone(&self) -> Self {
        Self {
            fixture: Arc::clone(&self.fixture),
            latency: Arc::clone(&self.latency),
            sent: Arc::clone(&self.sent),
            completed_at: Arc::clone(&self.completed_at),
            _message: PhantomData,
        }
    }
}

#[async_trait]
impl<T, F> MessageSender for MockSender<T, F>
where
    T: Send + 'static,
    F: SendFixture + 'static,
{
    type Message = T;

    async fn send_message(&self, _data: T) -> Result<(), SenderError> {
        self.send_counted().await;
        Ok(())
    }

    async fn send_serialized(&self, json_data: &str) -> Result<(), SenderError> {
        tracing::warn!(
            json_len = json_data.len(),
            "serialized send is not supported by the mock sender"
        );
        Err(SenderError::UnsupportedOperation("send_serialized"))
    }

    fn close(&self) {}
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
