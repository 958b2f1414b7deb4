// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message sending adapters

mod mock;

pub use mock::{MockSender, SenderState};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSender, SendCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from send operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SenderError {
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("sender is closed")]
    Closed,
}

/// Adapter for sending messages to the gateway's upstream transport
#[async_trait]
pub trait MessageSender: Clone + Send + Sync + 'static {
    /// Payload type accepted by `send_message`
    type Message: Send + 'static;

    /// Send a single message
    async fn send_message(&self, data: Self::Message) -> Result<(), SenderError>;

    /// Send a message that was already serialized to JSON
    async fn send_serialized(&self, json_data: &str) -> Result<(), SenderError>;

    /// Release transport resources. Safe to call repeatedly.
    fn close(&self);
}
