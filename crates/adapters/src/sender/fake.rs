// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake message sender for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{MessageSender, SenderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded sender call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendCall<T> {
    Message(T),
    Serialized(String),
    Close,
}

/// Fake message sender that records every call
pub struct FakeSender<T> {
    calls: Arc<Mutex<Vec<SendCall<T>>>>,
    closed: Arc<AtomicBool>,
    reject_after_close: bool,
}

impl<T> FakeSender<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
            reject_after_close: false,
        }
    }

    /// Create a fake that fails sends with `SenderError::Closed` once closed
    pub fn rejecting_after_close() -> Self {
        Self {
            reject_after_close: true,
            ..Self::new()
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn record(&self, call: SendCall<T>) -> Result<(), SenderError> {
        if self.reject_after_close && self.is_closed() {
            return Err(SenderError::Closed);
        }
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
        Ok(())
    }
}

impl<T: Clone> FakeSender<T> {
    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SendCall<T>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get the payloads passed to `send_message`, in order
    pub fn messages(&self) -> Vec<T> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter_map(|call| match call {
                SendCall::Message(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T> Clone for FakeSender<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
            closed: Arc::clone(&self.closed),
            reject_after_close: self.reject_after_close,
        }
    }
}

impl<T> Default for FakeSender<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Send + 'static> MessageSender for FakeSender<T> {
    type Message = T;

    async fn send_message(&self, data: T) -> Result<(), SenderError> {
        self.record(SendCall::Message(data))
    }

    async fn send_serialized(&self, json_data: &str) -> Result<(), SenderError> {
        self.record(SendCall::Serialized(json_data.to_string()))
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SendCall::Close);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
