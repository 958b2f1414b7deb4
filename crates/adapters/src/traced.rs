// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sender wrapper for consistent observability

use crate::sender::{MessageSender, SenderError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any MessageSender
#[derive(Clone)]
pub struct TracedSender<S> {
    inner: S,
}

impl<S> TracedSender<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: MessageSender> MessageSender for TracedSender<S> {
    type Message = S::Message;

    async fn send_message(&self, data: Self::Message) -> Result<(), SenderError> {
        async move {
            tracing::debug!("sending");

            let start = std::time::Instant::now();
            let result = self.inner.send_message(data).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "sent"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "send failed"
                ),
            }

            result
        }
        .instrument(tracing::info_span!("sender.send"))
        .await
    }

    async fn send_serialized(&self, json_data: &str) -> Result<(), SenderError> {
        let span = tracing::info_span!("sender.send_serialized", json_len = json_data.len());
        async move {
            let result = self.inner.send_serialized(json_data).await;
            match &result {
                Ok(()) => tracing::debug!("sent"),
                Err(e) => tracing::error!(error = %e, "send failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    fn close(&self) {
        self.inner.close();
        tracing::info!("sender closed");
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
