// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gw-core: Building blocks for the gateway's simulated message senders
//!
//! This crate provides:
//! - Seeded latency simulation standing in for transport variance
//! - Sender configuration loaded from TOML
//! - The fixture contract a completion-tracking sender reports to

pub mod config;
pub mod fixture;
pub mod latency;

pub use config::{ConfigError, LatencyConfig, SenderConfig, DEFAULT_MAX_LAG};
pub use fixture::{CountingFixture, SendFixture};
pub use latency::LatencySimulator;
