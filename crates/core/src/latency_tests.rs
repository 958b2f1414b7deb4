// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use std::time::Instant;

#[test]
fn default_simulator_uses_one_millisecond_bound() {
    let simulator = LatencySimulator::default();
    assert_eq!(simulator.max_lag(), Duration::from_millis(1));
    for _ in 0..1000 {
        assert!(simulator.next_delay() < Duration::from_millis(1));
    }
}

#[test]
fn disabled_simulator_never_delays() {
    let simulator = LatencySimulator::disabled();
    for _ in 0..100 {
        assert_eq!(simulator.next_delay(), Duration::ZERO);
    }
}

#[test]
fn sub_microsecond_bound_never_delays() {
    let simulator = LatencySimulator::fixed_seed(Duration::from_nanos(500), 1);
    assert_eq!(simulator.next_delay(), Duration::ZERO);
}

#[test]
fn different_seeds_diverge() {
    let a = LatencySimulator::fixed_seed(Duration::from_secs(1), 1);
    let b = LatencySimulator::fixed_seed(Duration::from_secs(1), 2);
    let seq_a: Vec<_> = (0..16).map(|_| a.next_delay()).collect();
    let seq_b: Vec<_> = (0..16).map(|_| b.next_delay()).collect();
    assert_ne!(seq_a, seq_b);
}

#[tokio::test]
async fn pause_with_zero_bound_returns_immediately() {
    let simulator = LatencySimulator::disabled();
    let start = Instant::now();
    for _ in 0..100 {
        simulator.pause().await;
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn pause_sleeps_for_a_bounded_delay() {
    let simulator = LatencySimulator::fixed_seed(Duration::from_millis(1), 9);
    let start = Instant::now();
    simulator.pause().await;
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn debug_hides_rng_state() {
    let simulator = LatencySimulator::fixed_seed(Duration::from_millis(1), 3);
    let rendered = format!("{:?}", simulator);
    assert!(rendered.contains("max_lag"));
    assert!(!rendered.contains("rng"));
}

proptest! {
    #[test]
    fn delays_stay_below_bound(max_us in 1u64..10_000, seed in any::<u64>()) {
        let simulator = LatencySimulator::fixed_seed(Duration::from_micros(max_us), seed);
        for _ in 0..64 {
            prop_assert!(simulator.next_delay() < Duration::from_micros(max_us));
        }
    }

    #[test]
    fn equal_seeds_replay_same_delays(seed in any::<u64>()) {
        let a = LatencySimulator::fixed_seed(Duration::from_millis(5), seed);
        let b = LatencySimulator::fixed_seed(Duration::from_millis(5), seed);
        for _ in 0..32 {
            prop_assert_eq!(a.next_delay(), b.next_delay());
        }
    }
}
