//! End-to-end timer accounting tests.
//!
//! These drive the engine through whole sessions on a manual clock,
//! including the concurrent expiry race between the foreground path and the
//! background ticker.

use std::time::Duration;

use fokus_core::{ManualClock, TimerEngine, TimerError, TimerStatus};
use proptest::prelude::*;

fn engine() -> (TimerEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (TimerEngine::with_clock(clock.clone()), clock)
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn full_session_runs_to_completion() {
    let (engine, clock) = engine();
    engine.start(25).unwrap();

    match engine.poll() {
        TimerStatus::Running {
            remaining_secs,
            percentage,
            ..
        } => {
            assert_eq!(remaining_secs, 1500);
            assert_eq!(percentage, 0);
        }
        other => panic!("expected Running, got {other:?}"),
    }

    clock.advance(secs(1500));
    assert_eq!(engine.poll(), TimerStatus::Completed);

    let stats = engine.statistics().unwrap();
    assert_eq!(stats.sessions, 1);
    assert_eq!(stats.total_minutes, 25);
    assert_eq!(stats.total_hours, 0.42);
}

#[test]
fn paused_time_never_counts_toward_the_session() {
    let (engine, clock) = engine();
    engine.start(10).unwrap();
    clock.advance(secs(60));
    engine.pause().unwrap();
    clock.advance(secs(300));
    engine.resume().unwrap();

    match engine.poll() {
        TimerStatus::Running { remaining_secs, .. } => assert_eq!(remaining_secs, 540),
        other => panic!("expected Running, got {other:?}"),
    }
}

#[test]
fn control_commands_fail_cleanly_with_nothing_running() {
    let (engine, _clock) = engine();
    assert_eq!(engine.stop().unwrap_err(), TimerError::NoActiveTimer);
    assert_eq!(engine.pause(), Err(TimerError::NoActiveTimer));
    assert_eq!(engine.resume(), Err(TimerError::NoActiveTimer));
    assert_eq!(engine.poll(), TimerStatus::Idle);
}

#[test]
fn starting_twice_keeps_the_first_session() {
    let (engine, clock) = engine();
    engine.start(25).unwrap();
    assert_eq!(engine.start(10), Err(TimerError::AlreadyActive));

    clock.advance(secs(30));
    match engine.poll() {
        TimerStatus::Running { remaining_secs, .. } => assert_eq!(remaining_secs, 1470),
        other => panic!("expected Running, got {other:?}"),
    }
}

/// Two callers racing `poll` at the expiry instant must record exactly one
/// completion between them.
#[test]
fn concurrent_polls_record_one_completion() {
    for _ in 0..50 {
        let (engine, clock) = engine();
        engine.start(1).unwrap();
        clock.advance(secs(60));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.poll())
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let completed = results
            .iter()
            .filter(|s| **s == TimerStatus::Completed)
            .count();
        let idle = results.iter().filter(|s| **s == TimerStatus::Idle).count();
        assert_eq!(completed, 1);
        assert_eq!(idle, 1);
        assert_eq!(engine.statistics().unwrap().sessions, 1);
        assert_eq!(engine.poll(), TimerStatus::Idle);
    }
}

proptest! {
    /// Any interleaving of run and pause intervals accounts elapsed time as
    /// exactly the sum of the run intervals.
    #[test]
    fn pause_cycles_never_double_count(cycles in prop::collection::vec((0u64..60, 0u64..600), 1..10)) {
        let (engine, clock) = engine();
        engine.start(120).unwrap();

        let mut expected = 0u64;
        for (run, paused) in cycles {
            clock.advance(secs(run));
            expected += run;
            engine.pause().unwrap();
            clock.advance(secs(paused));
            engine.resume().unwrap();
        }

        match engine.poll() {
            TimerStatus::Running { elapsed_secs, remaining_secs, .. } => {
                prop_assert_eq!(elapsed_secs, expected);
                prop_assert_eq!(remaining_secs, 120 * 60 - expected);
            }
            other => prop_assert!(false, "expected Running, got {:?}", other),
        }
    }

    /// Remaining time is non-increasing under monotone clock advances.
    #[test]
    fn remaining_is_monotone(advances in prop::collection::vec(0u64..200, 1..30)) {
        let (engine, clock) = engine();
        engine.start(60).unwrap();

        let mut last = u64::MAX;
        for step in advances {
            clock.advance(secs(step));
            match engine.poll() {
                TimerStatus::Running { remaining_secs, .. } => {
                    prop_assert!(remaining_secs <= last);
                    last = remaining_secs;
                }
                TimerStatus::Completed => break,
                TimerStatus::Idle => prop_assert!(false, "session vanished"),
            }
        }
    }
}
