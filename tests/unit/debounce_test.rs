//! Tests for debounced values
//!
//! Async tests run on a paused tokio clock, so sleeps advance virtual time
//! deterministically and timers fire in order.

use std::time::Duration;

use pagekit::core::{DebouncedValue, Debouncer};
use tokio::time::{Instant, sleep};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// STATE MACHINE
// =============================================================================

#[test]
fn test_only_the_settled_value_is_emitted() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(String::new(), ms(500));

    debouncer.set_value("a".to_string(), t0);
    debouncer.set_value("ab".to_string(), t0 + ms(200));

    let mut emitted = Vec::new();
    for t in (0..=1000).step_by(50) {
        if let Some(value) = debouncer.poll(t0 + ms(t)) {
            emitted.push((t, value.clone()));
        }
    }
    assert_eq!(emitted, vec![(700, "ab".to_string())]);
}

#[test]
fn test_emitted_value_starts_as_initial() {
    let debouncer = Debouncer::new(42, ms(10));
    assert_eq!(*debouncer.emitted(), 42);
    assert_eq!(*debouncer.source(), 42);
    assert_eq!(debouncer.deadline(), None);
}

// =============================================================================
// TOKIO-DRIVEN VALUE
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_search_term_settles_after_typing_pauses() {
    let mut term = DebouncedValue::new(String::new(), ms(500));
    let mut settled = term.subscribe();

    term.set_value("a".to_string());
    sleep(ms(200)).await;
    term.set_value("ab".to_string());

    sleep(ms(499)).await;
    assert_eq!(term.emitted(), "");

    settled.changed().await.unwrap();
    assert_eq!(*settled.borrow_and_update(), "ab");
    assert_eq!(term.emitted(), "ab");
}

#[tokio::test(start_paused = true)]
async fn test_emission_waits_full_delay_after_last_change() {
    let start = Instant::now();
    let mut term = DebouncedValue::new(0_u32, ms(300));
    let mut settled = term.subscribe();

    for i in 1..=5 {
        term.set_value(i);
        sleep(ms(100)).await;
    }

    settled.changed().await.unwrap();
    assert_eq!(*settled.borrow(), 5);
    assert!(start.elapsed() >= ms(400 + 300));
}

#[tokio::test(start_paused = true)]
async fn test_continuous_changes_never_emit() {
    let mut term = DebouncedValue::new(0_u32, ms(500));
    let settled = term.subscribe();

    for i in 1..=100 {
        term.set_value(i);
        sleep(ms(100)).await;
        assert!(!settled.has_changed().unwrap());
    }
    assert_eq!(term.emitted(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shortening_delay_restarts_against_current_value() {
    let mut term = DebouncedValue::new("", ms(1000));
    term.set_value("query");
    sleep(ms(900)).await;

    term.set_delay(ms(200));
    sleep(ms(150)).await;
    assert_eq!(term.emitted(), "");
    sleep(ms(100)).await;
    assert_eq!(term.emitted(), "query");
}

#[tokio::test(start_paused = true)]
async fn test_delay_change_without_pending_value_schedules_nothing() {
    let mut term = DebouncedValue::new("idle", ms(100));
    term.set_delay(ms(10));
    assert!(!term.is_pending());

    term.set_value("next");
    sleep(ms(11)).await;
    assert_eq!(term.emitted(), "next");
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_emits_on_next_tick() {
    let mut term = DebouncedValue::new(1, Duration::ZERO);
    let mut settled = term.subscribe();
    term.set_value(2);

    settled.changed().await.unwrap();
    assert_eq!(*settled.borrow(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_timer() {
    let settled = {
        let mut term = DebouncedValue::new("kept", ms(50));
        let settled = term.subscribe();
        term.set_value("discarded");
        settled
    };

    sleep(ms(500)).await;
    assert_eq!(*settled.borrow(), "kept");
}
