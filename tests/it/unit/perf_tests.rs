//! Unit tests for perf module.

use cheatsheet::perf::{ScopedTimer, measure, measure_and_log};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping logs nothing
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_measure_and_log_passes_through() {
    let value = measure_and_log("sum", 1000.0, || (1..=10).sum::<i32>());
    assert_eq!(value, 55);
}
