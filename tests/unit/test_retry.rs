use relayo_client::model::retry::RetryPolicy;
use std::time::Duration;

#[test]
fn test_retry_policy_default() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.max_retries, 3);
    assert_eq!(policy.delay, Duration::from_secs(1));
    assert!(policy.exponential_backoff);
    assert_eq!(policy.max_attempts(), 4);
}

#[test]
fn test_exponential_delay_doubles() {
    let base = Duration::from_secs(3);
    let policy = RetryPolicy::new(10, base, true);
    for k in 1..=8u32 {
        assert_eq!(policy.delay_for_attempt(k), base * 2u32.pow(k - 1));
    }
}

#[test]
fn test_flat_delay_is_constant() {
    let policy = RetryPolicy::new(10, Duration::from_millis(750), false);
    assert!((1..=10).all(|k| policy.delay_for_attempt(k) == Duration::from_millis(750)));
}

#[test]
fn test_zero_delay() {
    let policy = RetryPolicy::new(3, Duration::ZERO, true);
    assert_eq!(policy.delay_for_attempt(3), Duration::ZERO);
}

#[test]
fn test_max_attempts_saturates() {
    let policy = RetryPolicy::new(u32::MAX, Duration::ZERO, false);
    assert_eq!(policy.max_attempts(), u32::MAX);
}
