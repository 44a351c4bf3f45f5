use super::*;

#[test]
fn issue_at_uses_timestamp_when_ahead() {
    let ids = IdGenerator::new();
    assert_eq!(ids.issue_at(1_000), 1_000);
    assert_eq!(ids.issue_at(2_000), 2_000);
}

#[test]
fn issue_at_same_millisecond_bumps_past_last() {
    let ids = IdGenerator::new();
    let a = ids.issue_at(5_000);
    let b = ids.issue_at(5_000);
    let c = ids.issue_at(5_000);
    assert_eq!((a, b, c), (5_000, 5_001, 5_002));
}

#[test]
fn issue_at_clock_going_backwards_stays_increasing() {
    let ids = IdGenerator::new();
    let a = ids.issue_at(9_000);
    let b = ids.issue_at(8_000);
    assert!(b > a);
}

#[test]
fn observe_pushes_next_id_past_existing() {
    let ids = IdGenerator::new();
    ids.observe(10_000);
    assert_eq!(ids.issue_at(3_000), 10_001);
}

#[test]
fn observe_never_lowers_last() {
    let ids = IdGenerator::new();
    ids.observe(10_000);
    ids.observe(20);
    assert_eq!(ids.issue_at(0), 10_001);
}

#[test]
fn next_id_is_clock_derived_and_unique() {
    let ids = IdGenerator::new();
    let a = ids.next_id();
    let b = ids.next_id();
    assert!(a > 0);
    assert!(b > a);
}
