// File: crates/chart-core/tests/reveal.rs
// Purpose: Validate staggered reveal timers and their cancellation.

use touchchart_core::RevealSchedule;

#[test]
fn timers_fire_in_index_order() {
    let mut reveal = RevealSchedule::new();
    reveal.arm(5, 0);
    assert_eq!(reveal.pending().len(), 5);

    assert_eq!(reveal.tick(0.0, 0), vec![0]);
    assert_eq!(reveal.tick(0.25, 0), vec![1, 2]);
    assert!(reveal.is_revealed(2));
    assert!(!reveal.is_revealed(3));

    assert_eq!(reveal.tick(1.0, 0), vec![3, 4]);
    assert!(reveal.is_idle());
    assert!(reveal.tick(1.0, 0).is_empty());
}

#[test]
fn stale_generation_timers_are_inert() {
    let mut reveal = RevealSchedule::new();
    reveal.arm(4, 0);
    assert_eq!(reveal.tick(0.15, 0), vec![0, 1]);
    assert!(reveal.is_revealed(1));

    assert!(reveal.tick(1.0, 1).is_empty());
    assert!(reveal.is_idle());
    assert!(!reveal.is_revealed(0));
    assert!(!reveal.is_revealed(1));
}

#[test]
fn rearming_cancels_previous_timers() {
    let mut reveal = RevealSchedule::new();
    reveal.arm(6, 0);
    assert_eq!(reveal.tick(0.15, 0), vec![0, 1]);

    reveal.arm(2, 1);
    assert_eq!(reveal.generation(), 1);
    assert_eq!(reveal.pending().len(), 2);
    assert!(!reveal.is_revealed(0));

    assert_eq!(reveal.tick(1.0, 1), vec![0, 1]);
    assert!(!reveal.is_revealed(5));
}

#[test]
fn reveal_all_skips_timers() {
    let mut reveal = RevealSchedule::new();
    reveal.arm(3, 0);
    reveal.reveal_all(3, 0);
    assert!(reveal.is_idle());
    assert!((0..3).all(|i| reveal.is_revealed(i)));
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut reveal = RevealSchedule::new();
    reveal.arm(2, 0);
    reveal.tick(0.0, 0);
    assert!(reveal.tick(-5.0, 0).is_empty());
    assert_eq!(reveal.tick(0.1, 0), vec![1]);
}
