// Behavioral tests for the virtual-time timer queue.

use fx_core::timer::TimerQueue;

#[test]
fn one_shot_fires_once_at_due_time() {
    let mut q = TimerQueue::new();
    let h = q.schedule_once(0.0, 100.0);

    assert!(q.advance(99.0).is_empty(), "fired before due time");
    let fired = q.advance(100.0);
    assert_eq!(fired.as_slice(), &[h]);
    assert!(q.advance(10_000.0).is_empty(), "one-shot fired twice");
}

#[test]
fn repeating_timer_fires_every_period() {
    let mut q = TimerQueue::new();
    let h = q.schedule_repeating(0.0, 500.0);

    assert!(q.advance(499.0).is_empty());
    assert_eq!(q.advance(500.0).as_slice(), &[h]);
    assert!(q.advance(999.0).is_empty());
    assert_eq!(q.advance(1000.0).as_slice(), &[h]);
}

#[test]
fn repeating_timer_catches_up_one_fire_per_elapsed_period() {
    let mut q = TimerQueue::new();
    let h = q.schedule_repeating(0.0, 100.0);

    // Jump four periods ahead in one advance.
    let fired = q.advance(400.0);
    assert_eq!(fired.as_slice(), &[h, h, h, h]);
    assert!(q.advance(400.0).is_empty());
}

#[test]
fn cancelled_timer_never_fires_even_past_due() {
    let mut q = TimerQueue::new();
    let h = q.schedule_once(0.0, 50.0);
    q.cancel(h);
    assert!(q.advance(1_000.0).is_empty());
}

#[test]
fn cancel_all_clears_every_pending_timer() {
    let mut q = TimerQueue::new();
    q.schedule_once(0.0, 10.0);
    q.schedule_repeating(0.0, 20.0);
    assert_eq!(q.pending(), 2);
    q.cancel_all();
    assert_eq!(q.pending(), 0);
    assert!(q.advance(1_000.0).is_empty());
}

#[test]
fn timers_fire_in_due_time_order() {
    let mut q = TimerQueue::new();
    let late = q.schedule_once(0.0, 300.0);
    let early = q.schedule_once(0.0, 100.0);
    let mid = q.schedule_once(0.0, 200.0);

    let fired = q.advance(300.0);
    assert_eq!(fired.as_slice(), &[early, mid, late]);
}

#[test]
fn degenerate_period_is_clamped_not_spinning() {
    let mut q = TimerQueue::new();
    let h = q.schedule_repeating(0.0, 0.0);
    // A zero period would fire unboundedly often; the clamp keeps the fire
    // count proportional to elapsed virtual time.
    let fired = q.advance(10.0);
    assert!(!fired.is_empty());
    assert!(fired.len() <= 10);
    assert!(fired.iter().all(|f| *f == h));
}

#[test]
fn negative_delay_fires_on_next_advance_not_before_now() {
    let mut q = TimerQueue::new();
    let h = q.schedule_once(100.0, -50.0);
    assert!(q.advance(99.0).is_empty());
    assert_eq!(q.advance(100.0).as_slice(), &[h]);
}
