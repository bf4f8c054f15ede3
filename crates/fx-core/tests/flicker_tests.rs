// Behavioral tests for the flicker state machine, driven entirely by
// virtual time.

use fx_core::flicker::{FlickerConfig, FlickerScheduler, FlickerTransition};

fn always_config() -> FlickerConfig {
    FlickerConfig {
        probability: 1.0,
        ..FlickerConfig::default()
    }
}

#[test]
fn forced_probability_starts_within_one_check_interval() {
    let cfg = always_config();
    let interval = cfg.check_interval_ms;
    let mut f = FlickerScheduler::new(cfg, 9, 0.0);

    assert!(!f.is_active());
    let t = f.advance(interval);
    assert_eq!(t, Some(FlickerTransition::Started));
    assert!(f.is_active());
}

#[test]
fn window_ends_within_the_configured_max_duration() {
    let cfg = always_config();
    let interval = cfg.check_interval_ms;
    let max_dur = cfg.max_duration_ms;
    let mut f = FlickerScheduler::new(cfg, 10, 0.0);

    f.advance(interval);
    assert!(f.is_active());
    let t = f.advance(interval + max_dur);
    assert_eq!(t, Some(FlickerTransition::Ended));
    assert!(!f.is_active());
}

#[test]
fn zero_probability_never_flickers() {
    let cfg = FlickerConfig {
        probability: 0.0,
        ..FlickerConfig::default()
    };
    let mut f = FlickerScheduler::new(cfg, 11, 0.0);
    for step in 1..200 {
        assert_eq!(f.advance(step as f64 * 500.0), None);
        assert!(!f.is_active());
    }
}

#[test]
fn at_most_one_window_at_a_time() {
    // Checks that land while a window is open must not restart or extend it.
    let cfg = FlickerConfig {
        probability: 1.0,
        check_interval_ms: 100.0,
        min_duration_ms: 250.0,
        max_duration_ms: 250.0,
        ..FlickerConfig::default()
    };
    let mut f = FlickerScheduler::new(cfg, 12, 0.0);

    assert_eq!(f.advance(100.0), Some(FlickerTransition::Started));
    // Two more checks fire inside the open window.
    assert_eq!(f.advance(300.0), None);
    assert!(f.is_active());
    // The window expires 250ms after it started.
    assert_eq!(f.advance(350.0), Some(FlickerTransition::Ended));
}

#[test]
fn style_deltas_are_exposed_only_while_active() {
    let cfg = always_config();
    let interval = cfg.check_interval_ms;
    let style = cfg.style;
    let mut f = FlickerScheduler::new(cfg, 13, 0.0);

    assert!(f.style().is_none());
    f.advance(interval);
    assert_eq!(f.style(), Some(&style));
}

#[test]
fn shutdown_cancels_pending_timers_for_good() {
    let cfg = always_config();
    let interval = cfg.check_interval_ms;
    let mut f = FlickerScheduler::new(cfg, 14, 0.0);

    f.advance(interval);
    assert!(f.is_active());
    f.shutdown();
    assert!(!f.is_active());

    // Advance far past both the expiry and many check intervals: nothing
    // fires, nothing mutates.
    for step in 1..50 {
        assert_eq!(f.advance(interval + step as f64 * 1_000.0), None);
        assert!(!f.is_active());
    }
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut a = FlickerScheduler::new(always_config(), 1, 0.0);
    let b_cfg = FlickerConfig {
        probability: 0.0,
        ..FlickerConfig::default()
    };
    let mut b = FlickerScheduler::new(b_cfg, 1, 0.0);

    // One advance covering several check intervals: `a` opens a window on
    // its first check, `b` must stay idle no matter what `a` does.
    assert_eq!(a.advance(10_000.0), Some(FlickerTransition::Started));
    assert_eq!(b.advance(10_000.0), None);
    assert!(a.is_active());
    assert!(!b.is_active(), "sibling scheduler leaked state");
}

#[test]
fn presets_carry_their_check_intervals() {
    assert_eq!(FlickerConfig::default().check_interval_ms, 2000.0);
    assert_eq!(FlickerConfig::grid_overlay().check_interval_ms, 500.0);
    assert_eq!(FlickerConfig::detail_view().check_interval_ms, 5000.0);
    let grid = FlickerConfig::grid_overlay();
    assert!(grid.min_duration_ms < grid.max_duration_ms);
}
