//! Probabilistic neon-flicker state machine.
//!
//! Each managed element owns one scheduler; instances are fully independent.
//! The machine has two states, Idle and Flickering. A repeating check timer
//! rolls a trigger probability; on success the element flickers for a short
//! randomized window, then reverts. All timing flows through [`TimerQueue`],
//! so tests advance virtual time instead of sleeping.

use crate::constants::{
    FLICKER_BRIGHTNESS, FLICKER_CHECK_INTERVAL_DETAIL_MS, FLICKER_CHECK_INTERVAL_GRID_MS,
    FLICKER_CHECK_INTERVAL_MS, FLICKER_CONTRAST, FLICKER_DURATION_GRID_MAX_MS,
    FLICKER_DURATION_GRID_MIN_MS, FLICKER_DURATION_MAX_MS, FLICKER_DURATION_MIN_MS,
    FLICKER_GLOW_RADIUS_PX, FLICKER_GLOW_STRENGTH, FLICKER_NOISE_OPACITY, FLICKER_PROBABILITY,
};
use crate::timer::{TimerHandle, TimerQueue};
use rand::prelude::*;

/// Compositing deltas an element exposes while its flicker window is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickerStyle {
    pub noise_opacity: f32,
    pub glow_strength: f32,
    pub glow_radius_px: f32,
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for FlickerStyle {
    fn default() -> Self {
        Self {
            noise_opacity: FLICKER_NOISE_OPACITY,
            glow_strength: FLICKER_GLOW_STRENGTH,
            glow_radius_px: FLICKER_GLOW_RADIUS_PX,
            brightness: FLICKER_BRIGHTNESS,
            contrast: FLICKER_CONTRAST,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FlickerConfig {
    pub check_interval_ms: f64,
    /// Chance per check of entering a flicker window, in [0, 1].
    pub probability: f64,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    pub style: FlickerStyle,
}

impl Default for FlickerConfig {
    /// Gallery-tile preset: a check every two seconds, one in ten triggers.
    fn default() -> Self {
        Self {
            check_interval_ms: FLICKER_CHECK_INTERVAL_MS,
            probability: FLICKER_PROBABILITY,
            min_duration_ms: FLICKER_DURATION_MIN_MS,
            max_duration_ms: FLICKER_DURATION_MAX_MS,
            style: FlickerStyle::default(),
        }
    }
}

impl FlickerConfig {
    /// Grid-overlay preset: frequent short blips.
    pub fn grid_overlay() -> Self {
        Self {
            check_interval_ms: FLICKER_CHECK_INTERVAL_GRID_MS,
            min_duration_ms: FLICKER_DURATION_GRID_MIN_MS,
            max_duration_ms: FLICKER_DURATION_GRID_MAX_MS,
            ..Self::default()
        }
    }

    /// Detail-view preset: same feel as a tile, much less frequent.
    pub fn detail_view() -> Self {
        Self {
            check_interval_ms: FLICKER_CHECK_INTERVAL_DETAIL_MS,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlickerTransition {
    Started,
    Ended,
}

#[derive(Clone, Copy, Debug)]
enum State {
    Idle,
    Flickering { expiry: TimerHandle },
}

pub struct FlickerScheduler {
    cfg: FlickerConfig,
    timers: TimerQueue,
    check: TimerHandle,
    state: State,
    rng: StdRng,
    live: bool,
}

impl FlickerScheduler {
    pub fn new(cfg: FlickerConfig, seed: u64, now_ms: f64) -> Self {
        let mut timers = TimerQueue::new();
        let check = timers.schedule_repeating(now_ms, cfg.check_interval_ms);
        Self {
            cfg,
            timers,
            check,
            state: State::Idle,
            rng: StdRng::seed_from_u64(seed),
            live: true,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Flickering { .. })
    }

    /// Style deltas for the compositor; `None` while idle.
    pub fn style(&self) -> Option<&FlickerStyle> {
        self.is_active().then_some(&self.cfg.style)
    }

    pub fn config(&self) -> &FlickerConfig {
        &self.cfg
    }

    /// Drive the machine to `now_ms`. Returns the last state edge observed,
    /// if any. An expiry is always scheduled relative to the advance that
    /// started the window, so a window never ends in the same advance that
    /// opened it.
    pub fn advance(&mut self, now_ms: f64) -> Option<FlickerTransition> {
        if !self.live {
            return None;
        }
        let mut transition = None;
        for handle in self.timers.advance(now_ms) {
            match self.state {
                State::Flickering { expiry } if handle == expiry => {
                    self.state = State::Idle;
                    transition = Some(FlickerTransition::Ended);
                }
                State::Idle if handle == self.check => {
                    if self.rng.gen::<f64>() < self.cfg.probability {
                        let lo = self.cfg.min_duration_ms.max(0.0);
                        let hi = self.cfg.max_duration_ms.max(lo);
                        let duration = self.rng.gen_range(lo..=hi);
                        let expiry = self.timers.schedule_once(now_ms, duration);
                        self.state = State::Flickering { expiry };
                        transition = Some(FlickerTransition::Started);
                    }
                }
                // A check firing mid-window is ignored; at most one flicker
                // window per element at a time.
                _ => {}
            }
        }
        transition
    }

    /// Cancel the check timer and any pending expiry. After this, `advance`
    /// never fires or mutates again, even past previously pending due times.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        self.state = State::Idle;
        self.live = false;
    }
}
