//! Slow-drifting wireframe polygons layered behind the gallery grid.

use crate::constants::{
    FLOATER_ALPHA_MAX, FLOATER_ALPHA_MIN, FLOATER_DRIFT_TIME_SCALE, FLOATER_SIZE_MAX,
    FLOATER_SIZE_MIN, FLOATER_SPEED_MAX, FLOATER_SPEED_MIN, FLOATER_SPIN_TIME_SCALE,
};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct Floater {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Base heading; the drift direction slowly precesses around it.
    pub angle: f32,
    /// Polygon vertex count, 3..=5.
    pub sides: u8,
    pub alpha: f32,
}

impl Floater {
    /// Current spin, proportional to elapsed time and drift speed.
    pub fn rotation(&self, time_ms: f64) -> f32 {
        time_ms as f32 * FLOATER_SPIN_TIME_SCALE * self.speed
    }
}

pub struct FloaterField {
    floaters: Vec<Floater>,
    bounds: Vec2,
}

impl FloaterField {
    pub fn new(count: usize, bounds: Vec2, seed: u64) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let mut rng = StdRng::seed_from_u64(seed);
        let floaters = (0..count)
            .map(|_| Floater {
                pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                size: rng.gen_range(FLOATER_SIZE_MIN..=FLOATER_SIZE_MAX),
                speed: rng.gen_range(FLOATER_SPEED_MIN..=FLOATER_SPEED_MAX),
                angle: rng.gen_range(0.0..TAU),
                sides: rng.gen_range(3..=5),
                alpha: rng.gen_range(FLOATER_ALPHA_MIN..=FLOATER_ALPHA_MAX),
            })
            .collect();
        Self { floaters, bounds }
    }

    pub fn floaters(&self) -> &[Floater] {
        &self.floaters
    }

    /// Drift each polygon along its slowly precessing heading. Wrap-around is
    /// padded by the polygon size so shapes leave the frame fully before
    /// reappearing on the far side.
    pub fn step(&mut self, time_ms: f64) {
        if self.bounds.x <= 0.0 || self.bounds.y <= 0.0 {
            return;
        }
        let phase = time_ms as f32 * FLOATER_DRIFT_TIME_SCALE;
        for f in &mut self.floaters {
            f.pos.x += (f.angle + phase).cos() * f.speed;
            f.pos.y += (f.angle + phase).sin() * f.speed;
            f.pos.x = wrap_padded(f.pos.x, self.bounds.x, f.size);
            f.pos.y = wrap_padded(f.pos.y, self.bounds.y, f.size);
        }
    }

    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
    }
}

#[inline]
fn wrap_padded(v: f32, bound: f32, pad: f32) -> f32 {
    if v < -pad {
        bound + pad
    } else if v > bound + pad {
        -pad
    } else {
        v
    }
}
