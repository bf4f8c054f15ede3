//! Drifting background particles with wrap-around bounds and proximity links.

use crate::constants::{
    LINK_MAX_ALPHA, LINK_THRESHOLD, PARTICLE_BRIGHTNESS_MAX, PARTICLE_BRIGHTNESS_MIN,
    PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, PARTICLE_SPEED_MAX,
};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Grey level in 150..=255; rendered as an rgb triple of equal channels.
    pub brightness: u8,
}

/// Connecting line between two particles closer than the link threshold.
/// Derived per tick, never stored across ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    link_threshold: f32,
    link_max_alpha: f32,
}

impl ParticleField {
    /// Build a field of exactly `count` particles with randomized position,
    /// velocity, size and brightness. The count never changes afterwards.
    /// Two fields built from the same seed evolve identically.
    pub fn new(count: usize, bounds: Vec2, seed: u64) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                vel: Vec2::new(
                    rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX),
                    rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX),
                ),
                size: rng.gen_range(PARTICLE_SIZE_MIN..=PARTICLE_SIZE_MAX),
                brightness: rng.gen_range(PARTICLE_BRIGHTNESS_MIN..=PARTICLE_BRIGHTNESS_MAX),
            })
            .collect();
        Self {
            particles,
            bounds,
            link_threshold: LINK_THRESHOLD,
            link_max_alpha: LINK_MAX_ALPHA,
        }
    }

    /// Build a field from explicit particles (fixed scenarios, tests).
    pub fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self {
            particles,
            bounds: bounds.max(Vec2::ZERO),
            link_threshold: LINK_THRESHOLD,
            link_max_alpha: LINK_MAX_ALPHA,
        }
    }

    pub fn with_link_params(mut self, threshold: f32, max_alpha: f32) -> Self {
        self.link_threshold = threshold.max(0.0);
        self.link_max_alpha = max_alpha.clamp(0.0, 1.0);
        self
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Advance every particle one tick: `pos += vel`, wrapping each
    /// coordinate modulo the bound (never clamping, never reflecting).
    /// Degenerate bounds skip motion entirely.
    pub fn step(&mut self) {
        if self.bounds.x <= 0.0 || self.bounds.y <= 0.0 {
            return;
        }
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos.x = wrap(p.pos.x, self.bounds.x);
            p.pos.y = wrap(p.pos.y, self.bounds.y);
        }
    }

    /// Swap in new bounds between ticks and re-wrap existing positions so the
    /// wrap invariant holds before the next render.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(Vec2::ZERO);
        if self.bounds.x <= 0.0 || self.bounds.y <= 0.0 {
            return;
        }
        for p in &mut self.particles {
            p.pos.x = wrap(p.pos.x, self.bounds.x);
            p.pos.y = wrap(p.pos.y, self.bounds.y);
        }
    }

    /// O(N^2) pairwise pass over unordered particle pairs. A pair at distance
    /// `d < threshold` yields a link with alpha `max_alpha * (1 - d/threshold)`;
    /// anything at or past the threshold yields none. Fine at N=50; the
    /// dominant per-tick cost if the count is scaled up.
    pub fn links(&self, out: &mut Vec<Link>) {
        out.clear();
        if self.link_threshold <= 0.0 {
            return;
        }
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let d = self.particles[i].pos.distance(self.particles[j].pos);
                if d < self.link_threshold {
                    out.push(Link {
                        a: i,
                        b: j,
                        alpha: self.link_max_alpha * (1.0 - d / self.link_threshold),
                    });
                }
            }
        }
    }
}

/// Wrap `v` into `[0, bound)`. `rem_euclid` alone can round up to exactly
/// `bound` for tiny negative inputs, which would break the invariant.
#[inline]
fn wrap(v: f32, bound: f32) -> f32 {
    let w = v.rem_euclid(bound);
    if w >= bound {
        0.0
    } else {
        w
    }
}
