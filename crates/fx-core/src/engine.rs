//! Engine composition: one tick drives every effect in a fixed order.
//!
//! Within a tick, particle positions update before links are derived, links
//! before the noise regeneration, and flicker state last, so the assembled
//! [`FrameOutput`] always reflects post-update state. The host paints the
//! output and applies the per-element style deltas; nothing here touches a
//! rendering API.

use crate::constants::{FLOATER_COUNT, PARTICLE_COUNT, PARTICLE_DOT_ALPHA};
use crate::flicker::{FlickerConfig, FlickerScheduler, FlickerStyle};
use crate::floaters::FloaterField;
use crate::noise::NoiseField;
use crate::particles::{Link, ParticleField};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub particle_count: usize,
    pub floater_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            floater_count: FLOATER_COUNT,
        }
    }
}

/// Identifies one flicker-managed element across ticks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FlickerId(usize);

#[derive(Clone, Copy, Debug)]
pub struct Dot {
    pub pos: Vec2,
    pub size: f32,
    pub brightness: u8,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct LinkSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FloaterSprite {
    pub pos: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub sides: u8,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FlickerSample {
    pub id: FlickerId,
    pub active: bool,
    pub style: FlickerStyle,
}

/// Everything the host needs to composite one frame. Buffers are reused
/// across ticks; the host must not hold the output across a tick boundary.
#[derive(Default)]
pub struct FrameOutput {
    pub dots: Vec<Dot>,
    pub links: Vec<LinkSegment>,
    pub floaters: Vec<FloaterSprite>,
    pub noise_rgba: Vec<u8>,
    pub noise_width: u32,
    pub noise_height: u32,
    pub flickers: Vec<FlickerSample>,
}

pub struct AmbientEngine {
    particles: ParticleField,
    floaters: FloaterField,
    noise: NoiseField,
    noise_rng: StdRng,
    flickers: Vec<(FlickerId, FlickerScheduler)>,
    next_flicker_id: usize,
    seed: u64,
    link_buf: Vec<Link>,
    output: FrameOutput,
    live: bool,
}

impl AmbientEngine {
    pub fn new(cfg: EngineConfig, bounds: Vec2, seed: u64) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        log::info!(
            "ambient engine: {} particles, {} floaters, {}x{}",
            cfg.particle_count,
            cfg.floater_count,
            bounds.x,
            bounds.y
        );
        Self {
            particles: ParticleField::new(cfg.particle_count, bounds, seed),
            floaters: FloaterField::new(cfg.floater_count, bounds, seed.wrapping_add(1)),
            noise: NoiseField::new(bounds.x as i32, bounds.y as i32),
            noise_rng: StdRng::seed_from_u64(seed.wrapping_add(2)),
            flickers: Vec::new(),
            next_flicker_id: 0,
            seed,
            link_buf: Vec::new(),
            output: FrameOutput::default(),
            live: true,
        }
    }

    /// Adopt new viewport dimensions. Called from the host's resize listener,
    /// which on a single-threaded event loop always lands between ticks, so
    /// no tick ever observes half-updated bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Vec2::new(width, height).max(Vec2::ZERO);
        self.particles.resize(bounds);
        self.floaters.resize(bounds);
        self.noise.resize(bounds.x as i32, bounds.y as i32);
    }

    /// Register a flicker-managed element. Each element gets its own
    /// independently seeded scheduler.
    pub fn add_flicker(&mut self, cfg: FlickerConfig, now_ms: f64) -> FlickerId {
        let id = FlickerId(self.next_flicker_id);
        self.next_flicker_id += 1;
        let mix = self
            .seed
            .wrapping_add(0x9E37_79B9_7F4A_7C15_u64.wrapping_mul(id.0 as u64 + 3));
        self.flickers
            .push((id, FlickerScheduler::new(cfg, mix, now_ms)));
        id
    }

    /// Unregister a single element (its view unmounted); pending timers for
    /// it are cancelled so nothing fires afterwards.
    pub fn remove_flicker(&mut self, id: FlickerId) {
        if let Some(i) = self.flickers.iter().position(|(fid, _)| *fid == id) {
            let (_, mut sched) = self.flickers.remove(i);
            sched.shutdown();
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Advance every effect to `now_ms` and assemble the frame. After
    /// `shutdown` this is a no-op returning the last (frozen) output.
    pub fn tick(&mut self, now_ms: f64) -> &FrameOutput {
        if !self.live {
            return &self.output;
        }

        self.particles.step();
        self.floaters.step(now_ms);
        self.particles.links(&mut self.link_buf);
        self.noise.generate(&mut self.noise_rng);
        for (_, sched) in &mut self.flickers {
            sched.advance(now_ms);
        }

        let out = &mut self.output;
        out.dots.clear();
        out.dots.extend(self.particles.particles().iter().map(|p| Dot {
            pos: p.pos,
            size: p.size,
            brightness: p.brightness,
            alpha: PARTICLE_DOT_ALPHA,
        }));
        out.links.clear();
        let particles = self.particles.particles();
        out.links.extend(self.link_buf.iter().map(|l| LinkSegment {
            from: particles[l.a].pos,
            to: particles[l.b].pos,
            alpha: l.alpha,
        }));
        out.floaters.clear();
        out.floaters
            .extend(self.floaters.floaters().iter().map(|f| FloaterSprite {
                pos: f.pos,
                size: f.size,
                rotation: f.rotation(now_ms),
                sides: f.sides,
                alpha: f.alpha,
            }));
        out.noise_rgba.clear();
        out.noise_rgba.extend_from_slice(self.noise.buffer());
        out.noise_width = self.noise.width();
        out.noise_height = self.noise.height();
        out.flickers.clear();
        out.flickers
            .extend(self.flickers.iter().map(|(id, sched)| FlickerSample {
                id: *id,
                active: sched.is_active(),
                style: sched.style().copied().unwrap_or(sched.config().style),
            }));
        &self.output
    }

    pub fn last_output(&self) -> &FrameOutput {
        &self.output
    }

    /// Tear the engine down: cancel every pending flicker timer and freeze
    /// the output. Subsequent ticks mutate nothing.
    pub fn shutdown(&mut self) {
        for (_, sched) in &mut self.flickers {
            sched.shutdown();
        }
        self.live = false;
        log::info!("ambient engine: shut down");
    }
}
