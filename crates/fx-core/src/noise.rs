//! Per-pixel TV-static grain, fully regenerated every tick.
//!
//! Each pixel draws an independent uniform grey level and an independent low
//! alpha. No temporal correlation between frames is wanted; the analog feel
//! comes from full independence each regeneration.

use crate::constants::NOISE_ALPHA_MAX;
use rand::Rng;

pub struct NoiseField {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl NoiseField {
    /// Negative dimensions clamp to zero (zero-effect, never an error).
    pub fn new(width: i32, height: i32) -> Self {
        let mut field = Self {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        };
        field.resize(width, height);
        field
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Adopt new viewport dimensions. The buffer is resized lazily by the
    /// next `generate`, which always runs before the next render.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(0) as u32;
        self.height = height.max(0) as u32;
    }

    /// Regenerate the whole grain buffer and return it as tightly packed
    /// RGBA8, `width * height * 4` bytes. A zero-area field yields an empty
    /// slice.
    pub fn generate(&mut self, rng: &mut impl Rng) -> &[u8] {
        let len = self.width as usize * self.height as usize * 4;
        self.rgba.resize(len, 0);
        for px in self.rgba.chunks_exact_mut(4) {
            let grey = rng.gen::<u8>();
            px[0] = grey;
            px[1] = grey;
            px[2] = grey;
            px[3] = rng.gen_range(0..NOISE_ALPHA_MAX);
        }
        &self.rgba
    }

    /// The buffer from the most recent `generate`.
    pub fn buffer(&self) -> &[u8] {
        &self.rgba
    }
}
