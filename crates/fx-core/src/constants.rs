/// Tuned effect constants shared by the engine and the web frontend.
///
/// Most of these were dialed in by eye against the gallery page; treat them
/// as defaults rather than load-bearing invariants.

// Background particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SPEED_MAX: f32 = 0.2; // per-tick velocity component bound
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_BRIGHTNESS_MIN: u8 = 150;
pub const PARTICLE_BRIGHTNESS_MAX: u8 = 255;
pub const PARTICLE_DOT_ALPHA: f32 = 30.0 / 255.0;

// Proximity links between particles
pub const LINK_THRESHOLD: f32 = 100.0; // device px
pub const LINK_MAX_ALPHA: f32 = 30.0 / 255.0;

// TV-static grain
pub const NOISE_ALPHA_MAX: u8 = 50; // of 255; keeps the grain semi-transparent

// Flicker timing presets (one scheduler per managed element)
pub const FLICKER_CHECK_INTERVAL_MS: f64 = 2000.0;
pub const FLICKER_CHECK_INTERVAL_GRID_MS: f64 = 500.0;
pub const FLICKER_CHECK_INTERVAL_DETAIL_MS: f64 = 5000.0;
pub const FLICKER_PROBABILITY: f64 = 0.1;
pub const FLICKER_DURATION_MIN_MS: f64 = 100.0;
pub const FLICKER_DURATION_MAX_MS: f64 = 300.0;
pub const FLICKER_DURATION_GRID_MIN_MS: f64 = 50.0;
pub const FLICKER_DURATION_GRID_MAX_MS: f64 = 250.0;

// Style deltas while a flicker window is active
pub const FLICKER_NOISE_OPACITY: f32 = 0.5;
pub const FLICKER_GLOW_STRENGTH: f32 = 0.8; // white glow alpha
pub const FLICKER_GLOW_RADIUS_PX: f32 = 15.0;
pub const FLICKER_BRIGHTNESS: f32 = 1.2;
pub const FLICKER_CONTRAST: f32 = 1.2;

// Idle compositing state for a gallery tile
pub const IDLE_BRIGHTNESS: f32 = 0.8;

// Staggered reveal of gallery tiles and their hover lines
pub const REVEAL_BASE_DELAY_SEC: f32 = 0.1;
pub const REVEAL_STEP_SEC: f32 = 0.1;
pub const HOVER_LINE_COUNT: usize = 15;
pub const LINE_REST_WIDTH_EVEN: f32 = 0.6; // fraction of full width
pub const LINE_REST_WIDTH_ODD: f32 = 0.4;
pub const LINE_STAGGER_MOUNT_SEC: f32 = 0.05;
pub const LINE_STAGGER_IN_SEC: f32 = 0.03;
pub const LINE_STAGGER_OUT_SEC: f32 = 0.02;

// Floating wireframe polygons
pub const FLOATER_COUNT: usize = 15;
pub const FLOATER_SIZE_MIN: f32 = 20.0;
pub const FLOATER_SIZE_MAX: f32 = 70.0;
pub const FLOATER_SPEED_MIN: f32 = 0.1;
pub const FLOATER_SPEED_MAX: f32 = 0.6;
pub const FLOATER_ALPHA_MIN: f32 = 0.05;
pub const FLOATER_ALPHA_MAX: f32 = 0.15;
pub const FLOATER_DRIFT_TIME_SCALE: f32 = 0.001; // ms -> drift phase
pub const FLOATER_SPIN_TIME_SCALE: f32 = 0.0005; // ms -> rotation, scaled by speed
