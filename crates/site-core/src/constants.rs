use crate::color::Color;
use std::f32::consts::PI;

// Shared scene and interaction tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 1.0];

// Pointer parallax: normalized pointer [-1, 1] scaled into camera X/Y
pub const PARALLAX_FACTOR: f32 = 0.2;

// Particles
pub const PARTICLE_COLOR_MAX: f32 = 0.5; // color channels are drawn from [0, 0.5)
pub const HOME_PARTICLE_COUNT: usize = 2000;
pub const HOME_PARTICLE_EXTENT: [f32; 3] = [15.0, 10.0, 20.0];
pub const COMPACT_PARTICLE_COUNT: usize = 1200;
pub const COMPACT_PARTICLE_EXTENT: [f32; 3] = [10.0, 10.0, 10.0];

// Water plane
pub const WATER_PLANE_SIZE: f32 = 2.0;
pub const WATER_TILT_X: f32 = -PI * 0.35;
pub const SMALL_VIEWPORT_MAX_WIDTH: f64 = 768.0; // below this the coarse grid is used

// Device pixel ratio caps
pub const HOME_PIXEL_RATIO_CAP: f64 = 2.0;
pub const COMPACT_PIXEL_RATIO_CAP: f64 = 1.5;

// Water uniform defaults
pub const DEFAULT_DEPTH_COLOR: Color = Color::new(1.0, 64.0 / 255.0, 0.0); // #ff4000
pub const DEFAULT_SURFACE_COLOR: Color = Color::new(21.0 / 255.0, 28.0 / 255.0, 55.0 / 255.0); // #151c37
pub const DEFAULT_BIG_WAVES_ELEVATION: f32 = 0.2;
pub const DEFAULT_BIG_WAVES_FREQUENCY: [f32; 2] = [4.0, 1.5];
pub const DEFAULT_BIG_WAVES_SPEED: f32 = 0.55;
pub const DEFAULT_SMALL_WAVES_ELEVATION: f32 = 0.15;
pub const DEFAULT_SMALL_WAVES_FREQUENCY: f32 = 3.0;
pub const DEFAULT_SMALL_WAVES_SPEED: f32 = 0.2;
pub const DEFAULT_SMALL_ITERATIONS: f32 = 3.6;
pub const DEFAULT_COLOR_OFFSET: f32 = 0.925;
pub const DEFAULT_COLOR_MULTIPLIER: f32 = 1.0;

// Preloader timeline (milliseconds)
pub const PRELOADER_TOTAL_MS: u32 = 1800;
pub const PRELOADER_STEPS: u32 = 100;
pub const PRELOADER_FADE_DELAY_MS: u32 = 300;
pub const PRELOADER_HIDE_DELAY_MS: u32 = 500; // matches the CSS opacity transition

// Typewriter cadence (milliseconds)
pub const TYPEWRITER_FORWARD_MS: u32 = 100;
pub const TYPEWRITER_REVERSE_MS: u32 = 50;

// Smooth scroll
pub const SCROLL_DURATION_MS: f64 = 1800.0;

// Deferred external links
pub const LINK_OPEN_DELAY_MS: u32 = 700;

// Debug panel
pub const PANEL_WIDTH_PX: u32 = 340;
