//! Typed configuration for the page.
//!
//! There is no config file: the two page variants are expressed as presets
//! and front-ends pick one at startup. Everything downstream reads from
//! [`SiteConfig`] instead of module-level globals.

use crate::constants::*;
use crate::error::{Result, SiteError};
use crate::water::WaterUniforms;

pub const ABOUT_TEXT: &str = "I am passionate about turning ideas into innovative digital experiences. Always seeking creative solutions for complex challenges, I found my true expression in web development. \nSince 2024, I have fully dedicated myself to mastering and expanding my skills, diving deeper into the world of creative development.\n \nSkills:\nHTML\nCSS\nJavascript\nThreeJs\nNodeJs\nBlender";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneVariant {
    #[default]
    Home,
    Compact,
}

impl SceneVariant {
    /// Unknown names fall back to `Home`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" => SceneVariant::Compact,
            _ => SceneVariant::Home,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub parallax_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: CAMERA_POSITION,
            parallax_factor: PARALLAX_FACTOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    /// Full edge lengths of the box centred on the origin.
    pub extent: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct WaterGridConfig {
    pub plane_size: f32,
    pub coarse_segments: u32,
    pub fine_segments: u32,
    pub small_viewport_max_width: f64,
}

#[derive(Clone, Debug)]
pub struct PreloaderConfig {
    pub total_ms: u32,
    pub steps: u32,
    pub fade_delay_ms: u32,
    pub hide_delay_ms: u32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            total_ms: PRELOADER_TOTAL_MS,
            steps: PRELOADER_STEPS,
            fade_delay_ms: PRELOADER_FADE_DELAY_MS,
            hide_delay_ms: PRELOADER_HIDE_DELAY_MS,
        }
    }
}

impl PreloaderConfig {
    pub fn step_interval_ms(&self) -> u32 {
        self.total_ms / self.steps.max(1)
    }
}

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub text: String,
    pub forward_ms: u32,
    pub reverse_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: ABOUT_TEXT.to_string(),
            forward_ms: TYPEWRITER_FORWARD_MS,
            reverse_ms: TYPEWRITER_REVERSE_MS,
        }
    }
}

/// CSS selectors for the DOM-facing components.
#[derive(Clone, Debug)]
pub struct SelectorConfig {
    pub canvas: String,
    pub preloader: String,
    pub percent: String,
    pub content: String,
    pub typewriter: String,
    pub follow_text: String,
    pub follow_frames: String,
    pub reveal: String,
    pub links: String,
    pub scroll_anchors: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            canvas: "canvas.webgl".into(),
            preloader: "#preloader".into(),
            percent: "#percent".into(),
            content: "#content".into(),
            typewriter: "#typewriter".into(),
            follow_text: ".h1-brazillian, .h1-front-end, .h1-creative-developer, .menu-header li"
                .into(),
            follow_frames: ".work-frame".into(),
            reveal: ".reveal".into(),
            links: "li[data-href]".into(),
            scroll_anchors: "a[href^=\"#\"]".into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub variant: SceneVariant,
    pub camera: CameraConfig,
    pub particles: ParticleConfig,
    pub water_grid: WaterGridConfig,
    pub water: WaterUniforms,
    pub pixel_ratio_cap: f64,
    pub preloader: PreloaderConfig,
    pub typewriter: TypewriterConfig,
    pub selectors: SelectorConfig,
    pub scroll_duration_ms: f64,
    pub link_delay_ms: u32,
    pub panel_width_px: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_variant(SceneVariant::Home)
    }
}

impl SiteConfig {
    pub fn for_variant(variant: SceneVariant) -> Self {
        let (particles, water_grid, pixel_ratio_cap) = match variant {
            SceneVariant::Home => (
                ParticleConfig {
                    count: HOME_PARTICLE_COUNT,
                    extent: HOME_PARTICLE_EXTENT,
                },
                WaterGridConfig {
                    plane_size: WATER_PLANE_SIZE,
                    coarse_segments: 512,
                    fine_segments: 512,
                    small_viewport_max_width: SMALL_VIEWPORT_MAX_WIDTH,
                },
                HOME_PIXEL_RATIO_CAP,
            ),
            SceneVariant::Compact => (
                ParticleConfig {
                    count: COMPACT_PARTICLE_COUNT,
                    extent: COMPACT_PARTICLE_EXTENT,
                },
                WaterGridConfig {
                    plane_size: WATER_PLANE_SIZE,
                    coarse_segments: 128,
                    fine_segments: 256,
                    small_viewport_max_width: SMALL_VIEWPORT_MAX_WIDTH,
                },
                COMPACT_PIXEL_RATIO_CAP,
            ),
        };
        Self {
            variant,
            camera: CameraConfig::default(),
            particles,
            water_grid,
            water: WaterUniforms::default(),
            pixel_ratio_cap,
            preloader: PreloaderConfig::default(),
            typewriter: TypewriterConfig::default(),
            selectors: SelectorConfig::default(),
            scroll_duration_ms: SCROLL_DURATION_MS,
            link_delay_ms: LINK_OPEN_DELAY_MS,
            panel_width_px: PANEL_WIDTH_PX,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SiteError::InvalidConfig(msg));
        if self.particles.count == 0 {
            return invalid("particle count must be positive".into());
        }
        if self.particles.extent.iter().any(|e| !(*e > 0.0)) {
            return invalid(format!(
                "particle extent must be positive, got {:?}",
                self.particles.extent
            ));
        }
        let grid = &self.water_grid;
        if grid.coarse_segments == 0 || grid.fine_segments == 0 {
            return invalid("water grid segments must be positive".into());
        }
        if !(grid.plane_size > 0.0) {
            return invalid("water plane size must be positive".into());
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return invalid(format!("camera fov out of range: {}", cam.fov_degrees));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return invalid(format!(
                "camera planes must satisfy 0 < near < far, got {} / {}",
                cam.near, cam.far
            ));
        }
        if !(self.pixel_ratio_cap >= 1.0) {
            return invalid(format!("pixel ratio cap below 1: {}", self.pixel_ratio_cap));
        }
        if self.preloader.steps == 0 {
            return invalid("preloader needs at least one step".into());
        }
        Ok(())
    }
}
