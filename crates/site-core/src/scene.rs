use crate::camera::Camera;
use crate::config::SiteConfig;
use crate::frame::FrameTick;
use crate::input::{self, Viewport};
use crate::particles::ParticleField;
use crate::water::WaterMesh;
use glam::Vec3;
use rand::Rng;

/// Ownership root for everything drawn behind the page.
///
/// Built once at startup and kept for the lifetime of the page or window.
/// There is no teardown path.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    pub camera: Camera,
    pub particles: ParticleField,
    pub water: WaterMesh,
    viewport: Viewport,
    pixel_ratio_cap: f64,
    parallax_factor: f32,
}

impl SceneGraph {
    pub fn build<R: Rng + ?Sized>(config: &SiteConfig, viewport: Viewport, rng: &mut R) -> Self {
        let camera = Camera::new(&config.camera, viewport.width, viewport.height);
        let particles =
            ParticleField::generate(config.particles.count, config.particles.extent, rng);
        let water = WaterMesh::new(&config.water_grid, viewport.width, config.water.clone());
        log::info!(
            "[scene] variant={:?} particles={} grid={}x{} viewport={}x{}@{}",
            config.variant,
            particles.len(),
            water.geometry.segments,
            water.geometry.segments,
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
        Self {
            camera,
            particles,
            water,
            viewport,
            pixel_ratio_cap: config.pixel_ratio_cap,
            parallax_factor: config.camera.parallax_factor,
        }
    }

    /// Current backing-store size for the renderer.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        input::drawing_buffer_size(self.viewport, self.pixel_ratio_cap)
    }

    /// Re-derives the camera aspect and returns the new drawing-buffer size.
    pub fn handle_resize(&mut self, viewport: Viewport) -> (u32, u32) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.width, viewport.height);
        self.drawing_buffer_size()
    }

    /// Parallax: the pointer moves the camera in X/Y, which then re-aims at the origin.
    pub fn handle_pointer(&mut self, client_x: f64, client_y: f64) {
        let ndc = input::pointer_ndc(client_x, client_y, self.viewport);
        let pos = input::parallax_position(ndc, self.parallax_factor);
        self.camera.set_position_xy(pos.x, pos.y);
        self.camera.look_at(Vec3::ZERO);
    }

    pub fn advance(&mut self, tick: &FrameTick) {
        self.water.uniforms.time = tick.elapsed_secs;
    }
}
