use crate::config::CameraConfig;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
///
/// The projection matrix is cached and recomputed whenever the aspect ratio
/// changes, so callers never observe a stale projection after a resize.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    aspect: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(config: &CameraConfig, width: f64, height: f64) -> Self {
        let mut camera = Self {
            eye: Vec3::from(config.position),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_radians: config.fov_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
            aspect: 1.0,
            projection: Mat4::IDENTITY,
        };
        camera.set_aspect(width, height);
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Aspect becomes `width / height`; zero height keeps the previous value.
    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if height > 0.0 && width > 0.0 {
            self.aspect = (width / height) as f32;
        }
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    pub fn set_position_xy(&mut self, x: f32, y: f32) {
        self.eye.x = x;
        self.eye.y = y;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
