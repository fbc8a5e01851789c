use crate::color::Color;
use crate::config::WaterGridConfig;
use crate::constants::*;
use glam::{Mat4, Vec2};

/// Host-side values of the water shader's uniform set.
///
/// This is the authoritative configuration surface of the water: the debug
/// panel writes here and the renderer packs it into [`WaterUniformBlock`]
/// once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterUniforms {
    pub time: f32,
    pub big_waves_elevation: f32,
    pub big_waves_frequency: Vec2,
    pub big_waves_speed: f32,
    pub small_waves_elevation: f32,
    pub small_waves_frequency: f32,
    pub small_waves_speed: f32,
    pub small_iterations: f32,
    pub depth_color: Color,
    pub surface_color: Color,
    pub color_offset: f32,
    pub color_multiplier: f32,
}

impl Default for WaterUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            big_waves_elevation: DEFAULT_BIG_WAVES_ELEVATION,
            big_waves_frequency: Vec2::from(DEFAULT_BIG_WAVES_FREQUENCY),
            big_waves_speed: DEFAULT_BIG_WAVES_SPEED,
            small_waves_elevation: DEFAULT_SMALL_WAVES_ELEVATION,
            small_waves_frequency: DEFAULT_SMALL_WAVES_FREQUENCY,
            small_waves_speed: DEFAULT_SMALL_WAVES_SPEED,
            small_iterations: DEFAULT_SMALL_ITERATIONS,
            depth_color: DEFAULT_DEPTH_COLOR,
            surface_color: DEFAULT_SURFACE_COLOR,
            color_offset: DEFAULT_COLOR_OFFSET,
            color_multiplier: DEFAULT_COLOR_MULTIPLIER,
        }
    }
}

/// GPU layout of the water uniforms; must match `WaterUniforms` in `water.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaterUniformBlock {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub big_waves_frequency: [f32; 2],
    pub big_waves_elevation: f32,
    pub big_waves_speed: f32,
    pub depth_color: [f32; 3],
    pub time: f32,
    pub surface_color: [f32; 3],
    pub small_waves_elevation: f32,
    pub small_waves_frequency: f32,
    pub small_waves_speed: f32,
    pub small_iterations: f32,
    pub color_offset: f32,
    pub color_multiplier: f32,
    pub _pad: [f32; 3],
}

impl WaterUniformBlock {
    pub fn pack(uniforms: &WaterUniforms, view_proj: Mat4, model: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            big_waves_frequency: uniforms.big_waves_frequency.to_array(),
            big_waves_elevation: uniforms.big_waves_elevation,
            big_waves_speed: uniforms.big_waves_speed,
            depth_color: uniforms.depth_color.to_linear(),
            time: uniforms.time,
            surface_color: uniforms.surface_color.to_linear(),
            small_waves_elevation: uniforms.small_waves_elevation,
            small_waves_frequency: uniforms.small_waves_frequency,
            small_waves_speed: uniforms.small_waves_speed,
            small_iterations: uniforms.small_iterations,
            color_offset: uniforms.color_offset,
            color_multiplier: uniforms.color_multiplier,
            _pad: [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Subdivided plane in the XY plane facing +Z, centred on the origin.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub segments: u32,
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let row = segments + 1;
        let step_x = width / segments as f32;
        let step_y = height / segments as f32;

        let mut vertices = Vec::with_capacity((row * row) as usize);
        for iy in 0..row {
            let y = iy as f32 * step_y - height * 0.5;
            for ix in 0..row {
                let x = ix as f32 * step_x - width * 0.5;
                vertices.push(PlaneVertex {
                    position: [x, -y, 0.0],
                    uv: [
                        ix as f32 / segments as f32,
                        1.0 - iy as f32 / segments as f32,
                    ],
                });
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = (ix + 1) + row * (iy + 1);
                let d = (ix + 1) + row * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            segments,
            vertices,
            indices,
        }
    }
}

/// Coarse grid on small viewports, fine grid otherwise.
pub fn grid_segments(viewport_width: f64, grid: &WaterGridConfig) -> u32 {
    if viewport_width < grid.small_viewport_max_width {
        grid.coarse_segments
    } else {
        grid.fine_segments
    }
}

#[derive(Clone, Debug)]
pub struct WaterMesh {
    pub geometry: PlaneGeometry,
    pub uniforms: WaterUniforms,
    pub rotation_x: f32,
}

impl WaterMesh {
    pub fn new(grid: &WaterGridConfig, viewport_width: f64, uniforms: WaterUniforms) -> Self {
        let segments = grid_segments(viewport_width, grid);
        Self {
            geometry: PlaneGeometry::new(grid.plane_size, grid.plane_size, segments),
            uniforms,
            rotation_x: WATER_TILT_X,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x)
    }
}
