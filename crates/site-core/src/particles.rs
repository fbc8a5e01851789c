use crate::constants::PARTICLE_COLOR_MAX;
use glam::Vec3;
use rand::Rng;

/// Interleaved per-point data as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Fixed point cloud generated once at startup.
///
/// Positions are uniform inside a box centred on the origin; colours are
/// dim random RGB. Nothing mutates the field after generation.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    extent: [f32; 3],
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, extent: [f32; 3], rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push([
                (rng.gen::<f32>() - 0.5) * extent[0],
                (rng.gen::<f32>() - 0.5) * extent[1],
                (rng.gen::<f32>() - 0.5) * extent[2],
            ]);
            colors.push([
                rng.gen::<f32>() * PARTICLE_COLOR_MAX,
                rng.gen::<f32>() * PARTICLE_COLOR_MAX,
                rng.gen::<f32>() * PARTICLE_COLOR_MAX,
            ]);
        }
        Self {
            positions,
            colors,
            extent,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Inclusive `(min, max)` corners of the generation box.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = Vec3::from(self.extent) * 0.5;
        (-half, half)
    }

    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(p, c)| ParticleVertex {
                position: *p,
                color: *c,
            })
            .collect()
    }
}
