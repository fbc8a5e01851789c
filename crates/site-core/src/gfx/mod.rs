//! wgpu renderer shared by the web and native front-ends.
//!
//! Front-ends create the `wgpu::Surface` for their host (canvas or window)
//! and hand it over; everything after that is identical.

mod helpers;
mod particles;
mod water;

use crate::error::{Result, SiteError};
use crate::input;
use crate::scene::SceneGraph;
use particles::ParticlePass;
use water::WaterPass;

pub struct GpuContext<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    water: WaterPass,
    particles: ParticlePass,
    width: u32,
    height: u32,
    max_dimension: u32,
}

impl<'a> GpuContext<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        scene: &SceneGraph,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(SiteError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| SiteError::Device(format!("{e:?}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(SiteError::UnsupportedSurface)?;
        // The page content shows through wherever nothing is drawn.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = input::fit_within((width, height), max_dimension);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let water = WaterPass::new(&device, format, &scene.water);
        let particles = ParticlePass::new(&device, format, &scene.particles);
        log::info!(
            "[gpu] adapter={:?} format={:?} alpha={:?} size={}x{}",
            adapter.get_info().name,
            format,
            alpha_mode,
            width,
            height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            water,
            particles,
            width,
            height,
            max_dimension,
        })
    }

    /// Configured surface size, after fitting to the device texture limit.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Reconfigures the surface and depth buffer; returns the size actually
    /// applied, which may be smaller than requested.
    pub fn resize(&mut self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return self.size();
        }
        let (width, height) = input::fit_within((width, height), self.max_dimension);
        if width == self.width && height == self.height {
            return self.size();
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        let (_tex, view) = helpers::create_depth_texture(&self.device, width, height);
        self.depth_view = view;
        self.size()
    }

    /// Reapplies the current configuration after the surface was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// One draw of the whole scene through its camera.
    pub fn render(&mut self, scene: &SceneGraph) -> Result<(), wgpu::SurfaceError> {
        let view_proj = scene.camera.view_proj();
        self.water.write_uniforms(&self.queue, &scene.water, view_proj);
        self.particles.write_uniforms(&self.queue, view_proj);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.water.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
