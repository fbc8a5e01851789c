use site_core::gfx::GpuContext;
use site_core::{RenderLoop, SceneGraph, SceneVariant, SiteConfig, SiteError, Viewport};
use winit::{event::*, event_loop::EventLoop, window::Window, window::WindowBuilder};

fn viewport_of(window: &Window) -> Viewport {
    let scale = window.scale_factor();
    let size = window.inner_size().to_logical::<f64>(scale);
    Viewport::new(size.width, size.height, scale)
}

struct App<'w> {
    window: &'w Window,
    scene: SceneGraph,
    gpu: GpuContext<'w>,
    render_loop: RenderLoop,
}

impl<'w> App<'w> {
    async fn new(window: &'w Window, config: &SiteConfig) -> anyhow::Result<Self> {
        let scene = SceneGraph::build(config, viewport_of(window), &mut rand::thread_rng());
        let (width, height) = scene.drawing_buffer_size();
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(SiteError::from)?;
        let gpu = GpuContext::new(&instance, surface, width, height, &scene).await?;
        Ok(Self {
            window,
            scene,
            gpu,
            render_loop: RenderLoop::new(),
        })
    }

    fn resize(&mut self) {
        let (w, h) = self.scene.handle_resize(viewport_of(self.window));
        self.gpu.resize(w, h);
    }

    fn pointer(&mut self, position: winit::dpi::PhysicalPosition<f64>) {
        let logical = position.to_logical::<f64>(self.window.scale_factor());
        self.scene.handle_pointer(logical.x, logical.y);
    }

    /// Returns `false` once the loop has been cancelled.
    fn frame(&mut self) -> Result<bool, wgpu::SurfaceError> {
        let Some(tick) = self.render_loop.tick() else {
            return Ok(false);
        };
        self.scene.advance(&tick);
        self.gpu.render(&self.scene)?;
        Ok(true)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let variant = std::env::args()
        .nth(1)
        .map(|name| SceneVariant::from_name(&name))
        .unwrap_or_default();
    let config = SiteConfig::for_variant(variant);
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Portfolio water (native)")
        .build(&event_loop)?;

    let mut app = pollster::block_on(App::new(&window, &config))?;
    let token = app.render_loop.token();
    log::info!("[native] running variant={:?}", variant);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. },
            ..
        } => app.resize(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => app.pointer(position),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            token.cancel();
            elwt.exit();
        }
        Event::AboutToWait => match app.frame() {
            Ok(true) => app.window.request_redraw(),
            Ok(false) => elwt.exit(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => app.gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[native] out of GPU memory");
                token.cancel();
                elwt.exit();
            }
            Err(e) => log::warn!("[native] render error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
