use site_core::gfx::GpuContext;
use site_core::SceneGraph;
use web_sys as web;

/// Binds WebGPU to the page canvas at the scene's drawing-buffer size.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneGraph,
) -> anyhow::Result<GpuContext<'static>> {
    let (width, height) = scene.drawing_buffer_size();

    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(site_core::SiteError::from)?;
    let gpu = GpuContext::new(&instance, surface, width, height, scene).await?;
    Ok(gpu)
}

/// Keeps the canvas element's CSS box at the viewport size while its backing
/// store matches the configured surface size `px`.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, css_w: f64, css_h: f64, px: (u32, u32)) {
    canvas.set_width(px.0);
    canvas.set_height(px.1);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{css_w}px"));
    let _ = style.set_property("height", &format!("{css_h}px"));
}
