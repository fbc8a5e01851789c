#![cfg(target_arch = "wasm32")]
use site_core::config::SelectorConfig;
use site_core::{CancelToken, RenderLoop, SceneGraph, SceneVariant, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod dom;
pub mod follow;
mod frame;
mod input;
mod panel;
mod preloader;
mod render;
mod reveal;
mod scroll;
mod typewriter;

thread_local! {
    static BACKGROUND: RefCell<Option<CancelToken>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stops the background render loop. The last drawn frame stays on the canvas.
#[wasm_bindgen]
pub fn stop_background() {
    BACKGROUND.with(|slot| {
        if let Some(token) = slot.borrow().as_ref() {
            token.cancel();
            log::info!("[frame] stop requested");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_selector = SelectorConfig::default().canvas;
    let canvas_el = document
        .query_selector(&canvas_selector)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {canvas_selector}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let variant = canvas
        .dataset()
        .get("variant")
        .map(|v| SceneVariant::from_name(&v))
        .unwrap_or_default();
    let config = SiteConfig::for_variant(variant);
    config.validate()?;

    // Page behaviour does not depend on the GPU, so it is wired first.
    let sel = &config.selectors;
    preloader::start(&window, &document, sel, &config.preloader);
    typewriter::start(&document, &sel.typewriter, &config.typewriter);
    follow::wire_group(&window, &document, &sel.follow_text);
    follow::wire_group(&window, &document, &sel.follow_frames);
    scroll::wire_anchors(&window, &document, &sel.scroll_anchors, config.scroll_duration_ms);
    reveal::wire_reveal(&document, &sel.reveal);
    reveal::wire_deferred_links(&document, &sel.links, config.link_delay_ms);

    let viewport = dom::current_viewport(&window);
    let scene = SceneGraph::build(&config, viewport, &mut rand::thread_rng());
    let gpu = render::init_gpu(&canvas, &scene).await?;
    render::apply_canvas_size(&canvas, viewport.width, viewport.height, gpu.size());

    let scene = Rc::new(RefCell::new(scene));
    let gpu = Rc::new(RefCell::new(gpu));
    input::wire_resize(&window, canvas, scene.clone(), gpu.clone());
    input::wire_pointer(&window, scene.clone());
    if let Err(e) = panel::mount(&document, scene.clone(), config.panel_width_px) {
        log::warn!("[panel] not mounted: {e:?}");
    }

    let render_loop = RenderLoop::new();
    BACKGROUND.with(|slot| *slot.borrow_mut() = Some(render_loop.token()));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        render_loop,
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] background running variant={:?}", variant);
    Ok(())
}
