use site_core::gfx::GpuContext;
use site_core::{RenderLoop, SceneGraph};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneGraph>>,
    pub gpu: Rc<RefCell<GpuContext<'static>>>,
    pub render_loop: RenderLoop,
}

impl FrameContext {
    /// Advances time and draws once. Returns `false` when the loop should stop.
    pub fn frame(&mut self) -> bool {
        let Some(tick) = self.render_loop.tick() else {
            return false;
        };
        let mut scene = self.scene.borrow_mut();
        scene.advance(&tick);

        let mut gpu = self.gpu.borrow_mut();
        match gpu.render(&scene) {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] out of GPU memory; stopping background");
                self.render_loop.token().cancel();
                false
            }
            Err(e) => {
                log::warn!("[frame] render error: {:?}", e);
                true
            }
        }
    }
}

/// Drives `frame` from `requestAnimationFrame` until it reports a stop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] render loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
