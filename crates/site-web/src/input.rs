use crate::dom;
use crate::render;
use site_core::gfx::GpuContext;
use site_core::SceneGraph;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window resize: camera aspect, canvas backing store and GPU surface.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<SceneGraph>>,
    gpu: Rc<RefCell<GpuContext<'static>>>,
) {
    dom::add_listener(window.as_ref(), "resize", move |_ev: web::Event| {
        let Some(w) = web::window() else {
            return;
        };
        let viewport = dom::current_viewport(&w);
        let wanted = scene.borrow_mut().handle_resize(viewport);
        let size = gpu.borrow_mut().resize(wanted.0, wanted.1);
        render::apply_canvas_size(&canvas, viewport.width, viewport.height, size);
        log::debug!(
            "[input] resize {}x{} -> {}x{}",
            viewport.width,
            viewport.height,
            size.0,
            size.1
        );
    });
}

/// Pointer parallax on the camera.
pub fn wire_pointer(window: &web::Window, scene: Rc<RefCell<SceneGraph>>) {
    dom::add_listener(window.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        scene
            .borrow_mut()
            .handle_pointer(ev.client_x() as f64, ev.client_y() as f64);
    });
}
