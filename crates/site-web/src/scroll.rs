use crate::dom;
use site_core::scroll::SmoothScroll;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn animate(window: web::Window, target_y: f64, duration_ms: f64) {
    let start_y = window.scroll_y().unwrap_or(0.0);
    let mut anim = SmoothScroll::new(start_y, target_y, duration_ms);

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let win = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let step = anim.sample(now_ms);
        win.scroll_to_with_x_and_y(0.0, step.y);
        if step.finished {
            // Breaks the self-reference; the closure is freed once this call returns.
            let done = tick_clone.borrow_mut().take();
            dom::set_timeout(0, move || drop(done));
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = tick.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// In-page anchors scroll smoothly to their target section.
pub fn wire_anchors(window: &web::Window, document: &web::Document, selector: &str, duration_ms: f64) {
    let anchors = dom::query_all(document, selector);
    for anchor in &anchors {
        let a = anchor.clone();
        let win = window.clone();
        let doc = document.clone();
        dom::add_listener(anchor.as_ref(), "click", move |ev: web::MouseEvent| {
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            let id = href.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            let Some(target) = doc
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                log::warn!("[scroll] no target for {href}");
                return;
            };
            ev.prevent_default();
            animate(win.clone(), target.offset_top() as f64, duration_ms);
        });
    }
    log::info!("[scroll] {} anchors", anchors.len());
}
