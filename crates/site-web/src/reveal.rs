use crate::dom;
use site_core::reveal::{DeferredLink, RevealEvent, RevealSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Observes `elements` and calls `handler(index, intersecting, observer)` for
/// every intersection change.
pub fn observe(
    elements: &[web::Element],
    threshold: f64,
    mut handler: impl FnMut(usize, bool, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    if elements.is_empty() {
        return None;
    }
    let targets = elements.to_vec();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if let Some(index) = targets.iter().position(|t| *t == target) {
                    handler(index, entry.is_intersecting(), &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    callback.forget();
    for el in elements {
        observer.observe(el);
    }
    Some(observer)
}

/// Adds `visible` to each element the first time it scrolls into view.
pub fn wire_reveal(document: &web::Document, selector: &str) {
    let elements: Vec<web::Element> = dom::query_all(document, selector)
        .into_iter()
        .map(Into::into)
        .collect();
    let count = elements.len();
    let fired = Rc::new(RefCell::new(RevealSet::new(count)));
    let targets = elements.clone();
    let observer = observe(&elements, 0.1, move |index, intersecting, observer| {
        if fired.borrow_mut().observe(index, intersecting) == RevealEvent::Revealed {
            let el = &targets[index];
            let _ = el.class_list().add_1("visible");
            observer.unobserve(el);
        }
    });
    if observer.is_some() {
        log::info!("[reveal] observing {count} elements");
    }
}

/// List items carrying `data-href` play their click animation, then open the
/// URL in a new tab.
pub fn wire_deferred_links(document: &web::Document, selector: &str, delay_ms: u32) {
    let items = dom::query_all(document, selector);
    let mut wired = 0usize;
    for item in items {
        let Some(link) = item
            .get_attribute("data-href")
            .and_then(|href| DeferredLink::parse(&href, delay_ms))
        else {
            continue;
        };
        let el = item.clone();
        dom::add_listener(item.as_ref(), "click", move |_ev: web::MouseEvent| {
            let _ = el.class_list().add_1("clicked");
            let url = link.url.clone();
            dom::set_timeout(link.delay_ms, move || {
                if let Some(w) = web::window() {
                    if let Err(e) = w.open_with_url_and_target(&url, "_blank") {
                        log::warn!("[links] open {url} failed: {:?}", e);
                    }
                }
            });
        });
        wired += 1;
    }
    log::info!("[links] {wired} deferred links");
}
