use crate::dom;
use crate::reveal;
use site_core::config::TypewriterConfig;
use site_core::reveal::{RevealEvent, RevealSet};
use site_core::typewriter::Typewriter;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn run(state: Rc<RefCell<Typewriter>>, el: web::HtmlElement) {
    let delay = state.borrow_mut().step();
    el.set_text_content(Some(&state.borrow().text()));
    dom::set_timeout(delay, move || run(state, el));
}

/// Types the about text into `selector` and retypes it whenever its section
/// scrolls back into view.
pub fn start(document: &web::Document, selector: &str, config: &TypewriterConfig) {
    let Some(el) = dom::query_one(document, selector) else {
        log::warn!("[typewriter] no element for {selector:?}");
        return;
    };
    dom::set_style(&el, "white-space", "pre-line");
    let state = Rc::new(RefCell::new(Typewriter::new(config)));

    let section = el
        .closest("section")
        .ok()
        .flatten()
        .unwrap_or_else(|| el.clone().into());
    let seen = Rc::new(RefCell::new(RevealSet::new(1)));
    {
        let state = state.clone();
        reveal::observe(&[section], 0.0, move |_, intersecting, _| {
            if seen.borrow_mut().observe(0, intersecting) == RevealEvent::Reentered {
                state.borrow_mut().reverse();
            }
        });
    }

    log::info!("[typewriter] {} chars", state.borrow().len());
    run(state, el);
}
