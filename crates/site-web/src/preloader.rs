use crate::dom;
use site_core::config::{PreloaderConfig, SelectorConfig};
use site_core::preloader::Preloader;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct Elements {
    preloader: web::HtmlElement,
    percent: web::HtmlElement,
    content: Option<web::HtmlElement>,
}

fn count_step(state: Rc<RefCell<Preloader>>, els: Elements) {
    let next = state.borrow_mut().step();
    els.percent
        .set_text_content(Some(&state.borrow().percent_text()));
    if let Some(delay) = next {
        dom::set_timeout(delay, move || count_step(state, els));
    }
}

fn on_loaded(state: Rc<RefCell<Preloader>>, els: Elements) {
    let fade_delay = state.borrow_mut().finish_loading();
    els.percent
        .set_text_content(Some(&state.borrow().percent_text()));
    dom::set_timeout(fade_delay, move || {
        let Some(hide_delay) = state.borrow_mut().begin_fade() else {
            return;
        };
        dom::set_style(&els.preloader, "opacity", "0");
        dom::set_timeout(hide_delay, move || {
            if !state.borrow_mut().hide() {
                return;
            }
            dom::set_style(&els.preloader, "display", "none");
            if let Some(content) = &els.content {
                dom::set_style(content, "display", "block");
            }
            log::info!("[preloader] hidden");
        });
    });
}

/// Starts the percentage counter and hooks the page `load` event.
pub fn start(
    window: &web::Window,
    document: &web::Document,
    selectors: &SelectorConfig,
    config: &PreloaderConfig,
) {
    let (Some(preloader), Some(percent)) = (
        dom::query_one(document, &selectors.preloader),
        dom::query_one(document, &selectors.percent),
    ) else {
        log::warn!("[preloader] markup missing; skipping");
        return;
    };
    let content = dom::query_one(document, &selectors.content);
    if content.is_none() {
        log::warn!("[preloader] no content container {:?}", selectors.content);
    }
    let els = Elements {
        preloader,
        percent,
        content,
    };
    let state = Rc::new(RefCell::new(Preloader::new(config)));
    els.percent
        .set_text_content(Some(&state.borrow().percent_text()));
    let interval = config.step_interval_ms();
    {
        let state = state.clone();
        let els = els.clone();
        dom::set_timeout(interval, move || count_step(state, els));
    }

    // The module may finish loading after the page already has.
    if document.ready_state() == "complete" {
        on_loaded(state, els);
    } else {
        dom::add_listener(window.as_ref(), "load", move |_ev: web::Event| {
            on_loaded(state.clone(), els.clone());
        });
    }
}
