use crate::dom;
use site_core::follow::{CursorFollowGroup, FollowTarget, Rect};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct DomTarget(pub web::HtmlElement);

impl FollowTarget for DomTarget {
    fn bounds(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }

    fn set_offset(&self, dx: f64, dy: f64) {
        dom::set_style(&self.0, "transform", &format!("translate({dx}px, {dy}px)"));
    }
}

/// Hover-follow for every element matching `selector`.
pub fn wire_group(window: &web::Window, document: &web::Document, selector: &str) {
    let elements = dom::query_all(document, selector);
    if elements.is_empty() {
        log::warn!("[follow] nothing matches {selector:?}");
        return;
    }
    for el in &elements {
        dom::set_style(el, "position", "relative");
        dom::set_style(el, "display", "inline-block");
        dom::set_style(el, "transition", "transform 0.05s");
    }
    let count = elements.len();
    let group = Rc::new(RefCell::new(CursorFollowGroup::new(
        elements.iter().cloned().map(DomTarget).collect(),
    )));

    for (index, el) in elements.iter().enumerate() {
        let enter = group.clone();
        dom::add_listener(el.as_ref(), "mouseenter", move |_ev: web::MouseEvent| {
            enter.borrow_mut().enter(index);
        });
        let leave = group.clone();
        dom::add_listener(el.as_ref(), "mouseleave", move |_ev: web::MouseEvent| {
            leave.borrow_mut().leave(index);
        });
    }

    dom::add_listener(window.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        group
            .borrow()
            .pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
    });
    log::info!("[follow] {count} elements for {selector:?}");
}
