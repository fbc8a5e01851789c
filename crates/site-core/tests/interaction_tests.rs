// Host-side tests for hover-follow, smooth scrolling, reveal and deferred links.

use site_core::follow::{follow_offset, CursorFollowGroup, FollowTarget, Rect};
use site_core::reveal::{DeferredLink, RevealEvent, RevealSet};
use site_core::scroll::{ease_in_out_cubic, SmoothScroll};
use std::cell::Cell;

struct FakeElement {
    rect: Cell<Rect>,
    offset: Cell<(f64, f64)>,
}

impl FakeElement {
    fn at(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Cell::new(Rect {
                left,
                top,
                width,
                height,
            }),
            offset: Cell::new((0.0, 0.0)),
        }
    }
}

impl FollowTarget for FakeElement {
    fn bounds(&self) -> Rect {
        self.rect.get()
    }

    fn set_offset(&self, dx: f64, dy: f64) {
        self.offset.set((dx, dy));
    }
}

#[test]
fn offset_centres_element_under_pointer() {
    let rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 40.0,
    };
    assert_eq!(rect.center(), (200.0, 70.0));
    assert_eq!(follow_offset(200.0, 70.0, rect), (0.0, 0.0));
    assert_eq!(follow_offset(250.0, 60.0, rect), (50.0, -10.0));
}

#[test]
fn only_hovered_targets_follow() {
    let mut group = CursorFollowGroup::new(vec![
        FakeElement::at(0.0, 0.0, 100.0, 20.0),
        FakeElement::at(0.0, 100.0, 100.0, 20.0),
    ]);
    group.pointer_moved(60.0, 15.0);
    assert_eq!(group.targets()[0].offset.get(), (0.0, 0.0));

    group.enter(0);
    assert!(group.is_active(0));
    group.pointer_moved(60.0, 15.0);
    assert_eq!(group.targets()[0].offset.get(), (10.0, 5.0));
    assert_eq!(group.targets()[1].offset.get(), (0.0, 0.0));

    group.leave(0);
    assert!(!group.is_active(0));
    assert_eq!(group.targets()[0].offset.get(), (0.0, 0.0));
    group.pointer_moved(90.0, 15.0);
    assert_eq!(group.targets()[0].offset.get(), (0.0, 0.0));
}

#[test]
fn each_target_measures_its_own_bounds() {
    let mut group = CursorFollowGroup::new(vec![
        FakeElement::at(0.0, 0.0, 10.0, 10.0),
        FakeElement::at(500.0, 500.0, 10.0, 10.0),
    ]);
    group.enter(0);
    group.enter(1);
    group.enter(1);
    group.pointer_moved(5.0, 5.0);
    assert_eq!(group.targets()[0].offset.get(), (0.0, 0.0));
    assert_eq!(group.targets()[1].offset.get(), (-500.0, -500.0));

    // Layout changes are picked up on the next move.
    group.targets()[1].rect.set(Rect {
        left: 0.0,
        top: 0.0,
        width: 10.0,
        height: 10.0,
    });
    group.pointer_moved(5.0, 5.0);
    assert_eq!(group.targets()[1].offset.get(), (0.0, 0.0));
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut group = CursorFollowGroup::new(vec![FakeElement::at(0.0, 0.0, 1.0, 1.0)]);
    group.enter(5);
    group.leave(5);
    assert!(!group.is_active(5));
    assert_eq!(group.len(), 1);
    group.pointer_moved(1.0, 1.0);
}

#[test]
fn easing_curve_shape() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn smooth_scroll_lands_on_target() {
    let mut s = SmoothScroll::new(100.0, 1100.0, 1800.0);
    let first = s.sample(5000.0);
    assert_eq!(first.y, 100.0);
    assert!(!first.finished);

    let mid = s.sample(5900.0);
    assert!((mid.y - 600.0).abs() < 1e-9);
    assert!(!mid.finished);

    let end = s.sample(6800.0);
    assert_eq!(end.y, 1100.0);
    assert!(end.finished);

    let late = s.sample(9000.0);
    assert_eq!(late.y, 1100.0);
    assert!(late.finished);
}

#[test]
fn smooth_scroll_upwards_and_zero_duration() {
    let mut up = SmoothScroll::new(800.0, 0.0, 1800.0);
    up.sample(0.0);
    assert!(up.sample(450.0).y > 700.0);
    assert_eq!(up.sample(1800.0).y, 0.0);

    let mut instant = SmoothScroll::new(0.0, 300.0, 0.0);
    let step = instant.sample(12.0);
    assert_eq!(step.y, 300.0);
    assert!(step.finished);
}

#[test]
fn reveal_fires_once_per_element() {
    let mut set = RevealSet::new(2);
    assert_eq!(set.observe(0, false), RevealEvent::None);
    assert_eq!(set.observe(0, true), RevealEvent::Revealed);
    assert!(set.has_fired(0));
    assert!(!set.has_fired(1));
    assert_eq!(set.observe(0, true), RevealEvent::None);
    assert_eq!(set.observe(0, false), RevealEvent::Left);
    assert_eq!(set.observe(0, true), RevealEvent::Reentered);
    assert_eq!(set.observe(7, true), RevealEvent::None);
    assert_eq!(set.len(), 2);
}

#[test]
fn deferred_links_accept_only_http() {
    let link = DeferredLink::parse(" https://github.com/someone ", 700).expect("https");
    assert_eq!(link.url, "https://github.com/someone");
    assert_eq!(link.delay_ms, 700);
    assert!(DeferredLink::parse("HTTP://example.com", 700).is_some());
    assert!(DeferredLink::parse("javascript:alert(1)", 700).is_none());
    assert!(DeferredLink::parse("", 700).is_none());
    assert!(DeferredLink::parse("/relative", 700).is_none());
}
