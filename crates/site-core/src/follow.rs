//! Hover-follow behaviour: while the pointer is over an element, the element
//! is translated so its centre sits under the pointer.
//!
//! One group type covers every tracked element set (headline text, menu
//! entries, work frames); each target always measures its own bounds.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// An element that can report its layout box and be shifted by an offset.
pub trait FollowTarget {
    fn bounds(&self) -> Rect;
    fn set_offset(&self, dx: f64, dy: f64);
}

#[inline]
pub fn follow_offset(pointer_x: f64, pointer_y: f64, rect: Rect) -> (f64, f64) {
    let (cx, cy) = rect.center();
    (pointer_x - cx, pointer_y - cy)
}

pub struct CursorFollowGroup<T: FollowTarget> {
    targets: Vec<T>,
    active: SmallVec<[usize; 4]>,
}

impl<T: FollowTarget> CursorFollowGroup<T> {
    pub fn new(targets: Vec<T>) -> Self {
        Self {
            targets,
            active: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    pub fn enter(&mut self, index: usize) {
        if index < self.targets.len() && !self.active.contains(&index) {
            self.active.push(index);
        }
    }

    pub fn leave(&mut self, index: usize) {
        self.active.retain(|i| *i != index);
        if let Some(t) = self.targets.get(index) {
            t.set_offset(0.0, 0.0);
        }
    }

    pub fn pointer_moved(&self, x: f64, y: f64) {
        for &i in &self.active {
            let target = &self.targets[i];
            let (dx, dy) = follow_offset(x, y, target.bounds());
            target.set_offset(dx, dy);
        }
    }
}
