#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    pub y: f64,
    pub finished: bool,
}

/// Eased scroll animation between two document offsets.
///
/// Time is anchored at the first sampled frame timestamp, like a
/// `requestAnimationFrame` driven animation.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    start: f64,
    distance: f64,
    duration_ms: f64,
    start_time: Option<f64>,
}

impl SmoothScroll {
    pub fn new(start: f64, end: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: end - start,
            duration_ms: duration_ms.max(0.0),
            start_time: None,
        }
    }

    pub fn sample(&mut self, now_ms: f64) -> ScrollStep {
        let t0 = *self.start_time.get_or_insert(now_ms);
        let elapsed = now_ms - t0;
        let progress = if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        ScrollStep {
            y: self.start + self.distance * ease_in_out_cubic(progress),
            finished: elapsed >= self.duration_ms,
        }
    }
}
