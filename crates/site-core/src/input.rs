use glam::Vec2;

/// CSS-pixel viewport plus the device pixel ratio reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

#[inline]
pub fn pixel_ratio(device_pixel_ratio: f64, cap: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(cap)
    } else {
        1.0
    }
}

/// Backing-store size in physical pixels, never below 1×1.
#[inline]
pub fn drawing_buffer_size(viewport: Viewport, cap: f64) -> (u32, u32) {
    let ratio = pixel_ratio(viewport.device_pixel_ratio, cap);
    let w = (viewport.width * ratio).floor().max(1.0) as u32;
    let h = (viewport.height * ratio).floor().max(1.0) as u32;
    (w, h)
}

/// Scales `size` down uniformly until neither side exceeds `max_dimension`.
/// Sizes already within the limit are returned unchanged.
pub fn fit_within(size: (u32, u32), max_dimension: u32) -> (u32, u32) {
    let (w, h) = (size.0.max(1), size.1.max(1));
    let max_dimension = max_dimension.max(1);
    let largest = w.max(h);
    if largest <= max_dimension {
        return (w, h);
    }
    let scale = max_dimension as f64 / largest as f64;
    let fit = |v: u32| ((v as f64 * scale).floor() as u32).clamp(1, max_dimension);
    (fit(w), fit(h))
}

/// Pointer position mapped to [-1, 1] on both axes, Y pointing up.
#[inline]
pub fn pointer_ndc(client_x: f64, client_y: f64, viewport: Viewport) -> Vec2 {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    let x = (client_x / w) * 2.0 - 1.0;
    let y = -(client_y / h) * 2.0 + 1.0;
    Vec2::new(x as f32, y as f32)
}

#[inline]
pub fn parallax_position(ndc: Vec2, factor: f32) -> Vec2 {
    ndc * factor
}
