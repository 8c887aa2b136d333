//! Viewport geometry and the two boundary rules used by the simulations.
//!
//! - Nodes *bounce*: velocity flips on the axis that left the surface and the
//!   position is clamped back inside.
//! - Particles *wrap*: leaving the viewport by more than a margin teleports
//!   the particle to the same margin beyond the opposite edge.

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel size for a raster surface covering this viewport.
    ///
    /// Negative and non-finite values collapse to zero.
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

fn to_pixels(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}

/// Viewport size class, decided once at seed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    /// `Mobile` strictly below `threshold`, `Desktop` otherwise.
    #[inline]
    pub fn for_width(width: f32, threshold: f32) -> Self {
        if width < threshold {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Bounce one axis against `[0, max]`.
///
/// Returns the clamped position and the (possibly inverted) velocity.
#[inline]
pub fn bounce_axis(position: f32, velocity: f32, max: f32) -> (f32, f32) {
    let max = max.max(0.0);
    let velocity = if position < 0.0 || position > max {
        -velocity
    } else {
        velocity
    };
    (position.clamp(0.0, max), velocity)
}

/// Wrap one axis around `[-margin, max + margin]`.
///
/// The low edge is checked before the high edge, so a position that lands
/// exactly on `-margin` or `max + margin` is left alone.
#[inline]
pub fn wrap_axis(position: f32, max: f32, margin: f32) -> f32 {
    let mut position = position;
    if position < -margin {
        position = max + margin;
    }
    if position > max + margin {
        position = -margin;
    }
    position
}
