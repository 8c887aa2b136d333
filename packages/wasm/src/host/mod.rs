//! Host capabilities the backdrop runs against.
//!
//! The engine never touches `window` or `document` directly. Everything it
//! needs from the environment goes through [`Host`]:
//! - viewport size and entropy
//! - a raster [`Surface`] for the network layer (optional)
//! - retained visual handles for icon particles
//! - frame scheduling and resize subscriptions
//!
//! [`web::WebHost`] is the browser implementation.

pub mod web;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Viewport;
use crate::particles::IconKind;

/// Callback run once on the next animation frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Callback run on every viewport resize.
pub type ResizeCallback = Box<dyn FnMut()>;

/// Handle to a pending animation frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

/// Handle to an active resize subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeSubscription(pub u32);

/// Errors raised by host primitives.
#[derive(Debug, Error)]
pub enum HostError {
    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// The environment lacks something the call needs.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

/// An RGBA color with 8-bit channels and a float alpha, as CSS takes it.
///
/// Serialized as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(u8, u8, u8, f32)", into = "(u8, u8, u8, f32)")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl From<(u8, u8, u8, f32)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, f32)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for (u8, u8, u8, f32) {
    fn from(color: Rgba) -> Self {
        (color.r, color.g, color.b, color.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Presentation properties pushed onto a particle's visual handle each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStyle {
    /// Left offset in px.
    pub left: f32,
    /// Top offset in px.
    pub top: f32,
    pub opacity: f32,
    /// Rotation in degrees, unbounded.
    pub rotation: f32,
    pub scale: f32,
}

impl VisualStyle {
    /// CSS transform for this style, e.g. `rotate(45deg) scale(1.2)`.
    pub fn transform(&self) -> String {
        format!("rotate({}deg) scale({})", self.rotation, self.scale)
    }
}

/// 2D raster target for the network layer.
pub trait Surface {
    /// Current pixel size.
    fn size(&self) -> (u32, u32);

    /// Resize the backing store. Clears the surface.
    fn set_size(&mut self, width: u32, height: u32);

    /// Clear every pixel.
    fn clear(&mut self);

    /// Fill a circle centred on `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba);
}

/// The environment a backdrop is mounted into.
pub trait Host {
    /// Retained on-screen representation of one particle.
    type Visual;

    /// Whether this environment can render at all. A non-interactive host
    /// (server-side rendering, headless pre-render) makes `mount` a no-op.
    fn is_interactive(&self) -> bool;

    /// Live viewport size.
    fn viewport(&self) -> Viewport;

    /// Seed material for the RNG when no fixed seed is configured.
    fn entropy(&self) -> u64;

    /// Raster surface for the network layer, if one could be acquired.
    fn surface(&mut self) -> Option<&mut dyn Surface>;

    /// Create and attach a visual for a particle showing `icon`.
    fn create_visual(&mut self, icon: IconKind) -> Result<Self::Visual, HostError>;

    /// Write presentation properties straight onto a visual.
    fn update_visual(&mut self, visual: &Self::Visual, style: &VisualStyle);

    /// Detach a visual from the document and release it.
    fn remove_visual(&mut self, visual: Self::Visual);

    /// Run `callback` once before the next paint.
    fn request_frame(&mut self, callback: FrameCallback) -> Result<FrameToken, HostError>;

    /// Cancel a pending frame. Unknown or already-fired tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Call `callback` on every viewport resize until unsubscribed.
    fn on_resize(&mut self, callback: ResizeCallback) -> Result<ResizeSubscription, HostError>;

    /// Drop a resize subscription. Unknown subscriptions are ignored.
    fn off_resize(&mut self, subscription: ResizeSubscription);
}
