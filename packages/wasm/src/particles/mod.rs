//! Particle layer: floating icons backed by retained visuals.
//!
//! Particles are never rasterised. Each one owns a host visual (a DOM
//! element in the browser) whose position, opacity and transform are
//! rewritten every tick.
//!
//! Storage is split into two parallel vectors: `particles[i]` is reflected
//! into `visuals[i]`.

mod icon;
mod particle;

pub use icon::IconKind;
pub use particle::{
    MAX_OPACITY, MAX_SIZE, MAX_SPEED, MAX_SPIN, MIN_OPACITY, MIN_SIZE, Particle, seed, step,
};

use rand::Rng;

use crate::geometry::Viewport;
use crate::host::Host;

/// Particles plus the visual handle for each one.
pub struct IconLayer<V> {
    particles: Vec<Particle>,
    visuals: Vec<V>,
}

impl<V> Default for IconLayer<V> {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            visuals: Vec::new(),
        }
    }
}

impl<V> IconLayer<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `count` particles over `viewport` and create a visual for each,
    /// positioned before the first frame.
    ///
    /// A particle whose visual cannot be created is dropped.
    pub fn populate<H, R>(&mut self, host: &mut H, rng: &mut R, count: usize, viewport: Viewport)
    where
        H: Host<Visual = V> + ?Sized,
        R: Rng + ?Sized,
    {
        self.particles.reserve(count);
        self.visuals.reserve(count);

        for particle in seed(rng, count, viewport.width, viewport.height) {
            match host.create_visual(particle.icon) {
                Ok(visual) => {
                    host.update_visual(&visual, &particle.reflect());
                    self.particles.push(particle);
                    self.visuals.push(visual);
                }
                Err(err) => log::warn!("skipping {:?} particle: {}", particle.icon, err),
            }
        }
    }

    /// Move every particle one tick inside the wrap band of `viewport`.
    pub fn advance(&mut self, viewport: Viewport, margin: f32) {
        step(&mut self.particles, viewport.width, viewport.height, margin);
    }

    /// Push every particle's presentation onto its visual.
    pub fn reflect<H>(&self, host: &mut H)
    where
        H: Host<Visual = V> + ?Sized,
    {
        for (particle, visual) in self.particles.iter().zip(&self.visuals) {
            host.update_visual(visual, &particle.reflect());
        }
    }

    /// Remove every visual from the host and forget all particles.
    pub fn release<H>(&mut self, host: &mut H)
    where
        H: Host<Visual = V> + ?Sized,
    {
        self.particles.clear();
        for visual in self.visuals.drain(..) {
            host.remove_visual(visual);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
