//! Icon particle kinematics.

use rand::Rng;

use super::icon::IconKind;
use crate::geometry::wrap_axis;
use crate::host::VisualStyle;

/// Maximum absolute velocity per axis, px/tick.
pub const MAX_SPEED: f32 = 0.25;
/// Maximum absolute rotation speed, degrees/tick.
pub const MAX_SPIN: f32 = 0.25;
pub const MIN_SIZE: f32 = 0.8;
pub const MAX_SIZE: f32 = 1.4;
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 0.25;

/// A drifting, rotating icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Scale factor in `[MIN_SIZE, MAX_SIZE]`.
    pub size: f32,
    pub opacity: f32,
    pub icon: IconKind,
    /// Degrees. Grows without bound.
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Particle {
    /// Draw a particle at a random position inside the viewport.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..=width.max(0.0)),
            y: rng.gen_range(0.0..=height.max(0.0)),
            vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            size: rng.gen_range(MIN_SIZE..=MAX_SIZE),
            opacity: rng.gen_range(MIN_OPACITY..=MAX_OPACITY),
            icon: IconKind::random(rng),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-MAX_SPIN..=MAX_SPIN),
        }
    }

    /// Advance one tick, wrapping `margin` px beyond the viewport edges.
    #[inline]
    pub fn step(&mut self, width: f32, height: f32, margin: f32) {
        self.rotation += self.rotation_speed;
        self.x = wrap_axis(self.x + self.vx, width, margin);
        self.y = wrap_axis(self.y + self.vy, height, margin);
    }

    /// Presentation properties for this particle's visual.
    #[inline]
    pub fn reflect(&self) -> VisualStyle {
        VisualStyle {
            left: self.x,
            top: self.y,
            opacity: self.opacity,
            rotation: self.rotation,
            scale: self.size,
        }
    }
}

/// Draw `count` random particles.
pub fn seed<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f32, height: f32) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng, width, height)).collect()
}

/// Advance every particle by one tick.
pub fn step(particles: &mut [Particle], width: f32, height: f32, margin: f32) {
    for particle in particles {
        particle.step(width, height, margin);
    }
}
