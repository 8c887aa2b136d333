//! Network nodes.
//!
//! A node is a point with a velocity. It has no identity beyond its index
//! in the population and is recreated on every mount.

use rand::Rng;

use crate::geometry::bounce_axis;

/// A drifting point in the network layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Node {
    #[inline]
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy }
    }

    /// Advance one tick, bouncing off the `[0, width] × [0, height]` box.
    #[inline]
    pub fn step(&mut self, width: f32, height: f32) {
        let (x, vx) = bounce_axis(self.x + self.vx, self.vx, width);
        let (y, vy) = bounce_axis(self.y + self.vy, self.vy, height);
        self.x = x;
        self.y = y;
        self.vx = vx;
        self.vy = vy;
    }
}

/// Place `count` nodes uniformly inside the surface.
///
/// Velocity components are drawn from `[-speed / 2, speed / 2]`.
pub fn seed<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
    speed: f32,
) -> Vec<Node> {
    let half = speed.abs() / 2.0;
    (0..count)
        .map(|_| {
            Node::new(
                rng.gen_range(0.0..=width.max(0.0)),
                rng.gen_range(0.0..=height.max(0.0)),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

/// Advance every node by one tick.
pub fn step(nodes: &mut [Node], width: f32, height: f32) {
    for node in nodes {
        node.step(width, height);
    }
}
