//! Network layer: drifting nodes joined by distance-faded lines.
//!
//! Each tick the nodes move and bounce, the edge list is rebuilt from
//! scratch, and the whole layer is redrawn onto a cleared [`Surface`].

mod edge;
mod node;

pub use edge::{Edge, MAX_STRENGTH, connect_into, connectivity, strength};
pub use node::{Node, seed, step};

use rand::Rng;

use crate::config::BackdropConfig;
use crate::host::{Rgba, Surface};

/// Drawing parameters for the network layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkStyle {
    pub node_radius: f32,
    pub node_color: Rgba,
    /// Edge RGB; each edge supplies its own alpha.
    pub edge_color: [u8; 3],
    pub edge_width: f32,
}

impl From<&BackdropConfig> for NetworkStyle {
    fn from(config: &BackdropConfig) -> Self {
        Self {
            node_radius: config.node_radius,
            node_color: config.node_color,
            edge_color: config.edge_color,
            edge_width: config.edge_width,
        }
    }
}

/// Node population plus the edge list of the last tick.
#[derive(Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the population with `count` freshly seeded nodes.
    pub fn reseed<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        width: f32,
        height: f32,
        speed: f32,
    ) {
        self.nodes = seed(rng, count, width, height, speed);
        self.edges.clear();
    }

    /// Move every node one tick and rebuild the edge list.
    pub fn advance(&mut self, width: f32, height: f32, threshold: f32) {
        step(&mut self.nodes, width, height);
        connect_into(&self.nodes, threshold, &mut self.edges);
    }

    /// Clear `surface` and draw the current nodes and edges onto it.
    pub fn draw(&self, surface: &mut dyn Surface, style: &NetworkStyle) {
        surface.clear();

        for node in &self.nodes {
            surface.fill_circle(node.x, node.y, style.node_radius, style.node_color);
        }

        let [r, g, b] = style.edge_color;
        for edge in &self.edges {
            let (a, z) = (&self.nodes[edge.i], &self.nodes[edge.j]);
            surface.stroke_line(
                (a.x, a.y),
                (z.x, z.y),
                style.edge_width,
                Rgba::new(r, g, b, edge.strength),
            );
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
