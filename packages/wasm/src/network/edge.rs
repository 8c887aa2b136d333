//! Distance-based connectivity between nodes.
//!
//! Edges are not stored between frames; they are recomputed from node
//! positions on every tick. The pass is O(N²) over a few dozen nodes.

use super::node::Node;
use crate::geometry::distance;

/// Opacity of an edge between two coincident nodes.
pub const MAX_STRENGTH: f32 = 0.3;

/// A line between two nodes closer than the link distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the first node, always less than `j`.
    pub i: usize,
    pub j: usize,
    /// Line opacity in `[0, MAX_STRENGTH]`.
    pub strength: f32,
}

/// Strength of a link of length `d` under `threshold`.
///
/// `None` when the nodes are too far apart.
#[inline]
pub fn strength(d: f32, threshold: f32) -> Option<f32> {
    if threshold <= 0.0 || d.is_nan() || d >= threshold {
        return None;
    }
    Some(((1.0 - d / threshold) * MAX_STRENGTH).clamp(0.0, MAX_STRENGTH))
}

/// Every unordered pair of nodes closer than `threshold`.
pub fn connectivity(nodes: &[Node], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    connect_into(nodes, threshold, &mut edges);
    edges
}

/// Same as [`connectivity`], reusing `out`'s allocation.
pub fn connect_into(nodes: &[Node], threshold: f32, out: &mut Vec<Edge>) {
    out.clear();
    for (i, a) in nodes.iter().enumerate() {
        for (j, b) in nodes.iter().enumerate().skip(i + 1) {
            if let Some(strength) = strength(distance(a.x, a.y, b.x, b.y), threshold) {
                out.push(Edge { i, j, strength });
            }
        }
    }
}
