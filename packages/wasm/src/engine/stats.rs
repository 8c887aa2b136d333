//! Snapshot of a backdrop for diagnostics.

use serde::Serialize;

/// Lifecycle phase. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

/// Counts and sizes at the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackdropStats {
    pub phase: Phase,
    pub nodes: usize,
    pub particles: usize,
    /// Edges drawn on the last frame.
    pub edges: usize,
    /// Frames run since mount.
    pub frames: u64,
    pub surface_width: u32,
    pub surface_height: u32,
    /// False when no raster surface is available.
    pub network_enabled: bool,
}
