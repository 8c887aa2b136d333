//! Backdrop configuration.
//!
//! Every field has a default, so JavaScript callers may pass a partial
//! object (or nothing at all). Field names are camelCase on the JS side.

use serde::{Deserialize, Serialize};

use crate::error::BackdropError;
use crate::geometry::Breakpoint;
use crate::host::Rgba;

/// Tunables for both simulation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropConfig {
    /// Viewport width (px) below which the mobile populations are used.
    pub breakpoint: f32,
    /// Network node count on mobile viewports (default: 30).
    pub mobile_nodes: usize,
    /// Network node count on desktop viewports (default: 50).
    pub desktop_nodes: usize,
    /// Icon particle count on mobile viewports (default: 12).
    pub mobile_particles: usize,
    /// Icon particle count on desktop viewports (default: 20).
    pub desktop_particles: usize,
    /// Maximum edge length on mobile viewports (default: 100).
    pub mobile_link_distance: f32,
    /// Maximum edge length on desktop viewports (default: 150).
    pub desktop_link_distance: f32,
    /// Width of the node velocity range; components are drawn from
    /// `[-node_speed / 2, node_speed / 2]`.
    pub node_speed: f32,
    /// Node dot radius in px (default: 2).
    pub node_radius: f32,
    /// Node fill, given as `[r, g, b, a]` (default: `[99, 102, 241, 0.6]`).
    pub node_color: Rgba,
    /// Edge RGB; alpha comes from the edge strength.
    pub edge_color: [u8; 3],
    /// Edge stroke width in px (default: 1).
    pub edge_width: f32,
    /// Distance beyond the viewport at which particles wrap.
    pub wrap_margin: f32,
    /// Fixed RNG seed. `None` draws entropy from the host.
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            mobile_nodes: 30,
            desktop_nodes: 50,
            mobile_particles: 12,
            desktop_particles: 20,
            mobile_link_distance: 100.0,
            desktop_link_distance: 150.0,
            node_speed: 0.8,
            node_radius: 2.0,
            node_color: Rgba::new(99, 102, 241, 0.6),
            edge_color: [99, 102, 241],
            edge_width: 1.0,
            wrap_margin: 50.0,
            seed: None,
        }
    }
}

impl BackdropConfig {
    /// Reject lengths, speeds and alphas that are negative or not finite.
    ///
    /// Such values would either panic when sampling velocities or produce
    /// NaN positions that never recover.
    pub fn validate(&self) -> Result<(), BackdropError> {
        let lengths = [
            ("breakpoint", self.breakpoint),
            ("mobileLinkDistance", self.mobile_link_distance),
            ("desktopLinkDistance", self.desktop_link_distance),
            ("nodeSpeed", self.node_speed),
            ("nodeRadius", self.node_radius),
            ("edgeWidth", self.edge_width),
            ("wrapMargin", self.wrap_margin),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(BackdropError::Config(format!(
                    "{field} must be a finite, non-negative number (got {value})"
                )));
            }
        }

        let alpha = self.node_color.a;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(BackdropError::Config(format!(
                "nodeColor alpha must be within [0, 1] (got {alpha})"
            )));
        }
        Ok(())
    }

    /// Network node count for `breakpoint`.
    pub fn node_count(&self, breakpoint: Breakpoint) -> usize {
        match breakpoint {
            Breakpoint::Mobile => self.mobile_nodes,
            Breakpoint::Desktop => self.desktop_nodes,
        }
    }

    /// Icon particle count for `breakpoint`.
    pub fn particle_count(&self, breakpoint: Breakpoint) -> usize {
        match breakpoint {
            Breakpoint::Mobile => self.mobile_particles,
            Breakpoint::Desktop => self.desktop_particles,
        }
    }

    /// Maximum edge length for `breakpoint`.
    pub fn link_distance(&self, breakpoint: Breakpoint) -> f32 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile_link_distance,
            Breakpoint::Desktop => self.desktop_link_distance,
        }
    }

    /// Classify a viewport width against the configured breakpoint.
    #[inline]
    pub fn breakpoint_for(&self, width: f32) -> Breakpoint {
        Breakpoint::for_width(width, self.breakpoint)
    }
}
