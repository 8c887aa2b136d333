//! Icon catalog for floating particles.
//!
//! Kinds are opaque to the simulation. How a kind looks on screen is up to
//! the host (see `host::web` for the browser's icon-font classes).

use rand::Rng;

/// Tech-domain symbol shown by a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Java,
    Angular,
    Python,
    Brain,
    Robot,
    NetworkWired,
    Microchip,
    Database,
    Code,
    Cogs,
    ChartLine,
    Cube,
    Docker,
    GitAlt,
    Terminal,
    LayerGroup,
}

impl IconKind {
    /// Every kind, in catalog order.
    pub const ALL: [IconKind; 16] = [
        IconKind::Java,
        IconKind::Angular,
        IconKind::Python,
        IconKind::Brain,
        IconKind::Robot,
        IconKind::NetworkWired,
        IconKind::Microchip,
        IconKind::Database,
        IconKind::Code,
        IconKind::Cogs,
        IconKind::ChartLine,
        IconKind::Cube,
        IconKind::Docker,
        IconKind::GitAlt,
        IconKind::Terminal,
        IconKind::LayerGroup,
    ];

    /// Pick a kind uniformly from the catalog.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}
