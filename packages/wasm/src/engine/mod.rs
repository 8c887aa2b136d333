//! Backdrop - render loop orchestration and lifecycle.
//!
//! A [`Backdrop`] moves through `Idle → Running → Stopped`:
//! - `mount` seeds both layers, subscribes to resize and requests the first
//!   frame (or does nothing on a non-interactive host)
//! - every frame advances the network, redraws it, advances the particles,
//!   reflects them and requests the next frame
//! - `unmount` cancels the pending frame, unsubscribes and removes every
//!   particle visual
//!
//! Engine state sits behind `Rc<RefCell<_>>`. Host callbacks only hold a
//! `Weak`, and each frame callback carries the generation it was issued for,
//! so a callback that outlives its frame request does nothing.

mod stats;

pub use stats::{BackdropStats, Phase};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::host::{FrameToken, Host, ResizeSubscription};
use crate::network::{Network, NetworkStyle};
use crate::particles::IconLayer;

/// A frame request that has not fired yet.
#[derive(Debug, Clone, Copy)]
struct ScheduledFrame {
    generation: u64,
    token: FrameToken,
}

struct Engine<H: Host + 'static> {
    host: H,
    config: BackdropConfig,
    style: NetworkStyle,
    phase: Phase,
    rng: SmallRng,
    network: Network,
    icons: IconLayer<H::Visual>,
    frame: Option<ScheduledFrame>,
    generation: u64,
    resize: Option<ResizeSubscription>,
    frames: u64,
    this: Weak<RefCell<Engine<H>>>,
}

impl<H: Host + 'static> Engine<H> {
    fn start(&mut self) -> Result<(), BackdropError> {
        match self.phase {
            Phase::Running => {
                log::debug!("backdrop already running");
                return Ok(());
            }
            Phase::Stopped => {
                log::warn!("mount called on a stopped backdrop");
                return Err(BackdropError::Stopped);
            }
            Phase::Idle => {}
        }

        self.config.validate()?;

        if !self.host.is_interactive() {
            log::debug!("non-interactive host, backdrop disabled");
            return Ok(());
        }

        let viewport = self.host.viewport();
        let breakpoint = self.config.breakpoint_for(viewport.width);

        if let Some(surface) = self.host.surface() {
            let (width, height) = viewport.pixel_size();
            surface.set_size(width, height);
            self.network.reseed(
                &mut self.rng,
                self.config.node_count(breakpoint),
                width as f32,
                height as f32,
                self.config.node_speed,
            );
        } else {
            log::warn!("no 2D surface, network layer disabled");
        }

        self.icons.populate(
            &mut self.host,
            &mut self.rng,
            self.config.particle_count(breakpoint),
            viewport,
        );

        self.phase = Phase::Running;
        if let Err(err) = self.attach() {
            self.stop();
            return Err(err);
        }

        log::debug!(
            "backdrop mounted: {:?}, {} nodes, {} particles",
            breakpoint,
            self.network.len(),
            self.icons.len()
        );
        Ok(())
    }

    fn attach(&mut self) -> Result<(), BackdropError> {
        let this = self.this.clone();
        let subscription = self.host.on_resize(Box::new(move || {
            if let Some(rc) = this.upgrade() {
                if let Ok(mut engine) = rc.try_borrow_mut() {
                    engine.resize();
                }
            }
        }))?;
        self.resize = Some(subscription);
        self.schedule()
    }

    fn schedule(&mut self) -> Result<(), BackdropError> {
        self.generation += 1;
        let generation = self.generation;
        let this = self.this.clone();

        let token = self
            .host
            .request_frame(Box::new(move || Engine::on_frame(&this, generation)))?;
        self.frame = Some(ScheduledFrame { generation, token });
        Ok(())
    }

    fn on_frame(this: &Weak<RefCell<Self>>, generation: u64) {
        let Some(rc) = this.upgrade() else {
            return;
        };
        let Ok(mut engine) = rc.try_borrow_mut() else {
            return;
        };
        engine.tick(generation);
    }

    fn tick(&mut self, generation: u64) {
        match self.frame {
            Some(frame) if frame.generation == generation && self.phase == Phase::Running => {}
            _ => return,
        }
        self.frame = None;
        self.frames += 1;

        let viewport = self.host.viewport();
        let threshold = self
            .config
            .link_distance(self.config.breakpoint_for(viewport.width));

        if let Some(surface) = self.host.surface() {
            let (width, height) = surface.size();
            self.network.advance(width as f32, height as f32, threshold);
            self.network.draw(surface, &self.style);
        }

        self.icons.advance(viewport, self.config.wrap_margin);
        self.icons.reflect(&mut self.host);

        if let Err(err) = self.schedule() {
            log::warn!("frame request failed, stopping backdrop: {}", err);
            self.stop();
        }
    }

    fn resize(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let (width, height) = self.host.viewport().pixel_size();
        if let Some(surface) = self.host.surface() {
            surface.set_size(width, height);
        }
        log::debug!("backdrop surface resized to {}x{}", width, height);
    }

    fn stop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        if let Some(frame) = self.frame.take() {
            self.host.cancel_frame(frame.token);
        }
        if let Some(subscription) = self.resize.take() {
            self.host.off_resize(subscription);
        }
        self.icons.release(&mut self.host);
        self.network.clear();
        self.phase = Phase::Stopped;

        log::debug!("backdrop stopped after {} frames", self.frames);
    }

    fn stats(&mut self) -> BackdropStats {
        let surface = self.host.surface().map(|s| s.size());
        BackdropStats {
            phase: self.phase,
            nodes: self.network.len(),
            particles: self.icons.len(),
            edges: self.network.edges().len(),
            frames: self.frames,
            surface_width: surface.map_or(0, |(w, _)| w),
            surface_height: surface.map_or(0, |(_, h)| h),
            network_enabled: surface.is_some(),
        }
    }
}

/// Animated background bound to a host.
///
/// Dropping a `Backdrop` unmounts it.
pub struct Backdrop<H: Host + 'static> {
    engine: Rc<RefCell<Engine<H>>>,
}

impl<H: Host + 'static> Backdrop<H> {
    /// Create an idle backdrop. Nothing touches the host until [`mount`].
    ///
    /// [`mount`]: Backdrop::mount
    pub fn new(host: H, config: BackdropConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| host.entropy());
        let style = NetworkStyle::from(&config);

        let engine = Rc::new_cyclic(|this| {
            RefCell::new(Engine {
                host,
                config,
                style,
                phase: Phase::Idle,
                rng: SmallRng::seed_from_u64(seed),
                network: Network::new(),
                icons: IconLayer::new(),
                frame: None,
                generation: 0,
                resize: None,
                frames: 0,
                this: this.clone(),
            })
        });

        Self { engine }
    }

    /// Seed both layers and start the render loop.
    ///
    /// No-op on a non-interactive host or when already running.
    pub fn mount(&self) -> Result<(), BackdropError> {
        self.engine.borrow_mut().start()
    }

    /// Stop the render loop and release every host resource.
    ///
    /// Safe to call at any time; only a running backdrop has anything to undo.
    pub fn unmount(&self) {
        self.engine.borrow_mut().stop();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.engine.borrow().phase
    }

    /// Whether the render loop is live.
    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Number of network nodes (zero without a surface).
    pub fn node_count(&self) -> usize {
        self.engine.borrow().network.len()
    }

    /// Number of icon particles with a live visual.
    pub fn particle_count(&self) -> usize {
        self.engine.borrow().icons.len()
    }

    /// Snapshot of counts, frame total and surface size.
    pub fn stats(&self) -> BackdropStats {
        self.engine.borrow_mut().stats()
    }
}

impl<H: Host + 'static> Drop for Backdrop<H> {
    fn drop(&mut self) {
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.stop();
        }
    }
}
