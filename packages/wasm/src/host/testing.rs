//! Recording host for unit tests.
//!
//! `MockHost` hands out integer visuals and queues frame/resize callbacks
//! instead of running them. Tests keep the shared [`MockState`] to inspect
//! what the engine did and to fire callbacks by hand.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::mem;
use std::rc::Rc;

use super::{
    FrameCallback, FrameToken, Host, HostError, ResizeCallback, ResizeSubscription, Rgba,
    Surface, VisualStyle,
};
use crate::geometry::Viewport;
use crate::particles::IconKind;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgba,
    },
}

/// Surface that records every draw call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Draw calls since the last clear.
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Everything the mock host has been asked to do.
pub struct MockState {
    pub viewport: Viewport,
    pub interactive: bool,
    pub entropy: u64,
    /// Shared with the host; `None` simulates a missing 2D context.
    pub surface: Option<Rc<RefCell<RecordingSurface>>>,

    /// Visuals currently attached to the "document".
    pub attached: HashSet<u32>,
    /// Last style written to each visual.
    pub styles: HashMap<u32, VisualStyle>,
    pub created: usize,
    pub updates: usize,
    pub removed: usize,
    /// Number of visuals that may still be created; `None` is unlimited.
    pub visual_budget: Option<usize>,
    next_visual: u32,

    pub pending_frames: Vec<(FrameToken, FrameCallback)>,
    pub frames_requested: usize,
    pub frames_cancelled: usize,
    next_frame: i32,

    pub resize_handlers: Vec<(ResizeSubscription, ResizeCallback)>,
    pub resize_unsubscribed: usize,
    next_subscription: u32,
}

pub type SharedState = Rc<RefCell<MockState>>;

impl MockState {
    fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            interactive: true,
            entropy: 0x5eed,
            surface: Some(Rc::new(RefCell::new(RecordingSurface::default()))),
            attached: HashSet::new(),
            styles: HashMap::new(),
            created: 0,
            updates: 0,
            removed: 0,
            visual_budget: None,
            next_visual: 0,
            pending_frames: Vec::new(),
            frames_requested: 0,
            frames_cancelled: 0,
            next_frame: 1,
            resize_handlers: Vec::new(),
            resize_unsubscribed: 0,
            next_subscription: 0,
        }
    }

    /// Run every queued frame callback once. Returns how many ran.
    pub fn fire_frames(state: &SharedState) -> usize {
        let frames = mem::take(&mut state.borrow_mut().pending_frames);
        let count = frames.len();
        for (_, callback) in frames {
            callback();
        }
        count
    }

    /// Fire `n` frames, one after another.
    pub fn run_frames(state: &SharedState, n: usize) {
        for _ in 0..n {
            Self::fire_frames(state);
        }
    }

    /// Change the viewport and notify every resize subscriber.
    pub fn resize(state: &SharedState, width: f32, height: f32) {
        let mut handlers = {
            let mut s = state.borrow_mut();
            s.viewport = Viewport::new(width, height);
            mem::take(&mut s.resize_handlers)
        };
        for (_, handler) in handlers.iter_mut() {
            handler();
        }
        // Handlers don't unsubscribe from inside a resize.
        let mut s = state.borrow_mut();
        handlers.append(&mut s.resize_handlers);
        s.resize_handlers = handlers;
    }

    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| s.borrow().size())
    }
}

/// Host backed by a shared [`MockState`].
pub struct MockHost {
    state: SharedState,
    surface: Option<SharedSurface>,
}

impl MockHost {
    pub fn new(width: f32, height: f32) -> (Self, SharedState) {
        Self::with_state(MockState::new(width, height))
    }

    /// Host whose 2D context "failed" to initialise.
    pub fn without_surface(width: f32, height: f32) -> (Self, SharedState) {
        let mut state = MockState::new(width, height);
        state.surface = None;
        Self::with_state(state)
    }

    /// Host standing in for a server-side render pass.
    pub fn non_interactive(width: f32, height: f32) -> (Self, SharedState) {
        let mut state = MockState::new(width, height);
        state.interactive = false;
        Self::with_state(state)
    }

    fn with_state(state: MockState) -> (Self, SharedState) {
        let surface = state.surface.clone().map(SharedSurface);
        let state = Rc::new(RefCell::new(state));
        (
            Self {
                state: Rc::clone(&state),
                surface,
            },
            state,
        )
    }
}

struct SharedSurface(Rc<RefCell<RecordingSurface>>);

impl Surface for SharedSurface {
    fn size(&self) -> (u32, u32) {
        self.0.borrow().size()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().set_size(width, height);
    }

    fn clear(&mut self) {
        self.0.borrow_mut().clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.0.borrow_mut().fill_circle(x, y, radius, color);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) {
        self.0.borrow_mut().stroke_line(from, to, width, color);
    }
}

impl Host for MockHost {
    type Visual = u32;

    fn is_interactive(&self) -> bool {
        self.state.borrow().interactive
    }

    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn entropy(&self) -> u64 {
        self.state.borrow().entropy
    }

    fn surface(&mut self) -> Option<&mut dyn Surface> {
        self.surface.as_mut().map(|s| s as &mut dyn Surface)
    }

    fn create_visual(&mut self, _icon: IconKind) -> Result<u32, HostError> {
        let mut s = self.state.borrow_mut();
        if let Some(budget) = s.visual_budget.as_mut() {
            if *budget == 0 {
                return Err(HostError::Unavailable("visual budget"));
            }
            *budget -= 1;
        }
        let id = s.next_visual;
        s.next_visual += 1;
        s.created += 1;
        s.attached.insert(id);
        Ok(id)
    }

    fn update_visual(&mut self, visual: &u32, style: &VisualStyle) {
        let mut s = self.state.borrow_mut();
        assert!(s.attached.contains(visual), "update of detached visual {}", visual);
        s.updates += 1;
        s.styles.insert(*visual, *style);
    }

    fn remove_visual(&mut self, visual: u32) {
        let mut s = self.state.borrow_mut();
        s.attached.remove(&visual);
        s.styles.remove(&visual);
        s.removed += 1;
    }

    fn request_frame(&mut self, callback: FrameCallback) -> Result<FrameToken, HostError> {
        let mut s = self.state.borrow_mut();
        let token = FrameToken(s.next_frame);
        s.next_frame += 1;
        s.frames_requested += 1;
        s.pending_frames.push((token, callback));
        Ok(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let mut s = self.state.borrow_mut();
        let before = s.pending_frames.len();
        s.pending_frames.retain(|(t, _)| *t != token);
        if s.pending_frames.len() < before {
            s.frames_cancelled += 1;
        }
    }

    fn on_resize(&mut self, callback: ResizeCallback) -> Result<ResizeSubscription, HostError> {
        let mut s = self.state.borrow_mut();
        let sub = ResizeSubscription(s.next_subscription);
        s.next_subscription += 1;
        s.resize_handlers.push((sub, callback));
        Ok(sub)
    }

    fn off_resize(&mut self, subscription: ResizeSubscription) {
        let mut s = self.state.borrow_mut();
        s.resize_handlers.retain(|(sub, _)| *sub != subscription);
        s.resize_unsubscribed += 1;
    }
}
