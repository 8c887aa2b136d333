//! Browser host: canvas 2D surface, DOM icon elements,
//! `requestAnimationFrame` and the window `resize` event.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, Window};

use super::{
    FrameCallback, FrameToken, Host, HostError, ResizeCallback, ResizeSubscription, Rgba,
    Surface, VisualStyle,
};
use crate::geometry::Viewport;
use crate::particles::IconKind;

/// Class applied to every particle wrapper element.
pub const PARTICLE_CLASS: &str = "floating-icon";

/// Icon-font classes for each kind.
pub fn icon_classes(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Java => "fab fa-java",
        IconKind::Angular => "fab fa-angular",
        IconKind::Python => "fab fa-python",
        IconKind::Brain => "fas fa-brain",
        IconKind::Robot => "fas fa-robot",
        IconKind::NetworkWired => "fas fa-network-wired",
        IconKind::Microchip => "fas fa-microchip",
        IconKind::Database => "fas fa-database",
        IconKind::Code => "fas fa-code",
        IconKind::Cogs => "fas fa-cogs",
        IconKind::ChartLine => "fas fa-chart-line",
        IconKind::Cube => "fas fa-cube",
        IconKind::Docker => "fab fa-docker",
        IconKind::GitAlt => "fab fa-git-alt",
        IconKind::Terminal => "fas fa-terminal",
        IconKind::LayerGroup => "fas fa-layer-group",
    }
}

fn js_err(err: JsValue) -> HostError {
    HostError::Js(format!("{:?}", err))
}

/// Canvas 2D surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(HostError::Unavailable("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::Unavailable("CanvasRenderingContext2d"))?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}

/// Host backed by the page's window and document.
pub struct WebHost {
    window: Option<Window>,
    document: Option<Document>,
    container: Element,
    /// Canvas whose context has not been requested yet.
    canvas: Option<HtmlCanvasElement>,
    surface: Option<CanvasSurface>,
    /// Closure for the pending animation frame.
    frame: Option<(i32, Closure<dyn FnMut()>)>,
    /// Closure of the frame that last ran. It may still be on the stack when
    /// the next frame is requested, so it is parked here rather than dropped.
    retired: Option<Closure<dyn FnMut()>>,
    listeners: Vec<(ResizeSubscription, Closure<dyn FnMut()>)>,
    next_subscription: u32,
}

impl WebHost {
    /// Bind to `canvas` for the network layer and `container` for icons.
    ///
    /// The canvas is left untouched until the surface is first requested.
    /// A canvas without a 2D context then leaves the host without a surface.
    pub fn new(canvas: HtmlCanvasElement, container: Element) -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(Window::document);

        Self {
            window,
            document,
            container,
            canvas: Some(canvas),
            surface: None,
            frame: None,
            retired: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    fn window(&self) -> Result<&Window, HostError> {
        self.window.as_ref().ok_or(HostError::Unavailable("window"))
    }

    fn document(&self) -> Result<&Document, HostError> {
        self.document.as_ref().ok_or(HostError::Unavailable("document"))
    }

    fn dimension(value: Result<JsValue, JsValue>) -> f32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    }
}

impl Host for WebHost {
    type Visual = HtmlElement;

    fn is_interactive(&self) -> bool {
        self.window.is_some() && self.document.is_some()
    }

    fn viewport(&self) -> Viewport {
        match &self.window {
            Some(window) => Viewport::new(
                Self::dimension(window.inner_width()),
                Self::dimension(window.inner_height()),
            ),
            None => Viewport::new(0.0, 0.0),
        }
    }

    fn entropy(&self) -> u64 {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        (hi << 32) | lo
    }

    fn surface(&mut self) -> Option<&mut dyn Surface> {
        if self.is_interactive() {
            if let Some(canvas) = self.canvas.take() {
                self.surface = match CanvasSurface::new(canvas) {
                    Ok(surface) => Some(surface),
                    Err(err) => {
                        log::warn!("canvas 2D context not available: {}", err);
                        None
                    }
                };
            }
        }
        self.surface.as_mut().map(|s| s as &mut dyn Surface)
    }

    fn create_visual(&mut self, icon: IconKind) -> Result<HtmlElement, HostError> {
        let document = self.document()?;

        let wrapper = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| HostError::Unavailable("HtmlElement"))?;
        wrapper.set_class_name(PARTICLE_CLASS);

        let glyph = document.create_element("i").map_err(js_err)?;
        glyph.set_class_name(icon_classes(icon));

        wrapper.append_child(&glyph).map_err(js_err)?;
        self.container.append_child(&wrapper).map_err(js_err)?;
        Ok(wrapper)
    }

    fn update_visual(&mut self, visual: &HtmlElement, style: &VisualStyle) {
        let css = visual.style();
        // Style writes only fail on read-only declarations
        let _ = css.set_property("left", &format!("{}px", style.left));
        let _ = css.set_property("top", &format!("{}px", style.top));
        let _ = css.set_property("opacity", &style.opacity.to_string());
        let _ = css.set_property("transform", &style.transform());
    }

    fn remove_visual(&mut self, visual: HtmlElement) {
        visual.remove();
    }

    fn request_frame(&mut self, callback: FrameCallback) -> Result<FrameToken, HostError> {
        let closure: Closure<dyn FnMut()> = Closure::once(move || callback());
        let id = self
            .window()?
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(js_err)?;

        self.retired = self.frame.replace((id, closure)).map(|(_, c)| c);
        Ok(FrameToken(id))
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if !matches!(self.frame, Some((id, _)) if id == token.0) {
            return;
        }
        if let Some(window) = &self.window {
            let _ = window.cancel_animation_frame(token.0);
        }
        self.frame = None;
    }

    fn on_resize(&mut self, callback: ResizeCallback) -> Result<ResizeSubscription, HostError> {
        let closure = Closure::wrap(callback);
        self.window()?
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;

        let subscription = ResizeSubscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, closure));
        Ok(subscription)
    }

    fn off_resize(&mut self, subscription: ResizeSubscription) {
        let Some(pos) = self.listeners.iter().position(|(s, _)| *s == subscription) else {
            return;
        };
        let (_, closure) = self.listeners.swap_remove(pos);
        if let Some(window) = &self.window {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        self.retired.take();
        if let Some((id, _)) = self.frame.take() {
            if let Some(window) = &self.window {
                let _ = window.cancel_animation_frame(id);
            }
        }
        let subscriptions: Vec<ResizeSubscription> =
            self.listeners.iter().map(|(s, _)| *s).collect();
        for subscription in subscriptions {
            self.off_resize(subscription);
        }
    }
}
