//! Portfolio Backdrop - WASM Module
//!
//! Animated background for the portfolio site, compiled to WebAssembly and
//! exposed to JavaScript via wasm-bindgen. Two layers share the viewport:
//! a canvas-drawn network of drifting nodes joined by distance-faded lines,
//! and floating tech icons positioned as DOM elements.
//!
//! # Architecture
//!
//! - `geometry`: Viewport, breakpoints, bounce and wrap rules
//! - `network`: Node simulation, connectivity and raster drawing
//! - `particles`: Icon particle simulation and retained visuals
//! - `host`: Capabilities the engine runs against (browser or test double)
//! - `engine`: Render loop and mount/unmount lifecycle
//! - `config`: Tunables, deserialised from a JS object

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement};

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod host;
pub mod network;
pub mod particles;

pub use config::BackdropConfig;
pub use engine::{Backdrop, BackdropStats, Phase};
pub use error::BackdropError;
pub use host::web::WebHost;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (module re-instantiated by a bundler) keeps the first logger
    console_log::init_with_level(log::Level::Info).ok();
}

/// Whether this is a browser with a window and a document.
///
/// False during server-side rendering or in a worker.
#[wasm_bindgen(js_name = isBrowser)]
pub fn is_browser() -> bool {
    web_sys::window().and_then(|w| w.document()).is_some()
}

/// Main entry point for the animated background.
///
/// Holds the configuration across mounts. Each `mount` builds a fresh
/// backdrop; `unmount` tears it down completely.
#[wasm_bindgen]
pub struct BackdropWasm {
    config: BackdropConfig,
    backdrop: Option<Backdrop<WebHost>>,
}

#[wasm_bindgen]
impl BackdropWasm {
    /// Create a backdrop controller.
    ///
    /// # Arguments
    ///
    /// * `config` - Partial config object; `undefined` or `null` uses the
    ///   defaults. Negative or non-finite lengths and speeds are rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BackdropWasm, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            BackdropConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| BackdropError::Config(e.to_string()))?
        };
        config.validate()?;

        Ok(Self {
            config,
            backdrop: None,
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the background.
    ///
    /// Any previous mount is torn down first.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Canvas the node network is drawn on
    /// * `container` - Element the icon particles are appended to
    pub fn mount(&mut self, canvas: HtmlCanvasElement, container: Element) -> Result<(), JsValue> {
        self.unmount();

        let backdrop = Backdrop::new(WebHost::new(canvas, container), self.config.clone());
        backdrop.mount()?;
        self.backdrop = Some(backdrop);
        Ok(())
    }

    /// Stop the render loop, remove listeners and icon elements.
    pub fn unmount(&mut self) {
        if let Some(backdrop) = self.backdrop.take() {
            backdrop.unmount();
        }
    }

    /// Whether a backdrop is currently animating.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.backdrop.as_ref().is_some_and(Backdrop::is_running)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Counts and sizes of the current backdrop, or `undefined` when
    /// nothing is mounted.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        let stats = self.backdrop.as_ref().map(Backdrop::stats);
        Ok(serde_wasm_bindgen::to_value(&stats)?)
    }
}
