//! Browser tests, run with `wasm-pack test --headless --firefox packages/wasm`.

#![cfg(target_arch = "wasm32")]

use portfolio_backdrop_wasm::host::Host;
use portfolio_backdrop_wasm::{Backdrop, BackdropConfig, BackdropWasm, WebHost, is_browser};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture() -> (HtmlCanvasElement, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let container = document.create_element("div").unwrap();
    body.append_child(&canvas).unwrap();
    body.append_child(&container).unwrap();
    (canvas, container)
}

#[wasm_bindgen_test]
fn test_is_browser() {
    assert!(is_browser());
}

#[wasm_bindgen_test]
fn test_mount_creates_icons_and_sizes_canvas() {
    let (canvas, container) = fixture();
    let mut backdrop = BackdropWasm::new(JsValue::UNDEFINED).unwrap();

    backdrop.mount(canvas.clone(), container.clone()).unwrap();

    assert!(backdrop.is_mounted());
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    let expected = if width < 768 { 12 } else { 20 };
    assert_eq!(container.child_element_count(), expected);
    assert_eq!(
        container.first_element_child().unwrap().class_name(),
        "floating-icon"
    );

    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_unmount_removes_icons() {
    let (canvas, container) = fixture();
    let mut backdrop = BackdropWasm::new(JsValue::UNDEFINED).unwrap();

    backdrop.mount(canvas, container.clone()).unwrap();
    backdrop.unmount();

    assert!(!backdrop.is_mounted());
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_remount_does_not_leak_icons() {
    let (canvas, container) = fixture();
    let mut backdrop = BackdropWasm::new(JsValue::UNDEFINED).unwrap();

    backdrop.mount(canvas.clone(), container.clone()).unwrap();
    let first = container.child_element_count();
    backdrop.mount(canvas.clone(), container.clone()).unwrap();
    assert_eq!(container.child_element_count(), first);

    backdrop.unmount();
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_partial_config() {
    let config = js_sys::JSON::parse(r#"{ "desktopParticles": 3, "mobileParticles": 3 }"#).unwrap();
    let (canvas, container) = fixture();
    let mut backdrop = BackdropWasm::new(config).unwrap();

    backdrop.mount(canvas, container.clone()).unwrap();
    assert_eq!(container.child_element_count(), 3);
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_color_arrays_accepted() {
    let config = js_sys::JSON::parse(r#"{ "nodeColor": [255, 0, 0, 0.5], "edgeColor": [0, 0, 255] }"#)
        .unwrap();
    assert!(BackdropWasm::new(config).is_ok());
}

#[wasm_bindgen_test]
fn test_overflowing_speed_rejected() {
    let config = js_sys::JSON::parse(r#"{ "nodeSpeed": 1e39 }"#).unwrap();
    assert!(BackdropWasm::new(config).is_err());
}

#[wasm_bindgen_test]
fn test_host_defers_canvas_context() {
    let (canvas, container) = fixture();
    let host = WebHost::new(canvas.clone(), container.clone());

    // A canvas holds one context kind; this only succeeds if the host has
    // not claimed the 2D context yet.
    assert!(canvas.get_context("bitmaprenderer").unwrap().is_some());

    let backdrop = Backdrop::new(host, BackdropConfig::default());
    backdrop.mount().unwrap();
    assert!(backdrop.is_running());
    assert_eq!(backdrop.node_count(), 0);
    assert!(container.child_element_count() > 0);

    backdrop.unmount();
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_host_acquires_surface_on_demand() {
    let (canvas, container) = fixture();
    let mut host = WebHost::new(canvas, container);
    assert!(host.surface().is_some());
}
