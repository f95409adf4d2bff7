use crate::constants::REVEAL_CLASS;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Window inner size in CSS pixels.
pub fn viewport_extent(window: &web::Window) -> anyhow::Result<Vec2> {
    let w = window
        .inner_width()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerWidth is not a number"))?;
    let h = window
        .inner_height()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerHeight is not a number"))?;
    Ok(Vec2::new(w as f32, h as f32))
}

/// Match the canvas backing store to its CSS box so pointer coordinates and
/// the `resolution` uniform share one pixel space.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let w_px = canvas.client_width().max(1) as u32;
    let h_px = canvas.client_height().max(1) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Drop the pre-start class so the page fades in once rendering is live.
pub fn reveal(document: &web::Document) {
    let selector = format!(".{}", REVEAL_CLASS);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            _ = el.class_list().remove_1(REVEAL_CLASS);
        }
    }
}
