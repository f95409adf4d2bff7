use crate::constants::{DEBUG_CURSOR, DEBUG_ELEMENT_ID, HIDDEN_CURSOR};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn debug_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(DEBUG_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Show or hide the debug readout and swap the page cursor to match.
pub fn set_debug_visible(document: &web::Document, visible: bool) {
    if let Some(el) = debug_element(document) {
        el.set_hidden(!visible);
    }
    if let Some(body) = document.body() {
        let cursor = if visible { DEBUG_CURSOR } else { HIDDEN_CURSOR };
        _ = body.style().set_property("cursor", cursor);
    }
}

#[inline]
pub fn set_debug_text(document: &web::Document, text: &str) {
    if let Some(el) = debug_element(document) {
        el.set_inner_text(text);
    }
}
