use crate::dom;
use crate::input::{InputEvent, InputQueue, TouchList, TouchPoint};
use crate::AppFrame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub input: InputQueue,
    pub frame_ctx: Rc<RefCell<AppFrame>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_touch(&w);
    wire_viewport_resize(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let input = w.input.clone();
    let frame_ctx = w.frame_ctx.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let event = InputEvent::PointerMoved {
            client_x: ev.client_x() as f32,
            client_y: ev.client_y() as f32,
        };
        super::dispatch(&input, &frame_ctx, event);
    }) as Box<dyn FnMut(_)>);

    _ = w
        .window
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn touch_points(ev: &web::TouchEvent) -> TouchList {
    let list = ev.touches();
    let mut out = TouchList::new();
    for i in 0..list.length() {
        if let Some(t) = list.item(i) {
            out.push(TouchPoint {
                id: t.identifier(),
                client_x: t.client_x() as f32,
                client_y: t.client_y() as f32,
            });
        }
    }
    out
}

fn wire_touch(w: &InputWiring) {
    let input = w.input.clone();
    let frame_ctx = w.frame_ctx.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // No scrolling or pinch-zoom while steering the effect
        ev.prevent_default();
        let event = InputEvent::TouchUpdated {
            touches: touch_points(&ev),
        };
        super::dispatch(&input, &frame_ctx, event);
    }) as Box<dyn FnMut(_)>);

    // preventDefault is ignored on passive listeners
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    for kind in ["touchstart", "touchmove", "touchend"] {
        _ = w
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            );
    }
    closure.forget();
}

// Runs alongside dom::wire_canvas_resize, which only resizes the backing store
fn wire_viewport_resize(w: &InputWiring) {
    let window = w.window.clone();
    let input = w.input.clone();
    let frame_ctx = w.frame_ctx.clone();

    let closure = Closure::wrap(Box::new(move || {
        match dom::viewport_extent(&window) {
            Ok(extent) => {
                let event = InputEvent::ViewportResized {
                    width: extent.x,
                    height: extent.y,
                };
                super::dispatch(&input, &frame_ctx, event);
            }
            Err(e) => log::error!("[resize] {:?}", e),
        }
    }) as Box<dyn FnMut()>);

    _ = w
        .window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
