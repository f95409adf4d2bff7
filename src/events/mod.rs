pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::input::{InputEvent, InputQueue};
use crate::AppFrame;
use std::cell::RefCell;
use std::rc::Rc;

/// Immediate draw from an event listener. A failed draw is fatal.
pub(crate) fn redraw_now(frame_ctx: &Rc<RefCell<AppFrame>>) {
    let result = frame_ctx.borrow_mut().redraw();
    if let Err(e) = result {
        log::error!("redraw error: {}", e);
        wasm_bindgen::throw_str(&e.to_string());
    }
}

/// Queue an input event; touch and resize also draw right away.
pub(crate) fn dispatch(input: &InputQueue, frame_ctx: &Rc<RefCell<AppFrame>>, event: InputEvent) {
    let redraw = event.wants_redraw();
    input.push(event);
    if redraw {
        redraw_now(frame_ctx);
    }
}
