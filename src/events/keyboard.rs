use crate::constants::STRENGTH_STEP;
use crate::controls::{key_command, KeyCommand, Navigator, UrlBuffer};
use crate::dom::js_err;
use crate::overlay;
use crate::AppFrame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// History/location backed navigator. Records the target entry before
/// replacing the location so every browser ends up with the same history.
pub struct BrowserNavigator {
    window: web::Window,
}

impl BrowserNavigator {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Navigator for BrowserNavigator {
    fn origin(&self) -> String {
        self.window.location().origin().unwrap_or_default()
    }

    fn replace_url(&mut self, url: &str) -> anyhow::Result<()> {
        self.window
            .history()
            .map_err(js_err)?
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_err)
    }

    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        self.window
            .history()
            .map_err(js_err)?
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_err)?;
        self.window.location().replace(url).map_err(js_err)
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    frame_ctx: &Rc<RefCell<AppFrame>>,
    document: &web::Document,
    url: &mut UrlBuffer,
    nav: &mut BrowserNavigator,
) {
    let has_modifier = ev.meta_key() || ev.ctrl_key() || ev.alt_key() || ev.shift_key();
    let Some(cmd) = key_command(&ev.key(), has_modifier) else {
        return;
    };
    ev.prevent_default();

    let result = match cmd {
        KeyCommand::ToggleDebug => {
            if !ev.repeat() {
                let on = frame_ctx.borrow_mut().toggle_debug();
                overlay::set_debug_visible(document, on);
            }
            Ok(())
        }
        KeyCommand::StrengthUp => {
            frame_ctx.borrow_mut().adjust_strength(STRENGTH_STEP);
            super::redraw_now(frame_ctx);
            Ok(())
        }
        KeyCommand::StrengthDown => {
            frame_ctx.borrow_mut().adjust_strength(-STRENGTH_STEP);
            super::redraw_now(frame_ctx);
            Ok(())
        }
        KeyCommand::Type(c) => url.push(c, nav),
        KeyCommand::Backspace => url.backspace(nav),
        KeyCommand::Submit => url.submit(nav).map(|went| {
            if went {
                log::info!("[keys] navigating to /{}", url.as_str());
            }
        }),
    };
    if let Err(e) = result {
        log::error!("[keys] {:?}", e);
    }
}

pub fn wire_global_keydown(frame_ctx: Rc<RefCell<AppFrame>>, window: web::Window) {
    let Some(document) = window.document() else {
        return;
    };
    let mut url = UrlBuffer::default();
    let mut nav = BrowserNavigator::new(window.clone());
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &frame_ctx, &document, &mut url, &mut nav);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
