#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod clock;
mod constants;
mod controls;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod telemetry;
mod uniforms;

use clock::InstantClock;
use constants::CANVAS_SELECTOR;
use frame::FrameContext;
use input::{InputQueue, InputReconciler};
use render::GpuState;

pub(crate) type AppFrame = FrameContext<GpuState, InstantClock>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chroma-pursuit starting");

    // Frame-time baseline; the first tick's dt is measured from here
    let clock = InstantClock::new();
    spawn_local(async move {
        if let Err(e) = init(clock).await {
            log::error!("init error: {:?}", e);
            wasm_bindgen::throw_str(&format!("{:#}", e));
        }
    });
    Ok(())
}

async fn init(clock: InstantClock) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing <canvas>"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store follows the CSS box; registered before the input resize
    // listener so redraws triggered by a resize see the new size
    dom::wire_canvas_resize(&canvas);

    let gpu = GpuState::new(canvas).await?;

    let input = InputQueue::default();
    let reconciler = InputReconciler::new(dom::viewport_extent(&window)?);
    let frame_ctx: Rc<RefCell<AppFrame>> = Rc::new(RefCell::new(FrameContext::new(
        gpu,
        clock,
        reconciler,
        input.clone(),
    )));

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        input,
        frame_ctx: frame_ctx.clone(),
    });
    events::wire_global_keydown(frame_ctx.clone(), window.clone());

    let doc_for_debug = document.clone();
    frame::start_loop(frame_ctx, move |snapshot| {
        overlay::set_debug_text(&doc_for_debug, &snapshot.to_string());
    });

    dom::reveal(&document);
    log::info!("chroma-pursuit running");
    Ok(())
}
