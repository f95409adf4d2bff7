use crate::clock::Clock;
use crate::core::PursuitState;
use crate::error::RenderError;
use crate::input::{InputQueue, InputReconciler};
use crate::telemetry::TelemetrySnapshot;
use crate::uniforms::{self, EffectSurface};

/// Everything the frame loop and the input listeners share.
pub struct FrameContext<S, C> {
    pub surface: S,
    pub clock: C,
    pub state: PursuitState,
    pub reconciler: InputReconciler,
    pub input: InputQueue,
    pub debug: bool,
    last_time: f64,
}

impl<S: EffectSurface, C: Clock> FrameContext<S, C> {
    /// The clock reading taken here is the baseline for the first tick's dt.
    pub fn new(surface: S, clock: C, reconciler: InputReconciler, input: InputQueue) -> Self {
        let last_time = clock.now_sec();
        Self {
            surface,
            clock,
            state: PursuitState::default(),
            reconciler,
            input,
            debug: false,
            last_time,
        }
    }

    #[inline]
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// One display refresh: reconcile input, integrate, draw.
    ///
    /// Returns a telemetry snapshot when debug mode is on.
    pub fn frame(&mut self) -> Result<Option<TelemetrySnapshot>, RenderError> {
        let now = self.clock.now_sec();
        let dt_sec = (now - self.last_time) as f32;

        self.drain_input();
        let sample = self.state.step(dt_sec);
        let snapshot = self
            .debug
            .then(|| TelemetrySnapshot::capture(&self.state, sample, dt_sec));
        self.render()?;

        self.last_time = now;
        Ok(snapshot)
    }

    /// Out-of-band draw for touch, resize and strength changes. Does not
    /// advance the pursuit, so it is safe to call any number of times.
    pub fn redraw(&mut self) -> Result<(), RenderError> {
        self.drain_input();
        self.render()
    }

    pub fn adjust_strength(&mut self, delta: f32) {
        self.state.strength += delta;
        log::info!("[keys] strength={:.2}", self.state.strength);
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        log::info!("[keys] debug={}", self.debug);
        self.debug
    }

    fn drain_input(&mut self) {
        while let Some(ev) = self.input.pop() {
            self.reconciler.apply(&ev, &mut self.state.target);
        }
    }

    fn render(&mut self) -> Result<(), RenderError> {
        uniforms::sync_uniforms(
            &mut self.surface,
            Some(self.state.current),
            self.state.strength,
        )?;
        self.surface.draw()
    }
}

#[cfg(target_arch = "wasm32")]
pub use raf::start_loop;

#[cfg(target_arch = "wasm32")]
mod raf {
    use super::FrameContext;
    use crate::clock::Clock;
    use crate::telemetry::TelemetrySnapshot;
    use crate::uniforms::EffectSurface;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    /// Drive `frame()` from requestAnimationFrame until a draw fails.
    pub fn start_loop<S, C>(
        frame_ctx: Rc<RefCell<FrameContext<S, C>>>,
        on_telemetry: impl Fn(&TelemetrySnapshot) + 'static,
    ) where
        S: EffectSurface + 'static,
        C: Clock + 'static,
    {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Release the borrow before any exception leaves this frame
            let result = frame_ctx.borrow_mut().frame();
            match result {
                Ok(Some(snapshot)) => on_telemetry(&snapshot),
                Ok(None) => {}
                Err(e) => {
                    log::error!("frame error: {}", e);
                    wasm_bindgen::throw_str(&e.to_string());
                }
            }
            request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        request_frame(&tick);
    }

    fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
        if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
