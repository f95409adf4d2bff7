use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub client_x: f32,
    pub client_y: f32,
}

pub type TouchList = SmallVec<[TouchPoint; 4]>;

/// Raw input as delivered by the page, in client (top-left origin) pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { client_x: f32, client_y: f32 },
    /// Every touch still on the surface after a touchstart/move/end.
    TouchUpdated { touches: TouchList },
    ViewportResized { width: f32, height: f32 },
}

impl InputEvent {
    /// Touch and resize render right away instead of waiting for the next
    /// scheduled frame.
    #[inline]
    pub fn wants_redraw(&self) -> bool {
        !matches!(self, InputEvent::PointerMoved { .. })
    }
}

/// FIFO of pending input shared between event listeners and the frame loop.
#[derive(Clone, Default)]
pub struct InputQueue {
    events: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl InputQueue {
    pub fn push(&self, event: InputEvent) {
        self.events.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<InputEvent> {
        self.events.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

/// Folds pointer, touch and resize input into a single target position.
#[derive(Clone, Debug)]
pub struct InputReconciler {
    active_touch: Option<i32>,
    viewport: Vec2,
}

impl InputReconciler {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            active_touch: None,
            viewport,
        }
    }

    #[inline]
    pub fn active_touch(&self) -> Option<i32> {
        self.active_touch
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Client coordinates to bottom-left-origin viewport coordinates.
    #[inline]
    pub fn flip(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x, self.viewport.y - client_y)
    }

    pub fn apply(&mut self, event: &InputEvent, target: &mut Vec2) {
        match event {
            InputEvent::PointerMoved { client_x, client_y } => {
                *target = self.flip(*client_x, *client_y);
            }
            InputEvent::TouchUpdated { touches } => {
                if let Some(touch) = self.track_touch(touches) {
                    *target = self.flip(touch.client_x, touch.client_y);
                }
            }
            InputEvent::ViewportResized { width, height } => {
                let extent = Vec2::new(*width, *height);
                // Shift by the size delta so the target keeps its place
                // relative to reflowed content.
                *target += extent - self.viewport;
                self.viewport = extent;
            }
        }
    }

    /// Keep following the tracked touch while it is present, otherwise adopt
    /// the first active one. An empty list leaves tracking untouched.
    fn track_touch(&mut self, touches: &[TouchPoint]) -> Option<TouchPoint> {
        if let Some(id) = self.active_touch {
            if let Some(t) = touches.iter().find(|t| t.id == id) {
                return Some(*t);
            }
        }
        let first = touches.first().copied()?;
        log::debug!("[touch] tracking id={}", first.id);
        self.active_touch = Some(first.id);
        Some(first)
    }
}
