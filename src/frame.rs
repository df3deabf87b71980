use crate::render::CanvasPainter;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use valor_core::{PointerState, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) {
        let pointer = *self.pointer.borrow();
        let surface = DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64);
        self.scene
            .render_frame(&mut self.painter, pointer, surface, timestamp_ms);
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// Running `requestAnimationFrame` loop. Exactly one frame request is pending
/// at a time; `stop` (or drop) cancels it and releases the callback.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> tick cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<TickClosure>>>, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => {
                pending.set(None);
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame(timestamp_ms);
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&tick, &pending);
    FrameLoop { pending, tick }
}
