use super::Listener;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use valor_core::PointerState;
use web_sys as web;

/// Translate canvas mouse events into the shared pointer state read by the
/// frame callback.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<PointerState>>,
) -> Vec<Listener> {
    vec![
        wire_mousemove(canvas, pointer),
        wire_mouseenter(canvas, pointer),
        wire_mouseleave(canvas, pointer),
    ]
}

fn wire_mousemove(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) -> Listener {
    let canvas_for_rect = canvas.clone();
    let pointer = pointer.clone();
    Listener::attach_mouse(canvas, "mousemove", move |ev| {
        let pos = input::pointer_canvas_px(ev, &canvas_for_rect);
        pointer.borrow_mut().moved_to(pos.x, pos.y);
    })
}

fn wire_mouseenter(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) -> Listener {
    let pointer = pointer.clone();
    Listener::attach(canvas, "mouseenter", move |_| {
        pointer.borrow_mut().entered();
    })
}

fn wire_mouseleave(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) -> Listener {
    let pointer = pointer.clone();
    Listener::attach(canvas, "mouseleave", move |_| {
        pointer.borrow_mut().left();
    })
}
