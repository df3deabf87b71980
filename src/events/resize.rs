use super::Listener;
use crate::dom;
use web_sys as web;

/// Keep the canvas backing size equal to the viewport.
pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Listener {
    dom::sync_canvas_to_viewport(canvas);
    let canvas_resize = canvas.clone();
    Listener::attach(window, "resize", move |_| {
        dom::sync_canvas_to_viewport(&canvas_resize);
    })
}
