use glam::DVec2;
use web_sys as web;

/// Client coordinates shifted so the canvas' top-left corner is the origin.
#[inline]
pub fn canvas_px(client: DVec2, canvas_origin: DVec2) -> DVec2 {
    client - canvas_origin
}

/// Pointer position relative to the canvas, in CSS pixels.
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    canvas_px(pointer_client_px(ev), DVec2::new(rect.left(), rect.top()))
}

#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

pub fn viewport_size(window: &web::Window) -> DVec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    DVec2::new(w, h)
}
