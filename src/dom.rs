use crate::config::MarkupOverrides;
use crate::constants::{DATA_CONNECT_DISTANCE, DATA_PARTICLE_COUNT, DATA_SEED};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Match the canvas backing store to the viewport (CSS pixels, so pointer
/// coordinates map one-to-one onto drawing coordinates).
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
        log::debug!("[dom] canvas {}x{}", canvas.width(), canvas.height());
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))
}

pub fn markup_overrides(canvas: &web::HtmlCanvasElement) -> MarkupOverrides {
    let data = canvas.dataset();
    MarkupOverrides {
        particle_count: data.get(DATA_PARTICLE_COUNT),
        connect_distance: data.get(DATA_CONNECT_DISTANCE),
        seed: data.get(DATA_SEED),
    }
}

/// Add or drop the `hidden` class on `#id`. Absent elements are ignored.
pub fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().toggle_with_force("hidden", hidden);
    }
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    _ = el.set_attribute("style", style);
}
