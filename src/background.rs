use crate::config;
use crate::constants::MAX_PARTICLES_FROM_MARKUP;
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::render::CanvasPainter;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use valor_core::{PointerState, Scene};
use web_sys as web;

/// Mounted particle background. Dropping it cancels the pending frame and
/// detaches every listener; the particles go with it.
pub struct Background {
    frame_loop: FrameLoop,
    _listeners: Vec<Listener>,
}

impl Background {
    pub fn mount(window: &web::Window, canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        // The only guarded precondition: no 2d context, no animation.
        let ctx = dom::context_2d(canvas)?;

        let mut listeners = vec![events::wire_resize(window, canvas)];
        let pointer = Rc::new(RefCell::new(PointerState::default()));
        listeners.extend(events::wire_pointer_handlers(canvas, &pointer));

        let params = config::field_params(&dom::markup_overrides(canvas), MAX_PARTICLES_FROM_MARKUP);
        let surface = DVec2::new(canvas.width() as f64, canvas.height() as f64);
        log::info!(
            "[background] mounting {} particles on {:.0}x{:.0}",
            params.particle_count,
            surface.x,
            surface.y
        );
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            scene: Scene::new(params, surface),
            painter: CanvasPainter::new(ctx),
            canvas: canvas.clone(),
            pointer,
        }));

        Ok(Self {
            frame_loop: frame::start_loop(frame_ctx),
            _listeners: listeners,
        })
    }

    pub fn unmount(mut self) {
        self.frame_loop.stop();
        log::info!("[background] unmounted");
    }
}
