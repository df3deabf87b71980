pub mod pointer;
pub mod resize;

pub use pointer::wire_pointer_handlers;
pub use resize::wire_resize;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached DOM listener. Dropping it detaches the callback.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Listener whose handler only cares about mouse events.
    pub fn attach_mouse(
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(&web::MouseEvent) + 'static,
    ) -> Self {
        Self::attach(target, kind, move |ev: web::Event| {
            if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
                handler(mouse);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
