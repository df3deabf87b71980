use crate::constants::{GRID_BACKDROP_ID, LOADER_ID, SHAPES_ID, WORDMARK_ID};
use crate::dom;
use crate::events::Listener;
use crate::input;
use valor_core::hero::{
    floating_shapes, parallax_offset, reveal_style, wordmark_reveals, LetterTone, CALLS_TO_ACTION,
    LETTER_DURATION_SEC, LETTER_RISE_PX, LOADING_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const HIDDEN_STYLE: &str = "opacity:0";

/// Element plus the style that plays its entrance once loading ends.
struct Reveal {
    el: web::Element,
    style: String,
}

/// Wired hero section: the pending loading timer and the parallax listener.
pub struct HeroPage {
    window: web::Window,
    timer: Option<i32>,
    _on_loaded: Closure<dyn FnMut()>,
    _parallax: Option<Listener>,
}

impl HeroPage {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        dom::set_hidden(document, LOADER_ID, false);

        let mut reveals = build_wordmark(document)?;
        reveals.extend(wire_calls_to_action(document));
        spawn_floating_shapes(document);

        let document_loaded = document.clone();
        let on_loaded = Closure::wrap(Box::new(move || {
            dom::set_hidden(&document_loaded, LOADER_ID, true);
            for r in &reveals {
                dom::set_style(&r.el, &r.style);
            }
            log::info!("[hero] revealed {} elements", reveals.len());
        }) as Box<dyn FnMut()>);

        let timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_loaded.as_ref().unchecked_ref(),
                LOADING_MS,
            )
            .map_err(|e| log::warn!("[hero] setTimeout failed: {:?}", e))
            .ok();

        Ok(Self {
            window: window.clone(),
            timer,
            _on_loaded: on_loaded,
            _parallax: wire_parallax(window, document),
        })
    }
}

impl Drop for HeroPage {
    fn drop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

fn build_wordmark(document: &web::Document) -> anyhow::Result<Vec<Reveal>> {
    let container: web::Element = dom::element_by_id(document, WORDMARK_ID)?;
    container.set_inner_html("");
    let mut out = Vec::new();
    for letter in wordmark_reveals() {
        let tone = match letter.tone {
            LetterTone::Word => "letter letter-word",
            LetterTone::Suffix => "letter letter-suffix",
        };
        let text = letter.ch.to_string();

        let span = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        span.set_class_name(tone);
        span.set_text_content(Some(text.as_str()));
        dom::set_style(
            &span,
            &format!("{HIDDEN_STYLE};transform:translateY({LETTER_RISE_PX}px)"),
        );

        let glow = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        glow.set_class_name("letter-glow");
        glow.set_text_content(Some(text.as_str()));
        _ = glow.set_attribute("aria-hidden", "true");
        _ = span.append_child(&glow);

        _ = container.append_child(&span);
        out.push(Reveal {
            el: span,
            style: reveal_style(letter.delay_sec, LETTER_DURATION_SEC),
        });
    }
    Ok(out)
}

fn wire_calls_to_action(document: &web::Document) -> Vec<Reveal> {
    let mut out = Vec::new();
    for cta in CALLS_TO_ACTION {
        let Some(el) = document.get_element_by_id(cta.id) else {
            log::warn!("[hero] missing #{}", cta.id);
            continue;
        };
        _ = el.set_attribute("href", cta.href);
        if cta.new_tab {
            _ = el.set_attribute("target", "_blank");
            _ = el.set_attribute("rel", "noopener noreferrer");
        }
        el.set_text_content(Some(cta.label));
        dom::set_style(&el, HIDDEN_STYLE);
        out.push(Reveal {
            el,
            style: reveal_style(cta.delay_sec, cta.duration_sec),
        });
    }
    out
}

fn spawn_floating_shapes(document: &web::Document) {
    let Some(container) = document.get_element_by_id(SHAPES_ID) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for shape in floating_shapes(&mut rng) {
        if let Ok(div) = document.create_element("div") {
            div.set_class_name("floating-shape");
            dom::set_style(&div, &shape.style());
            _ = container.append_child(&div);
        }
    }
}

fn wire_parallax(window: &web::Window, document: &web::Document) -> Option<Listener> {
    let backdrop = document.get_element_by_id(GRID_BACKDROP_ID)?;
    let window_size = window.clone();
    Some(Listener::attach_mouse(window, "mousemove", move |ev| {
        let offset = parallax_offset(
            input::pointer_client_px(ev),
            input::viewport_size(&window_size),
        );
        dom::set_style(
            &backdrop,
            &format!("transform:translate({:.2}px, {:.2}px)", offset.x, offset.y),
        );
    }))
}
