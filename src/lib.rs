#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod input;
mod redirect;
mod render;

use background::Background;
use constants::{CANVAS_ID, PAGE_ATTR, PAGE_REDIRECT};
use hero::HeroPage;

// Live page state; the wasm module is single-threaded.
thread_local! {
    static BACKGROUND: RefCell<Option<Background>> = RefCell::new(None);
    static HERO: RefCell<Option<HeroPage>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valor-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the particle animation and detach its listeners. Safe to call twice.
#[wasm_bindgen]
pub fn unmount_background() {
    if let Some(bg) = BACKGROUND.with(|b| b.borrow_mut().take()) {
        bg.unmount();
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = document
        .body()
        .and_then(|b| b.get_attribute(PAGE_ATTR))
        .unwrap_or_default();
    log::info!("[page] {:?}", if page.is_empty() { "home" } else { page.as_str() });

    if page == PAGE_REDIRECT {
        return redirect::run(&window, &document);
    }

    match HeroPage::mount(&window, &document) {
        Ok(hero) => HERO.with(|h| *h.borrow_mut() = Some(hero)),
        // the particle background does not depend on the hero markup
        Err(e) => log::warn!("[hero] not mounted: {:?}", e),
    }

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    match Background::mount(&window, &canvas) {
        Ok(bg) => {
            unmount_background();
            BACKGROUND.with(|b| *b.borrow_mut() = Some(bg));
        }
        // blank background, everything else keeps working
        Err(e) => log::warn!("[background] not started: {:?}", e),
    }
    Ok(())
}
