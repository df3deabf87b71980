use crate::constants::FALLBACK_LINK_ID;
use valor_core::hero::KEY_URL;
use web_sys as web;

/// Send the visitor straight on to the key page; the fallback link stays in
/// place in case navigation is blocked.
pub fn run(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if let Some(link) = document.get_element_by_id(FALLBACK_LINK_ID) {
        _ = link.set_attribute("href", KEY_URL);
    }
    log::info!("[redirect] -> {}", KEY_URL);
    window
        .location()
        .set_href(KEY_URL)
        .map_err(|e| anyhow::anyhow!("navigation failed: {:?}", e))
}
