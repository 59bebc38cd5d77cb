use log::debug;
use wasm_bindgen::JsValue;

use crate::dom::{self, ACTIVE};
use crate::page::PageContext;
use crate::state::active_link::CurrentPage;

/// Highlights the `.nav-menu` link pointing at the page being viewed.
pub fn mark_active_link(cx: &PageContext) -> Result<(), JsValue> {
    let pathname = cx.window.location().pathname()?;
    let current = CurrentPage::from_pathname(&pathname);
    debug!("Current page is {}", current.decoded());

    for link in dom::query_all(&cx.document, ".nav-menu a") {
        let href = link.get_attribute("href");
        dom::set_class(&link, ACTIVE, current.matches(href.as_deref()))?;
    }
    Ok(())
}
