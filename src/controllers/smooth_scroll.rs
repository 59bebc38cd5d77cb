use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::dom::{self, Listener};
use crate::page::{Controller, PageContext};
use crate::state::smooth_scroll::anchor_target;

/// In-page `#fragment` links scroll smoothly instead of jumping.
pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

impl Controller for SmoothScroll {
    const NAME: &'static str = "smooth scroll";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        let anchors = dom::query_all(&cx.document, "a[href^=\"#\"]");
        if anchors.is_empty() {
            return Ok(None);
        }

        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let document = cx.document.clone();
            let link = anchor.clone();
            listeners.push(Listener::new(&anchor, "click", move |e| {
                let href = link.get_attribute("href").unwrap_or_default();
                let selector = match anchor_target(&href) {
                    Some(selector) => selector,
                    None => return,
                };
                e.prevent_default();
                if let Some(target) = dom::query(&document, selector) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
