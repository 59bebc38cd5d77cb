use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, Listener, ACTIVE};
use crate::page::{Controller, PageContext};
use crate::state::accordion::Accordion;

/// FAQ accordion over `.faq-item` elements, one open at a time.
pub struct Faq {
    _listeners: Vec<Listener>,
}

fn click(items: &[Element], index: usize) -> Result<(), JsValue> {
    let flags = items.iter().map(|item| dom::has_class(item, ACTIVE)).collect();
    let mut accordion = Accordion::from_flags(flags);
    accordion.click(index);
    for (item, open) in items.iter().zip(accordion.flags()) {
        dom::set_class(item, ACTIVE, *open)?;
    }
    Ok(())
}

impl Controller for Faq {
    const NAME: &'static str = "faq";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        let items: Rc<[Element]> = dom::query_all(&cx.document, ".faq-item").into();
        if items.is_empty() {
            return Ok(None);
        }

        let mut listeners = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let question = match item.query_selector(".faq-question").ok().flatten() {
                Some(question) => question,
                None => continue,
            };
            let items = items.clone();
            listeners.push(Listener::new(&question, "click", move |_| {
                let _ = click(&items, index);
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
