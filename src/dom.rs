use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
};

pub const ACTIVE: &str = "active";

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Registered event listener; removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// `querySelectorAll` collected into elements. An invalid selector yields nothing.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => return Vec::new(),
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.style().set_property(property, value),
        None => Ok(()),
    }
}

/// Current value of an input, textarea or select; empty when the id is missing.
pub fn field_value(document: &Document, id: &str) -> String {
    let element = match document.get_element_by_id(id) {
        Some(element) => element,
        None => return String::new(),
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Runs `f` once the document has parsed: now if it already has, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let callback = Closure::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
