use log::debug;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::AppHandle;

use crate::components::scroll_to_top::{ScrollToTop, ScrollToTopProps};
use crate::dom::{self, Listener};
use crate::page::{Controller, PageContext};
use crate::state::scroll::ScrollEffects as Effects;
use crate::state::throttle::Gate;

/// Navbar shadow on scroll plus the floating scroll-to-top button.
pub struct ScrollEffects {
    _listener: Option<Listener>,
    button: Option<(Element, AppHandle<ScrollToTop>)>,
}

impl ScrollEffects {
    fn watch_navbar(cx: &PageContext) -> Result<Option<Listener>, JsValue> {
        let navbar = match dom::query(&cx.document, ".navbar") {
            Some(navbar) => navbar,
            None => {
                debug!("No .navbar, skipping scroll shadow");
                return Ok(None);
            }
        };

        let window = cx.window.clone();
        let config = cx.config.scroll.clone();
        let mut gate = Gate::new(config.throttle_ms);
        let listener = Listener::new(&cx.window, "scroll", move |_| {
            if !gate.admit_now() {
                return;
            }
            let effects = Effects::at(dom::scroll_offset(&window), &config);
            let _ = dom::set_style(&navbar, "box-shadow", effects.navbar_shadow.css());
        })?;
        Ok(Some(listener))
    }

    fn mount_button(cx: &PageContext) -> Result<Option<(Element, AppHandle<ScrollToTop>)>, JsValue> {
        let body = match cx.document.body() {
            Some(body) => body,
            None => return Ok(None),
        };
        let host = cx.document.create_element("div")?;
        host.set_class_name("scroll-to-top-host");
        body.append_child(&host)?;

        let props = ScrollToTopProps {
            config: cx.config.scroll.clone(),
        };
        let app = yew::Renderer::<ScrollToTop>::with_root_and_props(host.clone(), props).render();
        Ok(Some((host, app)))
    }
}

impl Controller for ScrollEffects {
    const NAME: &'static str = "scroll effects";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        Ok(Some(Self {
            _listener: Self::watch_navbar(cx)?,
            button: Self::mount_button(cx)?,
        }))
    }

    fn detach(mut self) {
        if let Some((host, app)) = self.button.take() {
            app.destroy();
            host.remove();
        }
    }
}
