use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, KeyboardEvent};

use crate::dom::{self, Listener, ACTIVE};
use crate::page::{Controller, PageContext};
use crate::state::menu::MenuState;

/// Mobile menu: `.hamburger` toggles `.nav-menu`; links and Escape close it.
pub struct Navigation {
    _listeners: Vec<Listener>,
}

#[derive(Clone)]
struct Menu {
    toggle: Element,
    panel: Element,
}

impl Menu {
    fn state(&self) -> MenuState {
        MenuState::new(dom::has_class(&self.panel, ACTIVE))
    }

    fn render(&self, state: MenuState) -> Result<(), JsValue> {
        dom::set_class(&self.panel, ACTIVE, state.is_open())?;
        dom::set_class(&self.toggle, ACTIVE, state.is_open())
    }

    fn toggle_menu(&self) -> Result<(), JsValue> {
        let mut state = self.state();
        state.toggle();
        self.render(state)
    }

    fn close_menu(&self) -> Result<(), JsValue> {
        let mut state = self.state();
        state.close();
        self.render(state)
    }
}

impl Controller for Navigation {
    const NAME: &'static str = "navigation";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        let (toggle, panel) = match (
            dom::query(&cx.document, ".hamburger"),
            dom::query(&cx.document, ".nav-menu"),
        ) {
            (Some(toggle), Some(panel)) => (toggle, panel),
            _ => return Ok(None),
        };
        let menu = Menu { toggle, panel };
        let mut listeners = Vec::new();

        {
            let toggle = menu.toggle.clone();
            let menu = menu.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                let _ = menu.toggle_menu();
            })?);
        }

        for link in dom::query_all(&cx.document, ".nav-menu a") {
            let menu = menu.clone();
            listeners.push(Listener::new(&link, "click", move |_| {
                let _ = menu.close_menu();
            })?);
        }

        {
            let menu = menu.clone();
            listeners.push(Listener::new(&cx.document, "keydown", move |e| {
                let escape = e
                    .dyn_ref::<KeyboardEvent>()
                    .map(|key| key.key() == "Escape")
                    .unwrap_or(false);
                if escape {
                    let _ = menu.close_menu();
                }
            })?);
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
