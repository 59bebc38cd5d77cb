use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, Listener, ACTIVE};
use crate::page::{Controller, PageContext};
use crate::state::filter::{FilterBar, FilterTag};

const FILTER_ATTR: &str = "data-filter";

/// Category filter over `[data-filter]` cards driven by `.filter-btn` buttons.
pub struct Filter {
    _listeners: Vec<Listener>,
}

struct Board {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    fade_in_delay_ms: u32,
}

impl Board {
    fn select(&self, index: usize) -> Result<(), JsValue> {
        let flags = self.buttons.iter().map(|b| dom::has_class(b, ACTIVE)).collect();
        let mut bar = FilterBar::from_flags(flags);
        bar.select(index);
        for (button, active) in self.buttons.iter().zip(bar.flags()) {
            dom::set_class(button, ACTIVE, *active)?;
        }

        let value = self.buttons[index].get_attribute(FILTER_ATTR).unwrap_or_default();
        let tag = FilterTag::parse(&value);
        debug!("Filtering cards by {:?}", tag);

        for card in &self.cards {
            let category = card.get_attribute(FILTER_ATTR);
            if tag.shows(category.as_deref()) {
                self.show(card)?;
            } else {
                dom::set_style(card, "display", "none")?;
                dom::set_style(card, "opacity", "0")?;
            }
        }
        Ok(())
    }

    /// Layout first, opacity on a later tick so the transition actually runs.
    fn show(&self, card: &Element) -> Result<(), JsValue> {
        dom::set_style(card, "display", "block")?;
        let card = card.clone();
        Timeout::new(self.fade_in_delay_ms, move || {
            let _ = dom::set_style(&card, "opacity", "1");
        })
        .forget();
        Ok(())
    }
}

impl Controller for Filter {
    const NAME: &'static str = "filter";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        let buttons = dom::query_all(&cx.document, ".filter-btn");
        if buttons.is_empty() {
            return Ok(None);
        }
        let cards = dom::query_all(&cx.document, "[data-filter]:not(.filter-btn)");
        let board = Rc::new(Board {
            buttons,
            cards,
            fade_in_delay_ms: cx.config.filter.fade_in_delay_ms,
        });

        let listeners = board
            .buttons
            .iter()
            .enumerate()
            .map(|(index, button)| {
                let board = board.clone();
                Listener::new(button, "click", move |_| {
                    let _ = board.select(index);
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
