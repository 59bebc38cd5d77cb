use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::CounterConfig;
use crate::dom;
use crate::page::{Controller, PageContext};
use crate::state::counter::{CounterAnimation, CounterFrame};

/// Counts `.stat-number` labels up from zero the first time each is half visible.
pub struct Counters {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Starts the count-up on `element`; the interval cancels itself on the final frame.
pub fn animate(element: Element, config: &CounterConfig) {
    let text = element.text_content().unwrap_or_default();
    let mut animation = CounterAnimation::new(&text, config.steps);
    if animation.is_trivial() {
        element.set_text_content(Some(&text));
        return;
    }
    debug!("Animating counter to {}", animation.target());

    let timer: Rc<RefCell<Option<Interval>>> = Rc::default();
    let handle = timer.clone();
    let interval = Interval::new(config.tick_ms, move || match animation.tick() {
        CounterFrame::Running(frame) => element.set_text_content(Some(&frame)),
        CounterFrame::Finished(original) => {
            element.set_text_content(Some(&original));
            if let Some(interval) = handle.borrow_mut().take() {
                interval.cancel();
            }
        }
    });
    *timer.borrow_mut() = Some(interval);
}

impl Controller for Counters {
    const NAME: &'static str = "counters";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        let numbers = dom::query_all(&cx.document, ".stat-number");
        if numbers.is_empty() {
            return Ok(None);
        }

        let config = cx.config.counter.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let element = entry.target();
                    observer.unobserve(&element);
                    animate(element, &config);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(cx.config.counter.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for number in &numbers {
            observer.observe(number);
        }

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for Counters {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
