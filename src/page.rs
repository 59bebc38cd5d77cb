use std::cell::RefCell;

use log::{debug, error, info, warn};
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Window};

use crate::aos;
use crate::components::notification::Notifier;
use crate::config::PageConfig;
use crate::controllers::{
    accordion::Faq, active_link::mark_active_link, contact_form::ContactFormController,
    counter::Counters, filter::Filter, navigation::Navigation, scroll_effects::ScrollEffects,
    smooth_scroll::SmoothScroll,
};
use crate::dom;

/// Everything a controller may read while attaching.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
    pub notifier: Notifier,
}

impl PageContext {
    pub fn new(window: Window, document: Document, config: PageConfig) -> Self {
        let notifier = Notifier::new(config.notification.clone());
        Self {
            window,
            document,
            config,
            notifier,
        }
    }
}

/// A behaviour bound to page elements. `attach` returns `Ok(None)` when the
/// elements it needs are not on this page; dropping the controller removes
/// its listeners.
pub trait Controller: Sized + 'static {
    const NAME: &'static str;

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue>;

    fn detach(self) {}
}

trait Attached {
    fn name(&self) -> &'static str;
    fn detach_boxed(self: Box<Self>);
}

impl<C: Controller> Attached for C {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn detach_boxed(self: Box<Self>) {
        (*self).detach()
    }
}

/// The controllers bound to the current document.
pub struct Page {
    controllers: Vec<Box<dyn Attached>>,
}

impl Page {
    pub fn attach_all(cx: &PageContext) -> Self {
        let mut page = Page {
            controllers: Vec::new(),
        };
        page.attach::<Navigation>(cx);
        page.attach::<Filter>(cx);
        page.attach::<Faq>(cx);
        page.attach::<ContactFormController>(cx);
        page.attach::<SmoothScroll>(cx);
        page.attach::<ScrollEffects>(cx);
        page.attach::<Counters>(cx);

        if let Err(e) = mark_active_link(cx) {
            warn!("Could not mark the active nav link: {:?}", e);
        }
        page
    }

    fn attach<C: Controller>(&mut self, cx: &PageContext) {
        match C::attach(cx) {
            Ok(Some(controller)) => {
                debug!("Attached {}", C::NAME);
                self.controllers.push(Box::new(controller));
            }
            Ok(None) => debug!("Skipped {}: not on this page", C::NAME),
            Err(e) => error!("Failed to attach {}: {:?}", C::NAME, e),
        }
    }

    pub fn attached(&self) -> Vec<&'static str> {
        self.controllers.iter().map(|c| c.name()).collect()
    }

    pub fn detach(self) {
        for controller in self.controllers.into_iter().rev() {
            debug!("Detaching {}", controller.name());
            controller.detach_boxed();
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

/// Runs the startup hook once the document is ready.
pub fn start() -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let ready_document = document.clone();
    dom::on_ready(&document, move || {
        let config = PageConfig::load(&ready_document);
        if let Err(e) = aos::init(&config.aos) {
            warn!("AOS not initialised: {:?}", e);
        }

        let cx = PageContext::new(window, ready_document, config);
        let page = Page::attach_all(&cx);
        debug!("Active controllers: {:?}", page.attached());
        if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().replace(page)) {
            previous.detach();
        }
        info!("TravelPro Website - All scripts loaded successfully!");
    })
}

/// Detaches every controller attached by [`start`].
pub fn stop() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.detach();
    }
}
