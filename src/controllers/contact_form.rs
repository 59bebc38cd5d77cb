use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement};

use crate::components::notification::{NotificationKind, Notifier};
use crate::config::{ContactConfig, Messages};
use crate::dom::{self, Listener};
use crate::page::{Controller, PageContext};
use crate::state::contact::ContactForm;

pub const FORM_ID: &str = "contactForm";

/// Where a valid submission goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Acknowledged in the page only; nothing is transmitted.
    Local,
    Http { endpoint: String },
}

impl Delivery {
    pub fn from_config(config: &ContactConfig) -> Self {
        match &config.endpoint {
            Some(endpoint) if !endpoint.is_empty() => Delivery::Http {
                endpoint: endpoint.clone(),
            },
            _ => Delivery::Local,
        }
    }
}

pub struct ContactFormController {
    _listener: Listener,
}

struct Handler {
    document: Document,
    form: HtmlFormElement,
    messages: Messages,
    notifier: Notifier,
    delivery: Delivery,
}

impl Handler {
    fn read(&self) -> ContactForm {
        ContactForm {
            name: dom::field_value(&self.document, "name"),
            email: dom::field_value(&self.document, "email"),
            phone: dom::field_value(&self.document, "phone"),
            subject: dom::field_value(&self.document, "subject"),
            message: dom::field_value(&self.document, "message"),
        }
    }

    fn submit(&self) {
        let contact = self.read();
        if let Err(e) = contact.validate() {
            self.notifier
                .notify(e.message(&self.messages), NotificationKind::Error);
            return;
        }

        match &self.delivery {
            Delivery::Local => {
                info!("Contact form accepted locally");
                self.accepted();
            }
            Delivery::Http { endpoint } => self.post(endpoint.clone(), contact),
        }
    }

    fn accepted(&self) {
        self.notifier.notify(&self.messages.sent, NotificationKind::Success);
        self.form.reset();
    }

    fn post(&self, endpoint: String, contact: ContactForm) {
        let form = self.form.clone();
        let notifier = self.notifier.clone();
        let messages = self.messages.clone();
        spawn_local(async move {
            let sent = match Request::post(&endpoint).json(&contact) {
                Ok(request) => match request.send().await {
                    Ok(response) if response.ok() => true,
                    Ok(response) => {
                        warn!("Contact endpoint answered {}", response.status());
                        false
                    }
                    Err(e) => {
                        warn!("Contact request failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    warn!("Could not encode contact form: {}", e);
                    false
                }
            };

            if sent {
                notifier.notify(&messages.sent, NotificationKind::Success);
                form.reset();
            } else {
                notifier.notify(&messages.send_failed, NotificationKind::Error);
            }
        });
    }
}

impl Controller for ContactFormController {
    const NAME: &'static str = "contact form";

    fn attach(cx: &PageContext) -> Result<Option<Self>, JsValue> {
        let form = match cx
            .document
            .get_element_by_id(FORM_ID)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            Some(form) => form,
            None => return Ok(None),
        };

        let handler = Rc::new(Handler {
            document: cx.document.clone(),
            form: form.clone(),
            messages: cx.config.messages.clone(),
            notifier: cx.notifier.clone(),
            delivery: Delivery::from_config(&cx.config.contact),
        });

        let listener = Listener::new(&form, "submit", move |e| {
            e.prevent_default();
            handler.submit();
        })?;

        Ok(Some(Self {
            _listener: listener,
        }))
    }
}
