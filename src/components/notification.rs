use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use stylist::css;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew::AppHandle;

use crate::config::NotificationConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Unknown kinds fall back to info.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
            NotificationKind::Info => "#3498db",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or_default]
    pub kind: NotificationKind,
    pub display_ms: u32,
    pub exit_ms: u32,
    pub on_dismissed: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        let on_dismissed = props.on_dismissed.clone();
        let display_ms = props.display_ms;
        let exit_ms = props.exit_ms;
        use_effect_with_deps(
            move |_| {
                let exit = Timeout::new(display_ms, move || leaving.set(true));
                let dismiss = Timeout::new(display_ms.saturating_add(exit_ms), move || {
                    on_dismissed.emit(());
                });
                move || drop((exit, dismiss))
            },
            (),
        );
    }

    let layout = css!(
        r#"
        position: fixed;
        top: 100px;
        right: 20px;
        padding: 15px 25px;
        color: white;
        border-radius: 5px;
        box-shadow: 0 5px 20px rgba(0, 0, 0, 0.2);
        z-index: 10000;
    "#
    );
    let animation = if *leaving { "slideOut" } else { "slideIn" };
    let style = format!(
        "background: {}; animation: {} 0.3s ease-in-out;",
        props.kind.background(),
        animation
    );

    html! {
        <div
            class={classes!("notification", format!("notification-{}", props.kind), layout)}
            style={style}
        >
            { &props.message }
        </div>
    }
}

/// Shows transient toasts. Every call gets its own host node and timers, so
/// concurrent notifications simply stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifier {
    config: NotificationConfig,
}

impl Notifier {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config }
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        if let Err(e) = self.show(message, kind) {
            warn!("Could not show {} notification: {:?}", kind, e);
        }
    }

    fn show(&self, message: &str, kind: NotificationKind) -> Result<(), JsValue> {
        let document = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let host = document.create_element("div")?;
        host.set_class_name("notification-host");
        body.append_child(&host)?;

        let app: Rc<RefCell<Option<AppHandle<Toast>>>> = Rc::default();
        let on_dismissed = {
            let app = app.clone();
            let host = host.clone();
            Callback::from(move |_| {
                if let Some(handle) = app.borrow_mut().take() {
                    let host = host.clone();
                    // The toast's own timer is still on the stack; tear down on the next tick.
                    Timeout::new(0, move || {
                        handle.destroy();
                        host.remove();
                    })
                    .forget();
                }
            })
        };

        let props = ToastProps {
            message: message.to_string(),
            kind,
            display_ms: self.config.display_ms,
            exit_ms: self.config.exit_ms,
            on_dismissed,
        };
        let handle = yew::Renderer::<Toast>::with_root_and_props(host, props).render();
        *app.borrow_mut() = Some(handle);
        Ok(())
    }
}
