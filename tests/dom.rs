//! Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use travelpro::components::notification::NotificationKind;
use travelpro::config::{CounterConfig, PageConfig};
use travelpro::controllers::accordion::Faq;
use travelpro::controllers::active_link::mark_active_link;
use travelpro::controllers::contact_form::ContactFormController;
use travelpro::controllers::counter::{animate, Counters};
use travelpro::controllers::filter::Filter;
use travelpro::controllers::navigation::Navigation;
use travelpro::controllers::scroll_effects::ScrollEffects;
use travelpro::page::{Controller, PageContext};
use travelpro::state::active_link::CurrentPage;
use travelpro::state::scroll::{RAISED_SHADOW, RESTING_SHADOW};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn context(markup: &str) -> PageContext {
    context_with(markup, PageConfig::default())
}

fn context_with(markup: &str, config: PageConfig) -> PageContext {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    PageContext::new(window, document, config)
}

fn style(cx: &PageContext, selector: &str, property: &str) -> String {
    element(cx, selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

/// Polls every 20 ms until `done` holds or about five seconds have passed.
async fn wait_for(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..250 {
        if done() {
            return true;
        }
        TimeoutFuture::new(20).await;
    }
    done()
}

fn element(cx: &PageContext, selector: &str) -> Element {
    cx.document.query_selector(selector).unwrap().unwrap()
}

fn click(cx: &PageContext, selector: &str) {
    element(cx, selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn active(cx: &PageContext, selector: &str) -> Vec<bool> {
    let list = cx.document.query_selector_all(selector).unwrap();
    (0..list.length())
        .map(|i| {
            list.get(i)
                .unwrap()
                .dyn_into::<Element>()
                .unwrap()
                .class_list()
                .contains("active")
        })
        .collect()
}

fn display(cx: &PageContext, selector: &str) -> String {
    style(cx, selector, "display")
}

fn set_value(cx: &PageContext, id: &str, value: &str) {
    cx.document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

fn value(cx: &PageContext, id: &str) -> String {
    cx.document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .value()
}

const NAV: &str = r##"
    <nav class="navbar">
        <button class="hamburger"></button>
        <ul class="nav-menu"><li><a href="#top">Top</a></li></ul>
    </nav>
"##;

#[wasm_bindgen_test]
fn menu_and_toggle_move_together() {
    let cx = context(NAV);
    let _nav = Navigation::attach(&cx).unwrap().unwrap();

    click(&cx, ".hamburger");
    assert_eq!(active(&cx, ".nav-menu, .hamburger"), vec![true, true]);

    click(&cx, ".nav-menu a");
    assert_eq!(active(&cx, ".nav-menu, .hamburger"), vec![false, false]);

    click(&cx, ".hamburger");
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    cx.document.dispatch_event(&escape).unwrap();
    assert_eq!(active(&cx, ".nav-menu, .hamburger"), vec![false, false]);
}

#[wasm_bindgen_test]
fn navigation_skips_pages_without_a_toggle() {
    let cx = context(r#"<ul class="nav-menu"></ul>"#);
    assert!(Navigation::attach(&cx).unwrap().is_none());
}

const FILTERS: &str = r#"
    <button class="filter-btn active" data-filter="all">All</button>
    <button class="filter-btn" data-filter="europe">Europe</button>
    <button class="filter-btn" data-filter="asia">Asia</button>
    <div class="card" id="paris" data-filter="europe"></div>
    <div class="card" id="tokyo" data-filter="asia"></div>
"#;

#[wasm_bindgen_test]
fn filter_keeps_one_active_button_and_hides_other_categories() {
    let cx = context(FILTERS);
    let _filter = Filter::attach(&cx).unwrap().unwrap();

    click(&cx, "[data-filter=asia].filter-btn");
    assert_eq!(active(&cx, ".filter-btn"), vec![false, false, true]);
    assert_eq!(display(&cx, "#paris"), "none");
    assert_eq!(display(&cx, "#tokyo"), "block");
    assert_eq!(display(&cx, "[data-filter=europe].filter-btn"), "");

    click(&cx, "[data-filter=all].filter-btn");
    assert_eq!(active(&cx, ".filter-btn"), vec![true, false, false]);
    assert_eq!(display(&cx, "#paris"), "block");
}

const FAQ: &str = r#"
    <div class="faq-item" id="q1"><div class="faq-question">1</div></div>
    <div class="faq-item" id="q2"><div class="faq-question">2</div></div>
    <div class="faq-item" id="q3"><div class="faq-question">3</div></div>
"#;

#[wasm_bindgen_test]
fn accordion_opens_one_item_at_a_time() {
    let cx = context(FAQ);
    let _faq = Faq::attach(&cx).unwrap().unwrap();

    click(&cx, "#q2 .faq-question");
    assert_eq!(active(&cx, ".faq-item"), vec![false, true, false]);
    click(&cx, "#q3 .faq-question");
    assert_eq!(active(&cx, ".faq-item"), vec![false, false, true]);
    click(&cx, "#q3 .faq-question");
    assert_eq!(active(&cx, ".faq-item"), vec![false, false, false]);
}

const FORM: &str = r#"
    <form id="contactForm">
        <input id="name"><input id="email"><input id="phone">
        <input id="subject"><input id="message">
    </form>
"#;

fn submit(cx: &PageContext) {
    let event = Event::new("submit").unwrap();
    element(cx, "#contactForm").dispatch_event(&event).unwrap();
}

fn notification(cx: &PageContext, kind: &str) -> Option<String> {
    cx.document
        .query_selector(&format!(".notification-{}", kind))
        .unwrap()
        .and_then(|n| n.text_content())
}

#[wasm_bindgen_test]
async fn missing_name_is_rejected_and_form_kept() {
    let cx = context(FORM);
    let _form = ContactFormController::attach(&cx).unwrap().unwrap();
    set_value(&cx, "email", "a@b.com");
    set_value(&cx, "subject", "x");
    set_value(&cx, "message", "y");

    submit(&cx);
    TimeoutFuture::new(50).await;

    assert_eq!(
        notification(&cx, "error").as_deref(),
        Some("Veuillez remplir tous les champs obligatoires")
    );
    assert_eq!(value(&cx, "email"), "a@b.com");
}

#[wasm_bindgen_test]
async fn malformed_email_is_rejected() {
    let cx = context(FORM);
    let _form = ContactFormController::attach(&cx).unwrap().unwrap();
    for (id, v) in [("name", "Jo"), ("email", "not-an-email"), ("subject", "Hi"), ("message", "Hello")] {
        set_value(&cx, id, v);
    }

    submit(&cx);
    TimeoutFuture::new(50).await;

    assert_eq!(
        notification(&cx, "error").as_deref(),
        Some("Veuillez entrer une adresse email valide")
    );
}

#[wasm_bindgen_test]
async fn valid_form_is_acknowledged_and_cleared() {
    let cx = context(FORM);
    let _form = ContactFormController::attach(&cx).unwrap().unwrap();
    for (id, v) in [("name", "Jo"), ("email", "jo@x.com"), ("subject", "Hi"), ("message", "Hello")] {
        set_value(&cx, id, v);
    }

    submit(&cx);
    TimeoutFuture::new(50).await;

    assert_eq!(
        notification(&cx, "success").as_deref(),
        Some("Merci! Votre message a été envoyé avec succès.")
    );
    for id in ["name", "email", "phone", "subject", "message"] {
        assert_eq!(value(&cx, id), "");
    }
}

#[wasm_bindgen_test]
async fn notification_is_removed_after_display_and_exit() {
    let mut config = PageConfig::default();
    config.notification.display_ms = 20;
    config.notification.exit_ms = 10;
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html("");
    let cx = PageContext::new(window, document, config);

    cx.notifier.notify("hello", NotificationKind::Info);
    TimeoutFuture::new(5).await;
    assert_eq!(notification(&cx, "info").as_deref(), Some("hello"));

    TimeoutFuture::new(200).await;
    assert_eq!(notification(&cx, "info"), None);
}

#[wasm_bindgen_test]
async fn counter_ends_on_its_original_text() {
    let cx = context(r#"<span class="stat-number" id="a">500+</span><span id="z">0</span>"#);
    let config = CounterConfig {
        tick_ms: 1,
        ..CounterConfig::default()
    };

    animate(element(&cx, "#a"), &config);
    animate(element(&cx, "#z"), &config);
    assert_eq!(element(&cx, "#z").text_content().as_deref(), Some("0"));

    TimeoutFuture::new(1_000).await;
    assert_eq!(element(&cx, "#a").text_content().as_deref(), Some("500+"));
}

#[wasm_bindgen_test]
async fn notifications_stack() {
    let cx = context("");
    cx.notifier.notify("first", NotificationKind::Success);
    cx.notifier.notify("second", NotificationKind::Error);
    TimeoutFuture::new(20).await;

    let shown = cx.document.query_selector_all(".notification").unwrap();
    assert_eq!(shown.length(), 2);
    assert_eq!(notification(&cx, "success").as_deref(), Some("first"));
    assert_eq!(notification(&cx, "error").as_deref(), Some("second"));
}

#[wasm_bindgen_test]
async fn shown_card_fades_in_on_a_later_tick() {
    let cx = context(FILTERS);
    let _filter = Filter::attach(&cx).unwrap().unwrap();

    click(&cx, "[data-filter=asia].filter-btn");
    assert_eq!(style(&cx, "#tokyo", "display"), "block");
    assert_ne!(style(&cx, "#tokyo", "opacity"), "1");
    assert_eq!(style(&cx, "#paris", "opacity"), "0");

    TimeoutFuture::new(50).await;
    assert_eq!(style(&cx, "#tokyo", "opacity"), "1");
    assert_eq!(style(&cx, "#paris", "opacity"), "0");
}

#[wasm_bindgen_test]
async fn stat_counter_animates_once_when_visible() {
    let mut config = PageConfig::default();
    config.counter.tick_ms = 1;
    let cx = context_with(r#"<span class="stat-number" id="stat">500+</span>"#, config);
    let _counters = Counters::attach(&cx).unwrap().unwrap();

    let stat = element(&cx, "#stat");
    assert!(wait_for(|| stat.text_content().as_deref() != Some("500+")).await);
    assert!(wait_for(|| stat.text_content().as_deref() == Some("500+")).await);

    // Once unobserved, a fresh intersection must not restart the count.
    stat.set_text_content(Some("42"));
    let html = stat.clone().dyn_into::<HtmlElement>().unwrap();
    html.style().set_property("display", "none").unwrap();
    TimeoutFuture::new(100).await;
    html.style().set_property("display", "inline").unwrap();
    TimeoutFuture::new(100).await;
    assert_eq!(stat.text_content().as_deref(), Some("42"));
}

/// Serializes a shadow the way the browser reports it back.
fn computed_shadow(cx: &PageContext, shadow: &str) -> String {
    let sample = cx.document.create_element("div").unwrap();
    let sample = sample.dyn_into::<HtmlElement>().unwrap();
    sample.style().set_property("box-shadow", shadow).unwrap();
    sample.style().get_property_value("box-shadow").unwrap()
}

fn scroll_and_notify(cx: &PageContext, y: f64) {
    cx.window.scroll_to_with_x_and_y(0.0, y);
    cx.window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

const TALL_PAGE: &str = r#"
    <nav class="navbar"></nav>
    <div style="height: 5000px"></div>
"#;

#[wasm_bindgen_test]
async fn scroll_toggles_shadow_and_scroll_to_top_button() {
    let cx = context(TALL_PAGE);
    cx.window.scroll_to_with_x_and_y(0.0, 0.0);
    let effects = ScrollEffects::attach(&cx).unwrap().unwrap();
    assert!(wait_for(|| cx.document.get_element_by_id("scrollToTop").is_some()).await);
    TimeoutFuture::new(20).await;
    assert_eq!(style(&cx, "#scrollToTop", "opacity"), "0");

    scroll_and_notify(&cx, 200.0);
    assert_eq!(style(&cx, ".navbar", "box-shadow"), computed_shadow(&cx, RAISED_SHADOW));
    TimeoutFuture::new(20).await;
    assert_eq!(style(&cx, "#scrollToTop", "opacity"), "0");

    scroll_and_notify(&cx, 400.0);
    TimeoutFuture::new(20).await;
    assert_eq!(style(&cx, "#scrollToTop", "opacity"), "1");
    assert_eq!(style(&cx, "#scrollToTop", "visibility"), "visible");

    scroll_and_notify(&cx, 0.0);
    assert_eq!(style(&cx, ".navbar", "box-shadow"), computed_shadow(&cx, RESTING_SHADOW));
    TimeoutFuture::new(20).await;
    assert_eq!(style(&cx, "#scrollToTop", "opacity"), "0");

    effects.detach();
    assert!(cx.document.get_element_by_id("scrollToTop").is_none());
}

#[wasm_bindgen_test]
async fn throttle_applies_to_shadow_and_button_alike() {
    let mut config = PageConfig::default();
    config.scroll.throttle_ms = Some(60_000);
    let cx = context_with(TALL_PAGE, config);
    cx.window.scroll_to_with_x_and_y(0.0, 0.0);
    let effects = ScrollEffects::attach(&cx).unwrap().unwrap();
    assert!(wait_for(|| cx.document.get_element_by_id("scrollToTop").is_some()).await);
    TimeoutFuture::new(20).await;

    scroll_and_notify(&cx, 0.0);
    scroll_and_notify(&cx, 400.0);
    TimeoutFuture::new(20).await;

    assert_eq!(style(&cx, ".navbar", "box-shadow"), computed_shadow(&cx, RESTING_SHADOW));
    assert_eq!(style(&cx, "#scrollToTop", "opacity"), "0");

    effects.detach();
    cx.window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn failed_delivery_reports_error_and_keeps_fields() {
    let mut config = PageConfig::default();
    config.contact.endpoint = Some("http://127.0.0.1:9/contact".to_string());
    let cx = context_with(FORM, config);
    let _form = ContactFormController::attach(&cx).unwrap().unwrap();
    for (id, v) in [("name", "Jo"), ("email", "jo@x.com"), ("subject", "Hi"), ("message", "Hello")] {
        set_value(&cx, id, v);
    }

    submit(&cx);
    assert!(wait_for(|| notification(&cx, "error").is_some()).await);

    assert_eq!(
        notification(&cx, "error").as_deref(),
        Some("Une erreur est survenue. Veuillez réessayer plus tard.")
    );
    assert_eq!(notification(&cx, "success"), None);
    assert_eq!(value(&cx, "name"), "Jo");
    assert_eq!(value(&cx, "email"), "jo@x.com");
}

#[wasm_bindgen_test]
fn nav_link_for_current_page_is_marked() {
    let pathname = web_sys::window().unwrap().location().pathname().unwrap();
    let current = CurrentPage::from_pathname(&pathname);
    let cx = context(&format!(
        r#"<ul class="nav-menu">
            <li><a id="here" href="{}">Here</a></li>
            <li><a id="there" class="active" href="elsewhere-page.html">There</a></li>
        </ul>"#,
        current.raw()
    ));

    mark_active_link(&cx).unwrap();
    assert_eq!(active(&cx, ".nav-menu a"), vec![true, false]);
}
