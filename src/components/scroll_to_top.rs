use stylist::css;
use web_sys::{window, Event, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::ScrollConfig;
use crate::dom;
use crate::state::scroll::ScrollEffects;
use crate::state::throttle::Gate;

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    pub config: ScrollConfig,
}

fn visible_now(config: &ScrollConfig) -> bool {
    window()
        .map(|w| ScrollEffects::at(dom::scroll_offset(&w), config).show_scroll_top)
        .unwrap_or(false)
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top(props: &ScrollToTopProps) -> Html {
    let visible = {
        let config = props.config.clone();
        use_state(move || visible_now(&config))
    };

    let gate = {
        let limit = props.config.throttle_ms;
        use_mut_ref(move || Gate::new(limit))
    };

    {
        let visible = visible.clone();
        let config = props.config.clone();
        use_event_with_window("scroll", move |_: Event| {
            if gate.borrow_mut().admit_now() {
                visible.set(visible_now(&config));
            }
        });
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let layout = css!(
        r#"
        position: fixed;
        bottom: 30px;
        right: 30px;
        width: 50px;
        height: 50px;
        background: linear-gradient(135deg, #3498db 0%, #2980b9 100%);
        color: white;
        border: none;
        border-radius: 50%;
        cursor: pointer;
        z-index: 999;
        transition: all 0.3s ease;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.2rem;
        box-shadow: 0 5px 20px rgba(0, 0, 0, 0.2);
    "#
    );
    let style = if *visible {
        "opacity: 1; visibility: visible;"
    } else {
        "opacity: 0; visibility: hidden;"
    };

    html! {
        <button
            id="scrollToTop"
            class={classes!("scroll-to-top", layout)}
            style={style}
            aria-label="Scroll to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
