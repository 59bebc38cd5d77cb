pub mod aos;
pub mod config;
pub mod dom;
pub mod page;

pub mod state {
    pub mod accordion;
    pub mod active_link;
    pub mod contact;
    pub mod counter;
    pub mod filter;
    pub mod menu;
    pub mod scroll;
    pub mod smooth_scroll;
    pub mod throttle;
}

pub mod controllers {
    pub mod accordion;
    pub mod active_link;
    pub mod contact_form;
    pub mod counter;
    pub mod filter;
    pub mod navigation;
    pub mod scroll_effects;
    pub mod smooth_scroll;
}

pub mod components {
    pub mod notification;
    pub mod scroll_to_top;
}

pub use page::{start, stop};
