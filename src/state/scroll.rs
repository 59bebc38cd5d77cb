use crate::config::ScrollConfig;

pub const RAISED_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.2)";
pub const RESTING_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarShadow {
    Resting,
    Raised,
}

impl NavbarShadow {
    pub fn css(self) -> &'static str {
        match self {
            NavbarShadow::Resting => RESTING_SHADOW,
            NavbarShadow::Raised => RAISED_SHADOW,
        }
    }
}

/// Visual state derived from the vertical scroll offset alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollEffects {
    pub navbar_shadow: NavbarShadow,
    pub show_scroll_top: bool,
}

impl ScrollEffects {
    pub fn at(offset: f64, config: &ScrollConfig) -> Self {
        Self {
            navbar_shadow: if offset > config.navbar_shadow_offset {
                NavbarShadow::Raised
            } else {
                NavbarShadow::Resting
            },
            show_scroll_top: offset > config.scroll_top_offset,
        }
    }
}
