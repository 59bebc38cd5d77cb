/// Value of `data-filter` that matches every card.
pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterTag {
    All,
    Category(String),
}

impl FilterTag {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            FilterTag::All
        } else {
            FilterTag::Category(value.to_string())
        }
    }

    /// Whether a card tagged `category` stays visible under this filter.
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Which filter button is highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBar {
    active: Vec<bool>,
}

impl FilterBar {
    pub fn from_flags(active: Vec<bool>) -> Self {
        Self { active }
    }

    /// Clears every button, then marks `index`.
    pub fn select(&mut self, index: usize) {
        self.active.iter_mut().for_each(|flag| *flag = false);
        if let Some(flag) = self.active.get_mut(index) {
            *flag = true;
        }
    }

    pub fn flags(&self) -> &[bool] {
        &self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|flag| *flag)
    }
}
