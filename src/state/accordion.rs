/// Open flags of the FAQ items; at most one is set after any click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn from_flags(open: Vec<bool>) -> Self {
        Self { open }
    }

    /// Closes every other item and toggles `index`.
    pub fn click(&mut self, index: usize) {
        for (i, flag) in self.open.iter_mut().enumerate() {
            if i == index {
                *flag = !*flag;
            } else {
                *flag = false;
            }
        }
    }

    pub fn flags(&self) -> &[bool] {
        &self.open
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|flag| *flag)
    }
}
