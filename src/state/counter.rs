/// What a counter element should display after one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    /// Original text restored; the timer must be cancelled.
    Finished(String),
}

/// Count-up animation for a stat label such as `"500+"`.
///
/// The target is every digit in the text read as one integer, the suffix is
/// the text with its digits removed. A label without a positive target
/// finishes on the first tick instead of spinning on a zero step.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    original: String,
    suffix: String,
    target: f64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(text: &str, steps: u32) -> Self {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        let target = digits.parse::<f64>().unwrap_or(0.0);
        let step = if steps == 0 { target } else { target / f64::from(steps) };

        Self {
            original: text.to_string(),
            suffix,
            target,
            step,
            current: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_trivial(&self) -> bool {
        self.target <= 0.0
    }

    pub fn tick(&mut self) -> CounterFrame {
        if self.is_trivial() {
            return CounterFrame::Finished(self.original.clone());
        }
        self.current += self.step;
        if self.current >= self.target {
            CounterFrame::Finished(self.original.clone())
        } else {
            CounterFrame::Running(format!("{}{}", self.current.floor(), self.suffix))
        }
    }
}
