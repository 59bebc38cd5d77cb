use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::Messages;

/// Whitespace as ECMAScript `\s` defines it. Rust's `\s` differs: it omits
/// U+FEFF and adds U+0085.
const JS_SPACE: &str = r"\t\n\x{B}\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", JS_SPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Minimal `local@domain.tld` shape check, not RFC validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingRequired,
    InvalidEmail,
}

impl FormError {
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            FormError::MissingRequired => &messages.required_fields,
            FormError::InvalidEmail => &messages.invalid_email,
        }
    }
}

impl ContactForm {
    /// Phone is optional; everything else must be non-empty.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|value| value.is_empty()) {
            return Err(FormError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}
