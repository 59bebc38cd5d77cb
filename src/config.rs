use log::{warn, Level};
use serde::{Deserialize, Serialize};
use web_sys::Document;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Options handed verbatim to `AOS.init`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
    pub mirror: bool,
    pub offset: u32,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: "ease-in-out".to_string(),
            once: true,
            mirror: false,
            offset: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    pub navbar_shadow_offset: f64,
    pub scroll_top_offset: f64,
    pub throttle_ms: Option<u32>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_shadow_offset: 100.0,
            scroll_top_offset: 300.0,
            throttle_ms: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub tick_ms: u32,
    pub steps: u32,
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            steps: 50,
            threshold: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub fade_in_delay_ms: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { fade_in_delay_ms: 10 }
    }
}

/// User-facing strings. The defaults are the site's French copy and must not be reworded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub required_fields: String,
    pub invalid_email: String,
    pub sent: String,
    pub send_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required_fields: "Veuillez remplir tous les champs obligatoires".to_string(),
            invalid_email: "Veuillez entrer une adresse email valide".to_string(),
            sent: "Merci! Votre message a été envoyé avec succès.".to_string(),
            send_failed: "Une erreur est survenue. Veuillez réessayer plus tard.".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    /// When set, valid submissions are POSTed here instead of being acknowledged locally.
    pub endpoint: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub aos: AosOptions,
    pub scroll: ScrollConfig,
    pub counter: CounterConfig,
    pub notification: NotificationConfig,
    pub filter: FilterConfig,
    pub messages: Messages,
    pub contact: ContactConfig,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides embedded in the page, falling back to defaults.
    pub fn load(document: &Document) -> Self {
        let raw = match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Self::default(),
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
