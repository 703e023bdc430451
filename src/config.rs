//! Site configuration
//!
//! Page content (roles, email, shortcuts) and typewriter timings. On the web
//! it can be overridden by a JSON `<script id="folio-config">` block.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Typewriter timings (ms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTimings {
    /// Delay before the first character
    pub start_delay_ms: u32,
    /// Per-character typing interval
    pub type_ms: u32,
    /// Per-character deleting interval
    pub delete_ms: u32,
    /// Hold time at full length
    pub pause_ms: u32,
    /// Gap between an emptied role and the next one
    pub advance_ms: u32,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
            advance_ms: 500,
        }
    }
}

/// Page content and behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Role strings cycled by the typewriter
    pub roles: Vec<String>,
    /// Address written by the copy button
    pub email: String,
    /// Key (lowercase) -> section id
    pub shortcuts: BTreeMap<String, String>,
    pub typewriter: TypewriterTimings,
}

pub const DEFAULT_ROLES: [&str; 6] = [
    "Frontend Developer",
    "AI Enthusiast",
    "Problem Solver",
    "Creative Coder",
    "UI Enthusiast",
    "Tech Explorer",
];

pub const DEFAULT_EMAIL: &str = "khanafzankhan79@gmail.com";

pub const DEFAULT_SHORTCUTS: [(&str, &str); 5] = [
    ("h", "hero"),
    ("a", "about"),
    ("s", "skills"),
    ("p", "projects"),
    ("c", "contact"),
];

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            email: DEFAULT_EMAIL.to_string(),
            shortcuts: DEFAULT_SHORTCUTS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            typewriter: TypewriterTimings::default(),
        }
    }
}

impl SiteConfig {
    /// Element holding an optional JSON override
    pub const ELEMENT_ID: &'static str = "folio-config";

    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Fill in anything that would leave a behavior with nothing to do
    pub fn validated(mut self) -> Self {
        self.roles.retain(|r| !r.is_empty());
        if self.roles.is_empty() {
            log::warn!("No typewriter roles configured, using defaults");
            self.roles = Self::default().roles;
        }
        if self.email.trim().is_empty() {
            self.email = DEFAULT_EMAIL.to_string();
        }
        self.shortcuts = self
            .shortcuts
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim_start_matches('#').to_string()))
            .collect();
        self
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded site config from #{}", Self::ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("{}, using defaults", e),
            }
        }

        log::debug!("Using default site config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
