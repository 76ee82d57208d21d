use std::sync::OnceLock;

use log::{warn, Level};
use serde::Deserialize;

/// Id of the optional JSON block in `index.html` that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables for every interactive behavior on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub back_to_top_offset: f64,
    pub section_lookahead: f64,
    pub toast_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_divisions: u32,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub particle_count: usize,
    pub form_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            back_to_top_offset: 300.0,
            section_lookahead: 200.0,
            toast_duration_ms: 2_500,
            counter_tick_ms: 20,
            counter_divisions: 100,
            counter_threshold: 0.6,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            particle_count: 40,
            form_delay_ms: 1_200,
        }
    }
}

impl SiteConfig {
    /// Parses an override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

static SITE: OnceLock<SiteConfig> = OnceLock::new();

pub fn site() -> &'static SiteConfig {
    SITE.get_or_init(load)
}

fn load() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => SiteConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }),
        _ => SiteConfig::default(),
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.back_to_top_offset, 300.0);
        assert_eq!(config.section_lookahead, 200.0);
        assert_eq!(config.toast_duration_ms, 2_500);
        assert_eq!(config.counter_tick_ms, 20);
        assert_eq!(config.counter_divisions, 100);
        assert_eq!(config.counter_threshold, 0.6);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.particle_count, 40);
        assert_eq!(config.form_delay_ms, 1_200);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{ "toastDurationMs": 4000, "particleCount": 12 }"#)
            .unwrap();
        assert_eq!(config.toast_duration_ms, 4_000);
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.section_lookahead, 200.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(SiteConfig::from_json("{ toast: }").is_err());
        assert!(SiteConfig::from_json(r#"{ "particleCount": "many" }"#).is_err());
    }
}
