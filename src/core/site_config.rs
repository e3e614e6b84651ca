use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::RwLock;

use super::landing_state::UserType;
use super::nav_state::SCROLL_THRESHOLD;

/// Id of the `<script type="application/json">` block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq)]
pub enum SiteConfigError {
    /// No config block on the page
    Unavailable,
    Parse(String),
    Invalid(String),
}

impl fmt::Display for SiteConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteConfigError::Unavailable => write!(f, "Site config not found"),
            SiteConfigError::Parse(msg) => write!(f, "Failed to parse site config: {}", msg),
            SiteConfigError::Invalid(msg) => write!(f, "Invalid site config: {}", msg),
        }
    }
}

/// Person shown in the navigation bar while "logged in"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoProfile {
    pub display_name: String,
    pub short_name: String,
    pub avatar_seed: String,
}

impl Default for DemoProfile {
    fn default() -> Self {
        Self {
            display_name: "Aditya S.".to_string(),
            short_name: "Aditya".to_string(),
            avatar_seed: "Aditya".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Audience selected on first render
    pub initial_user_type: UserType,
    pub scroll_threshold: f64,
    pub profile: DemoProfile,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "SponsorKiya".to_string(),
            initial_user_type: UserType::Organizer,
            scroll_threshold: SCROLL_THRESHOLD,
            profile: DemoProfile::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides, missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| SiteConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteConfigError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(SiteConfigError::Invalid(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        if self.site_name.trim().is_empty() {
            return Err(SiteConfigError::Invalid("site_name is empty".to_string()));
        }
        Ok(())
    }

    /// Read the JSON block embedded in index.html
    pub fn load_from_document() -> Result<Self, SiteConfigError> {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content())
            .ok_or(SiteConfigError::Unavailable)?;

        Self::from_json(&text)
    }

    /// Falls back to `Info` for unknown names
    pub fn log_level(&self) -> log::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

/// Global site config, written once at startup
static SITE_CONFIG: Lazy<RwLock<SiteConfig>> = Lazy::new(|| RwLock::new(SiteConfig::default()));

// ============ Public API ============

pub fn init_site_config(config: SiteConfig) {
    log::info!(
        "Site config: {} (initial audience {}, scroll threshold {})",
        config.site_name,
        config.initial_user_type.as_str(),
        config.scroll_threshold
    );
    match SITE_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

pub fn site_config() -> SiteConfig {
    match SITE_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.site_name, "SponsorKiya");
        assert_eq!(config.initial_user_type, UserType::Organizer);
        assert_eq!(config.scroll_threshold, 20.0);
        assert_eq!(config.profile.avatar_seed, "Aditya");
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{ "initial_user_type": "brand", "profile": { "short_name": "Adi" } }"#,
        )
        .unwrap();

        assert_eq!(config.initial_user_type, UserType::Brand);
        assert_eq!(config.profile.short_name, "Adi");
        assert_eq!(config.profile.display_name, "Aditya S.");
        assert_eq!(config.scroll_threshold, SCROLL_THRESHOLD);
    }

    #[test]
    fn test_malformed_json() {
        let result = SiteConfig::from_json("{ not json");
        assert!(matches!(result, Err(SiteConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_audience_is_rejected() {
        let result = SiteConfig::from_json(r#"{ "initial_user_type": "sponsor" }"#);
        assert!(matches!(result, Err(SiteConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values() {
        let negative = SiteConfig::from_json(r#"{ "scroll_threshold": -1.0 }"#);
        assert!(matches!(negative, Err(SiteConfigError::Invalid(_))));

        let blank = SiteConfig::from_json(r#"{ "site_name": "  " }"#);
        assert!(matches!(blank, Err(SiteConfigError::Invalid(_))));
    }

    #[test]
    fn test_log_level_names() {
        let mut config = SiteConfig::default();
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "verbose".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_init_and_read() {
        let mut config = SiteConfig::default();
        config.site_name = "SponsorKiya Test".to_string();
        init_site_config(config.clone());

        assert_eq!(site_config(), config);
    }
}
