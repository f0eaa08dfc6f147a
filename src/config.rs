//! SilverDesk configuration parser.
//!
//! Parses silverdesk.toml for branding and page-behavior settings.
//! Every field has a default so the app runs with no config file at all.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The main configuration structure matching silverdesk.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DeskConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    /// Cards shown in the services carousel.
    #[serde(default = "default_services")]
    pub services: Vec<ServiceCard>,
}

/// Branding strings shown in the window chrome and hero section
#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Toast shown once the window is up
    #[serde(default = "default_welcome")]
    pub welcome: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            welcome: default_welcome(),
        }
    }
}

/// Scroll and reveal behavior
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Pixels reserved for the fixed header when scrolling to a section
    #[serde(default = "default_header_offset")]
    pub header_offset: u32,

    /// Section scroll animation length in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u32,

    /// Quiet period for the scroll-reveal handler in milliseconds
    #[serde(default = "default_reveal_debounce")]
    pub reveal_debounce_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: default_header_offset(),
            scroll_duration_ms: default_scroll_duration(),
            reveal_debounce_ms: default_reveal_debounce(),
        }
    }
}

/// Contact form options
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Entries for the "Service required" select
    #[serde(default = "default_service_options")]
    pub service_options: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_options: default_service_options(),
        }
    }
}

/// One card in the services carousel
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

fn default_title() -> String {
    "SilverTech Industrial Services".to_string()
}

fn default_tagline() -> String {
    "Precision engineering for heavy industry".to_string()
}

fn default_welcome() -> String {
    "Welcome to SilverTech Industrial Services".to_string()
}

fn default_header_offset() -> u32 {
    64
}

fn default_scroll_duration() -> u32 {
    800
}

fn default_reveal_debounce() -> u32 {
    150
}

fn default_service_options() -> Vec<String> {
    vec![
        "General enquiry".to_string(),
        "Fabrication".to_string(),
        "Plant maintenance".to_string(),
        "Consulting".to_string(),
    ]
}

fn default_services() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Fabrication".to_string(),
            summary: "Custom structural steel and sheet-metal work".to_string(),
        },
        ServiceCard {
            title: "Plant maintenance".to_string(),
            summary: "Scheduled and emergency maintenance crews".to_string(),
        },
        ServiceCard {
            title: "Consulting".to_string(),
            summary: "Process audits and compliance reviews".to_string(),
        },
    ]
}

impl DeskConfig {
    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Failed to parse silverdesk.toml")
    }

    /// Default per-user config location, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("silverdesk").join("silverdesk.toml"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page.scroll_duration_ms == 0 {
            anyhow::bail!("page.scroll_duration_ms must be greater than zero");
        }

        if self.page.scroll_duration_ms > 10_000 {
            anyhow::bail!(
                "page.scroll_duration_ms is {} ms; anything over 10s makes navigation unusable",
                self.page.scroll_duration_ms
            );
        }

        if self.contact.service_options.is_empty() {
            anyhow::bail!("contact.service_options must have at least one entry");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DeskConfig::from_str("").unwrap();
        assert_eq!(config.branding.title, "SilverTech Industrial Services");
        assert_eq!(config.page.header_offset, 64);
        assert_eq!(config.page.scroll_duration_ms, 800);
        assert_eq!(config.services.len(), 3);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [branding]
            title = "SilverTech"
            tagline = "We build things"
            welcome = "Hello there"

            [page]
            header_offset = 72
            scroll_duration_ms = 600
            reveal_debounce_ms = 100

            [contact]
            service_options = ["Welding"]

            [[services]]
            title = "Welding"
            summary = "TIG and MIG"
        "#;

        let config = DeskConfig::from_str(toml).unwrap();
        assert_eq!(config.branding.welcome, "Hello there");
        assert_eq!(config.page.header_offset, 72);
        assert_eq!(config.contact.service_options, vec!["Welding"]);
        assert_eq!(config.services[0].title, "Welding");
        config.validate().unwrap();
    }

    #[test]
    fn test_zero_scroll_duration_rejected() {
        let toml = r#"
            [page]
            scroll_duration_ms = 0
        "#;

        let config = DeskConfig::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_service_options_rejected() {
        let toml = r#"
            [contact]
            service_options = []
        "#;

        let config = DeskConfig::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }
}
