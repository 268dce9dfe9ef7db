//! Curtain configuration system
//!
//! This crate provides centralized configuration management for the
//! curtain demo host, loading settings from `curtain.toml` as an
//! alternative to environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for the curtain demo host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CurtainConfig {
    /// Demo application settings
    pub demo: DemoConfig,
    /// Simulated viewport settings
    pub viewport: ViewportConfig,
    /// Reveal behavior settings
    pub reveal: RevealConfig,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Path to a JSON page document to drive instead of the built-in page
    pub page: Option<PathBuf>,
    /// Only stage the section with this id
    pub section: Option<String>,
}

/// Simulated viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport height in layout units
    pub height: f32,
    /// Scroll distance per simulated frame
    pub scroll_step: f32,
    /// Stop scrolling at this offset instead of the page bottom
    pub max_scroll: Option<f32>,
}

/// Reveal behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Pretend the host has no visibility facility (reveal everything
    /// immediately)
    pub fail_open: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            page: None,
            section: None,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            height: 900.0,
            scroll_step: 120.0,
            max_scroll: None,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { fail_open: false }
    }
}

impl CurtainConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the curtain.toml configuration file
    ///
    /// # Returns
    /// * `Ok(CurtainConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (curtain.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("curtain.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        // Demo settings
        if let Ok(page) = std::env::var("CURTAIN_PAGE") {
            self.demo.page = Some(PathBuf::from(page));
        }
        if let Ok(section) = std::env::var("CURTAIN_SECTION") {
            self.demo.section = Some(section);
        }

        // Viewport settings
        if let Ok(val) = std::env::var("CURTAIN_VIEWPORT") {
            if let Ok(height) = val.parse::<f32>() {
                self.viewport.height = height;
            }
        }
        if let Ok(val) = std::env::var("CURTAIN_SCROLL_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.viewport.scroll_step = step;
            }
        }
        if let Ok(val) = std::env::var("CURTAIN_MAX_SCROLL") {
            if let Ok(max) = val.parse::<f32>() {
                self.viewport.max_scroll = Some(max);
            }
        }

        // Reveal settings
        if let Ok(val) = std::env::var("CURTAIN_FAIL_OPEN") {
            self.reveal.fail_open = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from curtain.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CurtainConfig::default();
        assert_eq!(config.viewport.height, 900.0);
        assert_eq!(config.viewport.scroll_step, 120.0);
        assert!(!config.reveal.fail_open);
        assert!(config.demo.page.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let config = CurtainConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CurtainConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.viewport.height, 900.0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: CurtainConfig = toml::from_str(
            r#"
            [viewport]
            height = 600.0

            [reveal]
            fail_open = true
            "#,
        )
        .unwrap();

        assert_eq!(parsed.viewport.height, 600.0);
        // Untouched fields keep their defaults
        assert_eq!(parsed.viewport.scroll_step, 120.0);
        assert!(parsed.reveal.fail_open);
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if curtain.toml doesn't exist
        let config = CurtainConfig::load_or_default();
        assert_eq!(config.viewport.height, 900.0);
    }

    #[test]
    fn test_merge_with_env() {
        // Set environment variables
        unsafe {
            std::env::set_var("CURTAIN_SECTION", "skills");
            std::env::set_var("CURTAIN_VIEWPORT", "640");
            std::env::set_var("CURTAIN_FAIL_OPEN", "true");
        }

        let mut config = CurtainConfig::default();
        config.merge_with_env();

        assert_eq!(config.demo.section.as_deref(), Some("skills"));
        assert_eq!(config.viewport.height, 640.0);
        assert!(config.reveal.fail_open);

        // Clean up
        unsafe {
            std::env::remove_var("CURTAIN_SECTION");
            std::env::remove_var("CURTAIN_VIEWPORT");
            std::env::remove_var("CURTAIN_FAIL_OPEN");
        }
    }
}
