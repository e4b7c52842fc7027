//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the templates and stylesheet.
    pub templates_dir: PathBuf,

    /// Per-slot template file name, relative to `templates_dir`.
    pub slot_template: String,

    /// Page template file name, relative to `templates_dir`.
    pub base_template: String,

    /// Stylesheet injected verbatim as the `css` partial.
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            slot_template: "slot.mustache".to_string(),
            base_template: "base.mustache".to_string(),
            stylesheet: "stylus.css".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (OURS_*)
        figment = figment.merge(Env::prefixed("OURS_"));

        figment.extract()
    }

    /// Path of the per-slot template.
    pub fn slot_template_path(&self) -> PathBuf {
        self.templates_dir.join(&self.slot_template)
    }

    /// Path of the page template.
    pub fn base_template_path(&self) -> PathBuf {
        self.templates_dir.join(&self.base_template)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.templates_dir.join(&self.stylesheet)
    }
}

/// Returns the platform-specific config directory for ours.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ours"))
}
