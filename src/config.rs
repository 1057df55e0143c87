//! Application configuration.
//!
//! Secrets come from a TOML file (`.streamlit/secrets.toml` by default, the
//! layout the app has always used) and may be overridden by environment
//! variables of the same name. Everything is resolved once at startup into
//! an [`AppConfig`] that is passed down explicitly.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lookup::{LookupMode, LookupSettings};
use crate::{Error, Result};

pub const TOKEN_VAR: &str = "AUTOWAYS_TOKEN";
pub const BASE_VAR: &str = "AUTOWAYS_BASE";

pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";
pub const DEFAULT_ASSETS_DIR: &str = "Data";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Contents of the secrets file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Secrets {
    #[serde(rename = "AUTOWAYS_TOKEN", default)]
    pub token: Option<String>,
    #[serde(rename = "AUTOWAYS_BASE", default)]
    pub base_url: Option<String>,
}

impl Secrets {
    /// Load secrets from disk, or return empty secrets if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Apply environment overrides through `lookup_var`.
    pub fn with_overrides<F>(mut self, lookup_var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(t) = lookup_var(TOKEN_VAR) {
            self.token = Some(t);
        }
        if let Some(b) = lookup_var(BASE_VAR) {
            self.base_url = Some(b);
        }
        self
    }

    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }
}

/// Static assets the page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Blank plate, required
    pub template: PathBuf,
    /// Bold lettering font, optional (falls back to a built-in font)
    pub font: PathBuf,
    /// Header banner, optional
    pub banner: PathBuf,
}

impl AssetPaths {
    pub fn under(dir: &Path) -> Self {
        Self {
            template: dir.join("images").join("plaque_vierge.png"),
            font: dir.join("fonts").join("dejavu-sans-bold.ttf"),
            banner: dir.join("images").join("plaque_immat.png"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::under(Path::new(DEFAULT_ASSETS_DIR))
    }
}

/// Everything the app needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub assets: AssetPaths,
    /// Validated lookup settings, or the fatal error that prevents lookups
    pub lookup: std::result::Result<LookupSettings, String>,
}

impl AppConfig {
    /// Build the config. Token problems are kept rather than returned so the
    /// page can report them to the user.
    pub fn new(bind: impl Into<String>, assets: AssetPaths, mode: LookupMode, secrets: Secrets) -> Self {
        let lookup = LookupSettings::resolve(mode, secrets.token, secrets.base_url).map_err(|e| match e {
            Error::ConfigError(msg) => msg,
            other => other.to_string(),
        });
        Self {
            bind: bind.into(),
            assets,
            lookup,
        }
    }

    /// Fixture-mode config, mainly for tests and demos.
    pub fn fixture(assets: AssetPaths) -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            assets,
            lookup: Ok(LookupSettings::fixture()),
        }
    }
}
