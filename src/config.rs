use crate::i18n::LocaleRegistry;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Locales
    /// Directory holding `<code>.json` dictionaries; embedded data when unset
    pub locales_dir: Option<PathBuf>,
    /// Overrides the built-in default locale; must be a registered code
    pub default_locale: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => 8080,
            },

            // Locales
            locales_dir: std::env::var("LOCALES_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            default_locale: std::env::var("DEFAULT_LOCALE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    /// Build the locale registry described by this configuration.
    pub fn load_registry(&self) -> Result<LocaleRegistry> {
        let registry = match &self.locales_dir {
            Some(dir) => {
                info!("Loading locale dictionaries from {}", dir.display());
                LocaleRegistry::from_dir(dir)
                    .with_context(|| format!("Failed to load locales from {}", dir.display()))?
            }
            None => LocaleRegistry::embedded().context("Failed to load embedded locales")?,
        };

        match &self.default_locale {
            Some(code) => registry
                .with_default(code)
                .with_context(|| format!("DEFAULT_LOCALE '{}' is not a supported locale", code)),
            None => Ok(registry),
        }
    }
}
