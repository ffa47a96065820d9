//! Translation coverage reporting.
//!
//! Compares every locale's dictionary against the default locale's leaf
//! keys. Missing keys still render (they fall back to the default locale),
//! so the report is a maintenance aid rather than a correctness check.

use crate::i18n::{Dictionary, Entry, LocaleRegistry};
use serde::Serialize;

/// Coverage of every locale relative to the default locale.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Code of the default locale the others are compared against
    pub default_locale: String,

    /// Number of leaf keys in the default locale
    pub total_keys: usize,

    /// Per-locale coverage, in registry order
    pub locales: Vec<LocaleCoverage>,
}

/// Coverage statistics for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    /// Locale code (e.g. "zh-TW")
    pub locale: String,

    /// Number of default-locale keys this locale translates itself
    pub present: usize,

    /// Default-locale keys this locale lacks (served by fallback), sorted
    pub missing: Vec<String>,

    /// Keys only this locale defines; other locales cannot fall back to them
    pub extra: Vec<String>,

    /// `present / total_keys` as a percentage (0-100)
    pub coverage_percent: f64,
}

impl LocaleCoverage {
    /// Check if the locale translates every default-locale key.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl CoverageReport {
    /// Build a coverage report for every locale in `registry`.
    pub fn for_registry(registry: &LocaleRegistry) -> Self {
        let default = registry.default_locale();
        let reference = default.dictionary().leaf_keys();
        let total = reference.len();

        let locales = registry
            .list()
            .into_iter()
            .map(|locale| {
                let dictionary = locale.dictionary();
                let missing: Vec<String> = reference
                    .iter()
                    .filter(|key| !has_text(dictionary, key))
                    .cloned()
                    .collect();
                let extra: Vec<String> = dictionary
                    .leaf_keys()
                    .into_iter()
                    .filter(|key| !has_text(default.dictionary(), key))
                    .collect();
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f64 / total as f64) * 100.0
                };

                LocaleCoverage {
                    locale: locale.code().to_string(),
                    present,
                    missing,
                    extra,
                    coverage_percent,
                }
            })
            .collect();

        Self {
            default_locale: default.code().to_string(),
            total_keys: total,
            locales,
        }
    }

    /// Coverage entry for a locale code.
    pub fn get(&self, code: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|coverage| coverage.locale == code)
    }

    /// Check if every locale translates every default-locale key.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }
}

fn has_text(dictionary: &Dictionary, key: &str) -> bool {
    let segments: Vec<&str> = key.split('.').collect();
    matches!(dictionary.walk(&segments), Some(Entry::Text(_)))
}
