//! Internationalization (i18n) for the website.
//!
//! All locale-related logic lives here: the registry of supported locales
//! and their dictionaries, URL locale resolution, and dotted-key lookup
//! with fallback to the default locale.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales, their dictionaries and the default
//! - `dictionary`: Nested translation trees addressed by dotted keys
//! - `resolver`: Maps a URL path to a registered locale
//! - `translator`: Key lookup with per-key fallback to the default locale
//! - `coverage`: Reports keys each locale is missing relative to the default
//!
//! # Example
//!
//! ```
//! use ordo_site::i18n::{LocaleRegistry, Translation};
//!
//! let registry = LocaleRegistry::embedded().unwrap();
//! let locale = registry.resolve("/zh-TW/docs/getting-started");
//! let t = registry.translator_for(locale);
//!
//! assert_eq!(t.t("nav.home"), Translation::Text("首頁"));
//! // Missing in zh-TW, served by the default locale (zh-CN)
//! assert_eq!(t.t("hero.secondary"), Translation::Text("在 GitHub 查看"));
//! ```

mod coverage;
mod dictionary;
mod error;
mod registry;
mod resolver;
mod translator;

pub use coverage::{CoverageReport, LocaleCoverage};
pub use dictionary::{Dictionary, Entry};
pub use error::I18nError;
pub use registry::{Locale, LocaleRegistry, RegistryBuilder, DEFAULT_LOCALE};
pub use translator::{Translation, Translator};
