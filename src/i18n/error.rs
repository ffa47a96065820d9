//! Errors raised while building a locale registry or performing strict lookups.

use thiserror::Error;

/// Errors from i18n operations.
///
/// Everyday lookups never produce these: unknown URL locales fall back to
/// the default and missing keys degrade to the raw key. They surface only
/// at startup (loading dictionaries) and from the strict lookup APIs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A locale code is not part of the registry.
    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    /// A key resolves in neither the requested locale nor the default locale.
    #[error("Missing translation key '{key}' for locale '{locale}'")]
    MissingKey { locale: String, key: String },

    /// The registry was built without its default locale.
    #[error("Default locale '{0}' is not registered")]
    DefaultNotRegistered(String),

    /// The same locale was registered twice.
    #[error("Locale '{0}' registered more than once")]
    DuplicateLocale(String),

    /// A dictionary file is not valid JSON or contains non-string leaves.
    #[error("Failed to parse dictionary for locale '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A dictionary file could not be read.
    #[error("Failed to read dictionary for locale '{locale}': {source}")]
    Io {
        locale: String,
        #[source]
        source: std::io::Error,
    },

    /// The global registry was already installed.
    #[error("Locale registry is already initialized")]
    AlreadyInitialized,
}
