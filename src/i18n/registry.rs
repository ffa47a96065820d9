//! Locale registry: single source of truth for supported locales and their dictionaries.
//!
//! The registry is built once at startup and never mutated afterwards. A
//! process-wide instance lives in a `OnceLock`, either installed explicitly
//! from configuration or lazily built from the embedded dictionaries.

use crate::i18n::{Dictionary, I18nError};
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

/// Code of the locale used when a URL names no known locale or a key is missing.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Built-in locales: code, native display name, embedded dictionary.
const BUILTIN_LOCALES: &[(&str, &str, &str)] = &[
    ("en", "English", include_str!("../../locales/en.json")),
    ("zh-CN", "简体中文", include_str!("../../locales/zh-CN.json")),
    ("zh-TW", "繁體中文", include_str!("../../locales/zh-TW.json")),
];

/// A supported locale and its translation dictionary.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Locale tag as it appears in URLs (e.g. "en", "zh-TW")
    code: String,

    /// Name of the locale in its own language (e.g. "简体中文")
    native_name: String,

    dictionary: Dictionary,
}

impl Locale {
    pub fn new(code: impl Into<String>, native_name: impl Into<String>, dictionary: Dictionary) -> Self {
        Self {
            code: code.into(),
            native_name: native_name.into(),
            dictionary,
        }
    }

    /// Locale tag (e.g. "zh-CN").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name in the locale's own language.
    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    /// Root of this locale's translation dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

/// Immutable table of locales plus the designated default locale.
///
/// Invariant: the default locale is always a member of `locales`, and
/// locale codes are unique.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default_index: usize,
}

/// Global registry instance (installed at startup or initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Start building a registry whose default locale is `default_code`.
    pub fn builder(default_code: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            default_code: default_code.into(),
            locales: Vec::new(),
        }
    }

    /// Build the registry from the dictionaries compiled into the binary.
    pub fn embedded() -> Result<Self, I18nError> {
        BUILTIN_LOCALES
            .iter()
            .try_fold(Self::builder(DEFAULT_LOCALE), |builder, (code, name, json)| {
                builder.locale_json(*code, *name, json)
            })?
            .build()
    }

    /// Build the registry from `<dir>/<code>.json` files, one per built-in locale.
    pub fn from_dir(dir: &Path) -> Result<Self, I18nError> {
        let mut builder = Self::builder(DEFAULT_LOCALE);
        for (code, name, _) in BUILTIN_LOCALES {
            let path = dir.join(format!("{}.json", code));
            let json = std::fs::read_to_string(&path).map_err(|source| I18nError::Io {
                locale: code.to_string(),
                source,
            })?;
            builder = builder.locale_json(*code, *name, &json)?;
        }
        builder.build()
    }

    /// Get the global registry instance.
    ///
    /// Returns the registry passed to [`LocaleRegistry::install`], or builds
    /// one from the embedded dictionaries on first access.
    ///
    /// # Panics
    /// Panics if the embedded dictionaries are malformed. They are compiled
    /// into the binary and covered by tests, so this indicates a build error.
    pub fn global() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| {
            LocaleRegistry::embedded().expect("Embedded locale dictionaries should be valid")
        })
    }

    /// Install `registry` as the global instance.
    ///
    /// Fails with [`I18nError::AlreadyInitialized`] if a global registry
    /// already exists (installed earlier or created by [`LocaleRegistry::global`]).
    pub fn install(registry: LocaleRegistry) -> Result<&'static LocaleRegistry, I18nError> {
        REGISTRY
            .set(registry)
            .map_err(|_| I18nError::AlreadyInitialized)?;
        let installed = Self::global();
        info!(
            "Installed locale registry with {} locales (default: {})",
            installed.locales.len(),
            installed.default_locale().code()
        );
        Ok(installed)
    }

    /// Return a copy of this registry with a different default locale.
    pub fn with_default(mut self, code: &str) -> Result<Self, I18nError> {
        self.default_index = self
            .locales
            .iter()
            .position(|locale| locale.code == code)
            .ok_or_else(|| I18nError::DefaultNotRegistered(code.to_string()))?;
        Ok(self)
    }

    /// Get a locale by its code.
    ///
    /// # Returns
    /// * `Some(&Locale)` if the code is registered
    /// * `None` otherwise
    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Check if a locale code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The default locale.
    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// Check if `locale` is the default locale.
    pub fn is_default(&self, locale: &Locale) -> bool {
        locale.code == self.default_locale().code
    }

    /// All locales, in registration order.
    pub fn list(&self) -> Vec<&Locale> {
        self.locales.iter().collect()
    }
}

/// Builder for [`LocaleRegistry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    default_code: String,
    locales: Vec<Locale>,
}

impl RegistryBuilder {
    /// Register a locale with an already-built dictionary.
    pub fn locale(
        mut self,
        code: impl Into<String>,
        native_name: impl Into<String>,
        dictionary: Dictionary,
    ) -> Self {
        self.locales.push(Locale::new(code, native_name, dictionary));
        self
    }

    /// Register a locale whose dictionary is given as JSON text.
    pub fn locale_json(
        self,
        code: impl Into<String>,
        native_name: impl Into<String>,
        json: &str,
    ) -> Result<Self, I18nError> {
        let code = code.into();
        let dictionary = Dictionary::from_json(json).map_err(|source| I18nError::Parse {
            locale: code.clone(),
            source,
        })?;
        Ok(self.locale(code, native_name, dictionary))
    }

    /// Validate and build the registry.
    ///
    /// Fails if a code is registered twice or the default locale is absent.
    pub fn build(self) -> Result<LocaleRegistry, I18nError> {
        for (i, locale) in self.locales.iter().enumerate() {
            if self.locales[..i].iter().any(|other| other.code == locale.code) {
                return Err(I18nError::DuplicateLocale(locale.code.clone()));
            }
        }

        let default_index = self
            .locales
            .iter()
            .position(|locale| locale.code == self.default_code)
            .ok_or_else(|| I18nError::DefaultNotRegistered(self.default_code.clone()))?;

        Ok(LocaleRegistry {
            locales: self.locales,
            default_index,
        })
    }
}
