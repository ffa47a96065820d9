//! Translation lookup: resolves dotted keys for one locale with fallback to the default locale.
//!
//! # Lookup rules
//!
//! 1. The key is split on `.` and walked through the requested locale's
//!    dictionary.
//! 2. If any segment is absent, the whole key is walked again through the
//!    default locale's dictionary.
//! 3. A value found in the requested locale is returned as-is, including an
//!    empty string or a nested section.
//! 4. A value found only through the fallback is returned unless it is an
//!    empty string; an absent or empty fallback yields the raw key.
//!
//! The fallback walk checks every segment, so a key that is missing at any
//! depth in both locales degrades to the raw key instead of failing.

use crate::i18n::{Dictionary, Entry, I18nError, Locale, LocaleRegistry};
use serde::Serialize;
use tracing::debug;

/// Result of a key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Translation<'a> {
    /// Leaf text from the requested or the default locale.
    Text(&'a str),
    /// The key addressed a nested section rather than a leaf.
    Section(&'a Dictionary),
    /// Nothing usable was found; the raw key is returned.
    Key(&'a str),
}

impl<'a> Translation<'a> {
    /// Leaf text, if the lookup produced any.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Translation::Text(text) => Some(*text),
            _ => None,
        }
    }

    /// Whether the lookup degraded to the raw key.
    pub fn is_key(&self) -> bool {
        matches!(self, Translation::Key(_))
    }
}

impl<'a> From<&'a Entry> for Translation<'a> {
    fn from(entry: &'a Entry) -> Self {
        match entry {
            Entry::Text(text) => Translation::Text(text),
            Entry::Section(section) => Translation::Section(section),
        }
    }
}

/// Key lookup bound to one locale of a registry.
///
/// Cheap to copy; holds only references into the registry.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'r> {
    registry: &'r LocaleRegistry,
    locale: &'r Locale,
}

impl LocaleRegistry {
    /// Create a translator for a registered locale code.
    ///
    /// # Returns
    /// * `Ok(Translator)` if the code is registered
    /// * `Err(I18nError::UnknownLocale)` otherwise
    pub fn translator(&self, code: &str) -> Result<Translator<'_>, I18nError> {
        let locale = self
            .get(code)
            .ok_or_else(|| I18nError::UnknownLocale(code.to_string()))?;
        Ok(self.translator_for(locale))
    }

    /// Create a translator for a locale obtained from this registry
    /// (e.g. from [`LocaleRegistry::resolve`]).
    pub fn translator_for<'r>(&'r self, locale: &'r Locale) -> Translator<'r> {
        Translator {
            registry: self,
            locale,
        }
    }
}

impl<'r> Translator<'r> {
    /// The locale this translator looks keys up in first.
    pub fn locale(&self) -> &'r Locale {
        self.locale
    }

    /// Look up `key`, falling back to the default locale and finally to the key itself.
    ///
    /// # Example
    /// ```
    /// use ordo_site::i18n::{LocaleRegistry, Translation};
    ///
    /// let registry = LocaleRegistry::embedded().unwrap();
    /// let t = registry.translator("en").unwrap();
    /// assert_eq!(t.t("nav.home"), Translation::Text("Home"));
    /// assert_eq!(t.t("nav.unknown"), Translation::Key("nav.unknown"));
    /// ```
    pub fn t<'a>(&self, key: &'a str) -> Translation<'a>
    where
        'r: 'a,
    {
        let segments: Vec<&str> = key.split('.').collect();

        if let Some(entry) = self.locale.dictionary().walk(&segments) {
            return entry.into();
        }

        let default = self.registry.default_locale();
        debug!(
            locale = self.locale.code(),
            key,
            fallback = default.code(),
            "Translation key missing, falling back to default locale"
        );

        match default.dictionary().walk(&segments) {
            Some(Entry::Text(text)) if text.is_empty() => Translation::Key(key),
            Some(entry) => entry.into(),
            None => Translation::Key(key),
        }
    }

    /// Look up `key` and render it as display text.
    ///
    /// Sections have no display text and render as the raw key.
    pub fn text<'a>(&self, key: &'a str) -> &'a str
    where
        'r: 'a,
    {
        match self.t(key) {
            Translation::Text(text) => text,
            Translation::Section(_) | Translation::Key(_) => key,
        }
    }

    /// Strict lookup: same fallback as [`Translator::t`], but reports
    /// [`I18nError::MissingKey`] instead of degrading to the raw key.
    pub fn get<'a>(&self, key: &'a str) -> Result<Translation<'a>, I18nError>
    where
        'r: 'a,
    {
        match self.t(key) {
            Translation::Key(_) => Err(I18nError::MissingKey {
                locale: self.locale.code().to_string(),
                key: key.to_string(),
            }),
            found => Ok(found),
        }
    }
}
