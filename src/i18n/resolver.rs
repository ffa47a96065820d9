//! URL locale resolution: maps a request path to a registered locale.

use crate::i18n::{Locale, LocaleRegistry};
use tracing::trace;

impl LocaleRegistry {
    /// Resolve the locale named by the first non-empty segment of `path`.
    ///
    /// Falls back to the default locale when the path has no segments or
    /// the segment is not a registered code. Never fails. A `?query` or
    /// `#fragment` suffix is ignored.
    ///
    /// # Example
    /// ```
    /// use ordo_site::i18n::LocaleRegistry;
    ///
    /// let registry = LocaleRegistry::embedded().unwrap();
    /// assert_eq!(registry.resolve("/zh-TW/docs/page").code(), "zh-TW");
    /// assert_eq!(registry.resolve("/fr/docs").code(), "zh-CN");
    /// ```
    pub fn resolve(&self, path: &str) -> &Locale {
        let candidate = first_segment(path);
        match candidate.and_then(|code| self.get(code)) {
            Some(locale) => locale,
            None => {
                trace!(path, ?candidate, "No locale in path, using default");
                self.default_locale()
            }
        }
    }
}

/// First non-empty `/`-separated segment of the path portion of `path`.
fn first_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|segment| !segment.is_empty())
}
