use crate::error::LocalizedError;
use crate::format::{self, FormatArg, FormatError};
use arc_swap::ArcSwap;
use lingo_catalog::{Catalog, CatalogError, CatalogSource, build_catalog};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

type Registry = FxHashMap<String, Arc<dyn Catalog>>;

/// Resolves message keys against the catalog of the selected language.
///
/// The registry of catalogs and the selected language are two independent
/// cells, each replaced wholesale on write. Lookups load each cell once and
/// never take a lock, so they run alongside [`set_language`] and
/// [`append_catalog`] without blocking and never see a half-built registry.
///
/// Each `Localizer` is self-contained; several can coexist, e.g. one per
/// tenant.
///
/// [`set_language`]: Localizer::set_language
/// [`append_catalog`]: Localizer::append_catalog
pub struct Localizer {
    registry: ArcSwap<Registry>,
    language: ArcSwap<String>,
}

impl Localizer {
    /// Builds the catalog for `language` and selects it.
    ///
    /// The catalog is read from `{source_path}/{language}/{domain}.ftl` of
    /// `source`.
    pub fn new(
        language: &str,
        domain: &str,
        source_path: impl AsRef<Path>,
        source: CatalogSource<'_>,
    ) -> Result<Self, CatalogError> {
        let catalog = build_catalog(language, domain, source_path, source)?;
        Ok(Self::with_catalog(language, catalog))
    }

    /// Creates a localizer around an already built catalog.
    pub fn with_catalog(language: impl Into<String>, catalog: Arc<dyn Catalog>) -> Self {
        let language = language.into();
        let mut registry = Registry::default();
        registry.insert(language.clone(), catalog);

        Self {
            registry: ArcSwap::from_pointee(registry),
            language: ArcSwap::from_pointee(language),
        }
    }

    /// Selects the language used by all following lookups.
    ///
    /// The language does not need a registered catalog; until one is
    /// appended, lookups return their keys unchanged.
    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        tracing::debug!(language = %language, "Selected language");
        self.language.store(Arc::new(language));
    }

    /// The currently selected language.
    pub fn language(&self) -> String {
        String::clone(&self.language.load())
    }

    /// Whether a catalog is registered for `language`.
    pub fn exists(&self, language: &str) -> bool {
        self.registry.load().contains_key(language)
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.registry.load().keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Builds a catalog for `language` and registers it, replacing any
    /// catalog previously registered for that language.
    ///
    /// A failed build leaves the registry untouched.
    pub fn append_catalog(
        &self,
        language: &str,
        domain: &str,
        source_path: impl AsRef<Path>,
        source: CatalogSource<'_>,
    ) -> Result<(), CatalogError> {
        let catalog = build_catalog(language, domain, source_path, source)?;
        self.append(language, catalog);
        Ok(())
    }

    /// Registers an already built catalog for `language`.
    ///
    /// The registry is copied, extended and published as a whole. Appends
    /// racing on different languages are all kept. Appends racing on the
    /// same language keep whichever publishes last.
    pub fn append(&self, language: impl Into<String>, catalog: Arc<dyn Catalog>) {
        let language = language.into();

        self.registry.rcu(|current| {
            let mut next = Registry::clone(current);
            next.insert(language.clone(), Arc::clone(&catalog));
            next
        });

        tracing::debug!(language = %language, "Registered catalog");
    }

    /// Runs `f` with the catalog of the selected language, if any.
    fn with_current<R>(&self, f: impl FnOnce(&dyn Catalog) -> R) -> Option<R> {
        let registry = self.registry.load();
        let language = self.language.load();
        let catalog = registry.get(language.as_str())?;
        Some(f(&**catalog))
    }

    /// Translates `key`, or returns it unchanged when the selected language
    /// has no catalog.
    pub fn t(&self, key: &str) -> String {
        self.with_current(|catalog| catalog.lookup_singular("", key))
            .unwrap_or_else(|| {
                tracing::trace!(key, "No catalog for the selected language");
                key.to_string()
            })
    }

    /// Translates `key`, choosing between `key` and `key.plural` by `count`.
    ///
    /// The count is substituted into the first placeholder of the selected
    /// template. Without a count this is [`t`](Localizer::t). When the
    /// selected language has no catalog the key is returned unchanged.
    pub fn n(&self, key: &str, count: Option<i64>) -> Result<String, FormatError> {
        let Some(count) = count else {
            return Ok(self.t(key));
        };

        let plural_key = format!("{}.plural", key);
        let Some(template) = self
            .with_current(|catalog| catalog.lookup_plural("", key, &plural_key, count))
        else {
            tracing::trace!(key, "No catalog for the selected language");
            return Ok(key.to_string());
        };

        format::format_first(&template, &FormatArg::Int(count))
    }

    /// Translates `key` and substitutes `args` into its placeholders.
    pub fn tf(&self, key: &str, args: &[FormatArg]) -> Result<String, FormatError> {
        format::format(&self.t(key), args)
    }

    /// Like [`tf`](Localizer::tf), but returns the text as an error value.
    pub fn error_t(&self, key: &str, args: &[FormatArg]) -> Result<LocalizedError, FormatError> {
        let message = self.tf(key, args)?;
        Ok(LocalizedError::new(key, message))
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("language", &self.language())
            .field("languages", &self.languages())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    impl Catalog for Echo {
        fn language(&self) -> &str {
            self.0
        }

        fn lookup_singular(&self, context: &str, key: &str) -> String {
            format!("{}:{}{}", self.0, context, key)
        }

        fn lookup_plural(
            &self,
            _context: &str,
            singular_key: &str,
            plural_key: &str,
            count: i64,
        ) -> String {
            if count == 1 {
                format!("{} %d", singular_key)
            } else {
                format!("{} %d", plural_key)
            }
        }
    }

    fn localizer() -> Localizer {
        Localizer::with_catalog("en_US", Arc::new(Echo("en_US")))
    }

    #[test]
    fn with_catalog_registers_and_selects() {
        let localizer = localizer();
        assert_eq!(localizer.language(), "en_US");
        assert!(localizer.exists("en_US"));
        assert_eq!(localizer.languages(), vec!["en_US"]);
    }

    #[test]
    fn lookups_use_empty_context() {
        assert_eq!(localizer().t("hello"), "en_US:hello");
    }

    #[test]
    fn plural_key_is_derived_from_key() {
        let localizer = localizer();
        assert_eq!(localizer.n("item", Some(1)).unwrap(), "item 1");
        assert_eq!(localizer.n("item", Some(3)).unwrap(), "item.plural 3");
        assert_eq!(localizer.n("item", None).unwrap(), "en_US:item");
    }

    #[test]
    fn unknown_language_passes_keys_through() {
        let localizer = localizer();
        localizer.set_language("fr_FR");

        assert_eq!(localizer.language(), "fr_FR");
        assert_eq!(localizer.t("hello"), "hello");
        assert_eq!(localizer.n("item", Some(3)).unwrap(), "item");
        assert_eq!(localizer.n("item", None).unwrap(), "item");
    }

    #[test]
    fn append_replaces_existing_language() {
        let localizer = localizer();
        localizer.append("en_US", Arc::new(Echo("other")));

        assert_eq!(localizer.languages(), vec!["en_US"]);
        assert_eq!(localizer.t("hello"), "other:hello");
    }

    #[test]
    fn debug_lists_languages() {
        let localizer = localizer();
        localizer.append("zh_CN", Arc::new(Echo("zh_CN")));

        assert_eq!(
            format!("{:?}", localizer),
            r#"Localizer { language: "en_US", languages: ["en_US", "zh_CN"] }"#
        );
    }
}
