use crate::error::CatalogError;
use crate::fluent::FluentCatalog;
use crate::plural::PluralRule;
use crate::source::CatalogSource;
use std::path::Path;
use std::sync::Arc;

/// Translated strings for one language.
///
/// Implementations are immutable once built and shared between threads.
/// Lookups never fail: an untranslated key is returned as-is.
pub trait Catalog: Send + Sync {
    /// The language code this catalog was built for.
    fn language(&self) -> &str;

    /// Resolves `key`, disambiguated by `context` (empty for none).
    fn lookup_singular(&self, context: &str, key: &str) -> String;

    /// Resolves the form of a counted message selected for `count`.
    ///
    /// Returns a template that may still contain a placeholder for the count.
    fn lookup_plural(
        &self,
        context: &str,
        singular_key: &str,
        plural_key: &str,
        count: i64,
    ) -> String;
}

/// Knobs for building a catalog.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CatalogOptions {
    pub plural_rule: PluralRule,
}

impl CatalogOptions {
    pub fn with_plural_rule(mut self, plural_rule: PluralRule) -> Self {
        self.plural_rule = plural_rule;
        self
    }
}

/// Builds a catalog for `language` from `{source_path}/{language}/{domain}.ftl`.
pub fn build_catalog(
    language: &str,
    domain: &str,
    source_path: impl AsRef<Path>,
    source: CatalogSource<'_>,
) -> Result<Arc<dyn Catalog>, CatalogError> {
    build_catalog_with(
        language,
        domain,
        source_path,
        source,
        CatalogOptions::default(),
    )
}

/// Like [`build_catalog`], with explicit [`CatalogOptions`].
pub fn build_catalog_with(
    language: &str,
    domain: &str,
    source_path: impl AsRef<Path>,
    source: CatalogSource<'_>,
    options: CatalogOptions,
) -> Result<Arc<dyn Catalog>, CatalogError> {
    let (path, content) = source.load(source_path.as_ref(), language, domain)?;
    let catalog = FluentCatalog::parse(language, &path, content, options)?;

    tracing::debug!(
        language,
        domain,
        path = %path.display(),
        "Built translation catalog"
    );

    Ok(Arc::new(catalog))
}
