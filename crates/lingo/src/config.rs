use crate::error::Error;
use crate::localizer::Localizer;
use lingo_catalog::{CatalogOptions, CatalogSource, build_catalog_with};
use lingo_toml::I18nConfig;
use std::path::Path;

impl Localizer {
    /// Loads every catalog described by `config`, resolving its assets
    /// directory against `base_dir`, and selects the default language.
    ///
    /// The default language must have a catalog. Every other language
    /// directory holding a `{domain}.ftl` file is registered too.
    pub fn from_config(config: &I18nConfig, base_dir: &Path) -> Result<Self, Error> {
        config.default_language_identifier()?;

        let assets_dir = config.assets_dir_from_base(base_dir);
        let default_language = config.default_language.as_str();

        let catalog = build_catalog_with(
            default_language,
            &config.domain,
            &assets_dir,
            CatalogSource::Filesystem,
            catalog_options(config, default_language),
        )?;
        let localizer = Self::with_catalog(default_language, catalog);

        for language in config.catalog_languages_from_base(base_dir)? {
            if language == default_language {
                continue;
            }

            let catalog = build_catalog_with(
                &language,
                &config.domain,
                &assets_dir,
                CatalogSource::Filesystem,
                catalog_options(config, &language),
            )?;
            localizer.append(language, catalog);
        }

        tracing::info!(
            "Loaded catalogs for {:?} from '{}'",
            localizer.languages(),
            assets_dir.display()
        );

        Ok(localizer)
    }

    /// Reads `i18n.toml` from `manifest_dir` and calls
    /// [`from_config`](Localizer::from_config).
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, Error> {
        let config = I18nConfig::from_manifest_dir(manifest_dir)?;
        Self::from_config(&config, manifest_dir)
    }
}

fn catalog_options(config: &I18nConfig, language: &str) -> CatalogOptions {
    CatalogOptions::default().with_plural_rule(config.plural_rule(language))
}
