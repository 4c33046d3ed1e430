#![doc = include_str!("../README.md")]

mod config;
mod error;
pub mod format;
pub mod global;
mod localizer;

pub use error::{Error, LocalizedError};
pub use format::{FormatArg, FormatError};
pub use localizer::Localizer;

pub use lingo_catalog::{
    AssetSource, Catalog, CatalogError, CatalogOptions, CatalogSource, Embedded, FluentCatalog,
    PluralRule, build_catalog, build_catalog_with,
};
pub use lingo_lang::{LANGUAGES, Language};
pub use lingo_toml::{I18nConfig, I18nConfigError};
