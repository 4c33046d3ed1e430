#![doc = include_str!("../README.md")]

mod catalog;
mod error;
mod fluent;
mod plural;
mod source;

pub use catalog::{Catalog, CatalogOptions, build_catalog, build_catalog_with};
pub use error::CatalogError;
pub use fluent::FluentCatalog;
pub use plural::PluralRule;
pub use source::{AssetSource, CatalogSource, Embedded, resource_path};
