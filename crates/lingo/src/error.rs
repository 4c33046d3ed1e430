use crate::format::FormatError;
use lingo_catalog::CatalogError;
use lingo_toml::I18nConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Config(#[from] I18nConfigError),
}

/// An error whose message is translated text.
///
/// Produced by [`Localizer::error_t`](crate::Localizer::error_t).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct LocalizedError {
    key: String,
    message: String,
}

impl LocalizedError {
    pub(crate) fn new(key: &str, message: String) -> Self {
        Self {
            key: key.to_string(),
            message,
        }
    }

    /// The untranslated message key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
