use fluent_syntax::parser::ParserError;
use std::path::PathBuf;
use thiserror::Error;
use unic_langid::LanguageIdentifierError;

/// Errors raised while building a catalog from its source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog file exists at the resolved location.
    #[error("catalog source '{}' not found", path.display())]
    NotFound {
        /// Resolved `{source_path}/{language}/{domain}.ftl` location.
        path: PathBuf,
    },
    /// Reading the catalog file failed.
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog source is not valid UTF-8.
    #[error("catalog source '{}' is not valid UTF-8", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// The catalog source is not a valid Fluent resource.
    #[error("failed to parse catalog source '{}': {errors:?}", path.display())]
    Parse {
        path: PathBuf,
        errors: Vec<ParserError>,
    },
    /// The language code the catalog is bound to cannot be parsed.
    #[error("invalid language code '{code}'")]
    InvalidLanguage {
        code: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// The same message id is defined more than once in one source.
    #[error("catalog source '{}' defines duplicate messages: {}", path.display(), ids.join(", "))]
    Duplicate { path: PathBuf, ids: Vec<String> },
}
