#![doc = include_str!("../README.md")]

use lingo_catalog::PluralRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, io};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

#[derive(Debug, Error)]
pub enum I18nConfigError {
    /// Configuration file not found.
    #[error("i18n.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file or assets directory.
    #[error("Failed to read configuration: {0}")]
    ReadError(#[from] io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A directory in the assets directory is not a language code.
    #[error("Invalid language identifier '{name}' found in assets directory")]
    InvalidLanguageIdentifier {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// The configured default language is not a language code.
    #[error("Invalid default language identifier '{name}'")]
    InvalidDefaultLanguage {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
}

/// The contents of `i18n.toml`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Language selected at startup (e.g., "en_US").
    pub default_language: String,
    /// Catalog file name without extension.
    pub domain: String,
    /// Directory holding `{language}/{domain}.ftl` files.
    pub assets_dir: PathBuf,
    /// Per-language plural selection. Unlisted languages use the default rule.
    #[serde(default)]
    pub plural_rules: BTreeMap<String, PluralRule>,
    /// Display names that override the built-in language table.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

impl I18nConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, I18nConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(I18nConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;

        let config: I18nConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Reads `i18n.toml` from the manifest directory.
    pub fn read_from_manifest_dir() -> Result<Self, I18nConfigError> {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| I18nConfigError::NotFound)?;

        Self::from_manifest_dir(Path::new(&manifest_dir))
    }

    /// Reads `i18n.toml` from the given directory.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, I18nConfigError> {
        Self::read_from_path(manifest_dir.join("i18n.toml"))
    }

    /// Returns the assets directory resolved against `base_dir`.
    pub fn assets_dir_from_base(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.assets_dir)
    }

    /// Returns the configured default language as a `LanguageIdentifier`.
    pub fn default_language_identifier(&self) -> Result<LanguageIdentifier, I18nConfigError> {
        parse_code(&self.default_language).map_err(|source| {
            I18nConfigError::InvalidDefaultLanguage {
                name: self.default_language.clone(),
                source,
            }
        })
    }

    /// Returns the language directories under the assets directory, sorted.
    pub fn available_languages_from_base(
        &self,
        base_dir: &Path,
    ) -> Result<Vec<String>, I18nConfigError> {
        let assets_path = self.assets_dir_from_base(base_dir);
        let entries = fs_err::read_dir(&assets_path)?;

        let mut languages = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| parse_language_entry(&entry).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        languages.sort();
        languages.dedup();

        Ok(languages)
    }

    /// Returns the languages that ship a catalog for the configured domain.
    pub fn catalog_languages_from_base(
        &self,
        base_dir: &Path,
    ) -> Result<Vec<String>, I18nConfigError> {
        let assets_path = self.assets_dir_from_base(base_dir);
        let file_name = format!("{}.ftl", self.domain);

        Ok(self
            .available_languages_from_base(base_dir)?
            .into_iter()
            .filter(|lang| assets_path.join(lang).join(&file_name).is_file())
            .collect())
    }

    /// Plural rule configured for `language`.
    pub fn plural_rule(&self, language: &str) -> PluralRule {
        self.plural_rules
            .get(language)
            .copied()
            .unwrap_or_default()
    }

    /// Display name for `language`, preferring the configured overrides.
    pub fn display_name(&self, language: &str) -> Option<&str> {
        self.languages
            .get(language)
            .map(String::as_str)
            .or_else(|| lingo_lang::display_name(language))
    }
}

fn parse_code(code: &str) -> Result<LanguageIdentifier, LanguageIdentifierError> {
    code.replace('_', "-").parse::<LanguageIdentifier>()
}

/// Parse a directory entry as a language code.
///
/// Returns `Ok(None)` if the entry is not a directory.
fn parse_language_entry(entry: &fs_err::DirEntry) -> Result<Option<String>, I18nConfigError> {
    if !entry.file_type()?.is_dir() {
        return Ok(None);
    }

    let raw_name = entry.file_name();
    let name = raw_name.into_string().map_err(|raw| {
        I18nConfigError::ReadError(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Assets directory contains a non UTF-8 entry: {:?}", raw),
        ))
    })?;

    parse_code(&name).map_err(|source| I18nConfigError::InvalidLanguageIdentifier {
        name: name.clone(),
        source,
    })?;

    Ok(Some(name))
}
