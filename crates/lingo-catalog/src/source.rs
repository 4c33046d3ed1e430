//! Where catalog text comes from.

use crate::error::CatalogError;
use path_slash::PathExt as _;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Raw access to a tree of translation assets.
///
/// Paths are relative and `/`-separated, e.g. `zh_CN/app.ftl`.
pub trait AssetSource: Send + Sync {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

/// Exposes a [`RustEmbed`] folder as an [`AssetSource`].
pub struct Embedded<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T: RustEmbed> Embedded<T> {
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Lists the languages under `prefix` that ship a `{domain}.ftl` file.
    pub fn languages(prefix: &str, domain: &str) -> Vec<String> {
        let file_name = format!("{}.ftl", domain);
        let prefix = prefix.trim_matches('/');
        let mut languages = Vec::new();

        for file_path in T::iter() {
            let relative = if prefix.is_empty() {
                Some(&*file_path)
            } else {
                file_path
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix('/'))
            };

            if let Some(relative) = relative
                && let Some(lang) = relative.strip_suffix(&format!("/{}", file_name))
                && !lang.is_empty()
                && !lang.contains('/')
            {
                languages.push(lang.to_string());
            }
        }

        languages.sort();
        languages
    }
}

impl<T: RustEmbed> Default for Embedded<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RustEmbed> AssetSource for Embedded<T> {
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        T::get(path).map(|file| file.data)
    }
}

/// The data a catalog is built from.
#[derive(Clone, Copy)]
pub enum CatalogSource<'a> {
    /// Read `{source_path}/{language}/{domain}.ftl` from disk.
    Filesystem,
    /// Use the given Fluent text. The resolved path is only used in errors.
    Text(&'a str),
    /// Read `{source_path}/{language}/{domain}.ftl` from an asset tree.
    Assets(&'a dyn AssetSource),
}

impl std::fmt::Debug for CatalogSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Filesystem => f.write_str("Filesystem"),
            CatalogSource::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            CatalogSource::Assets(_) => f.write_str("Assets"),
        }
    }
}

/// Location of a domain's file for one language.
pub fn resource_path(source_path: &Path, language: &str, domain: &str) -> PathBuf {
    source_path.join(language).join(format!("{}.ftl", domain))
}

impl CatalogSource<'_> {
    /// Loads the Fluent text for `language`, returning it with its resolved path.
    pub(crate) fn load(
        &self,
        source_path: &Path,
        language: &str,
        domain: &str,
    ) -> Result<(PathBuf, String), CatalogError> {
        let path = resource_path(source_path, language, domain);

        let content = match self {
            CatalogSource::Filesystem => match fs_err::read_to_string(&path) {
                Ok(content) => content,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return Err(CatalogError::NotFound { path });
                },
                Err(err) => return Err(CatalogError::Io(err)),
            },
            CatalogSource::Text(text) => (*text).to_string(),
            CatalogSource::Assets(assets) => {
                let asset_path = path.to_slash_lossy();
                let Some(data) = assets.read(&asset_path) else {
                    return Err(CatalogError::NotFound { path });
                };
                match String::from_utf8(data.into_owned()) {
                    Ok(content) => content,
                    Err(source) => return Err(CatalogError::InvalidUtf8 { path, source }),
                }
            },
        };

        Ok((path, content))
    }
}
