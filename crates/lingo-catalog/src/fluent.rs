use crate::catalog::{Catalog, CatalogOptions};
use crate::error::CatalogError;
use crate::plural::PluralRule;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentResource};
use std::borrow::Cow;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// A [`Catalog`] backed by a thread-safe Fluent bundle.
///
/// Keys map onto Fluent entries: `hello` is the value of message `hello`,
/// `item.plural` is the `plural` attribute of message `item`. A non-empty
/// context selects message `{context}-{id}`.
pub struct FluentCatalog {
    language: String,
    plural_rule: PluralRule,
    bundle: FluentBundle<FluentResource>,
}

impl FluentCatalog {
    /// Parses Fluent `content` loaded from `path` into a catalog for `language`.
    pub fn parse(
        language: &str,
        path: &Path,
        content: String,
        options: CatalogOptions,
    ) -> Result<Self, CatalogError> {
        let langid = parse_language(language)?;

        let resource = FluentResource::try_new(content).map_err(|(_, errors)| {
            CatalogError::Parse {
                path: path.to_path_buf(),
                errors,
            }
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Results are used as printf templates, so no bidi isolation marks.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            let ids = errors
                .into_iter()
                .filter_map(|err| match err {
                    FluentError::Overriding { id, .. } => Some(id),
                    _ => None,
                })
                .collect();
            CatalogError::Duplicate {
                path: path.to_path_buf(),
                ids,
            }
        })?;

        Ok(Self {
            language: language.to_string(),
            plural_rule: options.plural_rule,
            bundle,
        })
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    fn format(&self, context: &str, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let (id, attribute) = match key.split_once('.') {
            Some((id, attribute)) => (id, Some(attribute)),
            None => (key, None),
        };
        let id: Cow<'_, str> = if context.is_empty() {
            Cow::Borrowed(id)
        } else {
            Cow::Owned(format!("{}-{}", context, id))
        };

        let message = self.bundle.get_message(&id)?;
        let pattern = match attribute {
            Some(attribute) => message.get_attribute(attribute)?.value(),
            None => message.value()?,
        };

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            tracing::warn!(
                "Fluent formatting errors for '{}' in '{}': {:?}",
                key,
                self.language,
                errors
            );
            return None;
        }

        Some(value.into_owned())
    }
}

impl Catalog for FluentCatalog {
    fn language(&self) -> &str {
        &self.language
    }

    fn lookup_singular(&self, context: &str, key: &str) -> String {
        self.format(context, key, None)
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup_plural(
        &self,
        context: &str,
        singular_key: &str,
        plural_key: &str,
        count: i64,
    ) -> String {
        let (chosen, other) = if self.plural_rule.is_singular(count) {
            (singular_key, plural_key)
        } else {
            (plural_key, singular_key)
        };

        let mut args = FluentArgs::new();
        args.set("count", count);

        self.format(context, chosen, Some(&args))
            .or_else(|| self.format(context, other, Some(&args)))
            .unwrap_or_else(|| chosen.to_string())
    }
}

impl std::fmt::Debug for FluentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluentCatalog")
            .field("language", &self.language)
            .field("plural_rule", &self.plural_rule)
            .finish_non_exhaustive()
    }
}

/// Parses `zh_CN` or `zh-CN` style codes.
fn parse_language(code: &str) -> Result<LanguageIdentifier, CatalogError> {
    code.replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map_err(|source| CatalogError::InvalidLanguage {
            code: code.to_string(),
            source,
        })
}
