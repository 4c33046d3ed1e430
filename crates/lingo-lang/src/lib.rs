#![doc = include_str!("../README.md")]

use unic_langid::LanguageIdentifier;

/// A supported language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Language {
    /// Code used to register catalogs, e.g. `zh_CN`.
    pub code: &'static str,
    /// Name of the language in that language.
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        code: "zh_CN",
        name: "简体中文",
    },
    Language {
        code: "zh_TW",
        name: "繁體中文",
    },
    Language {
        code: "en_US",
        name: "English",
    },
    Language {
        code: "es_ES",
        name: "Español",
    },
    Language {
        code: "de_DE",
        name: "Deutsch",
    },
];

pub fn codes() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|lang| lang.code)
}

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|lang| lang.code == code)
}

pub fn display_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.name)
}

/// Returns the primary language subtag of `code`, lowercased.
///
/// Both `de_AT` and `de-AT` yield `de`.
pub fn primary_subtag(code: &str) -> Option<String> {
    code.replace('_', "-")
        .parse::<LanguageIdentifier>()
        .ok()
        .map(|lang| lang.language.as_str().to_string())
}

/// Finds the entry for `code`, falling back to the first entry with the same
/// primary language when the region has no entry of its own.
pub fn closest(code: &str) -> Option<&'static Language> {
    if let Some(lang) = LANGUAGES.iter().find(|lang| lang.code == code) {
        return Some(lang);
    }

    let primary = primary_subtag(code)?;
    LANGUAGES
        .iter()
        .find(|lang| primary_subtag(lang.code).as_deref() == Some(primary.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_matches_codes() {
        assert_eq!(
            codes().collect::<Vec<_>>(),
            vec!["zh_CN", "zh_TW", "en_US", "es_ES", "de_DE"]
        );
    }

    #[rstest]
    #[case("zh_CN", Some("简体中文"))]
    #[case("zh_TW", Some("繁體中文"))]
    #[case("en_US", Some("English"))]
    #[case("es_ES", Some("Español"))]
    #[case("de_DE", Some("Deutsch"))]
    #[case("fr_FR", None)]
    #[case("en-US", None)]
    fn display_name_is_exact(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(display_name(code), expected);
        assert_eq!(is_supported(code), expected.is_some());
    }

    #[rstest]
    #[case("de_AT", Some("de"))]
    #[case("de-AT", Some("de"))]
    #[case("ZH_tw", Some("zh"))]
    #[case("en", Some("en"))]
    #[case("not a code", None)]
    fn primary_subtag_normalizes(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(primary_subtag(code).as_deref(), expected);
    }

    #[rstest]
    #[case("zh_TW", Some("zh_TW"))]
    #[case("en_GB", Some("en_US"))]
    #[case("es", Some("es_ES"))]
    #[case("zh_HK", Some("zh_CN"))]
    #[case("fr_FR", None)]
    fn closest_prefers_exact_then_primary(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(closest(code).map(|lang| lang.code), expected);
    }
}
