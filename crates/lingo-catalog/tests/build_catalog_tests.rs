use lingo_catalog::{
    Catalog as _, CatalogError, CatalogOptions, CatalogSource, Embedded, PluralRule,
    build_catalog, build_catalog_with,
};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "tests/fixtures/i18n/"]
struct Fixtures;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/i18n")
}

#[test]
fn builds_from_filesystem() {
    let catalog = build_catalog("zh_CN", "app", fixtures_dir(), CatalogSource::Filesystem).unwrap();

    assert_eq!(catalog.language(), "zh_CN");
    assert_eq!(catalog.lookup_singular("", "hello"), "你好");
    assert_eq!(catalog.lookup_plural("", "item", "item.plural", 5), "件们 (%d)");
}

#[test]
fn builds_second_domain_for_same_language() {
    let catalog =
        build_catalog("de_DE", "errors", fixtures_dir(), CatalogSource::Filesystem).unwrap();

    assert_eq!(catalog.lookup_singular("", "not-found"), "Datei %s nicht gefunden");
    assert_eq!(catalog.lookup_singular("", "hello"), "hello");
}

#[test]
fn missing_language_directory_is_not_found() {
    let result = build_catalog("fr_FR", "app", fixtures_dir(), CatalogSource::Filesystem);

    assert!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[test]
fn malformed_source_is_a_parse_error() {
    let result = build_catalog("broken", "app", fixtures_dir(), CatalogSource::Filesystem);

    assert!(matches!(result, Err(CatalogError::Parse { .. })));
}

#[test]
fn error_message_names_the_path() {
    let err = build_catalog("fr_FR", "app", "locales", CatalogSource::Filesystem)
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        format!(
            "catalog source '{}' not found",
            Path::new("locales").join("fr_FR").join("app.ftl").display()
        )
    );
}

#[test]
fn builds_from_temp_dir() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let lang_dir = temp_dir.path().join("es_ES");
    fs::create_dir(&lang_dir).unwrap();
    fs::write(lang_dir.join("app.ftl"), "hello = Hola\n").unwrap();

    let catalog =
        build_catalog("es_ES", "app", temp_dir.path(), CatalogSource::Filesystem).unwrap();

    assert_eq!(catalog.lookup_singular("", "hello"), "Hola");
}

#[test]
fn builds_from_inline_text() {
    let catalog = build_catalog(
        "en_US",
        "app",
        "",
        CatalogSource::Text("hello = Hi there\n"),
    )
    .unwrap();

    assert_eq!(catalog.lookup_singular("", "hello"), "Hi there");
}

#[test]
fn builds_from_embedded_assets() {
    let assets = Embedded::<Fixtures>::new();
    let catalog = build_catalog("de_DE", "app", "", CatalogSource::Assets(&assets)).unwrap();

    assert_eq!(catalog.lookup_singular("", "hello"), "Hallo");
}

#[test]
fn embedded_languages_are_discovered_per_domain() {
    assert_eq!(
        Embedded::<Fixtures>::languages("", "app"),
        vec!["broken", "de_DE", "en_US", "zh_CN"]
    );
    assert_eq!(Embedded::<Fixtures>::languages("", "errors"), vec!["de_DE"]);
    assert!(Embedded::<Fixtures>::languages("nested", "app").is_empty());
}

#[test]
fn plural_rule_comes_from_options() {
    let catalog = build_catalog_with(
        "zh_CN",
        "app",
        fixtures_dir(),
        CatalogSource::Filesystem,
        CatalogOptions::default().with_plural_rule(PluralRule::Single),
    )
    .unwrap();

    assert_eq!(catalog.lookup_plural("", "item", "item.plural", 5), "件 (%d)");
}
