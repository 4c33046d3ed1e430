use lingo::global::{global, localize, set_global};
use lingo::{CatalogSource, Localizer};
use serial_test::serial;

fn localizer(text: &'static str) -> Localizer {
    Localizer::new("zh_CN", "app", "", CatalogSource::Text(text)).unwrap()
}

#[test]
#[serial]
fn global_localizer_is_installed_once() {
    assert!(global().is_none());
    assert_eq!(localize("hello"), "hello");

    set_global(localizer("hello = 你好\n")).unwrap();
    assert_eq!(localize("hello"), "你好");
    assert_eq!(localize("missing"), "missing");

    let rejected = set_global(localizer("hello = 您好\n")).unwrap_err();
    assert_eq!(rejected.t("hello"), "您好");
    assert_eq!(localize("hello"), "你好");

    let installed = global().unwrap();
    installed.set_language("en_US");
    assert_eq!(localize("hello"), "hello");
}
