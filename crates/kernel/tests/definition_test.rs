#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu definition loading tests.

use std::path::PathBuf;

use waypost_kernel::{DefinitionError, ListRenderer, MenuDefinitions, MenuRegistry};
use waypost_test_utils::assert_in_order;

const MENUS_YAML: &str = r#"
menus:
  main:
    id: main-nav
    nodes:
      - key: home
        title: Home
        location: /
      - key: docs
        title: Docs
        location: https://docs.example.com
        external: true
        children: [docs]
  docs:
    class: submenu
    nodes:
      - key: guide
        title: Guide
        location: /guide
        html: '<a class="guide" href="%location%">%title%</a>'
"#;

/// Write `contents` to a uniquely named file in the temp directory.
fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("waypost-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_yaml_file_and_render() {
    let path = write_temp("menus.yml", MENUS_YAML);
    let defs = MenuDefinitions::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let registry = MenuRegistry::from_definitions(&defs).unwrap();
    assert_eq!(registry.menu_names(), vec!["docs", "main"]);

    let html = registry.render("main", &ListRenderer::new()).unwrap();
    assert_in_order(
        &html,
        &[
            "<ul id=\"main-nav\">",
            "<a href=\"/\"><span>Home</span></a>",
            "<a href=\"https://docs.example.com\" class=\"external\"><span>Docs</span></a>",
            "<ul class=\"submenu\">",
            "<a class=\"guide\" href=\"/guide\">Guide</a>",
        ],
    );
}

#[test]
fn test_load_json_file() {
    let path = write_temp(
        "menus.json",
        r#"{"menus": {"footer": {"nodes": [{"key": "privacy", "title": "Privacy"}]}}}"#,
    );
    let defs = MenuDefinitions::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let registry = MenuRegistry::from_definitions(&defs).unwrap();
    assert_eq!(registry.title("footer", "privacy"), "Privacy");
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("waypost-definitely-missing.yml");
    let err = MenuDefinitions::load(&path).unwrap_err();
    assert!(matches!(err, DefinitionError::Read { .. }));
}

#[test]
fn test_definitions_round_trip_through_yaml() {
    let defs = MenuDefinitions::from_yaml_str(MENUS_YAML).unwrap();
    let yaml = serde_yml::to_string(&defs).unwrap();
    let again = MenuDefinitions::from_yaml_str(&yaml).unwrap();

    let names: Vec<_> = again.menus.keys().cloned().collect();
    assert_eq!(names, vec!["main", "docs"]);
    assert_eq!(again.menus["main"].nodes[1].children, vec!["docs"]);
}
