#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu and registry behaviour tests.

use waypost_kernel::{
    ListRenderer, MenuOptions, MenuRegistry, NavigationError, NodeDescriptor, Renderer,
};
use waypost_test_utils::{assert_in_order, link, sample_menu, sample_registry};

#[test]
fn test_add_same_descriptor_twice_is_idempotent() {
    let mut registry = MenuRegistry::new();
    let descriptor = NodeDescriptor::new("home").title("Home").location("/");
    registry.add("main", descriptor.clone()).unwrap();
    let once = registry.render("main", &ListRenderer::new()).unwrap();

    registry.add("main", descriptor).unwrap();
    let twice = registry.render("main", &ListRenderer::new()).unwrap();

    assert_eq!(registry.count("main"), 1);
    assert_eq!(once, twice);
}

#[test]
fn test_overwrite_reverts_unset_fields_to_defaults() {
    let mut registry = MenuRegistry::new();
    registry
        .add(
            "main",
            NodeDescriptor::new("home")
                .title("Home")
                .image("/logo.png")
                .html("<b>%title%</b>")
                .active(true),
        )
        .unwrap();
    registry
        .update("main", NodeDescriptor::new("home").title("Start"))
        .unwrap();

    assert_eq!(registry.title("main", "home"), "Start");
    assert_eq!(registry.image("main", "home"), "");
    assert_eq!(registry.html("main", "home"), "");
    assert!(!registry.is_active("main", "home"));
}

#[test]
fn test_first_and_last_follow_insertion_order() {
    let mut registry = MenuRegistry::new();
    registry
        .add("main", link("zebra"))
        .unwrap()
        .add("main", link("apple"))
        .unwrap()
        .add("main", link("mango"))
        .unwrap();

    let html = registry.render("main", &ListRenderer::new()).unwrap();
    assert_eq!(
        html,
        concat!(
            "<ul>",
            "<li class=\"first\"><a href=\"/zebra\"><span>Zebra</span></a></li>",
            "<li><a href=\"/apple\"><span>Apple</span></a></li>",
            "<li class=\"last\"><a href=\"/mango\"><span>Mango</span></a></li>",
            "</ul>"
        )
    );
}

#[test]
fn test_active_nodes_are_independent() {
    let mut registry = MenuRegistry::new();
    registry
        .add("main", link("k1"))
        .unwrap()
        .add("main", link("k2"))
        .unwrap();

    registry.active("main", "k1").active("main", "k2");
    assert!(registry.is_active("main", "k1"));
    assert!(registry.is_active("main", "k2"));

    registry.reset_active("main");
    assert!(!registry.is_active("main", "k1"));
    assert!(!registry.is_active("main", "k2"));
}

#[test]
fn test_inactive_leaves_node_inactive() {
    let mut registry = MenuRegistry::new();
    registry.add("main", link("k1")).unwrap();

    registry.active("main", "k1").inactive("main", "k1");
    assert!(!registry.is_active("main", "k1"));
}

#[test]
fn test_reset_active_does_not_touch_nested_menus() {
    let registry = sample_registry();
    let products = registry.get("products");
    products.write().active("widgets");

    let mut registry = registry;
    registry.active("main", "home").reset_active("main");

    assert!(!registry.is_active("main", "home"));
    assert!(registry.is_active("products", "widgets"));
}

#[test]
fn test_unknown_keys_are_neutral() {
    let registry = sample_registry();
    assert_eq!(registry.title("main", "missing"), "");
    assert_eq!(registry.image("main", "missing"), "");
    assert_eq!(registry.html("main", "missing"), "");
    assert!(!registry.is_active("main", "missing"));
}

#[test]
fn test_render_empty_menu_is_empty_wrapper() {
    let mut registry = MenuRegistry::new();
    registry.create("empty", MenuOptions::default());
    assert_eq!(
        registry.render("empty", &ListRenderer::new()).unwrap(),
        "<ul></ul>"
    );
}

#[test]
fn test_registry_creates_menu_on_first_add() {
    let mut registry = MenuRegistry::new();
    assert_eq!(registry.count("main"), 0);

    registry
        .add("main", NodeDescriptor::new("home").title("Home"))
        .unwrap();

    assert_eq!(registry.count("main"), 1);
}

#[test]
fn test_nested_attach_and_detach() {
    let mut registry = MenuRegistry::new();
    registry.add("a", link("k1")).unwrap().add("a", link("k2")).unwrap();

    let b = sample_menu("b", &["inner"]);
    registry.attach("a", "k1", &b).unwrap();

    let html = registry.render("a", &ListRenderer::new()).unwrap();
    assert_in_order(
        &html,
        &[
            "<li class=\"first\">",
            "<span>K1</span>",
            "<ul><li class=\"first last\"><a href=\"/inner\"><span>Inner</span></a></li></ul>",
            "</li>",
            "<span>K2</span>",
        ],
    );

    registry.detach("a", "k1", &b);
    let html = registry.render("a", &ListRenderer::new()).unwrap();
    assert!(!html.contains("Inner"));
}

#[test]
fn test_changes_to_attached_menu_show_up_in_parent() {
    let registry = sample_registry();
    registry.get("products").write().add(link("gizmos")).unwrap();

    let html = registry.render("main", &ListRenderer::new()).unwrap();
    assert_in_order(&html, &["Products", "Widgets", "Gadgets", "Gizmos", "Contact"]);
}

#[test]
fn test_attach_to_missing_node_is_not_found() {
    let mut registry = sample_registry();
    let extra = sample_menu("extra", &["x"]);
    let err = registry.attach("main", "nope", &extra).unwrap_err();
    assert_eq!(
        err,
        NavigationError::NodeNotFound {
            menu: "main".to_string(),
            key: "nope".to_string(),
        }
    );
}

#[test]
fn test_output_writes_rendered_markup() {
    let registry = sample_registry();
    let renderer = ListRenderer::new();

    let mut sink = Vec::new();
    registry.output("footer", &renderer, &mut sink).unwrap();

    let expected = renderer.render(&registry.get("footer").read()).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), expected);
}

#[test]
fn test_removed_menu_stays_attached_elsewhere() {
    let mut registry = sample_registry();
    registry.remove_menu("products");

    assert_eq!(registry.count("products"), 0);
    let html = registry.render("main", &ListRenderer::new()).unwrap();
    assert!(html.contains("Widgets"));
}
