//! Waypost test utilities.
//!
//! Fixtures for integration testing: sample menus, a prebuilt registry, and
//! assertion helpers for rendered markup.

use waypost_kernel::{MenuHandle, MenuOptions, MenuRegistry, NavigationMenu, NodeDescriptor};

/// A link node descriptor with a title derived from the key.
///
/// `"about"` becomes title `"About"` at location `"/about"`.
pub fn link(key: &str) -> NodeDescriptor {
    let mut chars = key.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    NodeDescriptor::new(key)
        .title(title)
        .location(format!("/{key}"))
}

/// Build a standalone menu with one link node per key, in order.
#[allow(clippy::expect_used)]
pub fn sample_menu(name: &str, keys: &[&str]) -> MenuHandle {
    let mut menu = NavigationMenu::new(name);
    for key in keys {
        menu.add(link(key)).expect("fixture keys are non-empty");
    }
    MenuHandle::new(menu)
}

/// A registry with a `main` menu (home, products, contact) whose `products`
/// node nests a `products` menu (widgets, gadgets), plus a `footer` menu.
#[allow(clippy::expect_used)]
pub fn sample_registry() -> MenuRegistry {
    let mut registry = MenuRegistry::new();

    let main = registry.create("main", MenuOptions::default().id("main-nav"));
    let products = registry.create("products", MenuOptions::default().class("submenu"));
    let footer = registry.create("footer", MenuOptions::default());

    let fixtures = [
        (&main, &["home", "products", "contact"][..]),
        (&products, &["widgets", "gadgets"][..]),
        (&footer, &["privacy"][..]),
    ];
    for (handle, keys) in fixtures {
        let mut menu = handle.write();
        for key in keys {
            menu.add(link(key)).expect("fixture keys are non-empty");
        }
    }

    main.write()
        .attach("products", products.clone())
        .expect("main fixture has a products node");

    registry
}

/// Assert that every needle appears in `haystack`, in the given order.
#[track_caller]
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut offset = 0;
    for needle in needles {
        match haystack[offset..].find(needle) {
            Some(pos) => offset += pos + needle.len(),
            None => panic!("expected {needle:?} after byte {offset} in:\n{haystack}"),
        }
    }
}
