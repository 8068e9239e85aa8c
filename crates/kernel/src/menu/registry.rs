//! Menu registry - keeps named navigation menus and forwards operations to them.
//!
//! The registry is an explicit context object: construct one at startup (or
//! per request) and pass it to whatever builds or renders navigation.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use tracing::{debug, trace};

use super::handle::MenuHandle;
use super::list::{MenuOptions, NavigationMenu};
use super::node::NodeDescriptor;
use crate::error::{NavigationError, RenderError};
use crate::theme::Renderer;

/// Registry of named navigation menus.
///
/// Operations addressing a menu that does not exist are no-ops returning a
/// neutral value, except [`MenuRegistry::add`] and [`MenuRegistry::update`],
/// which create the menu on first write. Mutating operations return the
/// registry so calls can be chained.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    /// All menus, indexed by name
    store: HashMap<String, MenuHandle>,
}

impl MenuRegistry {
    /// Create an empty menu registry.
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Create an empty menu under `name`, replacing any existing menu.
    pub fn create(&mut self, name: &str, options: MenuOptions) -> MenuHandle {
        let handle = MenuHandle::new(NavigationMenu::with_options(name, options));
        if self.store.insert(name.to_string(), handle.clone()).is_some() {
            debug!(menu = %name, "replaced existing menu");
        } else {
            debug!(menu = %name, "created menu");
        }
        handle
    }

    /// Get the menu stored under `name`.
    ///
    /// A missing menu yields a new empty menu that is *not* stored; every call
    /// returns a different instance. Use [`MenuRegistry::find`] to tell the
    /// cases apart.
    pub fn get(&self, name: &str) -> MenuHandle {
        self.find(name)
            .cloned()
            .unwrap_or_else(|| MenuHandle::new(NavigationMenu::new(name)))
    }

    /// Get the menu stored under `name`, if any.
    pub fn find(&self, name: &str) -> Option<&MenuHandle> {
        self.store.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Remove a menu from the registry, returning it if present.
    ///
    /// Nodes elsewhere that hold the menu as a child keep their reference.
    pub fn remove_menu(&mut self, name: &str) -> Option<MenuHandle> {
        let removed = self.store.remove(name);
        if removed.is_some() {
            debug!(menu = %name, "removed menu");
        }
        removed
    }

    /// Names of all stored menus, sorted.
    pub fn menu_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.store.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of stored menus.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Add (or replace) a node in the named menu, creating the menu if needed.
    ///
    /// The key is checked before the menu is created, so an invalid
    /// descriptor leaves the registry unchanged.
    pub fn add(
        &mut self,
        name: &str,
        descriptor: NodeDescriptor,
    ) -> Result<&mut Self, NavigationError> {
        if descriptor.key.is_empty() {
            return Err(NavigationError::EmptyKey);
        }

        let handle = self
            .store
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(menu = %name, "implicitly created menu");
                MenuHandle::new(NavigationMenu::new(name))
            })
            .clone();
        handle.write().add(descriptor)?;
        Ok(self)
    }

    /// Alias of [`MenuRegistry::add`].
    pub fn update(
        &mut self,
        name: &str,
        descriptor: NodeDescriptor,
    ) -> Result<&mut Self, NavigationError> {
        self.add(name, descriptor)
    }

    /// Remove a node from the named menu.
    pub fn remove(&mut self, name: &str, key: &str) -> &mut Self {
        self.with_menu(name, |menu| {
            menu.remove(key);
        });
        self
    }

    /// Attach `child` beneath the node `key` of the named menu.
    ///
    /// An unknown menu is a no-op; an unknown node in an existing menu is an
    /// error.
    pub fn attach(
        &mut self,
        name: &str,
        key: &str,
        child: &MenuHandle,
    ) -> Result<&mut Self, NavigationError> {
        if let Some(handle) = self.store.get(name) {
            handle.write().attach(key, child.clone())?;
        } else {
            trace!(menu = %name, key = %key, "attach on unknown menu ignored");
        }
        Ok(self)
    }

    /// Detach `child` from the node `key` of the named menu.
    pub fn detach(&mut self, name: &str, key: &str, child: &MenuHandle) -> &mut Self {
        self.with_menu(name, |menu| {
            menu.detach(key, child);
        });
        self
    }

    /// Mark a node of the named menu as active.
    pub fn active(&mut self, name: &str, key: &str) -> &mut Self {
        self.with_menu(name, |menu| {
            menu.active(key);
        });
        self
    }

    /// Mark a node of the named menu as inactive.
    pub fn inactive(&mut self, name: &str, key: &str) -> &mut Self {
        self.with_menu(name, |menu| {
            menu.inactive(key);
        });
        self
    }

    /// Clear the active flag on every direct node of the named menu.
    pub fn reset_active(&mut self, name: &str) -> &mut Self {
        self.with_menu(name, |menu| {
            menu.reset_active();
        });
        self
    }

    /// Set the render strategy used by [`MenuRegistry::render_default`].
    pub fn set_default_renderer(&mut self, name: &str, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.with_menu(name, |menu| {
            menu.set_default_renderer(renderer);
        });
        self
    }

    pub fn is_active(&self, name: &str, key: &str) -> bool {
        self.read_menu(name, |menu| menu.is_active(key))
            .unwrap_or(false)
    }

    /// Title of a node, or an empty string.
    pub fn title(&self, name: &str, key: &str) -> String {
        self.read_menu(name, |menu| menu.title(key).to_string())
            .unwrap_or_default()
    }

    /// Image path of a node, or an empty string.
    pub fn image(&self, name: &str, key: &str) -> String {
        self.read_menu(name, |menu| menu.image(key).to_string())
            .unwrap_or_default()
    }

    /// Markup override of a node, or an empty string.
    pub fn html(&self, name: &str, key: &str) -> String {
        self.read_menu(name, |menu| menu.html(key).to_string())
            .unwrap_or_default()
    }

    /// Number of direct nodes in the named menu, 0 if it does not exist.
    pub fn count(&self, name: &str) -> usize {
        self.read_menu(name, NavigationMenu::len).unwrap_or(0)
    }

    /// Render the named menu with `renderer`; an unknown menu renders as "".
    pub fn render<R: Renderer + ?Sized>(
        &self,
        name: &str,
        renderer: &R,
    ) -> Result<String, RenderError> {
        self.read_menu(name, |menu| menu.render(renderer))
            .unwrap_or_else(|| Ok(String::new()))
    }

    /// Render the named menu with its default renderer; an unknown menu renders as "".
    pub fn render_default(&self, name: &str) -> Result<String, RenderError> {
        self.read_menu(name, NavigationMenu::render_default)
            .unwrap_or_else(|| Ok(String::new()))
    }

    /// Render the named menu and write it to `sink`. Unknown menus write nothing.
    pub fn output<R, W>(&self, name: &str, renderer: &R, sink: &mut W) -> Result<(), RenderError>
    where
        R: Renderer + ?Sized,
        W: Write + ?Sized,
    {
        self.read_menu(name, |menu| menu.output(renderer, sink))
            .unwrap_or(Ok(()))
    }

    /// Render the named menu with its default renderer and write it to `sink`.
    pub fn output_default<W: Write + ?Sized>(
        &self,
        name: &str,
        sink: &mut W,
    ) -> Result<(), RenderError> {
        self.read_menu(name, |menu| menu.output_default(sink))
            .unwrap_or(Ok(()))
    }

    fn with_menu(&self, name: &str, f: impl FnOnce(&mut NavigationMenu)) {
        match self.store.get(name) {
            Some(handle) => f(&mut *handle.write()),
            None => trace!(menu = %name, "operation on unknown menu ignored"),
        }
    }

    fn read_menu<T>(&self, name: &str, f: impl FnOnce(&NavigationMenu) -> T) -> Option<T> {
        self.store.get(name).map(|handle| f(&*handle.read()))
    }
}
