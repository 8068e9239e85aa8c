//! A single navigation menu: an ordered mapping from node key to node.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use super::handle::MenuHandle;
use super::node::{NavigationNode, NodeDescriptor};
use crate::error::{NavigationError, RenderError};
use crate::theme::{ListRenderer, Renderer};

/// Metadata applied to a menu when it is created.
#[derive(Clone, Default)]
pub struct MenuOptions {
    /// CSS id emitted on the menu wrapper.
    pub id: Option<String>,
    /// CSS class emitted on the menu wrapper.
    pub class: Option<String>,
    /// Render strategy used when none is passed explicitly.
    pub renderer: Option<Arc<dyn Renderer>>,
}

impl MenuOptions {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

impl fmt::Debug for MenuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOptions")
            .field("id", &self.id)
            .field("class", &self.class)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// An ordered collection of navigation nodes.
///
/// Insertion order is display order. Operations addressing an unknown key
/// are no-ops or return a neutral value, except [`NavigationMenu::attach`].
pub struct NavigationMenu {
    key: String,
    id: Option<String>,
    class: Option<String>,
    nodes: IndexMap<String, NavigationNode>,
    default_renderer: Option<Arc<dyn Renderer>>,
}

impl NavigationMenu {
    /// Create an empty menu with the given name.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_options(key, MenuOptions::default())
    }

    /// Create an empty menu with id, class, and renderer metadata.
    pub fn with_options(key: impl Into<String>, options: MenuOptions) -> Self {
        Self {
            key: key.into(),
            id: options.id,
            class: options.class,
            nodes: IndexMap::new(),
            default_renderer: options.renderer,
        }
    }

    /// The menu's name in its registry.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = Some(class.into());
        self
    }

    /// Nodes in display order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NavigationNode> {
        self.nodes.values()
    }

    /// Look up a node by key.
    pub fn node(&self, key: &str) -> Option<&NavigationNode> {
        self.nodes.get(key)
    }

    /// Number of direct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node, or fully replace the node with the same key.
    ///
    /// A replaced node keeps its position in the menu.
    pub fn add(&mut self, descriptor: NodeDescriptor) -> Result<&mut Self, NavigationError> {
        if descriptor.key.is_empty() {
            return Err(NavigationError::EmptyKey);
        }

        let node = NavigationNode::from(descriptor);
        debug!(menu = %self.key, key = %node.key(), "add navigation node");
        self.nodes.insert(node.key().to_string(), node);
        Ok(self)
    }

    /// Alias of [`NavigationMenu::add`]; there is no partial merge.
    pub fn update(&mut self, descriptor: NodeDescriptor) -> Result<&mut Self, NavigationError> {
        self.add(descriptor)
    }

    /// Remove the node with the given key, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<NavigationNode> {
        let removed = self.nodes.shift_remove(key);
        if removed.is_some() {
            debug!(menu = %self.key, key = %key, "removed navigation node");
        }
        removed
    }

    /// Append a child menu beneath the node with the given key.
    pub fn attach(&mut self, key: &str, child: MenuHandle) -> Result<&mut Self, NavigationError> {
        let Some(node) = self.nodes.get_mut(key) else {
            return Err(NavigationError::NodeNotFound {
                menu: self.key.clone(),
                key: key.to_string(),
            });
        };

        node.children.push(child);
        debug!(menu = %self.key, key = %key, children = node.children.len(), "attached child menu");
        Ok(self)
    }

    /// Remove every occurrence of `child` from the node's children.
    pub fn detach(&mut self, key: &str, child: &MenuHandle) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(key) {
            let before = node.children.len();
            node.children.retain(|c| !c.ptr_eq(child));
            if node.children.len() != before {
                debug!(menu = %self.key, key = %key, "detached child menu");
            }
        }
        self
    }

    /// Mark a node as active. Other nodes are left untouched.
    pub fn active(&mut self, key: &str) -> &mut Self {
        self.set_active(key, true)
    }

    /// Mark a node as inactive.
    pub fn inactive(&mut self, key: &str) -> &mut Self {
        self.set_active(key, false)
    }

    fn set_active(&mut self, key: &str, active: bool) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(key) {
            node.active = active;
        }
        self
    }

    /// Clear the active flag on every direct node. Nested menus are not touched.
    pub fn reset_active(&mut self) -> &mut Self {
        for node in self.nodes.values_mut() {
            node.active = false;
        }
        self
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.nodes.get(key).is_some_and(|node| node.active)
    }

    /// The node's title, or an empty string.
    pub fn title(&self, key: &str) -> &str {
        self.nodes.get(key).map_or("", |node| node.title.as_str())
    }

    /// The node's image path, or an empty string.
    pub fn image(&self, key: &str) -> &str {
        self.nodes.get(key).map_or("", |node| node.image.as_str())
    }

    /// The node's raw markup override, or an empty string.
    pub fn html(&self, key: &str) -> &str {
        self.nodes.get(key).map_or("", |node| node.html.as_str())
    }

    /// Set the render strategy used by [`NavigationMenu::render_default`].
    pub fn set_default_renderer(&mut self, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.default_renderer = Some(renderer);
        self
    }

    /// Hand this menu to `renderer` and return its markup.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &R) -> Result<String, RenderError> {
        renderer.render(self)
    }

    /// Render with the menu's default renderer, or [`ListRenderer`] if none is set.
    pub fn render_default(&self) -> Result<String, RenderError> {
        match &self.default_renderer {
            Some(renderer) => self.render(renderer.as_ref()),
            None => self.render(&ListRenderer::new()),
        }
    }

    /// Render and write the markup to `sink`.
    pub fn output<R, W>(&self, renderer: &R, sink: &mut W) -> Result<(), RenderError>
    where
        R: Renderer + ?Sized,
        W: Write + ?Sized,
    {
        let html = self.render(renderer)?;
        sink.write_all(html.as_bytes())?;
        Ok(())
    }

    /// Render with the default renderer and write the markup to `sink`.
    pub fn output_default<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), RenderError> {
        let html = self.render_default()?;
        sink.write_all(html.as_bytes())?;
        Ok(())
    }
}

impl fmt::Debug for NavigationMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationMenu")
            .field("key", &self.key)
            .field("id", &self.id)
            .field("class", &self.class)
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("default_renderer", &self.default_renderer.is_some())
            .finish()
    }
}
