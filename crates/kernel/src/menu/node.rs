//! Navigation nodes and the descriptors used to create them.

use super::handle::MenuHandle;

/// Input for adding (or replacing) a node in a menu.
///
/// Every field not set falls back to its default: empty strings, `false`,
/// and no children. Adding a descriptor over an existing key replaces the
/// whole node, so unset fields do not survive from the previous node.
#[derive(Debug, Clone, Default)]
pub struct NodeDescriptor {
    pub key: String,
    pub title: String,
    pub location: String,
    pub image: String,
    pub html: String,
    pub class: String,
    pub active: bool,
    pub external: bool,
    pub children: Vec<MenuHandle>,
}

impl NodeDescriptor {
    /// Start a descriptor for the given node key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Literal markup rendered instead of the generated link.
    ///
    /// `%title%` and `%location%` are substituted at render time.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    /// Attach a child menu beneath this node.
    pub fn child(mut self, menu: MenuHandle) -> Self {
        self.children.push(menu);
        self
    }
}

/// One entry of a navigation menu.
#[derive(Debug, Clone)]
pub struct NavigationNode {
    key: String,
    /// Display label.
    pub title: String,
    /// Link target; empty means the node is not a link.
    pub location: String,
    /// Image path; when set the node renders as an image.
    pub image: String,
    /// Markup override with `%title%` / `%location%` placeholders.
    pub html: String,
    /// Style hook appended to generated markup.
    pub class: String,
    /// Whether this node represents the current location.
    pub active: bool,
    /// Whether the link target leaves the site.
    pub external: bool,
    /// Menus rendered nested inside this node.
    pub children: Vec<MenuHandle>,
}

impl NavigationNode {
    /// The node's key within its owning menu.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The node's `html` with `%title%` and `%location%` substituted.
    pub fn substituted_html(&self) -> String {
        self.html
            .replace("%title%", &self.title)
            .replace("%location%", &self.location)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl From<NodeDescriptor> for NavigationNode {
    fn from(descriptor: NodeDescriptor) -> Self {
        Self {
            key: descriptor.key,
            title: descriptor.title,
            location: descriptor.location,
            image: descriptor.image,
            html: descriptor.html,
            class: descriptor.class,
            active: descriptor.active,
            external: descriptor.external,
            children: descriptor.children,
        }
    }
}
