//! Render strategies - convert a NavigationMenu into HTML.

use crate::error::RenderError;
use crate::menu::{NavigationMenu, NavigationNode};

/// A strategy that turns a menu into markup.
///
/// Renderers receive the whole menu and are responsible for descending into
/// nested child menus themselves. Any `Fn(&NavigationMenu) -> Result<String, RenderError>`
/// closure is a renderer.
pub trait Renderer: Send + Sync {
    fn render(&self, menu: &NavigationMenu) -> Result<String, RenderError>;
}

impl<F> Renderer for F
where
    F: Fn(&NavigationMenu) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, menu: &NavigationMenu) -> Result<String, RenderError> {
        self(menu)
    }
}

/// Menus currently being rendered, outermost first.
///
/// Used to refuse rendering a menu nested beneath itself.
pub(crate) struct Ancestry {
    stack: Vec<(*const NavigationMenu, String)>,
}

impl Ancestry {
    pub(crate) fn root(menu: &NavigationMenu) -> Self {
        Self {
            stack: vec![(std::ptr::from_ref(menu), menu.key().to_string())],
        }
    }

    fn find(&self, ptr: *const NavigationMenu) -> Option<&str> {
        self.stack
            .iter()
            .find(|(p, _)| std::ptr::eq(*p, ptr))
            .map(|(_, key)| key.as_str())
    }
}

/// Render every child menu of `node` with `render_menu`, concatenated.
pub(crate) fn render_children<F>(
    node: &NavigationNode,
    ancestry: &mut Ancestry,
    mut render_menu: F,
) -> Result<String, RenderError>
where
    F: FnMut(&NavigationMenu, &mut Ancestry) -> Result<String, RenderError>,
{
    let mut html = String::new();

    for child in &node.children {
        let ptr = child.menu_ptr();
        // The ancestor is already read-locked further up the stack.
        if let Some(key) = ancestry.find(ptr) {
            return Err(RenderError::Cycle {
                menu: key.to_string(),
            });
        }

        let menu = child.read();
        ancestry.stack.push((ptr, menu.key().to_string()));
        let rendered = render_menu(&*menu, ancestry);
        ancestry.stack.pop();
        html.push_str(&rendered?);
    }

    Ok(html)
}

/// Space-separated class hooks for the node at `index` of `total`.
///
/// The node's own class comes first, followed by `first`, `last`, and
/// `active` where they apply.
pub fn node_classes(node: &NavigationNode, index: usize, total: usize) -> String {
    let mut classes: Vec<&str> = Vec::new();
    if !node.class.is_empty() {
        classes.push(&node.class);
    }
    if index == 0 {
        classes.push("first");
    }
    if index + 1 == total {
        classes.push("last");
    }
    if node.active {
        classes.push("active");
    }
    classes.join(" ")
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Default renderer producing nested `<ul>`/`<li>` markup.
///
/// Per node exactly one display strategy is used, by priority: the `html`
/// override (placeholders substituted), then the image, then a text link.
/// Nodes without a location are rendered without an anchor.
#[derive(Debug, Clone, Default)]
pub struct ListRenderer {
    _private: (),
}

impl ListRenderer {
    /// Create a new list renderer.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn render_menu(
        &self,
        menu: &NavigationMenu,
        ancestry: &mut Ancestry,
    ) -> Result<String, RenderError> {
        let mut html = format!("<ul{}>", self.wrapper_attrs(menu));

        let total = menu.len();
        for (index, node) in menu.nodes().enumerate() {
            let classes = node_classes(node, index, total);
            let children = render_children(node, ancestry, |child, ancestry| {
                self.render_menu(child, ancestry)
            })?;

            html.push_str(&format!(
                "<li{}>{}{}</li>",
                class_attr(&classes),
                self.render_node(node),
                children
            ));
        }

        html.push_str("</ul>");
        Ok(html)
    }

    /// `id` and `class` attributes for the menu wrapper.
    fn wrapper_attrs(&self, menu: &NavigationMenu) -> String {
        let mut attrs = String::new();
        if let Some(id) = menu.id().filter(|id| !id.is_empty()) {
            attrs.push_str(&format!(" id=\"{}\"", html_escape(id)));
        }
        if let Some(class) = menu.class().filter(|class| !class.is_empty()) {
            attrs.push_str(&class_attr(class));
        }
        attrs
    }

    /// Render the node's own content, excluding nested menus.
    fn render_node(&self, node: &NavigationNode) -> String {
        if !node.html.is_empty() {
            return node.substituted_html();
        }

        let inner = if node.image.is_empty() {
            format!("<span>{}</span>", html_escape(&node.title))
        } else {
            format!(
                "<img src=\"{}\" alt=\"{}\" />",
                html_escape(&node.image),
                html_escape(&node.title)
            )
        };

        if node.location.is_empty() {
            return inner;
        }

        format!(
            "<a href=\"{}\"{}>{}</a>",
            html_escape(&node.location),
            if node.external {
                " class=\"external\""
            } else {
                ""
            },
            inner
        )
    }
}

impl Renderer for ListRenderer {
    fn render(&self, menu: &NavigationMenu) -> Result<String, RenderError> {
        let mut ancestry = Ancestry::root(menu);
        self.render_menu(menu, &mut ancestry)
    }
}

fn class_attr(classes: &str) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", html_escape(classes))
    }
}
