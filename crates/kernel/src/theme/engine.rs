//! Tera-backed menu renderer.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use super::render::{Ancestry, Renderer, node_classes, render_children};
use crate::error::RenderError;
use crate::menu::NavigationMenu;

/// Template used when no custom template is supplied.
///
/// Mirrors the output of [`super::ListRenderer`], but goes through Tera's
/// HTML autoescaping.
pub const DEFAULT_MENU_TEMPLATE: &str = concat!(
    "<ul{% if id %} id=\"{{ id }}\"{% endif %}{% if class %} class=\"{{ class }}\"{% endif %}>",
    "{% for node in nodes %}",
    "<li{% if node.classes %} class=\"{{ node.classes }}\"{% endif %}>",
    "{% if node.has_html %}{{ node.html | safe }}",
    "{% else %}",
    "{% if node.location %}<a href=\"{{ node.location }}\"{% if node.external %} class=\"external\"{% endif %}>{% endif %}",
    "{% if node.image %}<img src=\"{{ node.image }}\" alt=\"{{ node.title }}\" />",
    "{% else %}<span>{{ node.title }}</span>{% endif %}",
    "{% if node.location %}</a>{% endif %}",
    "{% endif %}",
    "{{ node.children | safe }}",
    "</li>",
    "{% endfor %}",
    "</ul>",
);

const DEFAULT_TEMPLATE_NAME: &str = "menu/list.html";

/// Template view of a single node.
#[derive(Debug, Serialize)]
struct NodeView<'a> {
    key: &'a str,
    title: &'a str,
    location: &'a str,
    image: &'a str,
    /// Whether the node carries a markup override, even one that
    /// substitutes to nothing.
    has_html: bool,
    /// `html` with placeholders already substituted.
    html: String,
    external: bool,
    active: bool,
    first: bool,
    last: bool,
    classes: String,
    /// Pre-rendered markup of nested child menus.
    children: String,
}

/// Renders menus through a Tera template.
///
/// The template receives `key`, `id`, `class`, and `nodes`. Each node
/// exposes `key`, `title`, `location`, `image`, `has_html`, `html`
/// (placeholders substituted), `external`, `active`, `first`, `last`, `classes`, and
/// `children` (nested menus, already rendered with the same template).
pub struct TemplateRenderer {
    tera: Tera,
    template: String,
}

impl TemplateRenderer {
    /// Create a renderer using [`DEFAULT_MENU_TEMPLATE`].
    pub fn new() -> Result<Self, RenderError> {
        Self::from_source(DEFAULT_TEMPLATE_NAME, DEFAULT_MENU_TEMPLATE)
    }

    /// Create a renderer from template source.
    ///
    /// Names ending in `.html` are autoescaped by Tera.
    pub fn from_source(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(name, source)?;
        Ok(Self {
            tera,
            template: name.to_string(),
        })
    }

    /// Create a renderer from a template file on disk.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_TEMPLATE_NAME)
            .to_string();

        let mut tera = Tera::default();
        tera.add_template_file(path, Some(&name))?;
        debug!(template = %name, path = %path.display(), "loaded menu template");

        Ok(Self {
            tera,
            template: name,
        })
    }

    /// Name of the template used for rendering.
    pub fn template_name(&self) -> &str {
        &self.template
    }

    fn render_menu(
        &self,
        menu: &NavigationMenu,
        ancestry: &mut Ancestry,
    ) -> Result<String, RenderError> {
        let total = menu.len();
        let mut nodes = Vec::with_capacity(total);

        for (index, node) in menu.nodes().enumerate() {
            let children = render_children(node, ancestry, |child, ancestry| {
                self.render_menu(child, ancestry)
            })?;

            nodes.push(NodeView {
                key: node.key(),
                title: &node.title,
                location: &node.location,
                image: &node.image,
                has_html: !node.html.is_empty(),
                html: node.substituted_html(),
                external: node.external,
                active: node.active,
                first: index == 0,
                last: index + 1 == total,
                classes: node_classes(node, index, total),
                children,
            });
        }

        let mut context = Context::new();
        context.insert("key", menu.key());
        context.insert("id", &menu.id().unwrap_or_default());
        context.insert("class", &menu.class().unwrap_or_default());
        context.insert("nodes", &nodes);

        Ok(self.tera.render(&self.template, &context)?)
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, menu: &NavigationMenu) -> Result<String, RenderError> {
        let mut ancestry = Ancestry::root(menu);
        self.render_menu(menu, &mut ancestry)
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("template", &self.template)
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
