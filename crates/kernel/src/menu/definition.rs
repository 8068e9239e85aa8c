//! Declarative menu definitions loaded from YAML or JSON.
//!
//! A definition document names menus and their nodes. Nodes refer to nested
//! menus by name through `children`; those references are resolved after
//! every menu in the document has been built, so order does not matter.
//!
//! ```yaml
//! menus:
//!   main:
//!     id: main-nav
//!     nodes:
//!       - key: products
//!         title: Products
//!         location: /products
//!         children: [products]
//!   products:
//!     nodes:
//!       - key: widgets
//!         title: Widgets
//!         location: /products/widgets
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::list::MenuOptions;
use super::node::NodeDescriptor;
use super::registry::MenuRegistry;
use crate::error::DefinitionError;

/// A document of menu definitions, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDefinitions {
    #[serde(default)]
    pub menus: IndexMap<String, MenuDefinition>,
}

/// One menu in a definition document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// CSS id for the menu wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// CSS class for the menu wrapper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
}

/// One node in a definition document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub external: bool,
    /// Names of menus (in the same document) nested beneath this node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl NodeDefinition {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor::new(self.key.as_str())
            .title(self.title.as_str())
            .location(self.location.as_str())
            .image(self.image.as_str())
            .html(self.html.as_str())
            .class(self.class.as_str())
            .active(self.active)
            .external(self.external)
    }
}

impl MenuDefinition {
    /// Node definitions by key, with a repeated key resolving to its last
    /// definition at the position of its first.
    fn effective_nodes(&self) -> IndexMap<&str, &NodeDefinition> {
        let mut nodes = IndexMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            nodes.insert(node.key.as_str(), node);
        }
        nodes
    }
}

impl MenuDefinitions {
    /// Parse definitions from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yml::from_str(source)?)
    }

    /// Parse definitions from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load definitions from a file; `.json` files are parsed as JSON,
    /// anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, DefinitionError> {
        let source = std::fs::read_to_string(path).map_err(|source| DefinitionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let definitions = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };

        debug!(path = %path.display(), menus = definitions.menus.len(), "loaded menu definitions");
        Ok(definitions)
    }
}

impl MenuRegistry {
    /// Build a registry from a definition document.
    ///
    /// Child references to menus missing from the document are skipped with
    /// a warning.
    pub fn from_definitions(definitions: &MenuDefinitions) -> Result<Self, DefinitionError> {
        let mut registry = Self::new();

        for (name, menu) in &definitions.menus {
            let options = MenuOptions {
                id: menu.id.clone(),
                class: menu.class.clone(),
                renderer: None,
            };
            let handle = registry.create(name, options);
            let mut list = handle.write();

            for node in &menu.nodes {
                list.add(node.descriptor())
                    .map_err(|source| DefinitionError::InvalidNode {
                        menu: name.clone(),
                        source,
                    })?;
            }
        }

        // Second pass: every menu exists now, so children can be resolved.
        // Only the last definition of a repeated key survived the first pass.
        for (name, menu) in &definitions.menus {
            for node in menu.effective_nodes().into_values() {
                for child_name in &node.children {
                    let Some(child) = registry.find(child_name).cloned() else {
                        warn!(
                            menu = %name,
                            key = %node.key,
                            child = %child_name,
                            "child menu not defined, skipping"
                        );
                        continue;
                    };

                    registry
                        .attach(name, &node.key, &child)
                        .map_err(|source| DefinitionError::InvalidNode {
                            menu: name.clone(),
                            source,
                        })?;
                }
            }
        }

        info!(menus = registry.len(), "built menu registry from definitions");
        Ok(registry)
    }
}
