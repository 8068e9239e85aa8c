//! Navigation menus.
//!
//! A [`MenuRegistry`] keeps named [`NavigationMenu`]s. Each menu is an ordered
//! mapping from node key to [`NavigationNode`], and nodes may nest other
//! menus through shared [`MenuHandle`]s.

mod definition;
mod handle;
mod list;
mod node;
mod registry;

pub use definition::{MenuDefinition, MenuDefinitions, NodeDefinition};
pub use handle::MenuHandle;
pub use list::{MenuOptions, NavigationMenu};
pub use node::{NavigationNode, NodeDescriptor};
pub use registry::MenuRegistry;
