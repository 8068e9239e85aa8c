//! Waypost Kernel Library
//!
//! Named navigation menus with nested child menus and pluggable rendering.
//! The `waypost` binary renders menus from a definition file.

pub mod config;
pub mod error;
pub mod menu;
pub mod theme;

pub use error::{DefinitionError, NavigationError, RenderError};
pub use menu::{
    MenuDefinitions, MenuHandle, MenuOptions, MenuRegistry, NavigationMenu, NavigationNode,
    NodeDescriptor,
};
pub use theme::{ListRenderer, Renderer, TemplateRenderer};
