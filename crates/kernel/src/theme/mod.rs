//! Menu rendering.
//!
//! Rendering is a pluggable strategy: a [`Renderer`] receives a whole menu and
//! returns markup. [`ListRenderer`] is the built-in default and
//! [`TemplateRenderer`] renders through a Tera template.

mod engine;
mod render;

pub use engine::{DEFAULT_MENU_TEMPLATE, TemplateRenderer};
pub use render::{ListRenderer, Renderer, html_escape, node_classes};
