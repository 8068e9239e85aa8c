//! Error types for menu mutation, rendering, and definition loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by menu mutations.
///
/// Lookups of unknown menus or node keys are absorbed as neutral results
/// (empty string, `false`, unchanged registry); only the cases below surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// A node descriptor was added without a key.
    #[error("node key must not be empty")]
    EmptyKey,

    /// A child menu was attached to a node that does not exist.
    #[error("menu '{menu}': no node with key '{key}'")]
    NodeNotFound { menu: String, key: String },
}

/// Errors raised while turning a menu into markup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A menu is attached (directly or transitively) beneath itself.
    #[error("menu '{menu}' is nested inside itself")]
    Cycle { menu: String },

    /// The Tera template failed to parse or render.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// Writing rendered markup to the output sink failed.
    #[error("failed to write rendered menu")]
    Io(#[from] std::io::Error),

    /// Failure reported by a caller-supplied renderer.
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while loading declarative menu definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read menu definitions from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML menu definitions: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON menu definitions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("menu '{menu}': {source}")]
    InvalidNode {
        menu: String,
        #[source]
        source: NavigationError,
    },
}
