//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the menu definition file (default: ./menus.yml).
    pub menus_path: PathBuf,

    /// Optional Tera template used instead of the built-in list renderer.
    pub template_path: Option<PathBuf>,

    /// Tracing filter directive used when RUST_LOG is unset (default: "info").
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let menus_path = env::var("WAYPOST_MENUS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("menus.yml"));

        let template_path = match env::var("WAYPOST_TEMPLATE") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            Ok(_) | Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(e).context("WAYPOST_TEMPLATE must be valid unicode"),
        };

        let log_filter = env::var("WAYPOST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            menus_path,
            template_path,
            log_filter,
        })
    }
}
