//! Waypost CLI
//!
//! Loads menu definitions and renders menus to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use waypost_kernel::config::Config;
use waypost_kernel::{ListRenderer, MenuDefinitions, MenuRegistry, Renderer, TemplateRenderer};

#[derive(Debug, Parser)]
#[command(name = "waypost", version, about = "Render navigation menus")]
struct Cli {
    /// Menu definition file (overrides WAYPOST_MENUS)
    #[arg(long, global = true)]
    menus: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a menu to stdout.
    Render {
        /// Name of the menu to render
        menu: String,

        /// Mark a node as active (repeatable)
        #[arg(long = "active", value_name = "KEY")]
        active: Vec<String>,

        /// Clear active flags from the definition file before applying --active
        #[arg(long)]
        reset: bool,

        /// Tera template to render with (overrides WAYPOST_TEMPLATE)
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// List defined menus and their node counts.
    List,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("failed to load configuration")?;
    init_tracing(&config);

    let cli = Cli::parse();
    let menus_path = cli.menus.clone().unwrap_or_else(|| config.menus_path.clone());

    let definitions = MenuDefinitions::load(&menus_path)
        .with_context(|| format!("failed to load menus from {}", menus_path.display()))?;
    let mut registry =
        MenuRegistry::from_definitions(&definitions).context("invalid menu definitions")?;
    info!(menus = registry.len(), path = %menus_path.display(), "menus loaded");

    match cli.command {
        Command::Render {
            menu,
            active,
            reset,
            template,
        } => {
            if !registry.contains(&menu) {
                bail!("menu '{menu}' is not defined in {}", menus_path.display());
            }

            if reset {
                registry.reset_active(&menu);
            }
            for key in &active {
                registry.active(&menu, key);
            }

            let renderer: Box<dyn Renderer> = match template.or(config.template_path) {
                Some(path) => {
                    debug!(template = %path.display(), "rendering with template");
                    Box::new(
                        TemplateRenderer::from_file(&path)
                            .with_context(|| format!("failed to load {}", path.display()))?,
                    )
                }
                None => Box::new(ListRenderer::new()),
            };

            let mut stdout = std::io::stdout().lock();
            registry
                .output(&menu, renderer.as_ref(), &mut stdout)
                .with_context(|| format!("failed to render menu '{menu}'"))?;
            writeln!(stdout).context("failed to write to stdout")?;
        }
        Command::List => {
            if registry.is_empty() {
                println!("No menus defined.");
                return Ok(());
            }

            println!("{:<24} {:<8}", "MENU", "NODES");
            println!("{}", "-".repeat(33));
            for name in registry.menu_names() {
                println!("{:<24} {:<8}", name, registry.count(name));
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
