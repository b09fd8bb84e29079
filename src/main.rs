//! catalog-shell - Interactive browser for a product and ingredient catalog.

use anyhow::{Context, Result};
use catalog_shell::config::{Config, OutputFormat};
use catalog_shell::{Catalog, Shell, ShellContext};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "catalog-shell",
    version,
    about = "Interactive shell for browsing a product and ingredient catalog",
    long_about = "Loads ingredients and products from JSON files and offers listing, search, \
                  ingredient filtering and allergen lookup at an interactive prompt."
)]
struct Cli {
    /// Path to the ingredients JSON file
    #[arg(long)]
    ingredients: Option<PathBuf>,

    /// Path to the products JSON file
    #[arg(long)]
    products: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(path) = cli.ingredients {
        config.ingredients_path = path;
    }
    if let Some(path) = cli.products {
        config.products_path = path;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let catalog = Catalog::load(&config.ingredients_path, &config.products_path)
        .context("Failed to load catalog")?;
    info!(
        "Catalog ready: {} ingredients, {} products",
        catalog.ingredient_count(),
        catalog.product_count()
    );

    let shell = Shell::new(ShellContext::new(&catalog, &config), config.prompt.clone());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}
