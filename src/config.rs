//! Shell settings: catalog paths, grid width, prompt and output format.
//!
//! Settings come from a TOML file, then `CATALOG_*` variables, then flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for one shell session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the ingredients document
    #[serde(default = "default_ingredients_path")]
    pub ingredients_path: PathBuf,

    /// Path to the products document
    #[serde(default = "default_products_path")]
    pub products_path: PathBuf,

    /// Names per row when listing names in a grid
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,

    /// Prompt shown before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_ingredients_path() -> PathBuf {
    PathBuf::from("json/ingredients.json")
}

fn default_products_path() -> PathBuf {
    PathBuf::from("json/products.json")
}

fn default_grid_columns() -> usize {
    5
}

fn default_prompt() -> String {
    "D-H > ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingredients_path: default_ingredients_path(),
            products_path: default_products_path(),
            grid_columns: default_grid_columns(),
            prompt: default_prompt(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a catalog-shell TOML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading settings from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolves the settings file to use.
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// `./config.toml` and `<config dir>/catalog-shell/config.toml` is read,
    /// and with neither present the built-in defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        match Self::search_paths().into_iter().find(|candidate| candidate.is_file()) {
            Some(found) => Self::from_file(found),
            None => {
                debug!("No settings file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Settings files consulted by [`Config::load`], in priority order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("catalog-shell").join("config.toml"));
        }
        paths
    }

    /// Overlays `CATALOG_INGREDIENTS`, `CATALOG_PRODUCTS` and `CATALOG_FORMAT`.
    ///
    /// An unparsable `CATALOG_FORMAT` is ignored.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var("CATALOG_INGREDIENTS") {
            self.ingredients_path = PathBuf::from(path);
        }
        if let Some(path) = var("CATALOG_PRODUCTS") {
            self.products_path = PathBuf::from(path);
        }
        match var("CATALOG_FORMAT").map(|raw| raw.parse::<OutputFormat>()) {
            Some(Ok(format)) => self.format = format,
            Some(Err(e)) => debug!("Ignoring CATALOG_FORMAT: {}", e),
            None => {}
        }
        self
    }

    /// Grid width, never less than one column.
    pub fn columns(&self) -> usize {
        self.grid_columns.max(1)
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
