//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.paanini-docs/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::view::ViewState;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaaniniConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_view: Option<ViewState>,
    pub start_doc: Option<String>,
    pub docs_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LinksConfig {
    pub repository: Option<String>,
    pub registry: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/rithu453/paanini";
pub const DEFAULT_REGISTRY_URL: &str = "https://crates.io/crates/paanini-lang";
pub const CONFIG_DIR_NAME: &str = ".paanini-docs";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Outbound links shown on the Home view. Displayed as-is, never fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub repository: String,
    pub registry: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY_URL.to_string(),
            registry: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_view: ViewState,
    pub start_doc: Option<String>,
    /// `None` = use the compiled-in documents.
    pub docs_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub links: Links,
    /// Problems found while resolving, for the caller to log once a logger exists.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_view: ViewState::Home,
            start_doc: None,
            docs_file: None,
            log_level: LevelFilter::Info,
            links: Links::default(),
            warnings: Vec::new(),
        }
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub view: Option<ViewState>,
    pub doc: Option<String>,
    pub docs_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.paanini-docs/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
}

/// Returns the path to `~/.paanini-docs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.paanini-docs/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PaaniniConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PaaniniConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PaaniniConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PaaniniConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PaaniniConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PaaniniConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Paanini Docs Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_view = "home"                # "home" or "docs"
# start_doc = "intro"                # id of the first document to show
# docs_file = "docs.toml"            # Path relative to ~/.paanini-docs/ (TOML or .json)
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [links]
# repository = "https://github.com/rithu453/paanini"
# registry = "https://crates.io/crates/paanini-lang"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PaaniniConfig, cli: &CliOverrides) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Start view: CLI → env → config → default
    let start_view = cli
        .view
        .or_else(|| {
            let value = std::env::var("PAANINI_DOCS_VIEW").ok()?;
            let view = parse_view(&value);
            if view.is_none() {
                warnings.push(format!("Ignoring unknown PAANINI_DOCS_VIEW '{value}'"));
            }
            view
        })
        .or(config.general.start_view)
        .unwrap_or_default();

    let start_doc = cli
        .doc
        .clone()
        .or_else(|| config.general.start_doc.clone());

    // Docs file: CLI → env → config (relative to the config dir)
    let docs_file = cli
        .docs_file
        .clone()
        .or_else(|| std::env::var("PAANINI_DOCS_FILE").ok().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .docs_file
                .as_deref()
                .map(|file| relative_to_config_dir(Path::new(file)))
        });

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warnings.push(format!("Unknown log level '{level}', using info"));
            LevelFilter::Info
        }),
        None => LevelFilter::Info,
    };

    let defaults = Links::default();
    let links = Links {
        repository: config
            .links
            .repository
            .clone()
            .unwrap_or(defaults.repository),
        registry: config.links.registry.clone().unwrap_or(defaults.registry),
    };

    ResolvedConfig {
        start_view,
        start_doc,
        docs_file,
        log_level,
        links,
        warnings,
    }
}

fn parse_view(value: &str) -> Option<ViewState> {
    match value.trim().to_ascii_lowercase().as_str() {
        "home" => Some(ViewState::Home),
        "docs" => Some(ViewState::Docs),
        _ => None,
    }
}

fn relative_to_config_dir(file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match config_dir() {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}
