//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gabble/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::layout::DEFAULT_EDITOR_ROWS;
use crate::core::responder::DEFAULT_REPLY_PREFIX;
use crate::core::session::DEFAULT_WELCOME;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GabbleConfig {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    pub welcome: Option<String>,
    pub reply_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub max_chars: Option<usize>,
    pub rows: Option<u16>,
    pub placeholder: Option<String>,
    pub blink_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MAX_CHARS: usize = 280;
pub const DEFAULT_PLACEHOLDER: &str = "Send a message...";
pub const DEFAULT_BLINK_MS: u64 = 530;
/// Blink intervals below this would flood the event queue.
const MIN_BLINK_MS: u64 = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub welcome: String,
    pub reply_prefix: String,
    pub max_chars: usize,
    pub editor_rows: u16,
    pub placeholder: String,
    pub blink_interval: Duration,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub reply_prefix: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gabble/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gabble").join("config.toml"))
}

/// Load config from `~/.gabble/config.toml`, or from `path` when given.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `GabbleConfig::default()`. An explicit `path` that doesn't exist is
/// an I/O error. A file that exists but is malformed returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<GabbleConfig, ConfigError> {
    if let Some(explicit) = path {
        return read_config(explicit);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GabbleConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GabbleConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<GabbleConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<GabbleConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Gabble Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [chat]
# welcome = "Welcome to the chat room!\nType a message and press Enter to send."
# reply_prefix = "You said: "       # Or set GABBLE_REPLY_PREFIX env var

# [editor]
# max_chars = 280
# rows = 3
# placeholder = "Send a message..."
# blink_ms = 530
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
pub fn resolve(config: &GabbleConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &GabbleConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Reply prefix: CLI → env → config → default
    let reply_prefix = cli
        .reply_prefix
        .clone()
        .or_else(|| env("GABBLE_REPLY_PREFIX"))
        .or_else(|| config.chat.reply_prefix.clone())
        .unwrap_or_else(|| DEFAULT_REPLY_PREFIX.to_string());

    let blink_ms = config
        .editor
        .blink_ms
        .unwrap_or(DEFAULT_BLINK_MS)
        .max(MIN_BLINK_MS);

    ResolvedConfig {
        welcome: config
            .chat
            .welcome
            .clone()
            .unwrap_or_else(|| DEFAULT_WELCOME.to_string()),
        reply_prefix,
        max_chars: config.editor.max_chars.unwrap_or(DEFAULT_MAX_CHARS).max(1),
        editor_rows: config.editor.rows.unwrap_or(DEFAULT_EDITOR_ROWS).max(1),
        placeholder: config
            .editor
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        blink_interval: Duration::from_millis(blink_ms),
    }
}
