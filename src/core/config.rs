//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.rausku/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::gesture::SwipeThresholds;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RauskuConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub breakpoint: Option<u32>,
    pub resize_debounce_ms: Option<u64>,
    pub announce_ms: Option<u64>,
    pub swipe_min_dx: Option<f32>,
    pub swipe_max_dy: Option<f32>,
    pub scrolled_threshold: Option<u32>,
    pub anchor_margin: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TerminalConfig {
    pub px_per_column: Option<u32>,
    pub px_per_row: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BREAKPOINT: u32 = 768;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 150;
pub const DEFAULT_ANNOUNCE_MS: u64 = 1000;
pub const DEFAULT_SWIPE_MIN_DX: f32 = 50.0;
pub const DEFAULT_SWIPE_MAX_DY: f32 = 100.0;
pub const DEFAULT_SCROLLED_THRESHOLD: u32 = 50;
pub const DEFAULT_ANCHOR_MARGIN: u32 = 20;
pub const DEFAULT_PX_PER_COLUMN: u32 = 8;
pub const DEFAULT_PX_PER_ROW: u32 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Everything the navigation controller needs, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSettings {
    pub breakpoint: u32,
    pub resize_debounce: Duration,
    pub announce_delay: Duration,
    pub swipe: SwipeThresholds,
    pub scrolled_threshold: u32,
    pub anchor_margin: u32,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            resize_debounce: Duration::from_millis(DEFAULT_RESIZE_DEBOUNCE_MS),
            announce_delay: Duration::from_millis(DEFAULT_ANNOUNCE_MS),
            swipe: SwipeThresholds {
                min_dx: DEFAULT_SWIPE_MIN_DX,
                max_dy: DEFAULT_SWIPE_MAX_DY,
            },
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            anchor_margin: DEFAULT_ANCHOR_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub nav: NavSettings,
    pub px_per_column: u32,
    pub px_per_row: u32,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub breakpoint: Option<u32>,
    pub px_per_column: Option<u32>,
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

/// Returns the path to `~/.rausku/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rausku").join("config.toml"))
}

/// Load config from `~/.rausku/config.toml`, or from `explicit` when given.
///
/// A missing default file is generated (commented out) and yields
/// `RauskuConfig::default()`. A missing explicit file is an I/O error.
pub fn load_config(explicit: Option<&Path>) -> Result<RauskuConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RauskuConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RauskuConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<RauskuConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RauskuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Rausku Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [navigation]
# breakpoint = 768            # px; narrower viewports get the collapsible menu (RAUSKU_BREAKPOINT)
# resize_debounce_ms = 150
# announce_ms = 1000          # how long screen-reader announcements stay in the page
# swipe_min_dx = 50.0         # rightward travel needed to swipe the menu closed
# swipe_max_dy = 100.0        # vertical drift allowed during that swipe
# scrolled_threshold = 50     # px of scroll before the navbar gets the `scrolled` class
# anchor_margin = 20          # gap kept between the navbar and an anchor target

# [terminal]
# px_per_column = 8           # 96 columns = 768px
# px_per_row = 16
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RauskuConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_from(config, cli, std::env::var("RAUSKU_BREAKPOINT").ok())
}

fn resolve_from(
    config: &RauskuConfig,
    cli: &CliOverrides,
    env_breakpoint: Option<String>,
) -> ResolvedConfig {
    let nav = &config.navigation;

    let env_breakpoint = env_breakpoint.and_then(|raw| match raw.trim().parse::<u32>() {
        Ok(px) => Some(px),
        Err(e) => {
            warn!("Ignoring RAUSKU_BREAKPOINT={raw:?}: {e}");
            None
        }
    });

    // Breakpoint: CLI → env → config → default
    let breakpoint = cli
        .breakpoint
        .or(env_breakpoint)
        .or(nav.breakpoint)
        .unwrap_or(DEFAULT_BREAKPOINT);

    let px_per_column = cli
        .px_per_column
        .or(config.terminal.px_per_column)
        .unwrap_or(DEFAULT_PX_PER_COLUMN)
        .max(1);

    ResolvedConfig {
        nav: NavSettings {
            breakpoint,
            resize_debounce: Duration::from_millis(
                nav.resize_debounce_ms.unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS),
            ),
            announce_delay: Duration::from_millis(nav.announce_ms.unwrap_or(DEFAULT_ANNOUNCE_MS)),
            swipe: SwipeThresholds {
                min_dx: nav.swipe_min_dx.unwrap_or(DEFAULT_SWIPE_MIN_DX),
                max_dy: nav.swipe_max_dy.unwrap_or(DEFAULT_SWIPE_MAX_DY),
            },
            scrolled_threshold: nav.scrolled_threshold.unwrap_or(DEFAULT_SCROLLED_THRESHOLD),
            anchor_margin: nav.anchor_margin.unwrap_or(DEFAULT_ANCHOR_MARGIN),
        },
        px_per_column,
        px_per_row: config
            .terminal
            .px_per_row
            .unwrap_or(DEFAULT_PX_PER_ROW)
            .max(1),
    }
}
