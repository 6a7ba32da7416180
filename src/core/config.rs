//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mentalitty/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.
//! None of these settings change how hard the game is.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::RngSource;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MentalittyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Frame timer rate in Hz.
    pub frame_rate: Option<u32>,
    pub tick_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RandomConfig {
    pub source: Option<RngSource>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "mentalitty.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub rng: RngSource,
    /// Seed for `RngSource::Seeded`. `None` means seed from the clock.
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub frame_interval: Duration,
    pub tick_interval: Duration,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rng: Option<RngSource>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

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

/// Returns the path to `~/.mentalitty/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mentalitty").join("config.toml"))
}

/// Load config from `~/.mentalitty/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MentalittyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MentalittyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MentalittyConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MentalittyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(MentalittyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MentalittyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# MentaliTTY Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "mentalitty.log" # Relative paths are from the working directory
# log_level = "info"          # "off", "error", "warn", "info", "debug", "trace"

# [timing]
# frame_rate = 60             # UI refresh timer, in Hz
# tick_interval_ms = 1000

# [random]
# source = "os"               # "os" (system CSPRNG) or "seeded"
# seed = 1234                 # Only used with source = "seeded"; clock if unset
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MentalittyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, env_var)
}

/// `resolve()` with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &MentalittyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // RNG source: CLI → env → config → default
    let rng = cli
        .rng
        .clone()
        .or_else(|| {
            env("MENTALITTY_RNG").and_then(|s| match RngSource::from_str(&s, true) {
                Ok(source) => Some(source),
                Err(_) => {
                    warn!("Ignoring unknown MENTALITTY_RNG value '{}'", s);
                    None
                }
            })
        })
        .or_else(|| config.random.source.clone())
        .unwrap_or_default();

    // Seed: CLI → env → config
    let seed = cli
        .seed
        .or_else(|| env("MENTALITTY_SEED").and_then(|s| s.parse().ok()))
        .or(config.random.seed);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("MENTALITTY_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .map(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env("MENTALITTY_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let frame_rate = match config.timing.frame_rate {
        Some(0) => {
            warn!("frame_rate must be positive, using {}", DEFAULT_FRAME_RATE);
            DEFAULT_FRAME_RATE
        }
        Some(rate) => rate,
        None => DEFAULT_FRAME_RATE,
    };

    let tick_interval_ms = match config.timing.tick_interval_ms {
        Some(0) => {
            warn!("tick_interval_ms must be positive, using {}", DEFAULT_TICK_INTERVAL_MS);
            DEFAULT_TICK_INTERVAL_MS
        }
        Some(ms) => ms,
        None => DEFAULT_TICK_INTERVAL_MS,
    };

    ResolvedConfig {
        rng,
        seed,
        log_file,
        log_level,
        frame_interval: Duration::from_secs(1) / frame_rate,
        tick_interval: Duration::from_millis(tick_interval_ms),
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_level(value: &str) -> LevelFilter {
    value.parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using {}", value, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}
