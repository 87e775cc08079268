use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CRF: u32 = 30;

/// Settings readable from a TOML config file. Every field is optional so the
/// file can set only what it cares about; the CLI overrides all of them.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub two_pass: Option<bool>,
    pub strict_mode: Option<bool>,
    pub cleanup: Option<bool>,
    pub crf: Option<u32>,
    pub path: Option<PathBuf>,
    /// Extra arguments spliced into the encode command, config-file only
    /// (e.g. ["-row-mt", "1", "-tile-columns", "2"]).
    pub extra_args: Option<Vec<String>>,
}

/// Immutable run-wide settings, resolved once at startup and passed by
/// reference to every operation that needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub dry_run: bool,
    pub two_pass: bool,
    pub cleanup: bool,
    pub ignore_prev_conv: bool,
    pub strict_mode: bool,
    pub path: PathBuf,
    pub crf: u32,
    pub extra_args: Vec<String>,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            dry_run: args.dry_run,
            ignore_prev_conv: args.ignore_prev_conv,
            two_pass: args.two_pass_flag().or(file.two_pass).unwrap_or(false),
            strict_mode: args.strict_mode_flag().or(file.strict_mode).unwrap_or(true),
            cleanup: args.cleanup || file.cleanup.unwrap_or(false),
            crf: args.crf.or(file.crf).unwrap_or(DEFAULT_CRF),
            path: args
                .path
                .clone()
                .or(file.path)
                .unwrap_or_else(|| PathBuf::from(".")),
            extra_args: file.extra_args.unwrap_or_default(),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("webmify.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("webmify").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
