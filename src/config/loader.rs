//! Configuration loading and discovery for `portrait.toml`

use super::schema::PortraitConfig;
use crate::color::ColorError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the configuration file searched for.
pub const CONFIG_FILE_NAME: &str = "portrait.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse portrait.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
    /// A configured color could not be parsed
    #[error("Invalid color in portrait.toml: {0}")]
    Color(#[from] ColorError),
}

/// Find portrait.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_config_from(cwd)
}

/// Find portrait.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Move to parent directory
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a portrait.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate one. If no config file is found, returns the defaults.
///
/// Returns the configuration together with the file it came from, if any.
///
/// # Example
/// ```ignore
/// let (config, path) = load_config(None)?;
/// let root = path.as_deref().and_then(project_root).unwrap_or(Path::new("."));
/// let sprite_dir = resolve_path(root, &config.sprites.dir);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<(PortraitConfig, Option<PathBuf>), ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let config = load_config_file(&p)?;
            Ok((config, Some(p)))
        }
        None => {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok((PortraitConfig::default(), None))
        }
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PortraitConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PortraitConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Get the project root directory from a config file path.
///
/// Returns the parent directory of the portrait.toml file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
