//! Configuration for the portrait tool
//!
//! Provides types and parsing for `portrait.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, find_config_from, load_config, project_root, resolve_path, ConfigError,
    CONFIG_FILE_NAME,
};
pub use schema::*;
