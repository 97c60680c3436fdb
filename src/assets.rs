//! Reading spritesheet files from disk

use crate::config::SpritesConfig;
use crate::generator::SpriteSources;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error reading a spritesheet file.
#[derive(Debug, Error)]
#[error("failed to read spritesheet '{}': {source}", .path.display())]
pub struct AssetError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read one file per sheet of `sprites.layers` from `dir`.
///
/// Only the sheets the layer set draws are read; file names come from
/// [`SpritesConfig::file_name`]. Decoding happens later, in
/// [`Generator::load`](crate::generator::Generator::load).
pub fn load_sources(dir: &Path, sprites: &SpritesConfig) -> Result<SpriteSources, AssetError> {
    let mut sources = SpriteSources::new();
    for sheet in sprites.layers.sheets() {
        let path = dir.join(sprites.file_name(sheet));
        let data = fs::read(&path).map_err(|source| AssetError { path: path.clone(), source })?;
        debug!(%sheet, path = %path.display(), bytes = data.len(), "read spritesheet");
        sources.insert(sheet, data);
    }
    Ok(sources)
}
