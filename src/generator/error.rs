//! Error types for loading sprites and generating portraits

use crate::layer::{Layer, Sheet};
use crate::spritesheet::SpritesheetError;
use thiserror::Error;

/// Error when building a generator or rendering a portrait.
#[derive(Debug, Error)]
pub enum PortraitError {
    /// A sheet's source bytes could not be turned into a spritesheet
    #[error("failed to load {sheet} spritesheet: {source}")]
    Sheet {
        sheet: Sheet,
        #[source]
        source: SpritesheetError,
    },
    /// The layer set needs a sheet the caller did not supply
    #[error("no source provided for the {0} spritesheet")]
    MissingSource(Sheet),
    /// The sheet is smaller than one tile
    #[error("{0} spritesheet contains no whole tiles")]
    EmptySheet(Sheet),
    /// Straight and curly hair must offer the same number of tiles
    #[error("hair variants differ in tile count (straight: {straight}, curly: {curly})")]
    HairVariantMismatch { straight: usize, curly: usize },
    /// A palette needed for random portraits has no colors
    #[error("{0} palette is empty")]
    EmptyPalette(&'static str),
    /// Two placeholder colors are identical, so their recolor passes would collide
    #[error("{first} and {second} placeholders share the same color")]
    PlaceholderCollision { first: &'static str, second: &'static str },
    /// A palette color equals an active placeholder; a later recolor pass would
    /// overwrite it
    #[error("{palette} palette color {color} equals the {placeholder} placeholder")]
    PaletteCollision { palette: &'static str, color: String, placeholder: &'static str },
    /// A requested color equals the placeholder of a pass that runs after its own
    #[error("{target} color equals the {placeholder} placeholder, which is recolored after it")]
    TargetCollision { target: &'static str, placeholder: &'static str },
    /// Requested tile index is not in `0..count` for its layer
    #[error("{layer} index {index} out of range (sheet has {count} tiles)")]
    IndexOutOfRange { layer: Layer, index: usize, count: usize },
}
