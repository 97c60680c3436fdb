//! genportrait - procedural pixel-art character portraits
//!
//! This library provides functionality to:
//! - Cut spritesheets into fixed-size tiles
//! - Stack one tile per facial layer in a fixed draw order
//! - Recolor placeholder skin, eye and hair pixels to chosen colors
//! - Draw random, optionally seeded, portraits from built-in palettes

pub mod assets;
pub mod cli;
pub mod color;
pub mod composition;
pub mod config;
pub mod generator;
pub mod layer;
pub mod palettes;
pub mod spritesheet;

pub use generator::{Generator, GeneratorConfig, PortraitError, PortraitRequest, SpriteSources};
