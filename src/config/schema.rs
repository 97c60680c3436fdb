//! Configuration schema types for `portrait.toml`
//!
//! Defines the structure and validation rules for portrait generation settings.

use crate::color::{parse_hex_color, ColorError};
use crate::generator::{GeneratorConfig, Placeholders, DEFAULT_TILE_SIZE};
use crate::layer::{LayerSet, Sheet};
use crate::palettes::Palettes;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where the spritesheets live and how they are cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpritesConfig {
    /// Directory holding the sheets, relative to the config file
    #[serde(default = "default_sprite_dir")]
    pub dir: PathBuf,
    /// Tile edge length in pixels; also the portrait size
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Which layers to draw
    #[serde(default)]
    pub layers: LayerSet,
    /// Per-sheet file name overrides, keyed by sheet (`[sprites.files]`)
    #[serde(default)]
    pub files: BTreeMap<Sheet, String>,
}

fn default_sprite_dir() -> PathBuf {
    PathBuf::from("sprites")
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl Default for SpritesConfig {
    fn default() -> Self {
        Self {
            dir: default_sprite_dir(),
            tile_size: default_tile_size(),
            layers: LayerSet::default(),
            files: BTreeMap::new(),
        }
    }
}

impl SpritesConfig {
    /// File name for `sheet`, falling back to the reference artwork's name.
    pub fn file_name(&self, sheet: Sheet) -> &str {
        self.files.get(&sheet).map(String::as_str).unwrap_or_else(|| sheet.default_file_name())
    }
}

/// Placeholder colors baked into the artwork, as hex strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholdersConfig {
    #[serde(default = "default_skin_placeholder")]
    pub skin: String,
    #[serde(default = "default_eye_placeholder")]
    pub eye: String,
    #[serde(default = "default_hair_placeholder")]
    pub hair: String,
}

fn default_skin_placeholder() -> String {
    "#EEC39A".to_string()
}

fn default_eye_placeholder() -> String {
    "#8F563B".to_string()
}

fn default_hair_placeholder() -> String {
    "#5E3A2A".to_string()
}

impl Default for PlaceholdersConfig {
    fn default() -> Self {
        Self {
            skin: default_skin_placeholder(),
            eye: default_eye_placeholder(),
            hair: default_hair_placeholder(),
        }
    }
}

/// Optional replacements for the built-in palettes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PalettesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair: Option<Vec<String>>,
}

/// Batch output settings for the `random` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the config file
    #[serde(default = "default_out")]
    pub dir: PathBuf,
    /// Number of portraits to render
    #[serde(default = "default_count")]
    pub count: usize,
    /// Base seed; portrait `i` uses `seed + i`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_out() -> PathBuf {
    PathBuf::from("portraits")
}

fn default_count() -> usize {
    4
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_out(), count: default_count(), seed: None }
    }
}

/// Root of `portrait.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortraitConfig {
    #[serde(default)]
    pub sprites: SpritesConfig,
    #[serde(default)]
    pub placeholders: PlaceholdersConfig,
    #[serde(default)]
    pub palettes: PalettesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "placeholders.skin")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "portrait.toml: '{}' {}", self.field, self.message)
    }
}

impl ConfigValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl PortraitConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.sprites.tile_size == 0 {
            errors.push(ConfigValidationError::new(
                "sprites.tile_size",
                "must be a positive integer",
            ));
        }
        if self.output.count == 0 {
            errors.push(ConfigValidationError::new("output.count", "must be a positive integer"));
        }

        // The hair placeholder and palette are only used when hair is drawn
        let has_hair = self.sprites.layers.has_hair();
        let placeholders = [
            ("placeholders.skin", &self.placeholders.skin, true),
            ("placeholders.eye", &self.placeholders.eye, true),
            ("placeholders.hair", &self.placeholders.hair, has_hair),
        ];
        let mut active: Vec<(&str, Rgba<u8>)> = Vec::new();
        for (field, value, used) in placeholders {
            match parse_hex_color(value) {
                Ok(color) if used => {
                    if let Some((other, _)) = active.iter().find(|(_, c)| *c == color) {
                        errors.push(ConfigValidationError::new(
                            field,
                            format!("must differ from {}", other),
                        ));
                    }
                    active.push((field, color));
                }
                Ok(_) => {}
                Err(e) => errors.push(ConfigValidationError::new(field, e.to_string())),
            }
        }

        // A palette entry equal to an active placeholder would be recolored again
        let palettes = [
            ("palettes.skin", &self.palettes.skin, true),
            ("palettes.eyes", &self.palettes.eyes, true),
            ("palettes.hair", &self.palettes.hair, has_hair),
        ];
        for (field, list, used) in palettes {
            let Some(list) = list else { continue };
            if used && list.is_empty() {
                errors.push(ConfigValidationError::new(field, "must contain at least one color"));
            }
            for (i, value) in list.iter().enumerate() {
                let field = format!("{}[{}]", field, i);
                match parse_hex_color(value) {
                    Ok(color) if used => {
                        if let Some((placeholder, _)) = active.iter().find(|(_, c)| *c == color) {
                            errors.push(ConfigValidationError::new(
                                field,
                                format!("must differ from {}", placeholder),
                            ));
                        }
                    }
                    Ok(_) => {}
                    Err(e) => errors.push(ConfigValidationError::new(field, e.to_string())),
                }
            }
        }

        errors
    }

    /// Build generator settings, parsing every configured color.
    pub fn generator_config(&self) -> Result<GeneratorConfig, ColorError> {
        let placeholders = Placeholders {
            skin: parse_hex_color(&self.placeholders.skin)?,
            eye: parse_hex_color(&self.placeholders.eye)?,
            hair: parse_hex_color(&self.placeholders.hair)?,
        };

        let defaults = Palettes::default();
        let palettes = Palettes {
            skin: parse_palette(self.palettes.skin.as_deref(), defaults.skin)?,
            eyes: parse_palette(self.palettes.eyes.as_deref(), defaults.eyes)?,
            hair: parse_palette(self.palettes.hair.as_deref(), defaults.hair)?,
        };

        Ok(GeneratorConfig {
            tile_size: self.sprites.tile_size,
            layer_set: self.sprites.layers,
            placeholders,
            palettes,
        })
    }
}

fn parse_palette(
    values: Option<&[String]>,
    default: Cow<'static, [Rgba<u8>]>,
) -> Result<Cow<'static, [Rgba<u8>]>, ColorError> {
    match values {
        Some(values) => {
            let colors =
                values.iter().map(|v| parse_hex_color(v)).collect::<Result<Vec<_>, _>>()?;
            Ok(Cow::Owned(colors))
        }
        None => Ok(default),
    }
}
