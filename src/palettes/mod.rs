//! Built-in portrait palettes.
//!
//! Skin, eye and hair colors that `Generator::random` draws from. The lists
//! are plain static data; a generator references them through [`Palettes`],
//! which callers may replace with their own lists.

use image::Rgba;
use std::borrow::Cow;

/// Skin tones.
pub static SKIN_COLORS: &[Rgba<u8>] = &[
    Rgba([255, 219, 172, 255]), // PeachPuff
    Rgba([255, 205, 148, 255]), // BurlyWood
    Rgba([255, 192, 203, 255]), // Pink
    Rgba([255, 228, 196, 255]), // Bisque
    Rgba([255, 228, 225, 255]), // MistyRose
    Rgba([139, 69, 19, 255]),   // SaddleBrown
    Rgba([160, 82, 45, 255]),   // Sienna
    Rgba([210, 105, 30, 255]),  // Chocolate
    Rgba([205, 133, 63, 255]),  // Peru
    Rgba([244, 164, 96, 255]),  // SandyBrown
    Rgba([222, 184, 135, 255]), // BurlyWood
    Rgba([210, 180, 140, 255]), // Tan
    Rgba([188, 143, 143, 255]), // RosyBrown
    Rgba([205, 92, 92, 255]),   // Reddish
    Rgba([165, 42, 42, 255]),   // Brown
];

/// Eye colors.
pub static EYE_COLORS: &[Rgba<u8>] = &[
    Rgba([0, 0, 0, 255]),     // Black
    Rgba([0, 0, 255, 255]),   // Blue
    Rgba([0, 128, 0, 255]),   // Green
    Rgba([128, 0, 0, 255]),   // Maroon
    Rgba([128, 0, 128, 255]), // Purple
    Rgba([255, 0, 0, 255]),   // Red
];

/// Hair colors, natural shades first, then dyed.
pub static HAIR_COLORS: &[Rgba<u8>] = &[
    Rgba([9, 8, 6, 255]),       // Black
    Rgba([44, 34, 43, 255]),    // Off black
    Rgba([59, 48, 36, 255]),    // Dark brown
    Rgba([78, 67, 63, 255]),    // Medium dark brown
    Rgba([80, 68, 68, 255]),    // Chestnut
    Rgba([106, 78, 66, 255]),   // Light chestnut
    Rgba([85, 72, 56, 255]),    // Dark golden brown
    Rgba([167, 133, 106, 255]), // Light golden brown
    Rgba([184, 151, 120, 255]), // Dark honey blonde
    Rgba([220, 208, 186, 255]), // Bleached blonde
    Rgba([222, 188, 153, 255]), // Light ash blonde
    Rgba([151, 121, 97, 255]),  // Light ash brown
    Rgba([230, 206, 168, 255]), // Lightest golden blonde
    Rgba([229, 200, 168, 255]), // Pale golden blonde
    Rgba([165, 107, 70, 255]),  // Strawberry blonde
    Rgba([145, 85, 61, 255]),   // Light auburn
    Rgba([83, 61, 50, 255]),    // Dark auburn
    Rgba([113, 99, 90, 255]),   // Darkest gray
    Rgba([183, 166, 158, 255]), // Medium gray
    Rgba([214, 196, 194, 255]), // Light gray
    Rgba([255, 248, 240, 255]), // White
    Rgba([181, 82, 57, 255]),   // Ginger
    Rgba([141, 74, 67, 255]),   // Russet
    Rgba([255, 105, 180, 255]), // HotPink
    Rgba([65, 105, 225, 255]),  // RoyalBlue
    Rgba([50, 205, 50, 255]),   // LimeGreen
    Rgba([148, 0, 211, 255]),   // DarkViolet
];

/// The color lists a generator draws random portraits from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palettes {
    pub skin: Cow<'static, [Rgba<u8>]>,
    pub eyes: Cow<'static, [Rgba<u8>]>,
    pub hair: Cow<'static, [Rgba<u8>]>,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            skin: Cow::Borrowed(SKIN_COLORS),
            eyes: Cow::Borrowed(EYE_COLORS),
            hair: Cow::Borrowed(HAIR_COLORS),
        }
    }
}
