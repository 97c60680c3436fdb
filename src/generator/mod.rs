//! Portrait generation - stacks one tile per layer and recolors placeholders
//!
//! A [`Generator`] owns one [`Spritesheet`] per sheet of its [`LayerSet`].
//! Rendering a portrait:
//!
//! 1. Composite each layer's tile onto a transparent canvas in
//!    [`DRAW_ORDER`](crate::layer::DRAW_ORDER): head, eyes, eyebrows, ears,
//!    beard, nose, hair, mouth. Later layers cover earlier ones.
//! 2. Replace the skin, eye and (when hair is drawn) hair placeholder colors
//!    with the requested colors.
//!
//! A generator is immutable after loading and can be shared between threads;
//! each call allocates its own canvas.
//!
//! # Example
//!
//! ```ignore
//! use genportrait::generator::{Generator, GeneratorConfig, SpriteSources};
//! use rand::SeedableRng;
//!
//! let generator = Generator::load(&sources, GeneratorConfig::default())?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let portrait = generator.random_with(&mut rng);
//! portrait.save("portrait.png")?;
//! ```

mod error;
mod request;
mod sources;

pub use error::PortraitError;
pub use request::{LayerIndices, PortraitRequest};
pub use sources::SpriteSources;

use crate::color::{replace_color, to_hex};
use crate::composition::composite_layers;
use crate::layer::{HairStyle, Layer, LayerSet, Sheet, DRAW_ORDER};
use crate::palettes::Palettes;
use crate::spritesheet::Spritesheet;
use image::{Rgba, RgbaImage};
use rand::Rng;
use tracing::{debug, trace};

/// Tile size of the reference artwork.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// The exact colors the artwork uses to mark recolorable regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub skin: Rgba<u8>,
    pub eye: Rgba<u8>,
    pub hair: Rgba<u8>,
}

impl Placeholders {
    /// Recolor passes run for `layer_set`, in order, as (name, placeholder).
    fn passes(&self, layer_set: LayerSet) -> Vec<(&'static str, Rgba<u8>)> {
        let mut passes = vec![("skin", self.skin), ("eye", self.eye)];
        if layer_set.has_hair() {
            passes.push(("hair", self.hair));
        }
        passes
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            skin: Rgba([0xee, 0xc3, 0x9a, 0xff]),
            eye: Rgba([0x8f, 0x56, 0x3b, 0xff]),
            hair: Rgba([0x5e, 0x3a, 0x2a, 0xff]),
        }
    }
}

/// Construction-time settings of a [`Generator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub tile_size: u32,
    pub layer_set: LayerSet,
    pub placeholders: Placeholders,
    pub palettes: Palettes,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            layer_set: LayerSet::default(),
            placeholders: Placeholders::default(),
            palettes: Palettes::default(),
        }
    }
}

impl GeneratorConfig {
    /// Settings for a generator drawing only `layer_set`.
    pub fn with_layer_set(mut self, layer_set: LayerSet) -> Self {
        self.layer_set = layer_set;
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    fn validate(&self) -> Result<(), PortraitError> {
        let mut palettes = vec![("skin", &self.palettes.skin), ("eye", &self.palettes.eyes)];
        if self.layer_set.has_hair() {
            palettes.push(("hair", &self.palettes.hair));
        }
        if let Some(&(name, _)) = palettes.iter().find(|(_, palette)| palette.is_empty()) {
            return Err(PortraitError::EmptyPalette(name));
        }

        let passes = self.placeholders.passes(self.layer_set);
        for (i, &(first, a)) in passes.iter().enumerate() {
            if let Some(&(second, _)) = passes[i + 1..].iter().find(|(_, b)| *b == a) {
                return Err(PortraitError::PlaceholderCollision { first, second });
            }
        }

        // Every pass runs on every portrait, so no palette color may be a placeholder
        for (palette, colors) in palettes {
            for color in colors.iter() {
                if let Some(&(placeholder, _)) = passes.iter().find(|(_, p)| p == color) {
                    return Err(PortraitError::PaletteCollision {
                        palette,
                        color: to_hex(*color),
                        placeholder,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Both hair variants; they share one index domain.
#[derive(Debug)]
struct HairSheets {
    straight: Spritesheet,
    curly: Spritesheet,
}

#[derive(Debug)]
struct Sheets {
    head: Spritesheet,
    eyes: Spritesheet,
    eyebrows: Spritesheet,
    ears: Spritesheet,
    beard: Option<Spritesheet>,
    nose: Spritesheet,
    hair: Option<HairSheets>,
    mouth: Spritesheet,
}

impl Sheets {
    /// Sheet drawn for `layer`, or `None` when the layer isn't loaded.
    fn get(&self, layer: Layer, style: HairStyle) -> Option<&Spritesheet> {
        match layer {
            Layer::Head => Some(&self.head),
            Layer::Eyes => Some(&self.eyes),
            Layer::Eyebrows => Some(&self.eyebrows),
            Layer::Ears => Some(&self.ears),
            Layer::Beard => self.beard.as_ref(),
            Layer::Nose => Some(&self.nose),
            Layer::Hair => self.hair.as_ref().map(|hair| match style {
                HairStyle::Straight => &hair.straight,
                HairStyle::Curly => &hair.curly,
            }),
            Layer::Mouth => Some(&self.mouth),
        }
    }
}

/// Composes portraits from layered spritesheets.
#[derive(Debug)]
pub struct Generator {
    tile_size: u32,
    layer_set: LayerSet,
    placeholders: Placeholders,
    palettes: Palettes,
    sheets: Sheets,
}

impl Generator {
    /// Decode one spritesheet per sheet of `config.layer_set`.
    ///
    /// Sheets load in draw order and the first failure is returned; no
    /// generator exists unless every sheet decoded.
    pub fn load(sources: &SpriteSources, config: GeneratorConfig) -> Result<Self, PortraitError> {
        config.validate()?;
        let tile_size = config.tile_size;
        let load = |sheet: Sheet| load_sheet(sources, sheet, tile_size);

        let head = load(Sheet::Head)?;
        let eyes = load(Sheet::Eyes)?;
        let eyebrows = load(Sheet::Eyebrows)?;
        let ears = load(Sheet::Ears)?;
        let beard = if config.layer_set.contains(Layer::Beard) {
            Some(load(Sheet::Beard)?)
        } else {
            None
        };
        let nose = load(Sheet::Nose)?;
        let hair = if config.layer_set.has_hair() {
            let straight = load(Sheet::HairStraight)?;
            let curly = load(Sheet::HairCurly)?;
            if straight.tile_count() != curly.tile_count() {
                return Err(PortraitError::HairVariantMismatch {
                    straight: straight.tile_count(),
                    curly: curly.tile_count(),
                });
            }
            Some(HairSheets { straight, curly })
        } else {
            None
        };
        let mouth = load(Sheet::Mouth)?;

        debug!(layer_set = ?config.layer_set, tile_size, "portrait generator ready");

        Ok(Self {
            tile_size,
            layer_set: config.layer_set,
            placeholders: config.placeholders,
            palettes: config.palettes,
            sheets: Sheets { head, eyes, eyebrows, ears, beard, nose, hair, mouth },
        })
    }

    /// Side length of every portrait, in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn layer_set(&self) -> LayerSet {
        self.layer_set
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    pub fn palettes(&self) -> &Palettes {
        &self.palettes
    }

    /// Number of variants available for `layer`, or `None` if it isn't drawn.
    pub fn tile_count(&self, layer: Layer) -> Option<usize> {
        self.sheets.get(layer, HairStyle::Straight).map(Spritesheet::tile_count)
    }

    /// Render a fully specified portrait.
    ///
    /// Fails with [`PortraitError::IndexOutOfRange`] if any drawn layer's
    /// index is not below its tile count. Recoloring runs skin, then eye,
    /// then hair, each pass on the previous output; a requested color equal to
    /// the placeholder of a later pass fails with
    /// [`PortraitError::TargetCollision`] instead of being recolored again.
    pub fn generate(&self, request: &PortraitRequest) -> Result<RgbaImage, PortraitError> {
        for (layer, sheet) in self.layers(request.hair_style) {
            let index = request.indices.get(layer);
            let count = sheet.tile_count();
            if index >= count {
                return Err(PortraitError::IndexOutOfRange { layer, index, count });
            }
        }

        let passes = self.placeholders.passes(self.layer_set);
        for (i, (&(target, _), color)) in passes.iter().zip(targets(request)).enumerate() {
            if let Some(&(placeholder, _)) = passes[i + 1..].iter().find(|(_, p)| *p == color) {
                return Err(PortraitError::TargetCollision { target, placeholder });
            }
        }
        Ok(self.render(request))
    }

    /// Draw a uniformly random request.
    ///
    /// Every drawn layer's index is uniform over its tiles, skin and eye
    /// colors are uniform over their palettes, and when hair is drawn the
    /// hair color is uniform over the hair palette and the style is a coin flip.
    pub fn random_request<R: Rng + ?Sized>(&self, rng: &mut R) -> PortraitRequest {
        let mut indices = LayerIndices::default();
        for (layer, sheet) in self.layers(HairStyle::Straight) {
            indices.set(layer, rng.gen_range(0..sheet.tile_count()));
        }

        let skin_color = pick(rng, &self.palettes.skin);
        let eye_color = pick(rng, &self.palettes.eyes);
        let (hair_color, hair_style) = if self.layer_set.has_hair() {
            (pick(rng, &self.palettes.hair), HairStyle::from_curly(rng.gen_bool(0.5)))
        } else {
            (self.placeholders.hair, HairStyle::Straight)
        };

        PortraitRequest { indices, hair_style, skin_color, eye_color, hair_color }
    }

    /// Render a random portrait using `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> RgbaImage {
        let request = self.random_request(rng);
        self.render(&request)
    }

    /// Render a random portrait from the thread-local generator.
    pub fn random(&self) -> RgbaImage {
        self.random_with(&mut rand::thread_rng())
    }

    /// Drawn layers with the sheet each one uses, in draw order.
    fn layers(&self, style: HairStyle) -> impl Iterator<Item = (Layer, &Spritesheet)> + '_ {
        DRAW_ORDER
            .into_iter()
            .filter_map(move |layer| self.sheets.get(layer, style).map(|sheet| (layer, sheet)))
    }

    /// Composite and recolor. Indices must already be in range.
    fn render(&self, request: &PortraitRequest) -> RgbaImage {
        trace!(?request, "rendering portrait");

        let tiles = self
            .layers(request.hair_style)
            .map(|(layer, sheet)| sheet.tile(request.indices.get(layer)));
        let canvas = composite_layers(self.tile_size, tiles);

        self.placeholders
            .passes(self.layer_set)
            .into_iter()
            .zip(targets(request))
            .fold(canvas, |canvas, ((_, from), to)| replace_color(&canvas, from, to))
    }
}

/// Requested colors in recolor pass order.
fn targets(request: &PortraitRequest) -> [Rgba<u8>; 3] {
    [request.skin_color, request.eye_color, request.hair_color]
}

fn load_sheet(
    sources: &SpriteSources,
    sheet: Sheet,
    tile_size: u32,
) -> Result<Spritesheet, PortraitError> {
    let data = sources.get(sheet).ok_or(PortraitError::MissingSource(sheet))?;
    let spritesheet = Spritesheet::from_bytes(data, tile_size)
        .map_err(|source| PortraitError::Sheet { sheet, source })?;
    if spritesheet.tile_count() == 0 {
        return Err(PortraitError::EmptySheet(sheet));
    }
    debug!(
        %sheet,
        columns = spritesheet.columns(),
        rows = spritesheet.rows(),
        tiles = spritesheet.tile_count(),
        "decoded spritesheet"
    );
    Ok(spritesheet)
}

/// Uniform pick from a palette already checked to be non-empty.
fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgba<u8>]) -> Rgba<u8> {
    palette[rng.gen_range(0..palette.len())]
}
