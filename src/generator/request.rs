//! Portrait requests - one tile index per layer plus target colors

use crate::layer::{HairStyle, Layer};
use image::Rgba;

/// One tile index per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerIndices {
    pub head: usize,
    pub eyes: usize,
    pub eyebrows: usize,
    pub ears: usize,
    pub beard: usize,
    pub nose: usize,
    pub hair: usize,
    pub mouth: usize,
}

impl LayerIndices {
    pub fn get(&self, layer: Layer) -> usize {
        match layer {
            Layer::Head => self.head,
            Layer::Eyes => self.eyes,
            Layer::Eyebrows => self.eyebrows,
            Layer::Ears => self.ears,
            Layer::Beard => self.beard,
            Layer::Nose => self.nose,
            Layer::Hair => self.hair,
            Layer::Mouth => self.mouth,
        }
    }

    pub fn set(&mut self, layer: Layer, index: usize) {
        let slot = match layer {
            Layer::Head => &mut self.head,
            Layer::Eyes => &mut self.eyes,
            Layer::Eyebrows => &mut self.eyebrows,
            Layer::Ears => &mut self.ears,
            Layer::Beard => &mut self.beard,
            Layer::Nose => &mut self.nose,
            Layer::Hair => &mut self.hair,
            Layer::Mouth => &mut self.mouth,
        };
        *slot = index;
    }
}

/// Everything needed to render one portrait.
///
/// Indices and colors for layers the generator doesn't draw (beard and hair
/// on a basic generator) are ignored.
///
/// # Examples
///
/// ```
/// use genportrait::generator::PortraitRequest;
/// use genportrait::layer::{HairStyle, Layer};
/// use image::Rgba;
///
/// let request = PortraitRequest::new(
///     Rgba([255, 192, 203, 255]), // skin
///     Rgba([255, 0, 0, 255]),     // eyes
///     Rgba([59, 48, 36, 255]),    // hair
/// )
/// .with_index(Layer::Eyes, 1)
/// .with_hair_style(HairStyle::Curly);
///
/// assert_eq!(request.indices.eyes, 1);
/// assert_eq!(request.indices.head, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortraitRequest {
    pub indices: LayerIndices,
    pub hair_style: HairStyle,
    pub skin_color: Rgba<u8>,
    pub eye_color: Rgba<u8>,
    pub hair_color: Rgba<u8>,
}

impl PortraitRequest {
    /// Request with every index at 0 and straight hair.
    pub fn new(skin_color: Rgba<u8>, eye_color: Rgba<u8>, hair_color: Rgba<u8>) -> Self {
        Self {
            indices: LayerIndices::default(),
            hair_style: HairStyle::default(),
            skin_color,
            eye_color,
            hair_color,
        }
    }

    pub fn with_index(mut self, layer: Layer, index: usize) -> Self {
        self.indices.set(layer, index);
        self
    }

    pub fn with_indices(mut self, indices: LayerIndices) -> Self {
        self.indices = indices;
        self
    }

    pub fn with_hair_style(mut self, hair_style: HairStyle) -> Self {
        self.hair_style = hair_style;
        self
    }
}
