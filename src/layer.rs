//! Layer categories and the fixed draw order

use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot in the portrait draw order.
///
/// Variants are declared in draw order, so `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Head,
    Eyes,
    Eyebrows,
    Ears,
    Beard,
    Nose,
    Hair,
    Mouth,
}

/// Every layer, bottom to top. Mouth is last so hair never covers it.
pub const DRAW_ORDER: [Layer; 8] = [
    Layer::Head,
    Layer::Eyes,
    Layer::Eyebrows,
    Layer::Ears,
    Layer::Beard,
    Layer::Nose,
    Layer::Hair,
    Layer::Mouth,
];

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Layer::Head => "head",
            Layer::Eyes => "eyes",
            Layer::Eyebrows => "eyebrows",
            Layer::Ears => "ears",
            Layer::Beard => "beard",
            Layer::Nose => "nose",
            Layer::Hair => "hair",
            Layer::Mouth => "mouth",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One source spritesheet. Every layer has exactly one sheet except hair,
/// which has a straight and a curly variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sheet {
    Head,
    Eyes,
    Eyebrows,
    Ears,
    Beard,
    Nose,
    HairStraight,
    HairCurly,
    Mouth,
}

impl Sheet {
    /// All sheets in draw order.
    pub const ALL: [Sheet; 9] = [
        Sheet::Head,
        Sheet::Eyes,
        Sheet::Eyebrows,
        Sheet::Ears,
        Sheet::Beard,
        Sheet::Nose,
        Sheet::HairStraight,
        Sheet::HairCurly,
        Sheet::Mouth,
    ];

    /// The sheet that backs `layer` for the given hair style.
    pub fn for_layer(layer: Layer, style: HairStyle) -> Sheet {
        match layer {
            Layer::Head => Sheet::Head,
            Layer::Eyes => Sheet::Eyes,
            Layer::Eyebrows => Sheet::Eyebrows,
            Layer::Ears => Sheet::Ears,
            Layer::Beard => Sheet::Beard,
            Layer::Nose => Sheet::Nose,
            Layer::Hair => match style {
                HairStyle::Straight => Sheet::HairStraight,
                HairStyle::Curly => Sheet::HairCurly,
            },
            Layer::Mouth => Sheet::Mouth,
        }
    }

    pub fn layer(self) -> Layer {
        match self {
            Sheet::Head => Layer::Head,
            Sheet::Eyes => Layer::Eyes,
            Sheet::Eyebrows => Layer::Eyebrows,
            Sheet::Ears => Layer::Ears,
            Sheet::Beard => Layer::Beard,
            Sheet::Nose => Layer::Nose,
            Sheet::HairStraight | Sheet::HairCurly => Layer::Hair,
            Sheet::Mouth => Layer::Mouth,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sheet::HairStraight => "hair_straight",
            Sheet::HairCurly => "hair_curly",
            other => other.layer().name(),
        }
    }

    /// File name of the reference artwork for this sheet (32px tiles, one row).
    pub fn default_file_name(self) -> &'static str {
        match self {
            Sheet::Head => "heads_32_1x4.png",
            Sheet::Eyes => "eyes_32_1x3.png",
            Sheet::Eyebrows => "eyebrows_32_1x4.png",
            Sheet::Ears => "ears_32_1x3.png",
            Sheet::Beard => "beards_32_1x4.png",
            Sheet::Nose => "noses_32_1x2.png",
            Sheet::HairStraight => "hair_straight_32_1x4.png",
            Sheet::HairCurly => "hair_curly_32_1x4.png",
            Sheet::Mouth => "mouths_32_1x4.png",
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which hair spritesheet to draw from. Both share one index domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairStyle {
    #[default]
    Straight,
    Curly,
}

impl HairStyle {
    pub fn from_curly(curly: bool) -> Self {
        if curly {
            HairStyle::Curly
        } else {
            HairStyle::Straight
        }
    }
}

/// The set of layers a generator draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerSet {
    /// Head, eyes, eyebrows, ears, nose and mouth; skin and eye recoloring only
    Basic,
    /// Basic plus beard and straight/curly hair, with hair recoloring
    #[default]
    Full,
}

impl LayerSet {
    /// Layers of this set in draw order.
    pub fn layers(self) -> impl Iterator<Item = Layer> {
        DRAW_ORDER.into_iter().filter(move |layer| self.contains(*layer))
    }

    pub fn contains(self, layer: Layer) -> bool {
        match self {
            LayerSet::Full => true,
            LayerSet::Basic => !matches!(layer, Layer::Beard | Layer::Hair),
        }
    }

    /// Sheets this set loads, in draw order.
    pub fn sheets(self) -> impl Iterator<Item = Sheet> {
        Sheet::ALL.into_iter().filter(move |sheet| self.contains(sheet.layer()))
    }

    /// Whether hair is drawn and the hair placeholder is recolored.
    pub fn has_hair(self) -> bool {
        self.contains(Layer::Hair)
    }
}
