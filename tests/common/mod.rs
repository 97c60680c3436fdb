//! Shared fixtures for integration tests.
//!
//! Builds a small but complete set of 32x32 spritesheets in memory, drawn
//! with the default placeholder colors the way the reference artwork is.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use genportrait::generator::Placeholders;
use genportrait::layer::Sheet;
use genportrait::spritesheet::Spritesheet;
use genportrait::SpriteSources;
use image::{ImageOutputFormat, Rgba, RgbaImage};

pub const TILE: u32 = 32;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const PINK: Rgba<u8> = Rgba([255, 192, 203, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);

pub fn placeholders() -> Placeholders {
    Placeholders::default()
}

/// Tiles per sheet, matching the reference file names.
pub fn tile_count(sheet: Sheet) -> u32 {
    match sheet {
        Sheet::Head | Sheet::Eyebrows | Sheet::Beard | Sheet::Mouth => 4,
        Sheet::HairStraight | Sheet::HairCurly => 4,
        Sheet::Eyes | Sheet::Ears => 3,
        Sheet::Nose => 2,
    }
}

fn fill(tile: &mut RgbaImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>, c: Rgba<u8>) {
    for y in ys {
        for x in xs.clone() {
            tile.put_pixel(x, y, c);
        }
    }
}

/// Draw tile `index` of `sheet` onto a blank tile.
fn draw_tile(sheet: Sheet, index: u32, tile: &mut RgbaImage) {
    let ph = placeholders();
    let i = index as u8;
    match sheet {
        Sheet::Head => {
            fill(tile, 6..26, 4..29, Rgba([40 + i, 20, 20, 255]));
            fill(tile, 7..25, 5..28, ph.skin);
        }
        Sheet::Eyes => {
            for x in [10, 19] {
                tile.put_pixel(x, 14, Rgba([250, 250, 250 - i, 255]));
                tile.put_pixel(x + 1, 14, ph.eye);
                tile.put_pixel(x + 2, 14, ph.eye);
            }
        }
        Sheet::Eyebrows => {
            fill(tile, 10..13, 11 + index % 2..12 + index % 2, Rgba([30, 20, 10 + i, 255]));
            fill(tile, 19..22, 11 + index % 2..12 + index % 2, Rgba([30, 20, 10 + i, 255]));
        }
        Sheet::Ears => {
            fill(tile, 3..7, 13..19, ph.skin);
            fill(tile, 25..29, 13..19, ph.skin);
            tile.put_pixel(3, 13, Rgba([60 + i, 30, 30, 255]));
            tile.put_pixel(28, 13, Rgba([60 + i, 30, 30, 255]));
        }
        Sheet::Beard => {
            if index > 0 {
                fill(tile, 9..23, 24 + index..29, ph.hair);
            }
        }
        Sheet::Nose => {
            tile.put_pixel(16, 17, Rgba([200, 120, 100 + i, 255]));
            tile.put_pixel(16, 18, ph.skin);
        }
        Sheet::HairStraight => {
            fill(tile, 5..27, 2..7 + index, ph.hair);
        }
        Sheet::HairCurly => {
            for y in 2..7 + index {
                for x in (5 + y % 2..27).step_by(2) {
                    tile.put_pixel(x, y, ph.hair);
                }
            }
        }
        Sheet::Mouth => {
            fill(tile, 13..19, 23..24, Rgba([150, 40, 40 + i, 255]));
        }
    }
}

/// Build the sheet image: tiles laid out left to right in one row.
pub fn sheet_image(sheet: Sheet) -> RgbaImage {
    let count = tile_count(sheet);
    let mut image = RgbaImage::new(TILE * count, TILE);
    for index in 0..count {
        let mut tile = RgbaImage::new(TILE, TILE);
        draw_tile(sheet, index, &mut tile);
        image::imageops::replace(&mut image, &tile, (index * TILE) as i64, 0);
    }
    image
}

pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("encoding PNG should succeed");
    bytes
}

pub fn sheet_images() -> BTreeMap<Sheet, RgbaImage> {
    Sheet::ALL.into_iter().map(|sheet| (sheet, sheet_image(sheet))).collect()
}

pub fn sheet(sheet: Sheet) -> Spritesheet {
    Spritesheet::from_image(sheet_image(sheet), TILE).expect("fixture sheet should be valid")
}

pub fn sources() -> SpriteSources {
    let mut sources = SpriteSources::new();
    for (sheet, image) in sheet_images() {
        sources.insert(sheet, encode_png(&image));
    }
    sources
}

/// Write every fixture sheet to `dir` under its default file name.
pub fn write_sprite_dir(dir: &Path) {
    std::fs::create_dir_all(dir).expect("should create sprite dir");
    for (sheet, image) in sheet_images() {
        image.save(dir.join(sheet.default_file_name())).expect("should write sheet");
    }
}
