//! Spritesheet tile addressing - splits a decoded image into fixed-size tiles

use image::{imageops, RgbaImage};
use thiserror::Error;

/// Error raised while building or reading a spritesheet.
#[derive(Debug, Error)]
pub enum SpritesheetError {
    /// The source bytes are not a recognized image encoding
    #[error("failed to decode spritesheet: {0}")]
    Decode(#[from] image::ImageError),
    /// Tile size must be at least one pixel
    #[error("tile size must be positive")]
    InvalidTileSize,
    /// Tile index outside `0..count`
    #[error("tile index {index} out of range (sheet has {count} tiles)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// A decoded image viewed as a grid of `tile_size × tile_size` tiles.
///
/// Tiles are addressed by a flat index in row-major order: index `i` lives at
/// tile column `i % columns` and tile row `i / columns`. Pixels beyond the last
/// whole tile in either direction are ignored.
///
/// # Examples
///
/// ```
/// use genportrait::spritesheet::Spritesheet;
/// use image::{Rgba, RgbaImage};
///
/// // A 3-variant strip of 4x4 tiles
/// let strip = RgbaImage::from_pixel(12, 4, Rgba([255, 0, 0, 255]));
/// let sheet = Spritesheet::from_image(strip, 4).unwrap();
/// assert_eq!(sheet.tile_count(), 3);
/// assert_eq!(sheet.tile(2).dimensions(), (4, 4));
/// ```
#[derive(Debug, Clone)]
pub struct Spritesheet {
    image: RgbaImage,
    tile_size: u32,
    columns: u32,
    rows: u32,
}

impl Spritesheet {
    /// Decode encoded image bytes (PNG, GIF, ...) into a spritesheet.
    pub fn from_bytes(data: &[u8], tile_size: u32) -> Result<Self, SpritesheetError> {
        if tile_size == 0 {
            return Err(SpritesheetError::InvalidTileSize);
        }
        let image = image::load_from_memory(data)?.to_rgba8();
        Self::from_image(image, tile_size)
    }

    /// Wrap already-decoded pixels.
    pub fn from_image(image: RgbaImage, tile_size: u32) -> Result<Self, SpritesheetError> {
        if tile_size == 0 {
            return Err(SpritesheetError::InvalidTileSize);
        }
        let columns = image.width() / tile_size;
        let rows = image.height() / tile_size;
        Ok(Self { image, tile_size, columns, rows })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of whole tiles per row.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of whole tile rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of addressable tiles (`columns * rows`).
    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Copy the tile at `index` into a new image.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.tile_count()`. Use [`Spritesheet::try_tile`]
    /// when the index comes from untrusted input.
    pub fn tile(&self, index: usize) -> RgbaImage {
        let count = self.tile_count();
        assert!(index < count, "tile index {} out of range (sheet has {} tiles)", index, count);
        self.copy_tile(index)
    }

    /// Checked variant of [`Spritesheet::tile`].
    pub fn try_tile(&self, index: usize) -> Result<RgbaImage, SpritesheetError> {
        let count = self.tile_count();
        if index >= count {
            return Err(SpritesheetError::IndexOutOfRange { index, count });
        }
        Ok(self.copy_tile(index))
    }

    fn copy_tile(&self, index: usize) -> RgbaImage {
        // index < columns * rows, both u32, so the quotient and remainder fit in u32
        let col = (index % self.columns as usize) as u32;
        let row = (index / self.columns as usize) as u32;
        let x = col * self.tile_size;
        let y = row * self.tile_size;
        imageops::crop_imm(&self.image, x, y, self.tile_size, self.tile_size).to_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    /// Sheet where every tile is filled with a color derived from its index.
    fn make_sheet(columns: u32, rows: u32, tile: u32) -> RgbaImage {
        RgbaImage::from_fn(columns * tile, rows * tile, |x, y| {
            let index = (y / tile) * columns + (x / tile);
            Rgba([index as u8, (x % tile) as u8, (y % tile) as u8, 255])
        })
    }

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img.clone())
            .write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_tile_count() {
        let sheet = Spritesheet::from_image(make_sheet(4, 1, 8), 8).unwrap();
        assert_eq!(sheet.tile_count(), 4);

        let sheet = Spritesheet::from_image(make_sheet(3, 2, 8), 8).unwrap();
        assert_eq!(sheet.columns(), 3);
        assert_eq!(sheet.rows(), 2);
        assert_eq!(sheet.tile_count(), 6);
    }

    #[test]
    fn test_partial_tiles_are_discarded() {
        // 20x10 with tile size 8 -> 2 columns, 1 row
        let img = RgbaImage::new(20, 10);
        let sheet = Spritesheet::from_image(img, 8).unwrap();
        assert_eq!(sheet.tile_count(), 2);
    }

    #[test]
    fn test_sheet_smaller_than_tile_has_no_tiles() {
        let sheet = Spritesheet::from_image(RgbaImage::new(4, 4), 8).unwrap();
        assert_eq!(sheet.tile_count(), 0);
        assert!(sheet.try_tile(0).is_err());
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let result = Spritesheet::from_image(RgbaImage::new(4, 4), 0);
        assert!(matches!(result, Err(SpritesheetError::InvalidTileSize)));
    }

    #[test]
    fn test_tile_addressing_row_major() {
        let sheet = Spritesheet::from_image(make_sheet(3, 2, 4), 4).unwrap();
        for index in 0..6 {
            let tile = sheet.tile(index);
            assert_eq!(tile.dimensions(), (4, 4));
            assert_eq!(tile.get_pixel(0, 0)[0], index as u8);
            assert_eq!(*tile.get_pixel(3, 2), Rgba([index as u8, 3, 2, 255]));
        }
    }

    #[test]
    fn test_tile_is_deterministic() {
        let sheet = Spritesheet::from_image(make_sheet(2, 2, 4), 4).unwrap();
        assert_eq!(sheet.tile(3), sheet.tile(3));
    }

    #[test]
    fn test_mutating_tile_leaves_sheet_intact() {
        let sheet = Spritesheet::from_image(make_sheet(2, 1, 4), 4).unwrap();
        let before = sheet.tile(1);

        let mut tile = sheet.tile(1);
        for pixel in tile.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }

        assert_eq!(sheet.tile(1), before);
        assert_eq!(sheet.tile(0).get_pixel(0, 0)[3], 255);
    }

    #[test]
    fn test_try_tile_out_of_range() {
        let sheet = Spritesheet::from_image(make_sheet(3, 1, 4), 4).unwrap();
        match sheet.try_tile(3) {
            Err(SpritesheetError::IndexOutOfRange { index, count }) => {
                assert_eq!(index, 3);
                assert_eq!(count, 3);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other.map(|t| t.dimensions())),
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tile_out_of_range_panics() {
        let sheet = Spritesheet::from_image(make_sheet(3, 1, 4), 4).unwrap();
        let _ = sheet.tile(3);
    }

    #[test]
    fn test_from_bytes_png() {
        let img = make_sheet(4, 1, 8);
        let sheet = Spritesheet::from_bytes(&encode_png(&img), 8).unwrap();
        assert_eq!(sheet.tile_count(), 4);
        assert_eq!(sheet.tile(2), Spritesheet::from_image(img, 8).unwrap().tile(2));
    }

    #[test]
    fn test_from_bytes_garbage() {
        let result = Spritesheet::from_bytes(b"definitely not a png", 8);
        assert!(matches!(result, Err(SpritesheetError::Decode(_))));
    }
}
