//! Raw encoded image bytes for each spritesheet

use crate::layer::Sheet;
use std::collections::BTreeMap;

/// Encoded image bytes keyed by sheet.
///
/// How the bytes are obtained (embedded, read from disk, fetched) is up to
/// the caller; see [`crate::assets`] for a directory loader.
#[derive(Debug, Clone, Default)]
pub struct SpriteSources {
    sheets: BTreeMap<Sheet, Vec<u8>>,
}

impl SpriteSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`SpriteSources::insert`].
    pub fn with(mut self, sheet: Sheet, data: impl Into<Vec<u8>>) -> Self {
        self.insert(sheet, data);
        self
    }

    /// Set the bytes for `sheet`, replacing any previous source.
    pub fn insert(&mut self, sheet: Sheet, data: impl Into<Vec<u8>>) {
        self.sheets.insert(sheet, data.into());
    }

    pub fn get(&self, sheet: Sheet) -> Option<&[u8]> {
        self.sheets.get(&sheet).map(Vec::as_slice)
    }

    pub fn contains(&self, sheet: Sheet) -> bool {
        self.sheets.contains_key(&sheet)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
