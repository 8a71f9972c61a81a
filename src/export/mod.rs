//! JSON export of a generated palette.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "name": "Triade",
//!   "colors": {
//!     "color-1": "#FF0000",
//!     "color-2": "#00FF00",
//!     "color-3": "#0000FF"
//!   },
//!   "baseColor": "#FF0000"
//! }
//! ```

use crate::color::Color;
use crate::error::EffectError;
use crate::generator::GeneratedPalette;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteExport {
    pub name: String,
    /// `color-N` keys, numbered from 1 in palette order.
    pub colors: IndexMap<String, Color>,
    pub base_color: Color,
}

impl PaletteExport {
    pub fn new(palette: &GeneratedPalette, base: Color) -> Self {
        let colors = palette
            .colors()
            .iter()
            .enumerate()
            .map(|(i, color)| (format!("color-{}", i + 1), *color))
            .collect();
        Self {
            name: palette.name().to_string(),
            colors,
            base_color: base,
        }
    }

    /// Colors in document order.
    pub fn colors(&self) -> Vec<Color> {
        self.colors.values().copied().collect()
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json(&self) -> Result<String, EffectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn file_name(&self) -> String {
        file_name(&self.name)
    }
}

/// `"Deep  Sea"` -> `"deep-sea-palette.json"`.
pub fn file_name(style_name: &str) -> String {
    let slug = style_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}-palette.json")
}

/// Read back a document written by [`save`].
pub fn parse(json: &str) -> Result<PaletteExport, EffectError> {
    Ok(serde_json::from_str(json)?)
}

/// Write the export document into `dir`, creating it if needed.
pub fn save(palette: &GeneratedPalette, base: Color, dir: &Path) -> Result<PathBuf, EffectError> {
    let doc = PaletteExport::new(palette, base);
    let raw = doc.to_json()?;

    fs::create_dir_all(dir).map_err(|source| EffectError::Export {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(doc.file_name());
    fs::write(&path, raw).map_err(|source| EffectError::Export {
        path: path.clone(),
        source,
    })?;

    tracing::info!(palette = %doc.name, path = %path.display(), "palette exported");
    Ok(path)
}
