//! File output helpers for the demo tools.
//!
//! - `write_json_file`: generic pretty-JSON writer shared by the tools; it
//!   creates missing parent directories first.
//! - `save_heatmap_png`: write a density field as an 8-bit grayscale PNG.
use crate::fusion::DensityField;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Grayscale rendering of `field` scaled so its maximum is white. Row 0 of
/// the image is the northernmost grid row.
pub fn heatmap_image(field: &DensityField) -> GrayImage {
    let grid = field.grid();
    let scale = match field.max() {
        Some(m) if m > 0.0 => 255.0 / m,
        _ => 0.0,
    };
    let mut out = GrayImage::new(grid.columns() as u32, grid.rows() as u32);
    for row in 0..grid.rows() {
        let y = (grid.rows() - 1 - row) as u32;
        for col in 0..grid.columns() {
            let v = field.get(col, row);
            let px = if v.is_finite() {
                (v * scale).clamp(0.0, 255.0)
            } else {
                0.0
            };
            out.put_pixel(col as u32, y, Luma([px as u8]));
        }
    }
    out
}

/// Save `field` as a grayscale PNG.
pub fn save_heatmap_png(field: &DensityField, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    heatmap_image(field)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
