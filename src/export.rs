//! Full-resolution image export and structured map-data export. Both read a
//! snapshot of the grid at call time and ignore the live viewport: the
//! raster is drawn at scale 1 with no pan or zoom applied.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use egui::Color32;
use image::{DynamicImage, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::biome;
use crate::config::GridConfig;
use crate::grid::{GridKind, TileMatrix};
use crate::raster::Raster;

pub const EXPORT_PREFIX: &str = "gridmap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Webp,
}

impl RasterFormat {
    pub const ALL: [RasterFormat; 3] = [RasterFormat::Png, RasterFormat::Jpeg, RasterFormat::Webp];

    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpg",
            RasterFormat::Webp => "webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            RasterFormat::Png => ImageFormat::Png,
            RasterFormat::Jpeg => ImageFormat::Jpeg,
            RasterFormat::Webp => ImageFormat::WebP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    /// Native interchange format; round-trips the full tile matrix.
    Json,
    /// Universal VTT flavored document; additive, not round-trippable.
    UniversalVtt,
}

impl MapFormat {
    pub const ALL: [MapFormat; 2] = [MapFormat::Json, MapFormat::UniversalVtt];

    pub fn extension(self) -> &'static str {
        match self {
            MapFormat::Json => "json",
            MapFormat::UniversalVtt => "dd2vtt",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize map data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("map data references invalid color {0:?}")]
    InvalidColor(String),
}

/// One painted cell in the native map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    pub col: usize,
    pub row: usize,
    pub color: String,
}

/// Native map interchange document: configuration plus the painted cells
/// (empty cells are omitted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub grid_type: GridKind,
    pub cols: usize,
    pub rows: usize,
    pub tile_size: f32,
    pub border_width: f32,
    pub border_color: String,
    pub tiles: Vec<TileRecord>,
}

impl MapDocument {
    pub fn snapshot(config: &GridConfig, tiles: &TileMatrix) -> Self {
        Self {
            grid_type: config.kind,
            cols: config.cols,
            rows: config.rows,
            tile_size: config.tile_size,
            border_width: config.border_width,
            border_color: biome::color_hex(config.border_color),
            tiles: tiles
                .painted()
                .map(|(coord, color)| TileRecord {
                    col: coord.col,
                    row: coord.row,
                    color: biome::color_hex(color),
                })
                .collect(),
        }
    }

    /// Rebuilds the configuration and tile matrix this document was taken
    /// from. Out-of-bounds records are dropped with a warning; invalid
    /// colors fail the import.
    pub fn restore(&self) -> Result<(GridConfig, TileMatrix), ExportError> {
        let border_color = biome::parse_hex_color(&self.border_color)
            .ok_or_else(|| ExportError::InvalidColor(self.border_color.clone()))?;
        let config = GridConfig {
            kind: self.grid_type,
            cols: self.cols.max(1),
            rows: self.rows.max(1),
            tile_size: self.tile_size,
            border_width: self.border_width.max(0.0),
            border_color,
            ..GridConfig::default()
        };
        let mut tiles = TileMatrix::new(config.cols, config.rows);
        for record in &self.tiles {
            let color = biome::parse_hex_color(&record.color)
                .ok_or_else(|| ExportError::InvalidColor(record.color.clone()))?;
            if !tiles.set(record.col, record.row, Some(color)) {
                log::warn!(
                    "dropping out-of-bounds tile ({}, {}) from map document",
                    record.col,
                    record.row
                );
            }
        }
        Ok((config, tiles))
    }
}

/// Rasterizes the grid at full native resolution (scale 1, identity
/// viewport) over a white background.
pub fn render_full_raster(config: &GridConfig, tiles: &TileMatrix) -> RgbaImage {
    let layout = config.layout();
    let dims = layout.dimensions();
    let width = dims.raw_width.round().max(1.0) as u32;
    let height = dims.raw_height.round().max(1.0) as u32;
    let mut raster = Raster::new(width, height, Color32::WHITE);

    if config.border_width > 0.0 {
        raster.fill_rect(0.0, 0.0, dims.raw_width, dims.raw_height, config.border_color);
    }

    match config.kind {
        GridKind::Square => {
            let spacing = config.tile_size + config.border_width;
            for (coord, color) in tiles.painted() {
                raster.fill_rect(
                    config.border_width + coord.col as f32 * spacing,
                    config.border_width + coord.row as f32 * spacing,
                    config.tile_size,
                    config.tile_size,
                    color,
                );
            }
        }
        GridKind::Hex { orientation, .. } => {
            let radius = config.tile_size / 2.0 - config.border_width / 2.0;
            let unit = crate::geometry::hex_unit_vertices(orientation);
            for (coord, color) in tiles.painted() {
                let center = layout.tile_center(coord.col, coord.row);
                let points: Vec<(f32, f32)> = unit
                    .iter()
                    .map(|v| (center.x + v.x * radius, center.y + v.y * radius))
                    .collect();
                raster.fill_convex_polygon(&points, color);
            }
        }
    }
    raster.into_image()
}

/// Encodes a raster to the requested format's byte stream.
pub fn encode_raster(img: RgbaImage, format: RasterFormat) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    match format {
        // JPEG has no alpha channel.
        RasterFormat::Jpeg => {
            DynamicImage::ImageRgba8(img)
                .into_rgb8()
                .write_to(&mut buf, ImageFormat::Jpeg)?;
        }
        _ => img.write_to(&mut buf, format.image_format())?,
    }
    Ok(buf.into_inner())
}

/// `<prefix>_<gridType>_<cols>x<rows>_<timestamp>.<ext>`
pub fn export_filename(config: &GridConfig, extension: &str) -> String {
    format!(
        "{}_{}_{}x{}_{}.{}",
        EXPORT_PREFIX,
        config.kind.tag(),
        config.cols,
        config.rows,
        timestamp_secs(),
        extension
    )
}

/// Renders, encodes, and writes an image export; returns the written path.
pub fn export_image(
    config: &GridConfig,
    tiles: &TileMatrix,
    format: RasterFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_raster(render_full_raster(config, tiles), format)?;
    let path = dir.join(export_filename(config, format.extension()));
    fs::create_dir_all(dir)?;
    fs::write(&path, bytes)?;
    log::info!("exported image to {}", path.display());
    Ok(path)
}

/// Serializes the grid to the requested map interchange format.
pub fn map_data(
    config: &GridConfig,
    tiles: &TileMatrix,
    format: MapFormat,
) -> Result<String, ExportError> {
    let json = match format {
        MapFormat::Json => serde_json::to_string_pretty(&MapDocument::snapshot(config, tiles))?,
        MapFormat::UniversalVtt => {
            let doc = serde_json::json!({
                "format": 0.3,
                "resolution": {
                    "map_origin": { "x": 0, "y": 0 },
                    "map_size": { "x": config.cols, "y": config.rows },
                    "pixels_per_grid": config.tile_size,
                },
                "line_of_sight": [],
                "portals": [],
                "lights": [],
                "environment": { "baked_lighting": false },
            });
            serde_json::to_string_pretty(&doc)?
        }
    };
    Ok(json)
}

/// Writes a map-data export next to the image exports.
pub fn export_map_file(
    config: &GridConfig,
    tiles: &TileMatrix,
    format: MapFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let json = map_data(config, tiles, format)?;
    let path = dir.join(export_filename(config, format.extension()));
    fs::create_dir_all(dir)?;
    fs::write(&path, json)?;
    log::info!("exported map data to {}", path.display());
    Ok(path)
}

fn timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
