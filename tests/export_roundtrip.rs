use egui::Color32;
use gridmapper::config::GridConfig;
use gridmapper::export::{
    self, export_filename, render_full_raster, MapDocument, MapFormat, RasterFormat,
};
use gridmapper::grid::{GridKind, TileMatrix};

fn square_3x2() -> (GridConfig, TileMatrix) {
    let config = GridConfig {
        kind: GridKind::Square,
        cols: 3,
        rows: 2,
        tile_size: 30.0,
        border_width: 0.0,
        ..GridConfig::default()
    };
    let tiles = TileMatrix::new(3, 2);
    (config, tiles)
}

#[test]
fn raster_uses_raw_extent_and_ignores_viewport() {
    let (config, mut tiles) = square_3x2();
    tiles.set(1, 0, Some(Color32::RED));

    let img = render_full_raster(&config, &tiles);
    assert_eq!((img.width(), img.height()), (90, 60));
    // Center of tile (1, 0).
    assert_eq!(img.get_pixel(45, 15).0, [255, 0, 0, 255]);
    // Unpainted tile shows the white background.
    assert_eq!(img.get_pixel(15, 15).0, [255, 255, 255, 255]);
}

#[test]
fn raster_border_background_shows_between_tiles() {
    let (mut config, mut tiles) = square_3x2();
    config.border_width = 2.0;
    config.border_color = Color32::BLACK;
    tiles.set(0, 0, Some(Color32::GREEN));
    tiles.set(1, 0, Some(Color32::GREEN));

    let img = render_full_raster(&config, &tiles);
    // raw extent = cols * (tile + border) + border = 3 * 32 + 2
    assert_eq!((img.width(), img.height()), (98, 66));
    // First pixel is border background.
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    // Tile 0 spans x in [2, 32); the border gap before tile 1 is [32, 34).
    assert_eq!(img.get_pixel(32, 15).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(20, 15).0, [0, 255, 0, 255]);
}

#[test]
fn hex_raster_paints_tile_centers() {
    let config = GridConfig {
        kind: "hex-flat-odd".parse().unwrap(),
        cols: 5,
        rows: 4,
        tile_size: 20.0,
        border_width: 0.0,
        ..GridConfig::default()
    };
    let mut tiles = TileMatrix::new(5, 4);
    tiles.set(2, 1, Some(Color32::BLUE));
    tiles.set(3, 0, Some(Color32::RED));

    let img = render_full_raster(&config, &tiles);
    let layout = config.layout();
    for (col, row, expected) in [(2usize, 1usize, [0, 0, 255, 255]), (3, 0, [255, 0, 0, 255])] {
        let center = layout.tile_center(col, row);
        let px = img.get_pixel(center.x.round() as u32, center.y.round() as u32);
        assert_eq!(px.0, expected, "tile ({col}, {row})");
    }
}

#[test]
fn png_encoding_produces_valid_magic() {
    let (config, mut tiles) = square_3x2();
    tiles.set(0, 0, Some(Color32::RED));
    let bytes = export::encode_raster(render_full_raster(&config, &tiles), RasterFormat::Png)
        .unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn jpeg_and_webp_encode_without_error() {
    let (config, tiles) = square_3x2();
    let img = render_full_raster(&config, &tiles);
    for format in [RasterFormat::Jpeg, RasterFormat::Webp] {
        let bytes = export::encode_raster(img.clone(), format).unwrap();
        assert!(!bytes.is_empty());
    }
}

#[test]
fn filename_carries_kind_dimensions_and_extension() {
    let (config, _) = square_3x2();
    let name = export_filename(&config, "png");
    assert!(name.starts_with("gridmap_square_3x2_"), "{name}");
    assert!(name.ends_with(".png"), "{name}");
}

#[test]
fn map_document_round_trips_tile_content() {
    let config = GridConfig {
        kind: "hex-pointy-even".parse().unwrap(),
        cols: 6,
        rows: 5,
        tile_size: 24.0,
        border_width: 1.5,
        border_color: Color32::from_rgb(0x33, 0x44, 0x55),
        ..GridConfig::default()
    };
    let mut tiles = TileMatrix::new(6, 5);
    tiles.set(0, 0, Some(Color32::from_rgb(0x22, 0x8b, 0x22)));
    tiles.set(5, 4, Some(Color32::from_rgb(0x46, 0x82, 0xb4)));

    let json = export::map_data(&config, &tiles, MapFormat::Json).unwrap();
    let doc: MapDocument = serde_json::from_str(&json).unwrap();
    let (restored_config, restored_tiles) = doc.restore().unwrap();

    assert_eq!(restored_config.kind, config.kind);
    assert_eq!(restored_config.cols, config.cols);
    assert_eq!(restored_config.rows, config.rows);
    assert_eq!(restored_config.tile_size, config.tile_size);
    assert_eq!(restored_config.border_width, config.border_width);
    assert_eq!(restored_config.border_color, config.border_color);
    assert_eq!(restored_tiles, tiles);
}

#[test]
fn map_document_drops_out_of_bounds_records() {
    let doc = MapDocument {
        grid_type: GridKind::Square,
        cols: 2,
        rows: 2,
        tile_size: 30.0,
        border_width: 0.0,
        border_color: "#000000".to_owned(),
        tiles: vec![
            export::TileRecord {
                col: 1,
                row: 1,
                color: "#ff0000".to_owned(),
            },
            export::TileRecord {
                col: 9,
                row: 9,
                color: "#00ff00".to_owned(),
            },
        ],
    };
    let (_, tiles) = doc.restore().unwrap();
    assert_eq!(tiles.painted_count(), 1);
    assert_eq!(tiles.get(1, 1), Some(Color32::RED));
}

#[test]
fn map_document_rejects_invalid_colors() {
    let doc = MapDocument {
        grid_type: GridKind::Square,
        cols: 2,
        rows: 2,
        tile_size: 30.0,
        border_width: 0.0,
        border_color: "not-a-color".to_owned(),
        tiles: vec![],
    };
    assert!(doc.restore().is_err());
}

#[test]
fn universal_vtt_export_describes_the_grid() {
    let (config, tiles) = square_3x2();
    let json = export::map_data(&config, &tiles, MapFormat::UniversalVtt).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["resolution"]["map_size"]["x"], 3);
    assert_eq!(value["resolution"]["map_size"]["y"], 2);
    assert_eq!(value["resolution"]["pixels_per_grid"], 30.0);
}

#[test]
fn interleaved_renders_do_not_change_paint_results() {
    // Rendering is read-only: the tile matrix after a paint/erase sequence
    // is identical whether or not renders happen between the operations.
    let (config, _) = square_3x2();
    let ops: [(usize, usize, Option<Color32>); 5] = [
        (0, 0, Some(Color32::RED)),
        (1, 1, Some(Color32::GREEN)),
        (0, 0, None),
        (2, 1, Some(Color32::BLUE)),
        (1, 1, Some(Color32::RED)),
    ];

    let mut plain = TileMatrix::new(3, 2);
    for (col, row, color) in ops {
        plain.set(col, row, color);
    }

    let mut interleaved = TileMatrix::new(3, 2);
    for (col, row, color) in ops {
        interleaved.set(col, row, color);
        let _ = render_full_raster(&config, &interleaved);
    }

    assert_eq!(plain, interleaved);
}

#[test]
fn export_image_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let (config, mut tiles) = square_3x2();
    tiles.set(2, 1, Some(Color32::RED));

    let path = export::export_image(&config, &tiles, RasterFormat::Png, dir.path()).unwrap();
    assert!(path.exists());
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (90, 60));
}
