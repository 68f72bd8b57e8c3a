use egui::Color32;
use gridmapper::config::{ConfigStore, GridConfig, MAX_TILES_ACCELERATED, MAX_TILES_BASIC, PRESETS};
use gridmapper::grid::GridKind;
use gridmapper::store::GridStore;

fn hex_flat_odd() -> GridKind {
    "hex-flat-odd".parse().unwrap()
}

fn store_in(dir: &std::path::Path) -> GridStore {
    GridStore::new(ConfigStore::new(dir), MAX_TILES_ACCELERATED)
}

#[test]
fn initial_mount_fills_every_tile_from_the_palette() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let tiles = store.tiles();
    assert_eq!(tiles.painted_count(), tiles.cols() * tiles.rows());
    for (_, color) in tiles.painted() {
        assert!(gridmapper::biome::BIOMES.iter().any(|b| b.color == color));
    }
}

#[test]
fn manual_edits_stick_across_grid_type_switch() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());

    store.set_cols(37);
    store.set_border_width(4.0);
    assert!(store.has_manual_edits());

    store.set_kind(hex_flat_odd());
    // Manual values persist across the type switch instead of being
    // replaced by the hex kind's stored configuration.
    assert_eq!(store.config().kind, hex_flat_odd());
    assert_eq!(store.config().cols, 37);
    assert_eq!(store.config().border_width, 4.0);
    assert!(store.has_manual_edits());
}

#[test]
fn preset_clears_manual_flag_and_resumes_auto_loading() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());

    store.set_cols(37);
    store.set_kind(hex_flat_odd());

    let preset = &PRESETS[1];
    store.apply_preset(preset);
    assert!(!store.has_manual_edits());
    assert_eq!(store.config().cols, preset.cols);
    assert_eq!(store.config().ppi, preset.ppi);

    // The square configuration was never saved while edits were pending,
    // so switching back loads defaults.
    store.set_kind(GridKind::Square);
    assert_eq!(store.config().cols, GridConfig::default().cols);

    // The hex configuration was saved (with the preset applied) when we
    // switched away from it, so it is restored on return.
    store.set_kind(hex_flat_odd());
    assert_eq!(store.config().cols, preset.cols);
    assert_eq!(store.config().rows, preset.rows);
}

#[test]
fn switching_without_manual_edits_round_trips_saved_configs() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());

    store.set_kind(hex_flat_odd());
    store.apply_preset(&PRESETS[0]);
    store.set_kind(GridKind::Square);
    store.set_kind(hex_flat_odd());
    assert_eq!(store.config().cols, PRESETS[0].cols);
    assert_eq!(store.config().tile_size, PRESETS[0].tile_size);
}

#[test]
fn resize_preserves_paint_in_the_overlap() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    store.reset_canvas();

    store.set_tile(1, 1, Some(Color32::RED));
    store.set_tile(10, 5, Some(Color32::BLUE));

    store.set_cols(5);
    assert_eq!(store.tiles().get(1, 1), Some(Color32::RED));
    assert_eq!(store.tiles().get(10, 5), None);

    store.set_cols(12);
    assert_eq!(store.tiles().get(1, 1), Some(Color32::RED));
    assert_eq!(store.tiles().get(10, 5), None);
}

#[test]
fn dimensions_are_clamped_to_the_capability_cap() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GridStore::new(ConfigStore::new(dir.path()), MAX_TILES_BASIC);

    store.set_cols(MAX_TILES_BASIC + 500);
    store.set_rows(0);
    assert_eq!(store.config().cols, MAX_TILES_BASIC);
    assert_eq!(store.config().rows, 1);
    assert_eq!(
        (store.tiles().cols(), store.tiles().rows()),
        (MAX_TILES_BASIC, 1)
    );
}

#[test]
fn reset_clears_tiles_but_not_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    store.set_tile_size(55.0);

    store.reset_canvas();
    assert_eq!(store.tiles().painted_count(), 0);
    assert_eq!(store.config().tile_size, 55.0);
    assert_eq!(
        (store.tiles().cols(), store.tiles().rows()),
        (store.config().cols, store.config().rows)
    );
}

#[test]
fn random_fill_repaints_the_whole_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    store.reset_canvas();
    assert_eq!(store.tiles().painted_count(), 0);

    store.generate_random_fill();
    let tiles = store.tiles();
    assert_eq!(tiles.painted_count(), tiles.cols() * tiles.rows());
}

#[test]
fn revision_bumps_on_mutation_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    let r0 = store.revision();

    let _ = store.config();
    let _ = store.tiles().get(0, 0);
    assert_eq!(store.revision(), r0);

    store.set_tile(0, 0, Some(Color32::GOLD));
    assert_eq!(store.revision(), r0 + 1);

    // Out-of-bounds writes are no-ops and do not signal a change.
    store.set_tile(9999, 9999, Some(Color32::GOLD));
    assert_eq!(store.revision(), r0 + 1);
}
