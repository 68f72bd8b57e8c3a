use egui::Color32;

use crate::biome;
use crate::config::{ConfigStore, DisplayPreset, GridConfig};
use crate::grid::{GridKind, TileMatrix};

/// Owns the authoritative grid configuration and tile matrix, and tracks a
/// monotonically increasing revision so consumers can coalesce redraws: a
/// view that remembers the last revision it drew repaints at most once per
/// frame no matter how many mutations landed in between.
pub struct GridStore {
    config: GridConfig,
    tiles: TileMatrix,
    persistence: ConfigStore,
    /// Per-axis tile count cap from the startup capability probe; every
    /// path that sets cols or rows clamps against it.
    tile_cap: usize,
    manual_edits: bool,
    revision: u64,
}

impl GridStore {
    /// Loads the stored configuration for the default grid kind and fills
    /// the initial matrix with random biomes. `tile_cap` is the per-axis
    /// tile count limit chosen by the capability probe.
    pub fn new(persistence: ConfigStore, tile_cap: usize) -> Self {
        let mut config = persistence.load(GridKind::Square);
        config.cols = config.cols.clamp(1, tile_cap);
        config.rows = config.rows.clamp(1, tile_cap);
        let mut tiles = TileMatrix::new(config.cols, config.rows);
        randomize(&mut tiles);
        Self {
            config,
            tiles,
            persistence,
            tile_cap,
            manual_edits: false,
            revision: 0,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn tiles(&self) -> &TileMatrix {
        &self.tiles
    }

    /// Current change revision; bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_manual_edits(&self) -> bool {
        self.manual_edits
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Switches the grid kind. Without pending manual edits this saves the
    /// outgoing kind's configuration and loads the stored one for the new
    /// kind; with manual edits pending, the current values are kept and
    /// only the kind changes.
    pub fn set_kind(&mut self, kind: GridKind) {
        if kind == self.config.kind {
            return;
        }
        if self.manual_edits {
            self.config.kind = kind;
        } else {
            self.persistence.save(&self.config);
            self.config = self.persistence.load(kind);
            self.config.cols = self.config.cols.clamp(1, self.tile_cap);
            self.config.rows = self.config.rows.clamp(1, self.tile_cap);
        }
        self.tiles.resize(self.config.cols, self.config.rows);
        self.touch();
    }

    pub fn set_cols(&mut self, cols: usize) {
        let cols = cols.clamp(1, self.tile_cap);
        if cols == self.config.cols {
            return;
        }
        self.config.cols = cols;
        self.manual_edits = true;
        self.tiles.resize(self.config.cols, self.config.rows);
        self.touch();
    }

    pub fn set_rows(&mut self, rows: usize) {
        let rows = rows.clamp(1, self.tile_cap);
        if rows == self.config.rows {
            return;
        }
        self.config.rows = rows;
        self.manual_edits = true;
        self.tiles.resize(self.config.cols, self.config.rows);
        self.touch();
    }

    pub fn set_tile_size(&mut self, tile_size: f32) {
        if tile_size == self.config.tile_size {
            return;
        }
        self.config.tile_size = tile_size;
        self.manual_edits = true;
        self.touch();
    }

    pub fn set_ppi(&mut self, ppi: f32) {
        if ppi == self.config.ppi {
            return;
        }
        self.config.ppi = ppi;
        self.manual_edits = true;
        self.touch();
    }

    pub fn set_border_width(&mut self, border_width: f32) {
        if border_width == self.config.border_width {
            return;
        }
        self.config.border_width = border_width.max(0.0);
        self.manual_edits = true;
        self.touch();
    }

    pub fn set_border_color(&mut self, color: Color32) {
        if color == self.config.border_color {
            return;
        }
        self.config.border_color = color;
        self.manual_edits = true;
        self.touch();
    }

    /// Atomically applies a display preset and clears the manual-edit flag,
    /// so subsequent kind switches resume auto-loading stored configs.
    pub fn apply_preset(&mut self, preset: &DisplayPreset) {
        self.config.ppi = preset.ppi;
        self.config.tile_size = preset.tile_size;
        self.config.cols = preset.cols.clamp(1, self.tile_cap);
        self.config.rows = preset.rows.clamp(1, self.tile_cap);
        self.manual_edits = false;
        self.tiles.resize(self.config.cols, self.config.rows);
        self.persistence.save(&self.config);
        self.touch();
    }

    /// Overwrites every cell with a uniformly random palette color.
    pub fn generate_random_fill(&mut self) {
        randomize(&mut self.tiles);
        self.touch();
    }

    /// Clears all painted tiles; configuration is untouched.
    pub fn reset_canvas(&mut self) {
        self.tiles.clear();
        self.touch();
    }

    /// Paints or erases one cell. Out-of-bounds coordinates are ignored.
    pub fn set_tile(&mut self, col: usize, row: usize, color: Option<Color32>) {
        if self.tiles.set(col, row, color) {
            self.touch();
        }
    }

    /// Persists the current configuration under its kind's storage key.
    pub fn save_config(&self) {
        self.persistence.save(&self.config);
    }
}

fn randomize(tiles: &mut TileMatrix) {
    let mut rng = rand::thread_rng();
    for row in 0..tiles.rows() {
        for col in 0..tiles.cols() {
            tiles.set(col, row, Some(biome::random_biome_color(&mut rng)));
        }
    }
}
