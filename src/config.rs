use std::fs;
use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Layout;
use crate::grid::GridKind;

pub const MIN_TILE_SIZE: f32 = 10.0;
pub const MAX_TILE_SIZE: f32 = 200.0;
pub const MIN_PPI: f32 = 10.0;
pub const MAX_PPI: f32 = 200.0;

/// Per-axis tile count caps, selected once at startup by the hardware
/// acceleration probe.
pub const MAX_TILES_BASIC: usize = 100;
pub const MAX_TILES_ACCELERATED: usize = 50_000;

/// User-facing grid settings. One instance is stored per grid kind;
/// switching kinds loads that kind's saved configuration unless manual
/// edits are pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub kind: GridKind,
    pub cols: usize,
    pub rows: usize,
    pub tile_size: f32,
    pub ppi: f32,
    pub border_width: f32,
    #[serde(with = "crate::biome::serde_hex")]
    pub border_color: Color32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            kind: GridKind::Square,
            cols: 20,
            rows: 15,
            tile_size: 30.0,
            ppi: 30.0,
            border_width: 1.0,
            border_color: Color32::BLACK,
        }
    }
}

impl GridConfig {
    pub fn default_for(kind: GridKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> Layout {
        Layout {
            kind: self.kind,
            cols: self.cols,
            rows: self.rows,
            tile_size: self.tile_size,
            border_width: self.border_width,
        }
    }
}

/// A named bundle of display settings applied atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPreset {
    pub name: &'static str,
    pub ppi: f32,
    pub tile_size: f32,
    pub cols: usize,
    pub rows: usize,
}

pub const PRESETS: &[DisplayPreset] = &[
    DisplayPreset {
        name: "Tabletop battle mat (1\" tiles)",
        ppi: 25.0,
        tile_size: 25.0,
        cols: 36,
        rows: 24,
    },
    DisplayPreset {
        name: "HD display",
        ppi: 96.0,
        tile_size: 48.0,
        cols: 40,
        rows: 22,
    },
    DisplayPreset {
        name: "Poster print",
        ppi: 100.0,
        tile_size: 50.0,
        cols: 48,
        rows: 36,
    },
];

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write configuration: {0}")]
    Write(#[from] std::io::Error),
}

/// Loads and saves one JSON configuration file per grid kind under a state
/// directory. Loads silently fall back to defaults on absence or corruption;
/// saves are best-effort and only log on failure.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    state_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    fn path_for(&self, kind: GridKind) -> PathBuf {
        self.state_dir.join(format!("{}.json", kind.tag()))
    }

    /// Loads the stored configuration for a grid kind, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load(&self, kind: GridKind) -> GridConfig {
        let path = self.path_for(kind);
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<GridConfig>(&json) {
                Ok(mut config) => {
                    // The filename is authoritative for the kind.
                    config.kind = kind;
                    config
                }
                Err(err) => {
                    log::warn!(
                        "ignoring corrupt configuration {}: {err}",
                        path.display()
                    );
                    GridConfig::default_for(kind)
                }
            },
            Err(_) => GridConfig::default_for(kind),
        }
    }

    /// Fire-and-forget save; failures are logged, never surfaced.
    pub fn save(&self, config: &GridConfig) {
        if let Err(err) = self.try_save(config) {
            log::warn!("failed to save configuration for {}: {err}", config.kind);
        }
    }

    fn try_save(&self, config: &GridConfig) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.state_dir)?;
        let json = serde_json::to_string_pretty(config)?;
        fs::write(self.path_for(config.kind), json)?;
        Ok(())
    }
}
