use std::path::PathBuf;

use egui::Pos2;

use crate::config::{ConfigStore, MAX_TILES_ACCELERATED, MAX_TILES_BASIC};
use crate::export::{MapFormat, RasterFormat};
use crate::input::CanvasInput;
use crate::interaction::CanvasController;
use crate::panels;
use crate::renderer::GridRenderer;
use crate::store::GridStore;
use crate::viewport::Viewport;

const APP_ID: &str = "gridmapper";

pub struct GridMapperApp {
    pub(crate) store: GridStore,
    pub(crate) viewport: Viewport,
    pub(crate) renderer: GridRenderer,
    pub(crate) controller: CanvasController,
    pub(crate) input: CanvasInput,
    /// Canvas-local center of the drawing area, used by the zoom buttons.
    pub(crate) canvas_center: Pos2,
    pub(crate) hardware_accelerated: bool,
    pub(crate) max_tiles: usize,
    pub(crate) image_format: RasterFormat,
    pub(crate) map_format: MapFormat,
    pub(crate) export_dir: PathBuf,
    pub(crate) status: Option<String>,
}

impl GridMapperApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // One-time capability probe: a glow context means hardware
        // accelerated rendering, which lifts the grid dimension cap.
        let hardware_accelerated = cc.gl.is_some();
        let max_tiles = if hardware_accelerated {
            MAX_TILES_ACCELERATED
        } else {
            MAX_TILES_BASIC
        };
        log::info!(
            "hardware acceleration {}: max {} tiles per axis",
            if hardware_accelerated { "on" } else { "off" },
            max_tiles
        );

        let state_dir =
            eframe::storage_dir(APP_ID).unwrap_or_else(|| PathBuf::from(".gridmapper"));
        let export_dir = state_dir.join("exports");
        let store = GridStore::new(ConfigStore::new(&state_dir), max_tiles);

        Self {
            store,
            viewport: Viewport::default(),
            renderer: GridRenderer::new(),
            controller: CanvasController::new(),
            input: CanvasInput::new(),
            canvas_center: Pos2::ZERO,
            hardware_accelerated,
            max_tiles,
            image_format: RasterFormat::Webp,
            map_format: MapFormat::Json,
            export_dir,
            status: None,
        }
    }
}

impl eframe::App for GridMapperApp {
    /// Called by the framework to persist state before shutdown.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.store.save_config();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
