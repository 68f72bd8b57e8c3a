use egui::RichText;

use crate::app::GridMapperApp;
use crate::biome::BIOMES;
use crate::config::{self, PRESETS};
use crate::export;
use crate::grid::GridKind;
use crate::tools::Tool;
use crate::viewport::{ZOOM_OUT_STEP, ZOOM_STEP};

pub fn tools_panel(app: &mut GridMapperApp, ctx: &egui::Context) {
    egui::SidePanel::left("grid_controls")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Grid Controls");

            ui.horizontal(|ui| {
                if ui.button("🎲 Randomize").clicked() {
                    app.store.generate_random_fill();
                }
                ui.menu_button("Presets", |ui| {
                    for preset in PRESETS {
                        if ui.button(preset.name).clicked() {
                            app.store.apply_preset(preset);
                            ui.close_menu();
                        }
                    }
                });
            });
            ui.separator();

            grid_type_selector(app, ui);
            dimension_controls(app, ui);
            tile_size_controls(app, ui);
            border_controls(app, ui);
            ui.separator();

            biome_brush(app, ui);
            ui.separator();

            tool_palette(app, ui);
            ui.separator();

            export_controls(app, ui);

            if !app.hardware_accelerated {
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "No hardware acceleration: grid capped at {} tiles per axis",
                        app.max_tiles
                    ))
                    .small(),
                );
            }
            if let Some(status) = &app.status {
                ui.separator();
                ui.label(RichText::new(status).small());
            }
        });
}

fn grid_type_selector(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    let mut kind = app.store.config().kind;
    egui::ComboBox::from_label("Grid type")
        .selected_text(kind.label())
        .show_ui(ui, |ui| {
            for candidate in GridKind::ALL {
                ui.selectable_value(&mut kind, candidate, candidate.label());
            }
        });
    if kind != app.store.config().kind {
        app.store.set_kind(kind);
    }
}

fn dimension_controls(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    let max = app.max_tiles;

    let mut cols = app.store.config().cols;
    ui.add(egui::Slider::new(&mut cols, 1..=max).text("Columns"));
    if cols != app.store.config().cols {
        app.store.set_cols(cols);
    }

    let mut rows = app.store.config().rows;
    ui.add(egui::Slider::new(&mut rows, 1..=max).text("Rows"));
    if rows != app.store.config().rows {
        app.store.set_rows(rows);
    }
}

fn tile_size_controls(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    let mut tile_size = app.store.config().tile_size;
    ui.add(
        egui::Slider::new(&mut tile_size, config::MIN_TILE_SIZE..=config::MAX_TILE_SIZE)
            .text("Tile size (px)"),
    );
    if tile_size != app.store.config().tile_size {
        app.store.set_tile_size(tile_size);
    }

    let mut ppi = app.store.config().ppi;
    ui.add(egui::Slider::new(&mut ppi, config::MIN_PPI..=config::MAX_PPI).text("Pixels per inch"));
    if ppi != app.store.config().ppi {
        app.store.set_ppi(ppi);
    }
}

fn border_controls(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    let mut border_width = app.store.config().border_width;
    ui.add(egui::Slider::new(&mut border_width, 0.0..=10.0).text("Border width"));
    if border_width != app.store.config().border_width {
        app.store.set_border_width(border_width);
    }

    let mut color = app.store.config().border_color;
    ui.horizontal(|ui| {
        ui.label("Border color:");
        egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::Opaque,
        );
    });
    if color != app.store.config().border_color {
        app.store.set_border_color(color);
    }
}

fn biome_brush(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    ui.label("Biome brush");
    ui.horizontal_wrapped(|ui| {
        for (i, biome) in BIOMES.iter().enumerate() {
            let selected = app.controller.selected_biome == Some(i);
            let swatch = RichText::new(format!("■ {}", biome.name)).color(biome.color);
            if ui.selectable_label(selected, swatch).clicked() {
                app.controller.selected_biome = if selected { None } else { Some(i) };
            }
        }
    });
}

fn tool_palette(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    ui.label("Tools");
    ui.horizontal(|ui| {
        for tool in Tool::ALL {
            if ui
                .selectable_label(app.controller.tool == tool, tool.label())
                .clicked()
            {
                app.controller.tool = tool;
            }
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Zoom in").clicked() {
            app.viewport.zoom_at(app.canvas_center, ZOOM_STEP);
        }
        if ui.button("Zoom out").clicked() {
            app.viewport.zoom_at(app.canvas_center, ZOOM_OUT_STEP);
        }
        if ui.button("Reset view").clicked() {
            app.viewport.reset();
        }
        if ui.button("Reset canvas").clicked() {
            app.store.reset_canvas();
        }
    });
    ui.label(format!("Zoom: {}%", (app.viewport.zoom * 100.0).round()));
}

fn export_controls(app: &mut GridMapperApp, ui: &mut egui::Ui) {
    ui.label("Export");
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("image_format")
            .selected_text(app.image_format.extension())
            .show_ui(ui, |ui| {
                for format in export::RasterFormat::ALL {
                    ui.selectable_value(&mut app.image_format, format, format.extension());
                }
            });
        if ui.button("Export image").clicked() {
            let result = export::export_image(
                app.store.config(),
                app.store.tiles(),
                app.image_format,
                &app.export_dir,
            );
            app.status = Some(match result {
                Ok(path) => format!("Exported {}", path.display()),
                Err(err) => {
                    log::error!("image export failed: {err}");
                    format!("Image export failed: {err}")
                }
            });
        }
    });
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("map_format")
            .selected_text(app.map_format.extension())
            .show_ui(ui, |ui| {
                for format in export::MapFormat::ALL {
                    ui.selectable_value(&mut app.map_format, format, format.extension());
                }
            });
        if ui.button("Export map data").clicked() {
            let result = export::export_map_file(
                app.store.config(),
                app.store.tiles(),
                app.map_format,
                &app.export_dir,
            );
            app.status = Some(match result {
                Ok(path) => format!("Exported {}", path.display()),
                Err(err) => {
                    log::error!("map export failed: {err}");
                    format!("Map export failed: {err}")
                }
            });
        }
    });
}
