#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Gridmapper"),
        ..Default::default()
    };
    eframe::run_native(
        "gridmapper",
        native_options,
        Box::new(|cc| Ok(Box::new(gridmapper::GridMapperApp::new(cc)))),
    )
}
