use crate::app::GridMapperApp;

pub fn canvas_panel(app: &mut GridMapperApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        app.canvas_center = (rect.size() / 2.0).to_pos2();

        let events = app.input.collect(ctx, rect);
        app.controller
            .handle_events(&events, &mut app.store, &mut app.viewport);

        app.renderer.render(
            &painter,
            rect.min,
            app.store.config(),
            app.store.tiles(),
            &app.viewport,
        );

        response.on_hover_cursor(app.controller.cursor());
    });
}
