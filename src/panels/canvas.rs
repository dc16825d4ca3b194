use egui::Color32;

use crate::SketchpadApp;
use crate::surface::PainterSurface;

pub fn canvas_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        let canvas_size = app.sketch().config().canvas_vec2();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let rect = response.rect;

        if app.handle_canvas_input(ctx, rect, response.hovered()) {
            ctx.request_repaint();
        }

        let border = ui.visuals().widgets.noninteractive.bg_stroke;
        let mut surface = PainterSurface::new(painter.clone(), rect, Color32::WHITE);
        app.sketch().render(&mut surface);
        painter.rect_stroke(rect, 0.0, border);

        let history = app.sketch().history();
        ui.label(format!(
            "{} on canvas, {} undone",
            history.committed().len(),
            history.undone().len()
        ));
    });
}
