use egui::Button;

use crate::SketchpadApp;
use crate::tools::ToolKind;

pub fn toolbar_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        let mut changed = false;

        ui.horizontal_wrapped(|ui| {
            if ui.button("Clear").clicked() {
                changed |= app.sketch_mut().clear();
            }

            let history = app.sketch().history();
            let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
            if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                changed |= app.sketch_mut().undo();
            }
            if ui.add_enabled(can_redo, Button::new("Redo")).clicked() {
                changed |= app.sketch_mut().redo();
            }

            ui.separator();

            let tools = app.sketch().tools().clone();
            let config = app.sketch().config();
            let marker = tools.kind == ToolKind::Marker;
            let is_thin = marker && tools.thickness == config.thin_thickness;
            let is_thick = marker && tools.thickness == config.thick_thickness;

            if ui.selectable_label(is_thin, "Thin").clicked() {
                log::info!("Thin marker selected");
                changed |= app.select_thin();
            }
            if ui.selectable_label(is_thick, "Thick").clicked() {
                log::info!("Thick marker selected");
                changed |= app.select_thick();
            }

            ui.separator();

            let stickers = app.sketch().palette().stickers().to_vec();
            for glyph in &stickers {
                let selected = tools.kind == ToolKind::Sticker && tools.sticker == *glyph;
                if ui.selectable_label(selected, glyph.as_str()).clicked() {
                    log::info!("Sticker {glyph} selected");
                    changed |= app.sketch_mut().select_sticker(glyph);
                }
            }
            if ui.button("Custom Sticker").clicked() {
                app.open_custom_sticker_dialog();
            }

            ui.separator();

            if ui.button("Export").clicked() {
                app.export();
            }
        });

        if changed {
            ctx.request_repaint();
        }
    });
}
