use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SketchConfig;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{canvas_panel, toolbar_panel};
use crate::sketchpad::Sketchpad;

pub struct SketchpadApp {
    sketch: Sketchpad,
    input: InputHandler,
    rng: StdRng,
    /// Text of the custom sticker dialog while it is open
    custom_sticker: Option<String>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(SketchConfig::from_env_or_default())
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            sketch: Sketchpad::new(config),
            input: InputHandler::new(),
            rng: StdRng::from_entropy(),
            custom_sticker: None,
        }
    }

    pub fn sketch(&self) -> &Sketchpad {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketch
    }

    /// Feed this frame's pointer input to the model.
    pub fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
        canvas_hovered: bool,
    ) -> bool {
        let events = self.input.process_input(ctx, canvas_rect, canvas_hovered);
        let mut changed = false;
        for event in &events {
            changed |= self.sketch.handle_input(event);
        }
        changed
    }

    pub fn select_thin(&mut self) -> bool {
        self.sketch.select_thin(&mut self.rng)
    }

    pub fn select_thick(&mut self) -> bool {
        self.sketch.select_thick(&mut self.rng)
    }

    pub fn open_custom_sticker_dialog(&mut self) {
        self.custom_sticker.get_or_insert_with(String::new);
    }

    pub fn export(&self) {
        let result = self
            .sketch
            .export_png()
            .and_then(|bytes| export::save_png(&bytes, self.sketch.config()));
        if let Err(err) = result {
            log::error!("Export failed: {err}");
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> bool {
        use egui::{Key, Modifiers};

        let redo = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z));
        let undo = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z));

        let mut changed = false;
        if redo {
            changed |= self.sketch.redo();
        }
        if undo {
            changed |= self.sketch.undo();
        }
        changed
    }

    fn custom_sticker_window(&mut self, ctx: &egui::Context) {
        let Some(text) = &mut self.custom_sticker else {
            return;
        };

        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Enter your custom sticker:");
                let edit = ui.text_edit_singleline(text);
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.horizontal(|ui| {
                    submit |= ui.button("Ok").clicked();
                    cancel |= ui.button("Cancel").clicked();
                });
            });

        if submit {
            if let Some(text) = self.custom_sticker.take() {
                self.sketch.add_custom_sticker(&text);
            }
        } else if cancel {
            self.custom_sticker = None;
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.handle_shortcuts(ctx) {
            ctx.request_repaint();
        }

        toolbar_panel(self, ctx);
        canvas_panel(self, ctx);
        self.custom_sticker_window(ctx);
    }
}
