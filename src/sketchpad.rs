use rand::Rng;

use crate::command::{Command, History};
use crate::config::SketchConfig;
use crate::export::{self, ExportError};
use crate::input::{InputController, InputEvent};
use crate::preview::ToolPreview;
use crate::renderer;
use crate::surface::Surface;
use crate::tools::{StickerPalette, ToolState};

/// The drawing model: history, tool settings and the gesture in progress.
///
/// Every mutating method returns `true` when the canvas needs a redraw.
#[derive(Debug)]
pub struct Sketchpad {
    config: SketchConfig,
    history: History,
    tools: ToolState,
    palette: StickerPalette,
    controller: InputController,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            tools: ToolState::from_config(&config),
            palette: StickerPalette::new(config.stickers.clone()),
            history: History::new(),
            controller: InputController::new(),
            config,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.controller
            .handle_event(event, &self.tools, &mut self.history)
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.history.clear();
        if changed {
            log::info!("Canvas cleared");
        }
        changed
    }

    pub fn select_thin(&mut self, rng: &mut impl Rng) -> bool {
        self.tools.select_marker(self.config.thin_thickness, rng);
        self.controller.refresh_preview(&self.tools)
    }

    pub fn select_thick(&mut self, rng: &mut impl Rng) -> bool {
        self.tools.select_marker(self.config.thick_thickness, rng);
        self.controller.refresh_preview(&self.tools)
    }

    pub fn select_sticker(&mut self, glyph: &str) -> bool {
        self.tools.select_sticker(glyph);
        self.controller.refresh_preview(&self.tools)
    }

    /// Register a user-entered sticker. Blank or cancelled input changes nothing.
    pub fn add_custom_sticker(&mut self, input: &str) -> bool {
        self.palette.register(input)
    }

    /// Full redraw: committed history, the stroke in progress, then the preview.
    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::redraw(
            surface,
            &self.history,
            self.controller.active_command(),
            self.controller.preview(),
        );
    }

    /// The committed drawing as a PNG at the export resolution.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::export_png(&self.history, &self.config)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn is_drawing(&self) -> bool {
        self.controller.is_drawing()
    }

    pub fn active_command(&self) -> Option<&Command> {
        self.controller.active_command()
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.controller.preview()
    }
}
