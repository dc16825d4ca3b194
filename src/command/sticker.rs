use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A glyph (usually an emoji) placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    /// Move the sticker so it follows the pointer.
    pub fn extend(&mut self, pos: Pos2) {
        self.position = pos;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_text(self.position, &self.glyph, self.size, Color32::BLACK);
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}
