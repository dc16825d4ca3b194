mod history;
mod marker;
mod sticker;

use egui::Pos2;

use crate::surface::Surface;

pub use history::History;
pub use marker::MarkerLine;
pub use sticker::Sticker;

/// A drawable action on the canvas.
///
/// Commands are created on pointer-down and extended while the pointer is
/// held. Once the gesture ends they are frozen in the [`History`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Freehand marker stroke
    MarkerLine(MarkerLine),
    /// Glyph stamped at a single position
    Sticker(Sticker),
}

impl Command {
    /// Feed a new pointer position into the command.
    ///
    /// Lines append the point, stickers move to it.
    pub fn extend(&mut self, pos: Pos2) {
        match self {
            Self::MarkerLine(line) => line.extend(pos),
            Self::Sticker(sticker) => sticker.extend(pos),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::MarkerLine(line) => line.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }

    /// Short name used in history log messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::MarkerLine(_) => "Marker Line",
            Self::Sticker(_) => "Sticker",
        }
    }

    pub fn as_sticker_mut(&mut self) -> Option<&mut Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<MarkerLine> for Command {
    fn from(line: MarkerLine) -> Self {
        Self::MarkerLine(line)
    }
}

impl From<Sticker> for Command {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}
