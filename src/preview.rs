use egui::{Color32, Pos2};

use crate::surface::Surface;
use crate::tools::{ToolKind, ToolState};

/// Line width of the marker preview ring
const PREVIEW_RING_WIDTH: f32 = 1.0;

/// What the active tool would draw under the pointer.
///
/// Recomputed on every hover move and never stored in the history.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPreview {
    /// Open circle sized to the marker thickness
    Marker {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    /// The sticker glyph that a click would place
    Sticker {
        position: Pos2,
        glyph: String,
        size: f32,
    },
}

impl ToolPreview {
    pub fn for_tools(tools: &ToolState, pos: Pos2) -> Self {
        match tools.kind {
            ToolKind::Marker => Self::Marker {
                center: pos,
                radius: tools.thickness,
                color: tools.color,
            },
            ToolKind::Sticker => Self::Sticker {
                position: pos,
                glyph: tools.sticker.clone(),
                size: tools.sticker_size,
            },
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Marker {
                center,
                radius,
                color,
            } => surface.stroke_circle(*center, *radius, PREVIEW_RING_WIDTH, *color),
            Self::Sticker {
                position,
                glyph,
                size,
            } => surface.fill_text(*position, glyph, *size, Color32::BLACK),
        }
    }
}
