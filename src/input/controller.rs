use egui::Pos2;

use super::InputEvent;
use crate::command::{Command, History, MarkerLine, Sticker};
use crate::preview::ToolPreview;
use crate::tools::{ToolKind, ToolState};

/// The command a gesture is working on
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    /// Line being drawn, committed on release
    Marker(Command),
    /// Sticker already committed at this history index, dragged until release
    Sticker { index: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
enum GestureState {
    #[default]
    Idle,
    Drawing(Gesture),
}

/// Maps pointer events onto commands and the history.
///
/// Every handler returns `true` when the canvas needs to be redrawn.
#[derive(Debug, Default)]
pub struct InputController {
    state: GestureState,
    preview: Option<ToolPreview>,
    /// Last pointer position over the canvas, used to refresh the preview on tool changes
    hover_pos: Option<Pos2>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        tools: &ToolState,
        history: &mut History,
    ) -> bool {
        match event {
            InputEvent::PointerDown { location } => {
                if !location.is_in_canvas {
                    return false;
                }
                self.pointer_down(location.position, tools, history)
            }
            InputEvent::PointerMove { location } => {
                if self.is_drawing() || location.is_in_canvas {
                    self.pointer_move(location.position, tools, history)
                } else {
                    self.hide_preview()
                }
            }
            InputEvent::PointerUp { .. } => self.pointer_up(history),
            InputEvent::PointerLeave { .. } => {
                if self.is_drawing() {
                    false
                } else {
                    self.hide_preview()
                }
            }
        }
    }

    /// Start a gesture. Stickers are committed right away, lines on release.
    pub fn pointer_down(&mut self, pos: Pos2, tools: &ToolState, history: &mut History) -> bool {
        if self.is_drawing() {
            return false;
        }

        let gesture = match tools.kind {
            ToolKind::Marker => {
                Gesture::Marker(MarkerLine::new(pos, tools.thickness, tools.color).into())
            }
            ToolKind::Sticker => {
                let sticker = Sticker::new(pos, tools.sticker.as_str(), tools.sticker_size);
                history.commit(sticker.into());
                Gesture::Sticker {
                    index: history.committed().len() - 1,
                }
            }
        };

        log::trace!("Gesture started at {pos:?} with {:?}", tools.kind);
        self.state = GestureState::Drawing(gesture);
        true
    }

    /// Extend the current gesture, or just move the preview when idle.
    pub fn pointer_move(&mut self, pos: Pos2, tools: &ToolState, history: &mut History) -> bool {
        self.hover_pos = Some(pos);
        self.preview = Some(ToolPreview::for_tools(tools, pos));

        match &mut self.state {
            GestureState::Idle => {}
            GestureState::Drawing(Gesture::Marker(command)) => command.extend(pos),
            GestureState::Drawing(Gesture::Sticker { index }) => {
                // The sticker may have been undone mid-drag
                if history.committed().len() == *index + 1 {
                    if let Some(sticker) = history
                        .last_committed_mut()
                        .and_then(Command::as_sticker_mut)
                    {
                        sticker.extend(pos);
                    }
                }
            }
        }
        true
    }

    /// Finish the current gesture. Returns false when no gesture was active.
    pub fn pointer_up(&mut self, history: &mut History) -> bool {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => false,
            GestureState::Drawing(Gesture::Marker(command)) => {
                history.commit(command);
                true
            }
            GestureState::Drawing(Gesture::Sticker { .. }) => true,
        }
    }

    /// Rebuild the preview after a toolbar change, at the last known pointer position.
    pub fn refresh_preview(&mut self, tools: &ToolState) -> bool {
        match self.hover_pos {
            Some(pos) => {
                self.preview = Some(ToolPreview::for_tools(tools, pos));
                true
            }
            None => false,
        }
    }

    fn hide_preview(&mut self) -> bool {
        self.hover_pos = None;
        self.preview.take().is_some()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing(_))
    }

    /// The line being drawn, not yet in the history
    pub fn active_command(&self) -> Option<&Command> {
        match &self.state {
            GestureState::Drawing(Gesture::Marker(command)) => Some(command),
            _ => None,
        }
    }

    /// The hover preview, hidden while a gesture is in progress
    pub fn preview(&self) -> Option<&ToolPreview> {
        if self.is_drawing() {
            return None;
        }
        self.preview.as_ref()
    }
}
