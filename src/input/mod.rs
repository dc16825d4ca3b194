use egui::{Context, Pos2, Rect};

mod controller;
pub use controller::InputController;

/// Where an input event happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is on the (uncovered) canvas
    pub is_in_canvas: bool,
}

impl InputLocation {
    pub fn on_canvas(position: Pos2) -> Self {
        Self {
            position,
            is_in_canvas: true,
        }
    }

    pub fn off_canvas(position: Pos2) -> Self {
        Self {
            position,
            is_in_canvas: false,
        }
    }
}

/// Pointer events delivered to the canvas, primary button only
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the button held
    PointerMove { location: InputLocation },
    /// Button was released
    PointerUp { location: InputLocation },
    /// Pointer left the application window
    PointerLeave { last_known_location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            Self::PointerDown { location }
            | Self::PointerMove { location }
            | Self::PointerUp { location } => *location,
            Self::PointerLeave {
                last_known_location,
            } => *last_known_location,
        }
    }

    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        self.location().is_in_canvas
    }
}

/// Turns raw egui pointer state into canvas-local [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_location(pos: Pos2, canvas_rect: Rect, canvas_hovered: bool) -> InputLocation {
        InputLocation {
            position: (pos - canvas_rect.min).to_pos2(),
            is_in_canvas: canvas_hovered && canvas_rect.contains(pos),
        }
    }

    /// Collect this frame's pointer events.
    ///
    /// `canvas_hovered` should be false while another window covers the canvas,
    /// so clicks there don't start strokes.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        canvas_hovered: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;

            if let Some(pos) = pointer.hover_pos() {
                let location = Self::make_location(pos, canvas_rect, canvas_hovered);

                if pointer.primary_pressed() {
                    events.push(InputEvent::PointerDown { location });
                }
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { location });
                }
                if pointer.primary_released() {
                    events.push(InputEvent::PointerUp { location });
                }

                self.last_pointer_pos = Some(pos);
            } else if let Some(last) = self.last_pointer_pos.take() {
                let last_known_location = Self::make_location(last, canvas_rect, canvas_hovered);
                if pointer.primary_released() {
                    events.push(InputEvent::PointerUp {
                        location: last_known_location,
                    });
                }
                events.push(InputEvent::PointerLeave {
                    last_known_location,
                });
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_canvas_local() {
        let rect = Rect::from_min_size(Pos2::new(40.0, 60.0), egui::vec2(256.0, 256.0));

        let inside = InputHandler::make_location(Pos2::new(50.0, 70.0), rect, true);
        assert_eq!(inside, InputLocation::on_canvas(Pos2::new(10.0, 10.0)));

        let covered = InputHandler::make_location(Pos2::new(50.0, 70.0), rect, false);
        assert!(!covered.is_in_canvas);

        let outside = InputHandler::make_location(Pos2::new(0.0, 0.0), rect, true);
        assert_eq!(outside, InputLocation::off_canvas(Pos2::new(-40.0, -60.0)));
    }
}
