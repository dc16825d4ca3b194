use crate::command::{Command, History};
use crate::preview::ToolPreview;
use crate::surface::Surface;

/// Full redraw of the canvas.
///
/// Clears the surface, replays the committed history oldest first, then the
/// stroke still being drawn (if any). The tool preview is only shown between
/// gestures. Output depends on nothing but the arguments.
pub fn redraw(
    surface: &mut dyn Surface,
    history: &History,
    active: Option<&Command>,
    preview: Option<&ToolPreview>,
) {
    surface.clear();
    draw_history(surface, history);

    match active {
        Some(command) => command.render(surface),
        None => {
            if let Some(preview) = preview {
                preview.render(surface);
            }
        }
    }
}

/// Replay the committed commands without clearing first.
pub fn draw_history(surface: &mut dyn Surface, history: &History) {
    for command in history.committed() {
        command.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{MarkerLine, Sticker};
    use crate::surface::{DrawOp, RecordingSurface};
    use egui::{Color32, Pos2};

    fn sample_history() -> History {
        let mut history = History::new();
        let mut line = MarkerLine::new(Pos2::new(0.0, 0.0), 2.0, Color32::BLACK);
        line.extend(Pos2::new(5.0, 5.0));
        history.commit(line.into());
        history.commit(Sticker::new(Pos2::new(9.0, 9.0), "😀", 48.0).into());
        history
    }

    #[test]
    fn test_empty_redraw_clears_surface() {
        let mut surface = RecordingSurface::new();
        surface.fill_text(Pos2::ZERO, "stale", 10.0, Color32::BLACK);

        redraw(&mut surface, &History::new(), None, None);

        assert!(surface.is_blank());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_committed_draw_in_insertion_order() {
        let history = sample_history();
        let mut surface = RecordingSurface::new();
        redraw(&mut surface, &history, None, None);

        assert!(matches!(surface.ops()[0], DrawOp::StrokePath { .. }));
        assert!(matches!(surface.ops()[1], DrawOp::FillText { .. }));
    }

    #[test]
    fn test_preview_hidden_during_gesture() {
        let history = sample_history();
        let preview = ToolPreview::Marker {
            center: Pos2::new(1.0, 1.0),
            radius: 2.0,
            color: Color32::RED,
        };
        let mut active = MarkerLine::new(Pos2::new(20.0, 20.0), 2.0, Color32::RED);
        active.extend(Pos2::new(30.0, 30.0));
        let active = Command::from(active);

        let mut idle = RecordingSurface::new();
        redraw(&mut idle, &history, None, Some(&preview));
        assert!(matches!(idle.ops().last(), Some(DrawOp::StrokeCircle { .. })));

        let mut drawing = RecordingSurface::new();
        redraw(&mut drawing, &history, Some(&active), Some(&preview));
        assert_eq!(drawing.ops().len(), 3);
        assert!(
            !drawing
                .ops()
                .iter()
                .any(|op| matches!(op, DrawOp::StrokeCircle { .. }))
        );
    }

    #[test]
    fn test_redraw_is_deterministic() {
        let history = sample_history();
        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        redraw(&mut first, &history, None, None);
        redraw(&mut second, &history, None, None);
        assert_eq!(first, second);
    }
}
