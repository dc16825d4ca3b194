use eframe_sketchpad::surface::{DrawOp, RecordingSurface};
use eframe_sketchpad::{
    Command, History, InputController, InputEvent, InputLocation, Sketchpad, ToolKind, ToolPreview,
    ToolState,
};
use egui::{Color32, Pos2};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        location: InputLocation::on_canvas(Pos2::new(x, y)),
    }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        location: InputLocation::on_canvas(Pos2::new(x, y)),
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        location: InputLocation::on_canvas(Pos2::new(x, y)),
    }
}

fn sticker_tools(glyph: &str) -> ToolState {
    let mut tools = ToolState::default();
    tools.select_sticker(glyph);
    tools
}

#[test]
fn test_marker_gesture_commits_on_release() {
    let mut controller = InputController::new();
    let mut history = History::new();
    let tools = ToolState::default();

    assert!(controller.handle_event(&down(1.0, 1.0), &tools, &mut history));
    assert!(controller.is_drawing());
    controller.handle_event(&drag(2.0, 2.0), &tools, &mut history);
    controller.handle_event(&drag(3.0, 3.0), &tools, &mut history);

    // Nothing is committed while the button is held
    assert!(history.committed().is_empty());
    match controller.active_command() {
        Some(Command::MarkerLine(line)) => assert_eq!(line.points().len(), 3),
        other => panic!("expected a line in progress, got {other:?}"),
    }

    assert!(controller.handle_event(&up(3.0, 3.0), &tools, &mut history));
    assert!(!controller.is_drawing());
    assert!(controller.active_command().is_none());

    match history.committed() {
        [Command::MarkerLine(line)] => {
            assert_eq!(
                line.points(),
                &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0), Pos2::new(3.0, 3.0)]
            );
            assert_eq!(line.thickness(), tools.thickness);
            assert_eq!(line.color(), tools.color);
        }
        other => panic!("unexpected history {other:?}"),
    }
}

#[test]
fn test_sticker_commits_on_down_and_follows_drag() {
    let mut controller = InputController::new();
    let mut history = History::new();
    let tools = sticker_tools("🐱");

    controller.handle_event(&down(10.0, 10.0), &tools, &mut history);
    assert_eq!(history.committed().len(), 1);

    controller.handle_event(&drag(20.0, 20.0), &tools, &mut history);
    controller.handle_event(&up(20.0, 20.0), &tools, &mut history);

    match history.committed() {
        [Command::Sticker(sticker)] => {
            assert_eq!(sticker.position(), Pos2::new(20.0, 20.0));
            assert_eq!(sticker.glyph(), "🐱");
        }
        other => panic!("unexpected history {other:?}"),
    }
}

#[test]
fn test_sticker_is_frozen_after_release() {
    let mut controller = InputController::new();
    let mut history = History::new();
    let tools = sticker_tools("😎");

    controller.handle_event(&down(10.0, 10.0), &tools, &mut history);
    controller.handle_event(&up(10.0, 10.0), &tools, &mut history);
    controller.handle_event(&drag(50.0, 50.0), &tools, &mut history);

    match history.committed() {
        [Command::Sticker(sticker)] => assert_eq!(sticker.position(), Pos2::new(10.0, 10.0)),
        other => panic!("unexpected history {other:?}"),
    }
}

#[test]
fn test_undone_sticker_is_not_dragged_back() {
    let mut controller = InputController::new();
    let mut history = History::new();
    let tools = sticker_tools("😀");

    controller.handle_event(&down(10.0, 10.0), &tools, &mut history);
    controller.handle_event(&up(10.0, 10.0), &tools, &mut history);
    controller.handle_event(&down(30.0, 30.0), &tools, &mut history);
    history.undo();
    controller.handle_event(&drag(90.0, 90.0), &tools, &mut history);

    match history.committed() {
        [Command::Sticker(sticker)] => assert_eq!(sticker.position(), Pos2::new(10.0, 10.0)),
        other => panic!("unexpected history {other:?}"),
    }
}

#[test]
fn test_hover_updates_preview_only_when_idle() {
    let mut controller = InputController::new();
    let mut history = History::new();
    let tools = ToolState::default();

    controller.handle_event(&drag(5.0, 5.0), &tools, &mut history);
    assert_eq!(
        controller.preview(),
        Some(&ToolPreview::Marker {
            center: Pos2::new(5.0, 5.0),
            radius: tools.thickness,
            color: tools.color,
        })
    );
    assert!(history.committed().is_empty());

    controller.handle_event(&down(5.0, 5.0), &tools, &mut history);
    controller.handle_event(&drag(6.0, 6.0), &tools, &mut history);

    let mut surface = RecordingSurface::new();
    eframe_sketchpad::renderer::redraw(
        &mut surface,
        &history,
        controller.active_command(),
        controller.preview(),
    );
    assert!(
        !surface
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::StrokeCircle { .. }))
    );
}

#[test]
fn test_sticker_drag_draws_glyph_once() {
    let mut sketch = Sketchpad::default();
    sketch.select_sticker("🐱");

    sketch.handle_input(&drag(10.0, 10.0));
    sketch.handle_input(&down(10.0, 10.0));
    sketch.handle_input(&drag(20.0, 20.0));
    assert!(sketch.is_drawing());
    assert!(sketch.preview().is_none());

    let mut surface = RecordingSurface::new();
    sketch.render(&mut surface);
    match surface.ops() {
        [DrawOp::FillText { pos, text, .. }] => {
            assert_eq!(*pos, Pos2::new(20.0, 20.0));
            assert_eq!(text, "🐱");
        }
        other => panic!("unexpected draw ops {other:?}"),
    }

    // The hover glyph comes back after the drop
    sketch.handle_input(&up(20.0, 20.0));
    let mut surface = RecordingSurface::new();
    sketch.render(&mut surface);
    assert_eq!(surface.ops().len(), 2);
}

#[test]
fn test_release_outside_canvas_ends_gesture() {
    let mut controller = InputController::new();
    let mut history = History::new();
    let tools = ToolState::default();

    controller.handle_event(&down(5.0, 5.0), &tools, &mut history);
    let release = InputEvent::PointerUp {
        location: InputLocation::off_canvas(Pos2::new(-20.0, 5.0)),
    };
    assert!(controller.handle_event(&release, &tools, &mut history));
    assert!(!controller.is_drawing());
    assert_eq!(history.committed().len(), 1);
}

#[test]
fn test_tool_change_refreshes_preview() {
    let mut sketch = Sketchpad::default();
    let mut rng = StdRng::seed_from_u64(42);

    sketch.handle_input(&drag(40.0, 40.0));
    assert!(sketch.select_sticker("🐱"));
    assert_eq!(
        sketch.preview(),
        Some(&ToolPreview::Sticker {
            position: Pos2::new(40.0, 40.0),
            glyph: "🐱".to_owned(),
            size: 48.0,
        })
    );

    assert!(sketch.select_thick(&mut rng));
    assert_eq!(sketch.tools().kind, ToolKind::Marker);
    match sketch.preview() {
        Some(ToolPreview::Marker { radius, color, .. }) => {
            assert_eq!(*radius, 8.0);
            assert_eq!(*color, sketch.tools().color);
        }
        other => panic!("unexpected preview {other:?}"),
    }
}

#[test]
fn test_sketchpad_full_session() {
    let mut sketch = Sketchpad::default();
    let mut rng = StdRng::seed_from_u64(1);

    sketch.select_thin(&mut rng);
    for event in [down(1.0, 1.0), drag(8.0, 8.0), up(8.0, 8.0)] {
        sketch.handle_input(&event);
    }
    sketch.select_sticker("😎");
    for event in [down(30.0, 30.0), up(30.0, 30.0)] {
        sketch.handle_input(&event);
    }
    assert_eq!(sketch.history().committed().len(), 2);

    assert!(sketch.undo());
    assert!(sketch.redo());
    assert!(!sketch.redo());

    assert!(!sketch.add_custom_sticker("   "));
    assert!(sketch.add_custom_sticker("🦀"));
    assert_eq!(sketch.palette().stickers().len(), 4);

    let mut surface = RecordingSurface::new();
    sketch.render(&mut surface);
    match surface.ops() {
        [
            DrawOp::StrokePath { width, color, .. },
            DrawOp::FillText { text, .. },
            DrawOp::FillText { .. },
        ] => {
            assert_eq!(*width, 1.0);
            assert_ne!(*color, Color32::TRANSPARENT);
            assert_eq!(text, "😎");
        }
        other => panic!("unexpected draw ops {other:?}"),
    }

    assert!(sketch.clear());
    assert!(!sketch.undo());
    assert!(!sketch.redo());
}
