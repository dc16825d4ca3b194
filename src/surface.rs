use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

/// A drawable target for commands and previews.
///
/// All coordinates are surface-local: `(0, 0)` is the top-left corner of the
/// drawing area, whatever the target actually paints into.
pub trait Surface {
    /// Wipe everything drawn so far.
    fn clear(&mut self);

    /// Stroke one connected path through `points`, in order.
    /// Paths with fewer than two points have no visible length and draw nothing.
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Stroke an open circle.
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    /// Draw `text` with its left baseline at `pos`.
    fn fill_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

/// Draws onto an egui [`Painter`], clipped to the canvas rect.
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
    background: Color32,
}

impl PainterSurface {
    /// `rect` is the canvas area in screen points; `background` is what `clear` fills it with.
    pub fn new(painter: Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
            background,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface {
    fn clear(&mut self) {
        if self.background != Color32::TRANSPARENT {
            self.painter.rect_filled(self.rect, 0.0, self.background);
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }

        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::line(points, Stroke::new(width, color)));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, Stroke::new(width, color));
    }

    fn fill_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size),
            color,
        );
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    StrokePath {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    StrokeCircle {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
    FillText {
        pos: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// A surface that remembers what was drawn instead of drawing it.
///
/// `clear` drops everything recorded before it, so [`RecordingSurface::ops`]
/// always describes what is currently visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since the last clear, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// How many times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        self.ops.push(DrawOp::StrokePath {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.ops.push(DrawOp::FillText {
            pos,
            text: text.to_owned(),
            size,
            color,
        });
    }
}
