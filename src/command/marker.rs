use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A freehand stroke: an ordered, never-empty list of points.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLine {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl MarkerLine {
    /// Start a line at `start`.
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    pub fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.stroke_path(&self.points, self.thickness, self.color);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}
