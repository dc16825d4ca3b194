//! Software rasterizer for tessellated egui meshes.
//!
//! Used for export, where there is no GPU: shapes go through egui's own
//! tessellator and the resulting triangles are filled here, blending in
//! premultiplied gamma space like egui's web backend.

use egui::epaint::{ClippedPrimitive, ImageData, ImageDelta, Primitive, Vertex};
use egui::{Color32, Pos2, Rect};
use image::RgbaImage;

/// A CPU copy of an egui texture
#[derive(Clone, Debug, Default)]
pub struct Texture {
    size: [usize; 2],
    pixels: Vec<Color32>,
}

impl Texture {
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Apply a full upload or a partial update.
    pub fn apply_delta(&mut self, delta: &ImageDelta) {
        let (size, pixels) = match &delta.image {
            ImageData::Color(image) => (image.size, image.pixels.clone()),
            ImageData::Font(image) => (image.size, image.srgba_pixels(None).collect()),
        };

        match delta.pos {
            None => {
                self.size = size;
                self.pixels = pixels;
            }
            Some([x0, y0]) => {
                for row in 0..size[1] {
                    for col in 0..size[0] {
                        let (x, y) = (x0 + col, y0 + row);
                        if x < self.size[0] && y < self.size[1] {
                            self.pixels[y * self.size[0] + x] = pixels[row * size[0] + col];
                        }
                    }
                }
            }
        }
    }

    /// Nearest-neighbour lookup. An empty texture samples as white.
    fn sample(&self, uv: Pos2) -> Color32 {
        let [w, h] = self.size;
        if w == 0 || h == 0 {
            return Color32::WHITE;
        }
        let x = ((uv.x * w as f32) as usize).min(w - 1);
        let y = ((uv.y * h as f32) as usize).min(h - 1);
        self.pixels[y * w + x]
    }
}

/// Premultiplied RGBA in `0.0..=1.0`
type Rgba = [f32; 4];

fn to_rgba(color: Color32) -> Rgba {
    color.to_array().map(|c| c as f32 / 255.0)
}

/// Accumulates blended triangles before conversion to an image.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    /// Fill every mesh in `primitives`, scaling positions from points to pixels.
    pub fn draw_primitives(
        &mut self,
        primitives: &[ClippedPrimitive],
        texture: &Texture,
        pixels_per_point: f32,
    ) {
        for clipped in primitives {
            let Primitive::Mesh(mesh) = &clipped.primitive else {
                log::warn!("Skipping paint callback during export");
                continue;
            };
            let clip = Rect::from_min_max(
                (clipped.clip_rect.min.to_vec2() * pixels_per_point).to_pos2(),
                (clipped.clip_rect.max.to_vec2() * pixels_per_point).to_pos2(),
            );

            for tri in mesh.indices.chunks_exact(3) {
                let vertices = [
                    &mesh.vertices[tri[0] as usize],
                    &mesh.vertices[tri[1] as usize],
                    &mesh.vertices[tri[2] as usize],
                ];
                self.fill_triangle(vertices, pixels_per_point, clip, texture);
            }
        }
    }

    fn fill_triangle(
        &mut self,
        vertices: [&Vertex; 3],
        pixels_per_point: f32,
        clip: Rect,
        texture: &Texture,
    ) {
        let p = vertices.map(|v| (v.pos.to_vec2() * pixels_per_point).to_pos2());
        let area = edge(p[0], p[1], p[2]);
        if area.abs() <= f32::EPSILON {
            return;
        }

        let bounds = Rect::from_points(&p);
        let min_x = bounds.min.x.max(clip.min.x).max(0.0);
        let min_y = bounds.min.y.max(clip.min.y).max(0.0);
        let max_x = bounds.max.x.min(clip.max.x).min(self.width as f32);
        let max_y = bounds.max.y.min(clip.max.y).min(self.height as f32);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let colors = vertices.map(|v| to_rgba(v.color));
        // Weight i belongs to the edge opposite vertex i
        let edges = [(p[1], p[2]), (p[2], p[0]), (p[0], p[1])];

        for y in (min_y.floor() as u32)..(max_y.ceil() as u32) {
            for x in (min_x.floor() as u32)..(max_x.ceil() as u32) {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let mut weights = [0.0; 3];
                let mut inside = true;
                for (i, (a, b)) in edges.iter().enumerate() {
                    let w = edge(*a, *b, center) / area;
                    if w < 0.0 || (w == 0.0 && !owns_edge(*a, *b, area)) {
                        inside = false;
                        break;
                    }
                    weights[i] = w;
                }
                if !inside {
                    continue;
                }

                let uv = (0..3).fold(Pos2::ZERO, |uv, i| {
                    uv + vertices[i].uv.to_vec2() * weights[i]
                });
                let texel = to_rgba(texture.sample(uv));
                let mut src = [0.0; 4];
                for c in 0..4 {
                    let color = (0..3).map(|i| weights[i] * colors[i][c]).sum::<f32>();
                    src[c] = color * texel[c];
                }
                self.blend(x, y, src);
            }
        }
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        let dst = &mut self.pixels[(y * self.width + x) as usize];
        let keep = 1.0 - src[3];
        for c in 0..4 {
            dst[c] = (src[c] + dst[c] * keep).clamp(0.0, 1.0);
        }
    }

    /// Convert to straight-alpha RGBA8.
    pub fn into_image(self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
            if a <= 0.0 {
                return image::Rgba([0, 0, 0, 0]);
            }
            let unmultiply = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
            image::Rgba([unmultiply(r), unmultiply(g), unmultiply(b), (a * 255.0).round() as u8])
        })
    }
}

/// Twice the signed area of `(a, b, c)`
fn edge(a: Pos2, b: Pos2, c: Pos2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Tie-break for pixel centers exactly on an edge shared by two triangles:
/// the neighbour walks the edge the other way, so exactly one of them owns it.
fn owns_edge(a: Pos2, b: Pos2, area: f32) -> bool {
    let (dx, dy) = if area > 0.0 {
        (b.x - a.x, b.y - a.y)
    } else {
        (a.x - b.x, a.y - b.y)
    };
    dy > 0.0 || (dy == 0.0 && dx > 0.0)
}
