use egui::Color32;
use rand::Rng;

use crate::config::SketchConfig;

/// Which kind of command a pointer-down creates.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ToolKind {
    #[default]
    Marker,
    Sticker,
}

/// Current tool settings, read by the input controller when it builds commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub kind: ToolKind,
    /// Marker line width
    pub thickness: f32,
    /// Marker color
    pub color: Color32,
    /// Glyph placed by the sticker tool
    pub sticker: String,
    /// Glyph size for stickers, fixed for the session
    pub sticker_size: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl ToolState {
    pub fn from_config(config: &SketchConfig) -> Self {
        let [r, g, b] = config.default_color;
        Self {
            kind: ToolKind::Marker,
            thickness: config.default_thickness,
            color: Color32::from_rgb(r, g, b),
            sticker: config.stickers.first().cloned().unwrap_or_default(),
            sticker_size: config.sticker_size,
        }
    }

    /// Switch to the marker with the given thickness and a fresh random color.
    pub fn select_marker(&mut self, thickness: f32, rng: &mut impl Rng) {
        self.kind = ToolKind::Marker;
        self.thickness = thickness;
        self.color = random_color(rng);
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.kind = ToolKind::Sticker;
        self.sticker = glyph.to_owned();
    }
}

/// Any opaque color, each channel uniform over 0..=255.
pub fn random_color(rng: &mut impl Rng) -> Color32 {
    let mut rgb = [0u8; 3];
    rng.fill(&mut rgb);
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// The sticker glyphs offered by the toolbar, in button order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerPalette {
    stickers: Vec<String>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self::new(SketchConfig::default().stickers)
    }
}

impl StickerPalette {
    pub fn new(stickers: Vec<String>) -> Self {
        Self { stickers }
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    /// Add a user-entered sticker.
    ///
    /// Surrounding whitespace is ignored. Blank input and glyphs already in the
    /// palette are rejected and leave the palette untouched.
    pub fn register(&mut self, input: &str) -> bool {
        let glyph = input.trim();
        if glyph.is_empty() {
            return false;
        }
        if self.stickers.iter().any(|s| s == glyph) {
            log::debug!("Sticker {glyph} is already in the palette");
            return false;
        }

        log::info!("Registered custom sticker {glyph}");
        self.stickers.push(glyph.to_owned());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let tools = ToolState::default();
        assert_eq!(tools.kind, ToolKind::Marker);
        assert_eq!(tools.thickness, 2.0);
        assert_eq!(tools.color, Color32::BLACK);
        assert_eq!(tools.sticker, "😀");
        assert_eq!(tools.sticker_size, 48.0);
    }

    #[test]
    fn test_select_marker_picks_opaque_color() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tools = ToolState::default();
        tools.select_sticker("🐱");

        tools.select_marker(8.0, &mut rng);

        assert_eq!(tools.kind, ToolKind::Marker);
        assert_eq!(tools.thickness, 8.0);
        assert_eq!(tools.color.a(), 255);
        // Picking a sticker glyph is remembered across tool switches
        assert_eq!(tools.sticker, "🐱");
    }

    #[test]
    fn test_register_rejects_blank_and_duplicates() {
        let mut palette = StickerPalette::default();
        let before = palette.clone();

        assert!(!palette.register(""));
        assert!(!palette.register("   "));
        assert!(!palette.register(" 😀 "));
        assert_eq!(palette, before);

        assert!(palette.register("  🦀 "));
        assert_eq!(palette.stickers().last().map(String::as_str), Some("🦀"));
    }
}
