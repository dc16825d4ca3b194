use std::io::Cursor;
use std::path::PathBuf;

use egui::{Color32, Pos2, Rect, TextureId};
use image::RgbaImage;
use thiserror::Error;

use crate::command::History;
use crate::config::SketchConfig;
use crate::raster::{PixelBuffer, Texture};
use crate::renderer;
use crate::surface::PainterSurface;

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font texture was not produced by the export pass")]
    MissingFontTexture,

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Render the committed history off-screen at `export_scale` times the canvas size.
///
/// Runs a headless egui pass so the export uses the same shapes and fonts as
/// the screen, then rasterizes the tessellated meshes on the CPU. The
/// background stays transparent.
pub fn render_image(history: &History, config: &SketchConfig) -> Result<RgbaImage, ExportError> {
    let canvas = Rect::from_min_size(Pos2::ZERO, config.canvas_vec2());

    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput {
        screen_rect: Some(canvas),
        ..Default::default()
    };
    raw_input
        .viewports
        .entry(egui::ViewportId::ROOT)
        .or_default()
        .native_pixels_per_point = Some(config.export_scale);

    let output = ctx.run(raw_input, |ctx| {
        let painter = ctx.layer_painter(egui::LayerId::background());
        let mut surface = PainterSurface::new(painter, canvas, Color32::TRANSPARENT);
        renderer::draw_history(&mut surface, history);
    });

    let mut font_texture: Option<Texture> = None;
    for (id, delta) in &output.textures_delta.set {
        if *id == TextureId::default() {
            font_texture.get_or_insert_with(Texture::default).apply_delta(delta);
        }
    }
    let font_texture = font_texture.ok_or(ExportError::MissingFontTexture)?;

    let pixels_per_point = output.pixels_per_point;
    let primitives = ctx.tessellate(output.shapes, pixels_per_point);

    let [width, height] = config.export_size();
    let mut buffer = PixelBuffer::new(width, height);
    buffer.draw_primitives(&primitives, &font_texture, pixels_per_point);

    log::debug!(
        "Rasterized {} commands into {width}x{height} ({} meshes)",
        history.committed().len(),
        primitives.len()
    );
    Ok(buffer.into_image())
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Render and encode the drawing as PNG bytes.
pub fn export_png(history: &History, config: &SketchConfig) -> Result<Vec<u8>, ExportError> {
    encode_png(&render_image(history, config)?)
}

/// Write the PNG into the configured export directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], config: &SketchConfig) -> Result<(), ExportError> {
    let path = config.export_dir.join(&config.export_file_name);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("Exported drawing to {}", path.display());
    Ok(())
}

/// Offer the PNG to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn save_png(bytes: &[u8], config: &SketchConfig) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn js_error(err: JsValue) -> ExportError {
        ExportError::Download(format!("{err:?}"))
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("No document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("Created element is not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&config.export_file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    log::info!("Offered {} for download", config.export_file_name);
    Ok(())
}
