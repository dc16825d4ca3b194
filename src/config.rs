use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Largest exported image side in pixels
pub const MAX_EXPORT_SIDE: u32 = 8192;

/// Errors that can occur while loading a [`SketchConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Settings for canvas, tools and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults
pub struct SketchConfig {
    /// Canvas width and height in points
    pub canvas_size: [f32; 2],
    /// Export resolution multiplier over the canvas size
    pub export_scale: f32,
    pub export_file_name: String,
    /// Directory exported files land in (native only)
    pub export_dir: PathBuf,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub default_thickness: f32,
    /// Initial marker color as RGB
    pub default_color: [u8; 3],
    pub sticker_size: f32,
    /// Initial sticker buttons; the first one is preselected
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            export_scale: 4.0,
            export_file_name: "exported_drawing.png".to_owned(),
            export_dir: PathBuf::from("."),
            thin_thickness: 1.0,
            thick_thickness: 8.0,
            default_thickness: 2.0,
            default_color: [0, 0, 0],
            sticker_size: 48.0,
            stickers: vec!["😀".to_owned(), "😎".to_owned(), "🐱".to_owned()],
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    ///
    /// A broken config file is logged and ignored rather than aborting startup.
    pub fn from_env_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_size", self.canvas_size[0].min(self.canvas_size[1])),
            ("export_scale", self.export_scale),
            ("thin_thickness", self.thin_thickness),
            ("thick_thickness", self.thick_thickness),
            ("default_thickness", self.default_thickness),
            ("sticker_size", self.sticker_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        let [width, height] = self.export_size();
        if width.max(height) > MAX_EXPORT_SIDE {
            return Err(ConfigError::Invalid {
                field: "canvas_size",
                reason: format!(
                    "export of {width}x{height} exceeds {MAX_EXPORT_SIDE} pixels per side"
                ),
            });
        }

        if self.stickers.is_empty() {
            return Err(ConfigError::Invalid {
                field: "stickers",
                reason: "needs at least one sticker".to_owned(),
            });
        }
        if self.stickers.iter().any(|sticker| sticker.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                field: "stickers",
                reason: "stickers must not be blank".to_owned(),
            });
        }

        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "export_file_name",
                reason: "must not be empty".to_owned(),
            });
        }

        Ok(())
    }

    /// Pixel size of the exported image
    pub fn export_size(&self) -> [u32; 2] {
        [
            (self.canvas_size[0] * self.export_scale).round() as u32,
            (self.canvas_size[1] * self.export_scale).round() as u32,
        ]
    }

    pub fn canvas_vec2(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_size[0], self.canvas_size[1])
    }
}
