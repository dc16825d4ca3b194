#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod export;
pub mod input;
pub mod panels;
pub mod preview;
pub mod raster;
pub mod renderer;
pub mod sketchpad;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{Command, History, MarkerLine, Sticker};
pub use config::{ConfigError, SketchConfig};
pub use export::ExportError;
pub use input::{InputController, InputEvent, InputHandler, InputLocation};
pub use preview::ToolPreview;
pub use sketchpad::Sketchpad;
pub use surface::{DrawOp, PainterSurface, RecordingSurface, Surface};
pub use tools::{StickerPalette, ToolKind, ToolState};
