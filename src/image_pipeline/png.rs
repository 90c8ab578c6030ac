//! PNG writing module
//!
//! This module provides PNG file writing capabilities with configurable
//! compression and scanline filtering.

mod image_png_writer;
mod writer;
pub mod types;

pub use image_png_writer::ImagePngWriter;
pub use writer::PngWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, PngCompression, PngFilter};
