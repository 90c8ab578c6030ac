//! Image processing pipeline module
//!
//! This module provides a structured approach to the stacked-matrix to PNG
//! conversion, with separate modules for matrix reading, band merging, PNG
//! writing, and conversion orchestration.

pub mod bands;
pub mod common;
pub mod conversions;
pub mod discovery;
pub mod matrix;
pub mod png;

pub use common::{
    ConversionError,
    Result,
};

pub use matrix::{
    MatrixData,
    MatrixReader,
    TextMatrixReader,
};

pub use bands::{
    BandMerger,
    RgbImageData,
};

pub use png::{
    ConversionConfig,
    ConversionConfigBuilder,
    ImagePngWriter,
    PngCompression,
    PngFilter,
    PngWriter,
};

pub use conversions::{
    MatrixToPngPipeline,
};

pub use discovery::{
    discover_input,
    output_path_for,
};
