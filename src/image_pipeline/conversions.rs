//! Pipeline conversions module
//!
//! This module contains orchestration logic for the matrix to PNG conversion.

mod matrix_to_png;

#[cfg(test)]
mod tests;

pub use matrix_to_png::MatrixToPngPipeline;
