//! Matrix reading module
//!
//! This module provides parsing of whitespace-delimited numeric matrices.

mod reader;
mod text_reader;
pub mod types;

pub use reader::MatrixReader;
pub use text_reader::TextMatrixReader;
pub use types::MatrixData;
