//! Matrix reader for plain-text numeric input.
//!
//! Parses the stacked-band text format emitted by the renderer: one matrix
//! row per line, samples separated by whitespace, bands optionally separated
//! by a blank line.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::matrix::reader::MatrixReader;
use crate::image_pipeline::matrix::types::MatrixData;

/// Matrix reader for whitespace-delimited text files.
///
/// Accepts any float syntax `f32` parses, including scientific notation.
/// Blank lines are skipped; every remaining line must carry the same number
/// of samples.
pub struct TextMatrixReader;

impl MatrixReader for TextMatrixReader {
    fn read_matrix(&self, data: &[u8]) -> Result<MatrixData> {
        debug!("Parsing matrix text, {} bytes", data.len());

        let text = std::str::from_utf8(data).map_err(|e| {
            ConversionError::ParseError(format!("input is not valid UTF-8: {}", e))
        })?;

        let mut rows = 0usize;
        let mut cols = 0usize;
        let mut samples = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let start = samples.len();
            for token in line.split_whitespace() {
                let value: f32 = token.parse().map_err(|_| {
                    ConversionError::ParseError(format!(
                        "non-numeric token {:?} on line {}",
                        token,
                        line_no + 1
                    ))
                })?;
                samples.push(value);
            }
            let line_cols = samples.len() - start;

            if rows == 0 {
                cols = line_cols;
            } else if line_cols != cols {
                return Err(ConversionError::ParseError(format!(
                    "line {} has {} columns, expected {}",
                    line_no + 1,
                    line_cols,
                    cols
                )));
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(ConversionError::ParseError(
                "no numeric rows in input".to_string(),
            ));
        }

        debug!("Parsed matrix: {} rows x {} cols", rows, cols);

        Ok(MatrixData {
            rows,
            cols,
            data: samples,
        })
    }
}
