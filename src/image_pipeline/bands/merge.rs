use tracing::debug;

use crate::image_pipeline::bands::types::RgbImageData;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::matrix::types::MatrixData;
use crate::image_pipeline::png::types::ConversionConfig;

/// Number of channel bands stacked in the input matrix.
const CHANNELS: usize = 3;

/// Merges the three stacked channel bands of a matrix into an interleaved
/// 8-bit RGB pixel buffer.
///
/// The matrix is split into three equal horizontal bands, red on top, then
/// green, then blue. Each sample is scaled by 255, clamped to [0, 255] and
/// truncated toward zero. With `strict_band_count` off, rows beyond
/// `3 * (rows / 3)` are ignored.
pub struct BandMerger;

impl BandMerger {
    pub fn new() -> Self {
        Self
    }

    pub fn merge(&self, matrix: &MatrixData, config: &ConversionConfig) -> Result<RgbImageData> {
        let height = matrix.rows / CHANNELS;
        let width = matrix.cols;

        if config.strict_band_count && matrix.rows % CHANNELS != 0 {
            return Err(ConversionError::UnevenBands(matrix.rows));
        }
        if height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        debug!(
            "Merging bands: {} rows x {} cols -> {}x{} RGB",
            matrix.rows, matrix.cols, width, height
        );

        let plane = height * width;
        let mut data = vec![0u8; plane * CHANNELS];
        for channel in 0..CHANNELS {
            let band = &matrix.data[channel * plane..(channel + 1) * plane];
            for (i, &sample) in band.iter().enumerate() {
                data[i * CHANNELS + channel] = quantize(sample);
            }
        }

        Ok(RgbImageData {
            width,
            height,
            data,
        })
    }
}

/// Scales a normalized sample into an 8-bit value.
///
/// Out-of-range inputs are clamped rather than wrapped, and the cast
/// truncates toward zero, so 0.5 maps to 127.
fn quantize(sample: f32) -> u8 {
    (sample * 255.0).clamp(0.0, 255.0) as u8
}
