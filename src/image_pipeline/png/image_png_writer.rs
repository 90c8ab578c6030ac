use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::bands::types::RgbImageData;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::png::types::{ConversionConfig, PngCompression, PngFilter};
use crate::image_pipeline::png::writer::PngWriter;

pub struct ImagePngWriter;

impl PngWriter for ImagePngWriter {
    fn write_png(
        &self,
        image: &RgbImageData,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let mut buffer = Vec::new();

        let compression = match config.compression {
            PngCompression::Default => CompressionType::Default,
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Best => CompressionType::Best,
        };

        let filter = match config.filter {
            PngFilter::NoFilter => FilterType::NoFilter,
            PngFilter::Sub => FilterType::Sub,
            PngFilter::Up => FilterType::Up,
            PngFilter::Avg => FilterType::Avg,
            PngFilter::Paeth => FilterType::Paeth,
            PngFilter::Adaptive => FilterType::Adaptive,
        };

        let encoder =
            PngEncoder::new_with_quality(std::io::Cursor::new(&mut buffer), compression, filter);

        encoder
            .write_image(
                &image.data,
                image.width as u32,
                image.height as u32,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
