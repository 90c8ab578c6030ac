use std::io::Write;

use crate::image_pipeline::bands::types::RgbImageData;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::ConversionConfig;

pub trait PngWriter {
    fn write_png(
        &self,
        image: &RgbImageData,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
