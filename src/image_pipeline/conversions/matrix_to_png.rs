use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::image_pipeline::{
    bands::BandMerger,
    common::error::{ConversionError, Result},
    matrix::{MatrixReader, TextMatrixReader},
    png::{ConversionConfig, ImagePngWriter, PngWriter},
};

pub struct MatrixToPngPipeline<R: MatrixReader, W: PngWriter> {
    reader: R,
    writer: W,
    merger: BandMerger,
    config: ConversionConfig,
}

impl MatrixToPngPipeline<TextMatrixReader, ImagePngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: TextMatrixReader,
            writer: ImagePngWriter,
            merger: BandMerger::new(),
            config,
        }
    }
}

impl<R: MatrixReader, W: PngWriter> MatrixToPngPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            merger: BandMerger::new(),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting matrix to PNG conversion");

        let matrix = {
            let _span = tracing::info_span!("parse_matrix").entered();
            self.reader.read_matrix(input_data)?
        };

        let rgb_image = {
            let _span = tracing::info_span!("merge_bands",
                rows = matrix.rows,
                cols = matrix.cols
            ).entered();
            self.merger.merge(&matrix, &self.config)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = rgb_image.width,
                height = rgb_image.height
            ).entered();
            self.validate_dimensions(rgb_image.width, rgb_image.height)?;
        }

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&rgb_image, output, &self.config)?;
        }

        info!(
            width = rgb_image.width,
            height = rgb_image.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Encode fully in memory first; the output file only appears on disk
        // once the whole image is ready.
        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
