use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::bands::RgbImageData;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::MatrixToPngPipeline;
use crate::image_pipeline::matrix::{MatrixData, MatrixReader};
use crate::image_pipeline::png::{ConversionConfig, PngCompression, PngFilter, PngWriter};

struct MockReader {
    should_fail: bool,
    mock_data: Option<MatrixData>,
}

impl MatrixReader for MockReader {
    fn read_matrix(&self, _data: &[u8]) -> Result<MatrixData> {
        if self.should_fail {
            return Err(ConversionError::ParseError("Mock parse error".to_string()));
        }
        Ok(self.mock_data.clone().unwrap_or(MatrixData {
            rows: 30,
            cols: 10,
            data: vec![0.0; 300],
        }))
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<RgbImageData>>>,
}

impl PngWriter for MockWriter {
    fn write_png(
        &self,
        image: &RgbImageData,
        _output: &mut dyn Write,
        _config: &ConversionConfig,
    ) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodeError("Mock encode error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .compression(PngCompression::Best)
        .filter(PngFilter::NoFilter)
        .validate_dimensions(false)
        .strict_band_count(true)
        .build();

    assert!(matches!(config.compression, PngCompression::Best));
    assert!(matches!(config.filter, PngFilter::NoFilter));
    assert!(!config.validate_dimensions);
    assert!(config.strict_band_count);
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let pipeline = MatrixToPngPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake matrix data", &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].width, 10);
    assert_eq!(written[0].height, 10);
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: true,
        mock_data: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };

    let pipeline = MatrixToPngPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake matrix data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::ParseError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: None,
    };
    let writer = MockWriter {
        should_fail: true,
        written_data: written,
    };

    let pipeline = MatrixToPngPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake matrix data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::EncodeError(_)));
}

#[test]
fn test_degenerate_height_rejected() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(MatrixData {
            rows: 2,
            cols: 4,
            data: vec![0.0; 8],
        }),
    };
    let writer = MockWriter {
        should_fail: false,
        written_data: written,
    };

    let pipeline = MatrixToPngPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake matrix data", &mut output);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ConversionError::InvalidDimensions(_, 0)
    ));
}

#[test]
fn test_strict_band_count_rejects_leftover_rows() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(MatrixData {
            rows: 10,
            cols: 2,
            data: vec![0.0; 20],
        }),
    };
    let writer = MockWriter {
        should_fail: false,
        written_data: written,
    };

    let config = ConversionConfig::builder().strict_band_count(true).build();
    let pipeline = MatrixToPngPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake matrix data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::UnevenBands(10)));
}

#[test]
fn test_convert_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("render.txt");
    let output_path = dir.path().join("render.png");

    // 9x4 matrix: red band 0, green band 0.5, blue band 1, bands separated
    // by blank lines the way the renderer writes them
    let mut text = String::new();
    for band in ["0 0 0 0", "0.5 0.5 0.5 0.5", "1 1 1 1"] {
        for _ in 0..3 {
            text.push_str(band);
            text.push('\n');
        }
        text.push('\n');
    }
    std::fs::write(&input_path, text).unwrap();

    let pipeline = MatrixToPngPipeline::new(ConversionConfig::default());
    pipeline.convert_file(&input_path, &output_path).unwrap();

    let img = image::open(&output_path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (4, 3));
    for pixel in img.pixels() {
        assert_eq!(pixel.0, [0, 127, 255]);
    }
}

#[test]
fn test_failed_conversion_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("render.txt");
    let output_path = dir.path().join("render.png");

    std::fs::write(&input_path, "not a matrix\n").unwrap();

    let pipeline = MatrixToPngPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input_path, &output_path);

    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("render.txt");
    let output_path = dir.path().join("render.png");

    let pipeline = MatrixToPngPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input_path, &output_path);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ConversionError::InputReadError(_)
    ));
    assert!(!output_path.exists());
}
