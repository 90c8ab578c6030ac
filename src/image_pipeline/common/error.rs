use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("No .{0} input file found in {1}")]
    InputNotFound(String, String),

    #[error("Multiple .{0} input files found: {1}")]
    AmbiguousInput(String, String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to parse matrix: {0}")]
    ParseError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Row count {0} does not divide into three channel bands")]
    UnevenBands(usize),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
