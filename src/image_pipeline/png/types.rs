//! PNG conversion configuration types

/// PNG compression levels
#[derive(Debug, Clone, Copy)]
pub enum PngCompression {
    /// Encoder default (good speed/size balance)
    Default,
    /// Fast compression (larger file)
    Fast,
    /// Best compression (slower)
    Best,
}

/// PNG scanline filter strategies
#[derive(Debug, Clone, Copy)]
pub enum PngFilter {
    /// No filtering (fastest)
    NoFilter,
    /// Sub filter (horizontal differencing)
    Sub,
    /// Up filter (vertical differencing)
    Up,
    /// Average filter
    Avg,
    /// Paeth filter
    Paeth,
    /// Adaptive per-scanline selection
    Adaptive,
}

/// Configuration for matrix to PNG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression level to use
    pub compression: PngCompression,
    /// Scanline filter strategy
    pub filter: PngFilter,
    /// Whether to validate image dimensions before encoding
    pub validate_dimensions: bool,
    /// Whether to reject inputs whose row count is not a multiple of three.
    /// When false, trailing rows are ignored.
    pub strict_band_count: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            filter: PngFilter::Adaptive,
            validate_dimensions: true,
            strict_band_count: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<PngCompression>,
    filter: Option<PngFilter>,
    validate_dimensions: Option<bool>,
    strict_band_count: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn filter(mut self, filter: PngFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn strict_band_count(mut self, strict: bool) -> Self {
        self.strict_band_count = Some(strict);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            filter: self.filter.unwrap_or(default.filter),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            strict_band_count: self.strict_band_count.unwrap_or(default.strict_band_count),
        }
    }
}
