//! Codec configuration types

/// Configuration shared by the plain-text reader, writer and edit pipeline
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Whether to reject images larger than `max_dimension` on decode
    pub validate_dimensions: bool,
    /// Largest allowed column or row count, `None` for no limit
    pub max_dimension: Option<u32>,
    /// Clamp samples above the max level on decode instead of failing
    pub clamp_samples: bool,
    /// Pixel values written per output line (0 is treated as 1)
    pub values_per_line: usize,
    /// Seed for the scatter offset source, `None` to seed from the clock
    pub scatter_seed: Option<u64>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: None,
            clamp_samples: false,
            values_per_line: 1,
            scatter_seed: None,
        }
    }
}

impl CodecConfig {
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
    clamp_samples: Option<bool>,
    values_per_line: Option<usize>,
    scatter_seed: Option<Option<u64>>,
}

impl CodecConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max_dimension: Option<u32>) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn clamp_samples(mut self, clamp: bool) -> Self {
        self.clamp_samples = Some(clamp);
        self
    }

    pub fn values_per_line(mut self, count: usize) -> Self {
        self.values_per_line = Some(count);
        self
    }

    pub fn scatter_seed(mut self, seed: Option<u64>) -> Self {
        self.scatter_seed = Some(seed);
        self
    }

    pub fn build(self) -> CodecConfig {
        let default = CodecConfig::default();
        CodecConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            clamp_samples: self.clamp_samples.unwrap_or(default.clamp_samples),
            values_per_line: self.values_per_line.unwrap_or(default.values_per_line),
            scatter_seed: self.scatter_seed.unwrap_or(default.scatter_seed),
        }
    }
}
