//! Demosaic configuration types

use crate::image_pipeline::cfa::CfaPattern;

/// Configuration for a demosaic run
#[derive(Debug, Clone)]
pub struct DemosaicConfig {
    /// Filter layout of the sensor
    pub pattern: CfaPattern,
    /// Whether rows are distributed across the rayon thread pool
    pub parallel: bool,
    /// Rows processed between two cancellation checks
    pub batch_rows: usize,
    /// Upper bound for width and height, checked by the pipeline before demosaicing
    pub max_dimension: Option<usize>,
}

impl Default for DemosaicConfig {
    fn default() -> Self {
        Self {
            pattern: CfaPattern::rggb(),
            parallel: true,
            batch_rows: 64,
            max_dimension: Some(65_536),
        }
    }
}

impl DemosaicConfig {
    pub fn builder() -> DemosaicConfigBuilder {
        DemosaicConfigBuilder::default()
    }
}

/// Builder for DemosaicConfig
#[derive(Default)]
pub struct DemosaicConfigBuilder {
    pattern: Option<CfaPattern>,
    parallel: Option<bool>,
    batch_rows: Option<usize>,
    max_dimension: Option<Option<usize>>,
}

impl DemosaicConfigBuilder {
    pub fn pattern(mut self, pattern: CfaPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn batch_rows(mut self, rows: usize) -> Self {
        self.batch_rows = Some(rows);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> DemosaicConfig {
        let default = DemosaicConfig::default();
        DemosaicConfig {
            pattern: self.pattern.unwrap_or(default.pattern),
            parallel: self.parallel.unwrap_or(default.parallel),
            batch_rows: self.batch_rows.unwrap_or(default.batch_rows).max(1),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
