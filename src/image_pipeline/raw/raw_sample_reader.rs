//! Reader for headerless 8-bit sensor dumps.

use tracing::debug;

use crate::image_pipeline::common::error::{DemosaicError, Result};
use crate::image_pipeline::raw::reader::SensorReader;
use crate::image_pipeline::raw::types::SensorImage;

/// Interprets the input as `width * height` row-major 8-bit samples.
///
/// The dump carries no header, so the dimensions come from the caller.
#[derive(Debug, Clone, Copy)]
pub struct RawSampleReader {
    width: usize,
    height: usize,
}

impl RawSampleReader {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl SensorReader for RawSampleReader {
    fn read_sensor(&self, data: &[u8]) -> Result<SensorImage> {
        debug!("Reading {}x{} raw samples from {} bytes", self.width, self.height, data.len());

        if self.width == 0 || self.height == 0 {
            return Err(DemosaicError::InvalidDimensions(self.width, self.height));
        }

        SensorImage::new(self.width, self.height, data.to_vec())
    }
}
