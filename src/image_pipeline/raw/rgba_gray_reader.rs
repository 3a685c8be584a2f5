//! Reader for sensor readouts that were stored as RGBA pixels.

use tracing::debug;

use crate::image_pipeline::common::error::{DemosaicError, Result};
use crate::image_pipeline::raw::reader::SensorReader;
use crate::image_pipeline::raw::types::SensorImage;

const BYTES_PER_PIXEL: usize = 4;

/// Recovers a sensor readout from gray RGBA pixels.
///
/// All color components of a gray pixel carry the same value, so the first byte
/// of every 4-byte pixel is taken as the sample. Alpha is ignored.
#[derive(Debug, Clone, Copy)]
pub struct RgbaGrayReader {
    width: usize,
    height: usize,
}

impl RgbaGrayReader {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl SensorReader for RgbaGrayReader {
    fn read_sensor(&self, data: &[u8]) -> Result<SensorImage> {
        if self.width == 0 || self.height == 0 {
            return Err(DemosaicError::InvalidDimensions(self.width, self.height));
        }

        let expected = self.width * self.height * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(DemosaicError::BufferSizeMismatch { expected, got: data.len() });
        }

        debug!("Extracting gray channel from {}x{} RGBA buffer", self.width, self.height);

        let samples = data.chunks_exact(BYTES_PER_PIXEL).map(|px| px[0]).collect();
        SensorImage::new(self.width, self.height, samples)
    }
}
