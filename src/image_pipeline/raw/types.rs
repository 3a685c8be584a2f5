//! Sensor image types

use crate::image_pipeline::common::error::{DemosaicError, Result};

/// Single-channel sensor readout under a color filter array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major intensities, one per sensor cell
    pub data: Vec<u8>,
}

impl SensorImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let image = Self { width, height, data };
        image.validate()?;
        Ok(image)
    }

    /// Checks dimensions against the buffer. Fields are public, so the engine
    /// calls this again before touching any sample.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DemosaicError::InvalidDimensions(self.width, self.height));
        }
        let expected = self
            .width
            .checked_mul(self.height)
            .ok_or(DemosaicError::InvalidDimensions(self.width, self.height))?;
        if self.data.len() != expected {
            return Err(DemosaicError::BufferSizeMismatch {
                expected,
                got: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }
}
