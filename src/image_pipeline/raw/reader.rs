use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::SensorImage;

/// Produces a sensor readout from encoded bytes.
pub trait SensorReader {
    fn read_sensor(&self, data: &[u8]) -> Result<SensorImage>;
}
