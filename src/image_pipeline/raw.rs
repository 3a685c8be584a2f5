//! Sensor readout module
//!
//! Single-channel CFA samples and the readers that produce them.

mod reader;
mod raw_sample_reader;
mod rgba_gray_reader;
pub mod types;

pub use reader::SensorReader;
pub use raw_sample_reader::RawSampleReader;
pub use rgba_gray_reader::RgbaGrayReader;
pub use types::SensorImage;
