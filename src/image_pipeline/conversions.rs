//! Pipeline conversions module
//!
//! Orchestrates reading a sensor readout, demosaicing it and writing the result.

mod raw_to_rgb;


pub use raw_to_rgb::DemosaicPipeline;
