//! Image processing pipeline module
//!
//! Bayer demosaicing split into the filter description, sensor readers, the
//! averaging engine, RGB writers and the orchestration that ties them together.

pub mod cfa;
pub mod raw;
pub mod debayer;
pub mod rgb;
pub mod conversions;
pub mod common;

#[cfg(test)]
pub(crate) mod synthetic;

pub use common::{
    DemosaicConfig,
    DemosaicConfigBuilder,
    DemosaicError,
    Result,
};

pub use cfa::{
    CfaPattern,
    Channel,
};

pub use raw::{
    SensorImage,
    SensorReader,
    RawSampleReader,
    RgbaGrayReader,
};

pub use debayer::{
    CpuDebayer,
    RgbImage,
    demosaic,
    window_indices,
};

pub use rgb::{
    RgbWriter,
    InterleavedRgbWriter,
    RgbaWriter,
};

pub use conversions::{
    DemosaicPipeline,
};
