//! Common utilities module
//!
//! Error taxonomy and configuration shared across the demosaic pipeline.

pub mod config;
pub mod error;

pub use config::{DemosaicConfig, DemosaicConfigBuilder};
pub use error::{DemosaicError, Result};
