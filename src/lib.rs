//! Bayer (CFA) demosaicing by same-channel neighbourhood averaging.

pub mod image_pipeline;
pub mod logger;
