use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::RgbImage;

/// Consumes a demosaiced image.
pub trait RgbWriter {
    fn write_rgb(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()>;
}
