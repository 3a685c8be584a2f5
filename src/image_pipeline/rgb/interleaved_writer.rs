use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::{RGB_CHANNELS, RgbImage};
use crate::image_pipeline::rgb::writer::RgbWriter;

/// Writes packed `R, G, B` bytes, row by row.
pub struct InterleavedRgbWriter;

impl RgbWriter for InterleavedRgbWriter {
    fn write_rgb(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()> {
        debug!("Writing interleaved RGB: {}x{}", image.width, image.height);
        output.write_all(image.as_bytes())?;
        Ok(())
    }
}

/// Writes packed `R, G, B, A` bytes with an opaque alpha channel.
pub struct RgbaWriter;

impl RgbWriter for RgbaWriter {
    fn write_rgb(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()> {
        debug!("Writing RGBA: {}x{}", image.width, image.height);

        let mut buffer = Vec::with_capacity(image.width * image.height * (RGB_CHANNELS + 1));
        for px in image.pixels() {
            buffer.extend_from_slice(&px);
            buffer.push(u8::MAX);
        }
        output.write_all(&buffer)?;
        Ok(())
    }
}
