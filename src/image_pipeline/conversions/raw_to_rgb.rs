use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::AtomicBool;

use crate::image_pipeline::{
    common::{DemosaicConfig, error::{DemosaicError, Result}},
    debayer::{CpuDebayer, RgbImage},
    raw::{RawSampleReader, SensorImage, SensorReader},
    rgb::{InterleavedRgbWriter, RgbWriter},
};

pub struct DemosaicPipeline<R: SensorReader, W: RgbWriter> {
    reader: R,
    writer: W,
    config: DemosaicConfig,
}

impl DemosaicPipeline<RawSampleReader, InterleavedRgbWriter> {
    /// Headerless 8-bit samples of a known size in, packed RGB bytes out.
    pub fn new(width: usize, height: usize, config: DemosaicConfig) -> Self {
        Self {
            reader: RawSampleReader::new(width, height),
            writer: InterleavedRgbWriter,
            config,
        }
    }
}

impl<R: SensorReader, W: RgbWriter> DemosaicPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: DemosaicConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(DemosaicError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(DemosaicError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Validates and demosaics an already decoded readout with the configured pattern.
    pub fn demosaic(&self, sensor: &SensorImage) -> Result<RgbImage> {
        self.validate_dimensions(sensor.width, sensor.height)?;
        CpuDebayer::from_config(&self.config).process(sensor, &self.config.pattern)
    }

    /// Same as [`demosaic`](Self::demosaic), stopping between row batches once `cancel` is set.
    pub fn demosaic_cancellable(&self, sensor: &SensorImage, cancel: &AtomicBool) -> Result<RgbImage> {
        self.validate_dimensions(sensor.width, sensor.height)?;
        CpuDebayer::from_config(&self.config).process_cancellable(sensor, &self.config.pattern, cancel)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len(), pattern = %self.config.pattern))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting demosaic conversion");

        let sensor = {
            let _span = tracing::info_span!("read_sensor").entered();
            self.reader.read_sensor(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = sensor.width,
                height = sensor.height
            ).entered();
            self.validate_dimensions(sensor.width, sensor.height)?;
        }

        let rgb = {
            let _span = tracing::info_span!("demosaic").entered();
            CpuDebayer::from_config(&self.config).process(&sensor, &self.config.pattern)?
        };

        {
            let _span = tracing::info_span!("write_rgb").entered();
            self.writer.write_rgb(&rgb, output)?;
        }

        info!(
            width = rgb.width,
            height = rgb.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                DemosaicError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // The output file is only created once conversion succeeded.
        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                DemosaicError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &DemosaicConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DemosaicConfig) {
        self.config = config;
    }
}
