use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::cfa::{CfaPattern, Channel};
use crate::image_pipeline::common::config::DemosaicConfig;
use crate::image_pipeline::common::error::{DemosaicError, Result};
use crate::image_pipeline::debayer::types::{RGB_CHANNELS, RgbImage};
use crate::image_pipeline::debayer::window::window_indices;
use crate::image_pipeline::raw::types::SensorImage;

const DEFAULT_BATCH_ROWS: usize = 64;

/// Per-channel running sums over one neighbourhood, indexed by `Channel`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChannelAccumulator {
    sums: [u32; 3],
    counts: [u32; 3],
}

impl ChannelAccumulator {
    #[inline]
    fn add(&mut self, channel: Channel, value: u8) {
        self.sums[channel.index()] += u32::from(value);
        self.counts[channel.index()] += 1;
    }

    pub(crate) fn count(&self, channel: Channel) -> u32 {
        self.counts[channel.index()]
    }

    /// Mean of the gathered samples, rounded half up and clamped to `u8`.
    #[inline]
    pub(crate) fn average(&self, channel: Channel) -> u8 {
        let sum = self.sums[channel.index()];
        let count = self.counts[channel.index()];
        // Only a window narrower than 2 on some axis can miss a channel.
        if count == 0 {
            return 0;
        }
        let rounded = (2 * sum + count) / (2 * count);
        u8::try_from(rounded).unwrap_or(u8::MAX)
    }
}

/// Gathers every sample of the 3x3 (border-clipped) window around `(x, y)`.
#[inline]
pub(crate) fn gather_neighborhood(
    sensor: &SensorImage,
    pattern: &CfaPattern,
    x: usize,
    y: usize,
) -> ChannelAccumulator {
    let mut acc = ChannelAccumulator::default();
    for ny in window_indices(y, sensor.height) {
        let row = sensor.row(ny);
        for nx in window_indices(x, sensor.width) {
            acc.add(pattern.channel_at(nx, ny), row[nx]);
        }
    }
    acc
}

fn fill_row(sensor: &SensorImage, pattern: &CfaPattern, y: usize, out: &mut [u8]) {
    for (x, px) in out.chunks_exact_mut(RGB_CHANNELS).enumerate() {
        let acc = gather_neighborhood(sensor, pattern, x, y);
        for channel in Channel::ALL {
            px[channel.index()] = acc.average(channel);
        }
    }
}

/// Neighbourhood-averaging demosaic engine running on the CPU.
///
/// Every output pixel depends only on the read-only input, so rows are
/// written into disjoint slices of the output buffer, optionally on the rayon
/// pool. Serial and parallel runs produce identical bytes.
#[derive(Debug, Clone, Copy)]
pub struct CpuDebayer {
    parallel: bool,
    batch_rows: usize,
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new(true, DEFAULT_BATCH_ROWS)
    }
}

impl CpuDebayer {
    pub fn new(parallel: bool, batch_rows: usize) -> Self {
        Self {
            parallel,
            batch_rows: batch_rows.max(1),
        }
    }

    pub fn from_config(config: &DemosaicConfig) -> Self {
        Self::new(config.parallel, config.batch_rows)
    }

    pub fn process(&self, sensor: &SensorImage, pattern: &CfaPattern) -> Result<RgbImage> {
        self.run_until(sensor, pattern, |_| false)
    }

    /// Like [`process`](Self::process), but gives up between row batches once
    /// `cancel` is set. A cancelled run returns no image at all.
    pub fn process_cancellable(
        &self,
        sensor: &SensorImage,
        pattern: &CfaPattern,
        cancel: &AtomicBool,
    ) -> Result<RgbImage> {
        self.run_until(sensor, pattern, |_| cancel.load(Ordering::Relaxed))
    }

    /// Runs batch by batch, asking `should_stop(rows_completed)` before each one.
    #[instrument(skip_all, fields(width = sensor.width, height = sensor.height, pattern = %pattern))]
    pub(crate) fn run_until<F>(
        &self,
        sensor: &SensorImage,
        pattern: &CfaPattern,
        should_stop: F,
    ) -> Result<RgbImage>
    where
        F: Fn(usize) -> bool,
    {
        sensor.validate()?;

        let width = sensor.width;
        let height = sensor.height;
        info!("Starting CPU demosaic for image {}x{}", width, height);
        debug!(parallel = self.parallel, batch_rows = self.batch_rows, "Demosaic settings");

        let row_len = width * RGB_CHANNELS;
        let mut data = vec![0u8; row_len * height];

        for (batch_index, batch) in data.chunks_mut(row_len.saturating_mul(self.batch_rows)).enumerate() {
            let first_row = batch_index.saturating_mul(self.batch_rows);

            if should_stop(first_row) {
                warn!(rows_completed = first_row, "Demosaic cancelled");
                return Err(DemosaicError::Cancelled {
                    rows_completed: first_row,
                });
            }

            if self.parallel {
                batch
                    .par_chunks_mut(row_len)
                    .enumerate()
                    .for_each(|(i, row)| fill_row(sensor, pattern, first_row + i, row));
            } else {
                batch
                    .chunks_mut(row_len)
                    .enumerate()
                    .for_each(|(i, row)| fill_row(sensor, pattern, first_row + i, row));
            }
        }

        debug!("CPU demosaic complete");
        Ok(RgbImage { width, height, data })
    }
}

/// Demosaic `sensor` with the default engine settings.
pub fn demosaic(sensor: &SensorImage, pattern: &CfaPattern) -> Result<RgbImage> {
    CpuDebayer::default().process(sensor, pattern)
}
