use std::path::PathBuf;

use anyhow::Context;
use bayer_demosaic_rs::image_pipeline::{CfaPattern, DemosaicConfig, DemosaicPipeline};
use bayer_demosaic_rs::logger;
use clap::Parser;

use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "bayer_demosaic_rs")]
#[command(about = "Demosaic a headerless 8-bit Bayer sensor dump into packed RGB bytes")]
struct Args {
    /// Raw sensor samples, one byte per cell, row-major
    input: PathBuf,

    /// Image width in pixels
    width: usize,

    /// Image height in pixels
    height: usize,

    /// Destination for interleaved R, G, B bytes
    output: PathBuf,

    /// Filter layout: RGGB, BGGR, GRBG or GBRG
    #[arg(default_value = "RGGB")]
    pattern: CfaPattern,

    /// Demosaic on a single thread
    #[arg(long)]
    serial: bool,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    let config = DemosaicConfig::builder()
        .pattern(args.pattern)
        .parallel(!args.serial)
        .build();
    let pipeline = DemosaicPipeline::new(args.width, args.height, config);

    info!("Demosaic pipeline initialized");
    info!("Pattern: {}", pipeline.config().pattern);
    info!(
        "Execution: {}",
        if pipeline.config().parallel {
            "parallel"
        } else {
            "serial"
        }
    );

    if let Err(e) = pipeline.convert_file(&args.input, &args.output) {
        error!("Conversion failed: {}", e);
        return Err(e).context("demosaic conversion failed");
    }

    info!("Conversion successful!");
    Ok(())
}
