use mat2png_rs::image_pipeline::{
    ConversionConfig, MatrixToPngPipeline, PngCompression, discover_input, output_path_for,
};
use mat2png_rs::logger;

use anyhow::Context;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting mat2png...");

    let config = ConversionConfig::builder()
        .compression(PngCompression::Default)
        .strict_band_count(false)
        .build();
    let pipeline = MatrixToPngPipeline::new(config);

    info!("Matrix to PNG pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);
    info!(
        "Band count check: {}",
        if pipeline.config().strict_band_count {
            "strict"
        } else {
            "lenient"
        }
    );

    let input = discover_input(".").context("no usable input matrix")?;
    let output = output_path_for(&input);

    match pipeline.convert_file(&input, &output) {
        Ok(_) => {
            info!("Conversion successful!");
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e.into())
        }
    }
}
