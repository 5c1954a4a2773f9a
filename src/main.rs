use netpbm_plain_rs::image_pipeline::{CodecConfig, EditPipeline, Operation};
use netpbm_plain_rs::logger;

use anyhow::{Context, bail};
use tracing::{error, info};

const USAGE: &str = "usage: netpbm_plain_rs <input> <output> [operation...]\n\
    operations: brightness=N invert rotate=cw|ccw flip=v|h posterize=N \
    crop=TOP,LEFT,BOTTOM,RIGHT grayscale glass=RADIUS";

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output, operations @ ..] = args.as_slice() else {
        bail!(USAGE);
    };

    let operations = operations
        .iter()
        .map(|text| text.parse::<Operation>())
        .collect::<Result<Vec<_>, _>>()
        .context("parsing operations")?;

    let seed = std::env::var("NETPBM_SCATTER_SEED")
        .ok()
        .map(|value| value.parse::<u64>())
        .transpose()
        .context("NETPBM_SCATTER_SEED must be an unsigned integer")?;

    let config = CodecConfig::builder().scatter_seed(seed).build();
    let pipeline = EditPipeline::new(config);

    info!("Editing {} -> {} with {} operation(s)", input, output, operations.len());

    match pipeline.convert_file(input, output, &operations) {
        Ok(image) => {
            info!("Wrote {} {}x{} image", image.format(), image.columns(), image.rows());
            Ok(())
        }
        Err(e) => {
            error!("Edit failed: {}", e);
            Err(e.into())
        }
    }
}
