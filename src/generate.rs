//! Generate command: write a synthetic series to JSON.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::GenerateArgs;
use crate::config::{AugurConfig, DEFAULT_SEED};
use crate::{convert, input, synthetic};

/// Generate the configured synthetic series and write it to `args.output`.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = AugurConfig::load(args.config.as_deref())?;
    let seed = args.seed.or(config.seed).unwrap_or(DEFAULT_SEED);
    let spec = convert::build_synthetic_spec(&config.synthetic);

    let series = synthetic::generate_series(&spec, seed)?;
    input::write_series(&args.output, &series)?;
    info!(
        path = %args.output.display(),
        n = series.len(),
        seed,
        "synthetic series written"
    );
    Ok(())
}
