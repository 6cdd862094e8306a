//! Render the matched curve as a diagnostic image.

use crate::DebugArgs;
use anyhow::Result;
use histmatch_filter::{FilterConfig, MatchHistogram};

pub fn run(args: DebugArgs) -> Result<()> {
    let (source, source_info) = super::load_luma(&args.source)?;
    let (reference, reference_info) = super::load_luma(&args.reference)?;

    let config = FilterConfig {
        raw: args.raw,
        debug: true,
        smoothing_window: args.smoothing_window,
        ..FilterConfig::default()
    };
    let filter = MatchHistogram::new(config, source_info, reference_info, None)?;

    let out = filter.process_frame(&source, &reference, &source);
    super::save_gray(&out, &args.output)?;

    tracing::debug!(output = %args.output.display(), "wrote curve visualization");
    Ok(())
}
