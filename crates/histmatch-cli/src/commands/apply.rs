//! Apply the matched curve to an image.

use crate::ApplyArgs;
use anyhow::Result;
use histmatch_filter::{FilterConfig, MatchHistogram};

pub fn run(args: ApplyArgs) -> Result<()> {
    let (source, source_info) = super::load_luma(&args.source)?;
    let (reference, reference_info) = super::load_luma(&args.reference)?;

    // Without an explicit target, the curve is applied back onto the source.
    let (target, target_info) = match &args.target {
        Some(path) => {
            let (frame, info) = super::load_luma(path)?;
            (frame, Some(info))
        }
        None => (source.clone(), None),
    };

    let config = FilterConfig {
        raw: args.raw,
        show: args.show,
        smoothing_window: args.smoothing_window,
        ..FilterConfig::default()
    };
    let filter = MatchHistogram::new(config, source_info, reference_info, target_info)?;

    let out = filter.process_frame(&source, &reference, &target);
    super::save_gray(&out, &args.output)?;

    tracing::debug!(output = %args.output.display(), "wrote matched image");
    Ok(())
}
