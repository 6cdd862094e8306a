//! Export the matched curve as a LUT table.

use crate::CurveArgs;
use anyhow::{bail, Result};
use histmatch_curve::{export, BuildOptions, Curve};

pub fn run(args: CurveArgs) -> Result<()> {
    if args.smoothing_window < 0 {
        bail!("smoothing window must not be negative");
    }

    let (source, source_info) = super::load_luma(&args.source)?;
    let (reference, reference_info) = super::load_luma(&args.reference)?;

    if (source_info.width, source_info.height) != (reference_info.width, reference_info.height) {
        bail!(
            "images must have the same dimensions ({}x{} vs {}x{})",
            source_info.width,
            source_info.height,
            reference_info.width,
            reference_info.height
        );
    }

    let options = BuildOptions {
        raw: args.raw,
        smoothing_window: args.smoothing_window as u32,
    };
    let curve = Curve::build(
        &source.plane(0).view(),
        &reference.plane(0).view(),
        &options,
    );

    match args.output.extension().and_then(|e| e.to_str()) {
        Some("cube") => export::save_cube(&curve, &args.output)?,
        Some("csv") => export::save_csv(&curve, &args.output)?,
        _ => bail!("unsupported curve format, use .cube or .csv"),
    }

    tracing::debug!(output = %args.output.display(), "wrote curve table");
    Ok(())
}
