//! CLI command implementations

pub mod apply;
pub mod curve;
pub mod debug;

use anyhow::{Context, Result};
use histmatch_core::{Frame, Plane, PlanarFormat};
use histmatch_filter::ClipInfo;
use std::path::Path;

/// Loads an image as an 8-bit luma frame.
pub fn load_luma(path: &Path) -> Result<(Frame, ClipInfo)> {
    let img = image::open(path)
        .with_context(|| format!("failed to load {}", path.display()))?
        .to_luma8();
    let (width, height) = img.dimensions();

    let plane = Plane::from_vec(img.into_raw(), width, height, width as usize)
        .with_context(|| format!("{} has no pixels", path.display()))?;
    let mut frame = Frame::new(PlanarFormat::GRAY8, width, height);
    frame.plane_mut(0).copy_from(&plane.view());

    Ok((frame, ClipInfo::new(PlanarFormat::GRAY8, width, height)))
}

/// Saves a frame's primary plane as an image file.
pub fn save_gray(frame: &Frame, path: &Path) -> Result<()> {
    let plane = frame.plane(0);
    let img = image::GrayImage::from_raw(plane.width(), plane.height(), plane.to_vec())
        .context("plane buffer did not match image dimensions")?;
    img.save(path)
        .with_context(|| format!("failed to save {}", path.display()))
}
