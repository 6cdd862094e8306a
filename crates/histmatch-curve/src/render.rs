//! Curve visualization into a plane.
//!
//! Both renderers use a 256-wide coordinate system where x is the input
//! value and the row is `255 - curve[x]`, so the curve reads bottom-to-top
//! like a transfer-function plot. The target plane must be at least 256x256;
//! the caller pre-clears the background region.

use histmatch_core::PlaneMut;

use crate::curve::Curve;

/// Draws the curve as single pixels of `marker` intensity.
///
/// One pixel per column, at the curve's height. Overlays for different
/// channels use distinct markers so they stay distinguishable on one plane.
pub fn overlay(curve: &Curve, plane: &mut PlaneMut<'_>, marker: u8) {
    debug_assert!(plane.width() >= 256 && plane.height() >= 256);

    for x in 0..Curve::SIZE as u32 {
        let y = 255 - curve.value(x as u8) as u32;
        plane.set_sample(x, y, marker);
    }
}

/// Draws the curve as a bar chart with a bright trace line.
///
/// Each column is filled from the bottom row up to the curve's height with
/// the curve value itself as the grey level, then the pixel at the curve's
/// height is forced to full intensity. Columns whose value is 0 get no
/// trace pixel.
pub fn render_debug(curve: &Curve, plane: &mut PlaneMut<'_>) {
    debug_assert!(plane.width() >= 256 && plane.height() >= 256);

    for x in 0..Curve::SIZE as u32 {
        let v = curve.value(x as u8);
        for j in 0..=v as u32 {
            plane.set_sample(x, 255 - j, v);
        }
    }

    for x in 0..Curve::SIZE as u32 {
        let v = curve.value(x as u8);
        if v > 0 {
            plane.set_sample(x, 255 - v as u32, 255);
        }
    }
}
