//! The 256-entry lookup curve.

use histmatch_core::{PlaneMut, PlaneRef};

use crate::histogram::Histogram;

/// Options for building a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Skip all postprocessing and use the raw conditional-mean curve.
    pub raw: bool,
    /// Half-width of the smoothing box filter; 0 disables smoothing.
    pub smoothing_window: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            raw: false,
            smoothing_window: 8,
        }
    }
}

/// An immutable 256-entry mapping from input sample value to output value.
///
/// Built per frame by [`Curve::build`] and consumed by the independent
/// apply/render/export operations, which all take it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    values: [u8; Curve::SIZE],
}

impl Curve {
    /// Number of entries, one per possible 8-bit sample value.
    pub const SIZE: usize = 256;

    /// Builds the curve mapping `key` samples to co-located `value` samples.
    ///
    /// Accumulates the conditional-mean histogram over the two planes, then
    /// refines it unless raw mode is requested. Both planes must have the
    /// same width and height.
    pub fn build(key: &PlaneRef<'_>, value: &PlaneRef<'_>, options: &BuildOptions) -> Self {
        let mut hist = Histogram::accumulate(key, value);
        if options.raw {
            hist.raw_curve()
        } else {
            hist.refine(options.smoothing_window)
        }
    }

    /// The identity curve: every value maps to itself.
    pub fn identity() -> Self {
        let mut values = [0u8; Self::SIZE];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u8;
        }
        Self { values }
    }

    /// A constant curve: every value maps to `value`.
    pub fn constant(value: u8) -> Self {
        Self {
            values: [value; Self::SIZE],
        }
    }

    /// Wraps a raw table.
    pub fn from_values(values: [u8; Self::SIZE]) -> Self {
        Self { values }
    }

    /// The output value for input `v`.
    #[inline]
    pub fn value(&self, v: u8) -> u8 {
        self.values[v as usize]
    }

    /// The full table.
    #[inline]
    pub fn values(&self) -> &[u8; Self::SIZE] {
        &self.values
    }

    /// Consumes the curve, returning the table.
    #[inline]
    pub(crate) fn into_values(self) -> [u8; Self::SIZE] {
        self.values
    }

    /// Remaps every sample of `src` into `dst` through the curve.
    ///
    /// The planes must have the same width and height; strides may differ.
    pub fn apply(&self, src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>) {
        debug_assert_eq!(src.width(), dst.width());
        debug_assert_eq!(src.height(), dst.height());

        for y in 0..src.height() {
            for (d, &s) in dst.row_mut(y).iter_mut().zip(src.row(y)) {
                *d = self.values[s as usize];
            }
        }
    }

    /// Remaps every sample of `plane` through the curve, in place.
    pub fn apply_in_place(&self, plane: &mut PlaneMut<'_>) {
        for y in 0..plane.height() {
            for s in plane.row_mut(y) {
                *s = self.values[*s as usize];
            }
        }
    }
}
