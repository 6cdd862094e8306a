//! Curve refinement: uniform collapse, gap interpolation, boundary
//! reflection, smoothing.

use crate::curve::Curve;
use crate::histogram::Histogram;
use crate::rounding::round_div;

const SIZE: usize = Curve::SIZE;

impl Histogram {
    /// Refines the raw curve into a fully-defined mapping.
    ///
    /// Runs the postprocessing stages in order:
    ///
    /// 1. If exactly one key value was observed, the curve collapses to that
    ///    value's mean everywhere and the remaining stages are skipped.
    /// 2. Undefined entries between defined neighbors are linearly
    ///    interpolated and become anchors for later entries.
    /// 3. Undefined entries outside the defined span are extrapolated by
    ///    reflecting the curve around its first/last defined entry until
    ///    both ends are defined.
    /// 4. A box filter of half-width `smoothing_window` smooths the result;
    ///    a window of 0 is a strict no-op.
    ///
    /// Marks every entry it writes as defined, so afterwards (outside the
    /// uniform-source case) every index has `count != 0`.
    pub fn refine(&mut self, smoothing_window: u32) -> Curve {
        let mut curve = self.raw_curve().into_values();

        if let Some(flat) = self.single_defined_index() {
            return Curve::constant(curve[flat]);
        }

        self.fill_gaps(&mut curve);
        self.extend_boundaries(&mut curve);

        if smoothing_window > 0 {
            smooth(&mut curve, smoothing_window);
        }

        Curve::from_values(curve)
    }

    /// The single defined index, if exactly one key value was observed.
    fn single_defined_index(&self) -> Option<usize> {
        let mut flat = None;
        for i in 0..SIZE {
            if self.div[i] != 0 {
                if flat.is_some() {
                    return None;
                }
                flat = Some(i);
            }
        }
        flat
    }

    /// Interpolates undefined entries that have defined neighbors on both
    /// sides. Single left-to-right pass; filled entries anchor later ones.
    fn fill_gaps(&mut self, curve: &mut [u8; SIZE]) {
        for i in 0..SIZE {
            if self.div[i] != 0 {
                continue;
            }

            let prev = (0..i).rev().find(|&p| self.div[p] != 0);
            let next = (i + 1..SIZE).find(|&n| self.div[n] != 0);

            if let (Some(prev), Some(next)) = (prev, next) {
                let rise = curve[next] as i64 - curve[prev] as i64;
                let value = (curve[prev] as i64
                    + round_div((i - prev) as i64 * rise, (next - prev) as i64))
                .clamp(0, 255) as u8;
                self.anchor(curve, i, value);
            }
        }
    }

    /// Extends the defined span to both boundaries by reflection.
    ///
    /// Each round reflects undefined entries below the first defined index
    /// (and above the last) around that index. After gap interpolation the
    /// defined span is contiguous, so every round extends it and the round
    /// cap is unreachable; it exists to bound the loop.
    fn extend_boundaries(&mut self, curve: &mut [u8; SIZE]) {
        for _ in 0..SIZE {
            if self.div[0] != 0 && self.div[SIZE - 1] != 0 {
                return;
            }

            if self.div[0] == 0 {
                let Some(first) = (0..SIZE).find(|&f| self.div[f] != 0) else {
                    return;
                };
                for i in 0..first {
                    let mirror = 2 * first - i;
                    if mirror < SIZE && self.div[mirror] != 0 {
                        let value =
                            (2 * curve[first] as i64 - curve[mirror] as i64).clamp(0, 255) as u8;
                        self.anchor(curve, i, value);
                    }
                }
            }

            if self.div[SIZE - 1] == 0 {
                let Some(last) = (0..SIZE).rev().find(|&l| self.div[l] != 0) else {
                    return;
                };
                for i in (last + 1..SIZE).rev() {
                    let mirror = 2 * last as isize - i as isize;
                    if mirror >= 0 && self.div[mirror as usize] != 0 {
                        let value = (2 * curve[last] as i64 - curve[mirror as usize] as i64)
                            .clamp(0, 255) as u8;
                        self.anchor(curve, i, value);
                    }
                }
            }
        }
    }

    /// Writes `value` at index `i` and marks it defined.
    #[inline]
    fn anchor(&mut self, curve: &mut [u8; SIZE], i: usize, value: u8) {
        curve[i] = value;
        self.sum[i] = value as u64;
        self.div[i] = 1;
    }
}

/// Box-smooths the curve with a half-open window `[-w, w)`.
///
/// The window is clipped to the table bounds, so edge entries average fewer
/// neighbors. Reads the pre-smoothing curve throughout.
fn smooth(curve: &mut [u8; SIZE], window: u32) {
    let w = window as isize;
    let prev = *curve;

    for i in 0..SIZE as isize {
        let mut sum = 0i64;
        let mut n = 0i64;
        for j in -w..w {
            let k = i + j;
            if (0..SIZE as isize).contains(&k) {
                sum += prev[k as usize] as i64;
                n += 1;
            }
        }
        curve[i as usize] = round_div(sum, n) as u8;
    }
}
