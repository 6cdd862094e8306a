//! The histogram-matching filter.

use histmatch_core::{Frame, Plane, PlanarFormat, MAX_PLANES};
use histmatch_curve::{render, BuildOptions, Curve, Histogram};

use crate::config::{ClipInfo, FilterConfig};
use crate::error::FilterError;

/// Overlay marker intensity per channel, so curves drawn on one plane stay
/// distinguishable.
pub const SHOW_MARKERS: [u8; MAX_PLANES] = [235, 160, 96];

/// A validated histogram-matching filter.
///
/// Constructed by [`MatchHistogram::new`], which checks the whole
/// configuration against the clip descriptions and refuses to build a
/// partial filter. After construction, [`process_frame`] is a pure function
/// of its input frames: the filter itself holds only immutable
/// configuration.
///
/// [`process_frame`]: MatchHistogram::process_frame
#[derive(Debug, Clone)]
pub struct MatchHistogram {
    options: BuildOptions,
    show: bool,
    debug: bool,
    process: [bool; MAX_PLANES],
    format: PlanarFormat,
    input: ClipInfo,
    output: ClipInfo,
}

impl MatchHistogram {
    /// Validates the configuration and builds the filter.
    ///
    /// `clip1` is matched against `clip2`; the curve is applied to `clip3`,
    /// which defaults to `clip1` when omitted. `debug` takes precedence over
    /// `show`.
    ///
    /// # Errors
    ///
    /// Every structurally invalid request is rejected with a distinct
    /// [`FilterError`]; see its variants for the full list.
    pub fn new(
        config: FilterConfig,
        clip1: ClipInfo,
        clip2: ClipInfo,
        clip3: Option<ClipInfo>,
    ) -> Result<Self, FilterError> {
        let show = config.show && !config.debug;

        if config.smoothing_window < 0 {
            return Err(FilterError::NegativeSmoothingWindow(
                config.smoothing_window,
            ));
        }

        let clip3 = clip3.unwrap_or(clip1);

        if clip1.format != clip2.format || clip1.format != clip3.format {
            return Err(FilterError::FormatMismatch);
        }

        if clip1.width != clip2.width || clip1.height != clip2.height {
            return Err(FilterError::DimensionMismatch(
                clip1.width,
                clip1.height,
                clip2.width,
                clip2.height,
            ));
        }

        if clip1.is_variable() || clip3.is_variable() {
            return Err(FilterError::VariableClip);
        }

        if clip1.format.is_rgb() || clip1.format.bits_per_sample > 8 {
            return Err(FilterError::UnsupportedFormat);
        }

        let num_planes = clip1.format.num_planes();
        let mut process = [false; MAX_PLANES];
        if config.planes.is_empty() {
            process[0] = true;
        }
        for &p in &config.planes {
            if p >= num_planes {
                return Err(FilterError::PlaneIndexOutOfRange {
                    index: p,
                    planes: num_planes,
                });
            }
            if process[p] {
                return Err(FilterError::PlaneSelectedTwice(p));
            }
            process[p] = true;
        }

        if show
            && (clip1.width < 256
                || clip1.height < 256
                || clip3.width < 256
                || clip3.height < 256)
        {
            return Err(FilterError::FrameTooSmallForShow);
        }

        if config.debug && process.iter().filter(|&&p| p).count() > 1 {
            return Err(FilterError::MultiplePlanesInDebug);
        }

        let output = if config.debug {
            ClipInfo::new(clip1.format, 256, 256)
        } else {
            clip3
        };

        Ok(Self {
            options: BuildOptions {
                raw: config.raw,
                smoothing_window: config.smoothing_window as u32,
            },
            show,
            debug: config.debug,
            process,
            format: clip1.format,
            input: clip1,
            output,
        })
    }

    /// Geometry and format of the frames this filter produces.
    #[inline]
    pub fn output_info(&self) -> ClipInfo {
        self.output
    }

    /// Whether channel `p` is processed (as opposed to passed through).
    #[inline]
    pub fn processes_plane(&self, p: usize) -> bool {
        self.process[p]
    }

    /// Produces one output frame.
    ///
    /// The curve for each selected channel is derived from `src1` (key)
    /// against `src2` (value) and applied to `src3`; unselected channels
    /// are copied from `src3`. In debug mode the result is instead a
    /// 256x256 visualization of the single selected channel's curve, and
    /// `src3` is unused.
    ///
    /// The frames must match the configured clip geometry; this is the
    /// caller's contract, checked only in debug builds.
    pub fn process_frame(&self, src1: &Frame, src2: &Frame, src3: &Frame) -> Frame {
        debug_assert_eq!(src1.format(), self.format);
        debug_assert_eq!(src2.format(), self.format);
        debug_assert_eq!((src1.width(), src1.height()), (self.input.width, self.input.height));
        debug_assert_eq!((src2.width(), src2.height()), (self.input.width, self.input.height));

        if self.debug {
            self.render_debug_frame(src1, src2)
        } else {
            self.process_normal_frame(src1, src2, src3)
        }
    }

    /// Builds the curve for one channel, logging accumulator statistics.
    fn build_curve(&self, key: &Plane, value: &Plane, plane: usize) -> Curve {
        let mut hist = Histogram::accumulate(&key.view(), &value.view());
        tracing::debug!(
            plane,
            observed = hist.defined_count(),
            raw = self.options.raw,
            "accumulated histogram"
        );
        if self.options.raw {
            hist.raw_curve()
        } else {
            hist.refine(self.options.smoothing_window)
        }
    }

    fn render_debug_frame(&self, src1: &Frame, src2: &Frame) -> Frame {
        let mut dst = Frame::new(self.format, self.output.width, self.output.height);
        for (p, plane) in dst.planes_mut().iter_mut().enumerate() {
            plane.fill(if p == 0 { 0 } else { 128 });
        }

        if let Some(p) = (0..self.format.num_planes()).find(|&p| self.process[p]) {
            let curve = self.build_curve(src1.plane(p), src2.plane(p), p);
            render::render_debug(&curve, &mut dst.plane_mut(0).view_mut());
        }
        dst
    }

    fn process_normal_frame(&self, src1: &Frame, src2: &Frame, src3: &Frame) -> Frame {
        debug_assert_eq!(src3.format(), self.format);
        debug_assert_eq!((src3.width(), src3.height()), (self.output.width, self.output.height));

        let mut dst = Frame::new(self.format, self.output.width, self.output.height);

        #[cfg(feature = "parallel")]
        let curves: Vec<Option<Curve>> = {
            use rayon::prelude::*;
            dst.planes_mut()
                .par_iter_mut()
                .enumerate()
                .map(|(p, out)| self.process_plane(p, out, src1, src2, src3))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let curves: Vec<Option<Curve>> = dst
            .planes_mut()
            .iter_mut()
            .enumerate()
            .map(|(p, out)| self.process_plane(p, out, src1, src2, src3))
            .collect();

        if self.show {
            for (p, plane) in dst.planes_mut().iter_mut().enumerate() {
                let (rw, rh) = self.format.plane_dimensions(p, 256, 256);
                plane
                    .view_mut()
                    .fill_region(rw, rh, if p == 0 { 16 } else { 128 });
            }
            let primary = dst.plane_mut(0);
            for (p, curve) in curves.iter().enumerate() {
                if let Some(curve) = curve {
                    render::overlay(curve, &mut primary.view_mut(), SHOW_MARKERS[p]);
                }
            }
        }

        dst
    }

    /// Fills one output plane: matched remap for selected channels,
    /// pass-through copy otherwise. Returns the curve so `show` can draw it.
    fn process_plane(
        &self,
        p: usize,
        out: &mut Plane,
        src1: &Frame,
        src2: &Frame,
        src3: &Frame,
    ) -> Option<Curve> {
        if self.process[p] {
            let curve = self.build_curve(src1.plane(p), src2.plane(p), p);
            curve.apply(&src3.plane(p).view(), &mut out.view_mut());
            Some(curve)
        } else {
            out.copy_from(&src3.plane(p).view());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> ClipInfo {
        ClipInfo::new(PlanarFormat::GRAY8, width, height)
    }

    fn yuv(width: u32, height: u32) -> ClipInfo {
        ClipInfo::new(PlanarFormat::YUV420P8, width, height)
    }

    #[test]
    fn test_rejects_negative_smoothing_window() {
        let config = FilterConfig {
            smoothing_window: -1,
            ..FilterConfig::default()
        };
        let err = MatchHistogram::new(config, gray(64, 64), gray(64, 64), None).unwrap_err();
        assert_eq!(err, FilterError::NegativeSmoothingWindow(-1));
    }

    #[test]
    fn test_rejects_format_mismatch() {
        let err = MatchHistogram::new(FilterConfig::default(), gray(64, 64), yuv(64, 64), None)
            .unwrap_err();
        assert_eq!(err, FilterError::FormatMismatch);
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let err = MatchHistogram::new(FilterConfig::default(), gray(64, 64), gray(32, 64), None)
            .unwrap_err();
        assert_eq!(err, FilterError::DimensionMismatch(64, 64, 32, 64));
    }

    #[test]
    fn test_rejects_variable_dimensions() {
        let err = MatchHistogram::new(FilterConfig::default(), gray(0, 0), gray(0, 0), None)
            .unwrap_err();
        assert_eq!(err, FilterError::VariableClip);
    }

    #[test]
    fn test_rejects_rgb_and_deep_formats() {
        let rgb = ClipInfo::new(PlanarFormat::RGB24, 64, 64);
        let err = MatchHistogram::new(FilterConfig::default(), rgb, rgb, None).unwrap_err();
        assert_eq!(err, FilterError::UnsupportedFormat);

        let mut deep = PlanarFormat::GRAY8;
        deep.bits_per_sample = 16;
        let info = ClipInfo::new(deep, 64, 64);
        let err = MatchHistogram::new(FilterConfig::default(), info, info, None).unwrap_err();
        assert_eq!(err, FilterError::UnsupportedFormat);
    }

    #[test]
    fn test_rejects_plane_out_of_range() {
        let config = FilterConfig {
            planes: vec![1],
            ..FilterConfig::default()
        };
        let err = MatchHistogram::new(config, gray(64, 64), gray(64, 64), None).unwrap_err();
        assert_eq!(
            err,
            FilterError::PlaneIndexOutOfRange {
                index: 1,
                planes: 1
            }
        );
    }

    #[test]
    fn test_rejects_plane_selected_twice() {
        let config = FilterConfig {
            planes: vec![0, 1, 0],
            ..FilterConfig::default()
        };
        let err = MatchHistogram::new(config, yuv(64, 64), yuv(64, 64), None).unwrap_err();
        assert_eq!(err, FilterError::PlaneSelectedTwice(0));
    }

    #[test]
    fn test_rejects_small_frames_with_show() {
        let config = FilterConfig {
            show: true,
            ..FilterConfig::default()
        };
        let err = MatchHistogram::new(config, gray(128, 128), gray(128, 128), None).unwrap_err();
        assert_eq!(err, FilterError::FrameTooSmallForShow);
    }

    #[test]
    fn test_rejects_multiple_planes_in_debug() {
        let config = FilterConfig {
            debug: true,
            planes: vec![0, 1],
            ..FilterConfig::default()
        };
        let err = MatchHistogram::new(config, yuv(64, 64), yuv(64, 64), None).unwrap_err();
        assert_eq!(err, FilterError::MultiplePlanesInDebug);
    }

    #[test]
    fn test_debug_disables_show_and_resizes_output() {
        let config = FilterConfig {
            debug: true,
            show: true,
            ..FilterConfig::default()
        };
        // show would reject 64x64 clips, but debug takes precedence.
        let filter = MatchHistogram::new(config, gray(64, 64), gray(64, 64), None).unwrap();
        let out = filter.output_info();
        assert_eq!((out.width, out.height), (256, 256));
    }

    #[test]
    fn test_output_follows_third_clip() {
        let filter = MatchHistogram::new(
            FilterConfig::default(),
            gray(64, 64),
            gray(64, 64),
            Some(gray(320, 240)),
        )
        .unwrap();
        let out = filter.output_info();
        assert_eq!((out.width, out.height), (320, 240));
    }

    #[test]
    fn test_empty_plane_selection_defaults_to_primary() {
        let config = FilterConfig {
            planes: vec![],
            ..FilterConfig::default()
        };
        let filter = MatchHistogram::new(config, yuv(64, 64), yuv(64, 64), None).unwrap();
        assert!(filter.processes_plane(0));
        assert!(!filter.processes_plane(1));
        assert!(!filter.processes_plane(2));
    }
}
