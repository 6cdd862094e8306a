//! Filter configuration.

use histmatch_core::PlanarFormat;

/// What the filter knows about a clip before seeing any frames.
///
/// A width or height of 0 marks a clip whose dimensions are not constant;
/// configuration rejects such clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipInfo {
    /// Pixel layout of the clip.
    pub format: PlanarFormat,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl ClipInfo {
    /// Creates a clip description.
    pub fn new(format: PlanarFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
        }
    }

    /// Whether the clip's dimensions are not constant.
    #[inline]
    pub fn is_variable(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// User-facing filter parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Use the raw conditional-mean curve without postprocessing.
    pub raw: bool,
    /// Draw the computed curves over the output frame.
    pub show: bool,
    /// Emit a standalone 256x256 curve visualization instead of a processed
    /// frame. Takes precedence over `show`.
    pub debug: bool,
    /// Half-width of the curve smoothing window; negative values are a
    /// configuration error.
    pub smoothing_window: i32,
    /// Channel indices to process. Unselected channels pass through.
    pub planes: Vec<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            raw: false,
            show: false,
            debug: false,
            smoothing_window: 8,
            planes: vec![0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_clip_detection() {
        let fmt = PlanarFormat::GRAY8;
        assert!(ClipInfo::new(fmt, 0, 480).is_variable());
        assert!(ClipInfo::new(fmt, 640, 0).is_variable());
        assert!(!ClipInfo::new(fmt, 640, 480).is_variable());
    }

    #[test]
    fn test_default_processes_primary_plane() {
        let config = FilterConfig::default();
        assert_eq!(config.planes, vec![0]);
        assert_eq!(config.smoothing_window, 8);
        assert!(!config.raw);
    }
}
