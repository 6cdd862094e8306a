//! Planar format descriptors.
//!
//! A [`PlanarFormat`] captures what the engine needs to know about a clip's
//! pixel layout: the color family, the sample depth, and the chroma
//! subsampling factors that shrink secondary planes relative to the frame.
//!
//! # Usage
//!
//! ```rust
//! use histmatch_core::PlanarFormat;
//!
//! let fmt = PlanarFormat::YUV420P8;
//! assert_eq!(fmt.num_planes(), 3);
//! assert_eq!(fmt.plane_dimensions(1, 1920, 1080), (960, 540));
//! ```

/// Maximum number of planes a frame can carry.
pub const MAX_PLANES: usize = 3;

/// Color family of a planar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Single-plane grayscale.
    Gray,
    /// Luma plus two chroma planes.
    Yuv,
    /// Three correlated color planes.
    ///
    /// RGB is representable so configuration can reject it with a precise
    /// message; the matching engine itself only accepts Gray and Yuv.
    Rgb,
}

/// Describes the planar layout of a clip.
///
/// Secondary (chroma) planes are subsampled by `1 << sub_w` horizontally and
/// `1 << sub_h` vertically relative to the frame dimensions. The primary
/// plane always has the full frame dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanarFormat {
    /// Color family.
    pub family: ColorFamily,
    /// Bits per sample. The engine requires exactly 8.
    pub bits_per_sample: u32,
    /// Log2 horizontal subsampling of secondary planes.
    pub sub_w: u32,
    /// Log2 vertical subsampling of secondary planes.
    pub sub_h: u32,
}

impl PlanarFormat {
    /// 8-bit single-plane grayscale.
    pub const GRAY8: Self = Self {
        family: ColorFamily::Gray,
        bits_per_sample: 8,
        sub_w: 0,
        sub_h: 0,
    };

    /// 8-bit 4:2:0 YUV.
    pub const YUV420P8: Self = Self {
        family: ColorFamily::Yuv,
        bits_per_sample: 8,
        sub_w: 1,
        sub_h: 1,
    };

    /// 8-bit 4:2:2 YUV.
    pub const YUV422P8: Self = Self {
        family: ColorFamily::Yuv,
        bits_per_sample: 8,
        sub_w: 1,
        sub_h: 0,
    };

    /// 8-bit 4:4:4 YUV.
    pub const YUV444P8: Self = Self {
        family: ColorFamily::Yuv,
        bits_per_sample: 8,
        sub_w: 0,
        sub_h: 0,
    };

    /// 8-bit planar RGB. Rejected by the filter at configuration time.
    pub const RGB24: Self = Self {
        family: ColorFamily::Rgb,
        bits_per_sample: 8,
        sub_w: 0,
        sub_h: 0,
    };

    /// Number of planes in this format.
    #[inline]
    pub const fn num_planes(&self) -> usize {
        match self.family {
            ColorFamily::Gray => 1,
            ColorFamily::Yuv | ColorFamily::Rgb => 3,
        }
    }

    /// Whether this is an RGB family format.
    #[inline]
    pub const fn is_rgb(&self) -> bool {
        matches!(self.family, ColorFamily::Rgb)
    }

    /// Dimensions of one plane for a frame of `width` x `height`.
    ///
    /// Plane 0 is full size; secondary planes are shrunk by the subsampling
    /// factors.
    #[inline]
    pub const fn plane_dimensions(&self, plane: usize, width: u32, height: u32) -> (u32, u32) {
        if plane == 0 {
            (width, height)
        } else {
            (width >> self.sub_w, height >> self.sub_h)
        }
    }
}
