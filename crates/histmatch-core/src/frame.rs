//! Owned frames: a set of planes described by a [`PlanarFormat`].

use crate::format::PlanarFormat;
use crate::plane::Plane;

/// An owned frame of up to three planes.
///
/// Plane dimensions are derived from the frame dimensions and the format's
/// chroma subsampling. Frames are created zero-filled; the orchestration
/// layer populates them per output frame.
#[derive(Debug, Clone)]
pub struct Frame {
    format: PlanarFormat,
    width: u32,
    height: u32,
    planes: Vec<Plane>,
}

impl Frame {
    /// Allocates a zero-filled frame.
    pub fn new(format: PlanarFormat, width: u32, height: u32) -> Self {
        let planes = (0..format.num_planes())
            .map(|p| {
                let (w, h) = format.plane_dimensions(p, width, height);
                Plane::new(w, h)
            })
            .collect();
        Self {
            format,
            width,
            height,
            planes,
        }
    }

    /// The frame's format.
    #[inline]
    pub fn format(&self) -> PlanarFormat {
        self.format
    }

    /// Frame width in pixels (primary plane width).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels (primary plane height).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of planes.
    #[inline]
    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }

    /// Borrows plane `p`.
    #[inline]
    pub fn plane(&self, p: usize) -> &Plane {
        &self.planes[p]
    }

    /// Mutably borrows plane `p`.
    #[inline]
    pub fn plane_mut(&mut self, p: usize) -> &mut Plane {
        &mut self.planes[p]
    }

    /// Iterates over the planes.
    #[inline]
    pub fn planes(&self) -> impl Iterator<Item = &Plane> {
        self.planes.iter()
    }

    /// The planes as a mutable slice, for independent per-channel work.
    #[inline]
    pub fn planes_mut(&mut self) -> &mut [Plane] {
        &mut self.planes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsampled_plane_allocation() {
        let frame = Frame::new(PlanarFormat::YUV420P8, 640, 480);
        assert_eq!(frame.num_planes(), 3);
        assert_eq!(frame.plane(0).width(), 640);
        assert_eq!(frame.plane(1).width(), 320);
        assert_eq!(frame.plane(2).height(), 240);
    }

    #[test]
    fn test_gray_frame_has_one_plane() {
        let frame = Frame::new(PlanarFormat::GRAY8, 16, 16);
        assert_eq!(frame.num_planes(), 1);
    }
}
