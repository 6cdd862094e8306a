//! # histmatch-curve
//!
//! Histogram-matching curve engine.
//!
//! Given two equally-shaped 8-bit planes, this crate derives a 256-entry
//! lookup table (the *curve*) mapping each sample value of the first plane to
//! the rounded mean of co-located samples in the second plane, refines it
//! into a fully-defined smooth mapping, and applies, renders, or exports it.
//!
//! # Pipeline
//!
//! - [`Histogram::accumulate`] - conditional-mean accumulation over two planes
//! - [`Histogram::refine`] - gap interpolation, boundary reflection, smoothing
//! - [`Curve::apply`] / [`Curve::apply_in_place`] - byte-wise remapping
//! - [`render::overlay`] / [`render::render_debug`] - curve visualization
//! - [`export`] - `.cube` / CSV serialization
//!
//! [`Curve::build`] runs accumulation and (unless raw mode is requested)
//! refinement in one call.
//!
//! # Usage
//!
//! ```rust
//! use histmatch_core::Plane;
//! use histmatch_curve::{BuildOptions, Curve};
//!
//! let reference = Plane::new(64, 64);
//! let source = Plane::new(64, 64);
//!
//! let curve = Curve::build(&source.view(), &reference.view(), &BuildOptions::default());
//! let mut out = Plane::new(64, 64);
//! curve.apply(&source.view(), &mut out.view_mut());
//! ```
//!
//! Every build is a pure function of its input planes and options: only
//! transient accumulator state is allocated, nothing is shared across calls,
//! so concurrent builds for different frames need no locking.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod error;
mod histogram;
mod postprocess;
mod rounding;

pub mod export;
pub mod render;

pub use curve::{BuildOptions, Curve};
pub use error::{CurveError, CurveResult};
pub use histogram::Histogram;
pub use rounding::round_div;
