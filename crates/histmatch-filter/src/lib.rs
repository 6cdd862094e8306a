//! # histmatch-filter
//!
//! Frame-level orchestration of the histogram-matching curve engine.
//!
//! This crate plays the role the hosting video pipeline sees: it validates a
//! [`FilterConfig`] against the clips' [`ClipInfo`] descriptions up front
//! (every invalid configuration is a distinct [`FilterError`], and no filter
//! is constructed), then produces one output [`Frame`] per call from three
//! input frames:
//!
//! - **normal**: per selected channel, build the curve from the first two
//!   clips and apply it to the third; unselected channels pass through from
//!   the third clip unmodified. With `show`, the curves are drawn over the
//!   output's primary plane.
//! - **debug**: a standalone 256x256 frame visualizing the curve of the
//!   single selected channel.
//!
//! # Usage
//!
//! ```rust
//! use histmatch_core::{Frame, PlanarFormat};
//! use histmatch_filter::{ClipInfo, FilterConfig, MatchHistogram};
//!
//! let info = ClipInfo::new(PlanarFormat::GRAY8, 64, 64);
//! let filter = MatchHistogram::new(FilterConfig::default(), info, info, None)?;
//!
//! let reference = Frame::new(PlanarFormat::GRAY8, 64, 64);
//! let source = Frame::new(PlanarFormat::GRAY8, 64, 64);
//! let out = filter.process_frame(&source, &reference, &source);
//! # Ok::<(), histmatch_filter::FilterError>(())
//! ```
//!
//! Each `process_frame` call is a pure function of its inputs; the filter
//! holds only immutable configuration, so one instance can serve frames from
//! multiple worker threads without locking. With the default `parallel`
//! feature the channels of a single frame are processed on the rayon pool.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod filter;

pub use config::{ClipInfo, FilterConfig};
pub use error::FilterError;
pub use filter::{MatchHistogram, SHOW_MARKERS};
