//! # histmatch-core
//!
//! Core types for 8-bit planar frame processing.
//!
//! This crate provides the foundational types used throughout the histmatch
//! workspace:
//!
//! - [`PlaneRef`], [`PlaneMut`] - Borrowed views over caller-owned sample buffers
//! - [`Plane`] - Owned plane buffer with row stride
//! - [`Frame`] - A set of planes described by a [`PlanarFormat`]
//! - [`PlanarFormat`] - Color family, sample depth and chroma subsampling
//!
//! ## Design Philosophy
//!
//! The engine built on top of this crate never owns frame memory: it reads
//! and writes through plane views whose bounds were validated at construction.
//! Owned [`Plane`]/[`Frame`] buffers exist for the orchestration layer and
//! tests, which play the role of the hosting pipeline.
//!
//! ## Memory Layout
//!
//! Planes store 8-bit samples in row-major order with a row stride that may
//! exceed the width:
//!
//! ```text
//! sample(x, y) = data[y * stride + x]
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. `histmatch-curve` and `histmatch-filter` build on it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod frame;
pub mod plane;

pub use error::{Error, Result};
pub use format::{ColorFamily, PlanarFormat, MAX_PLANES};
pub use frame::Frame;
pub use plane::{Plane, PlaneMut, PlaneRef};
