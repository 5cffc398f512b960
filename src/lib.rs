//! Pinch, pan and double-tap transform engine for image viewers.
//!
//! Turns a stream of gesture callbacks into a bounded scale + offset for an
//! image shown inside a viewport. Pure geometry: no rendering, no gesture
//! recognition, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Sizes, vectors, axes
//! - [`fit`] — Fit-to-viewport scale floor and native-resolution ceiling
//! - [`tracker`] — Cumulative gesture samples to per-callback deltas
//! - [`clamp`] — Scale and offset bounds
//! - [`reducer`] — The transform state machine
//! - [`viewer`] — Callback driver that pushes transforms to a renderer
//! - `svg` — Debug visualization (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod clamp;
pub mod fit;
pub mod geometry;
pub mod reducer;
#[cfg(feature = "svg")]
pub mod svg;
pub mod tracker;
pub mod viewer;

pub use clamp::{OffsetRange, clamp_offset, clamp_scale_ratio, offset_range};
pub use fit::{FitMetrics, GeometryError};
pub use geometry::{Axis, Size, Vec2};
pub use reducer::{
    GestureEvent, GestureKind, GesturePhase, ReducerError, Transform, TransformReducer,
    TransformState,
};
pub use tracker::GestureSampleTracker;
pub use viewer::{Animation, TransformSink, Viewer, ViewerOptions};
