//! The transform state machine.
//!
//! A [`TransformReducer`] owns the zoom state of one viewer: the scale ratio
//! on top of fit size and the offset of the image center from the viewport
//! center. Gesture events mutate it synchronously; bounds are enforced when a
//! gesture ends, so the image may overshoot while a finger is down and snap
//! back on release.
//!
//! ```text
//!                 PinchChanged                  DragChanged
//!               ┌──────────────┐              ┌──────────────┐
//!               ▼              │              │              ▼
//!         PinchActive ─────────┴──── Idle ────┴──────── DragActive
//!               │  PinchEnded        ▲  ▲        DragEnded   │
//!               └────────────────────┘  └────────────────────┘
//!
//!         DoubleTap: Idle → Idle
//! ```
//!
//! # Example
//!
//! ```
//! use zenzoom::{GestureEvent, Size, TransformReducer, Vec2};
//!
//! let mut reducer = TransformReducer::new();
//! reducer.set_image_size(Size::new(4000.0, 3000.0));
//! reducer.set_viewport_size(Size::new(1000.0, 800.0));
//!
//! // Double tap zooms to native resolution (4× fit size here).
//! let state = reducer.apply(GestureEvent::DoubleTap).unwrap();
//! assert_eq!(state.scale_ratio, 4.0);
//!
//! // Drags further than the image allows are pulled back on release.
//! reducer.apply(GestureEvent::DragChanged { translation: Vec2::ZERO }).unwrap();
//! let state = reducer
//!     .apply(GestureEvent::DragEnded { translation: Vec2::new(5000.0, 0.0) })
//!     .unwrap();
//! assert_eq!(state.offset, Vec2::new(1500.0, 0.0));
//! ```

use core::fmt;

use crate::clamp::{OffsetRange, clamp_offset, clamp_scale_ratio, offset_range};
use crate::fit::FitMetrics;
use crate::geometry::{Axis, Size, Vec2};
use crate::tracker::GestureSampleTracker;

/// The mutable zoom state of a viewer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformState {
    /// Multiplier on top of the fit scale. `1` is fit-to-viewport.
    pub scale_ratio: f64,
    /// Image center relative to viewport center, in viewport points.
    pub offset: Vec2,
}

impl TransformState {
    /// Fit size, centered.
    pub const FIT: Self = Self {
        scale_ratio: 1.0,
        offset: Vec2::ZERO,
    };
}

impl Default for TransformState {
    fn default() -> Self {
        Self::FIT
    }
}

/// What the renderer applies to the fit-sized image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    /// Scale on top of the fit-sized image.
    pub scale_applied_to_fit_size: f64,
    /// Translation of the image center, in viewport points.
    pub offset: Vec2,
}

impl Transform {
    /// Scale relative to the image's native pixels.
    pub fn absolute_scale(&self, fit: &FitMetrics) -> f64 {
        fit.min_scale * self.scale_applied_to_fit_size
    }

    /// On-screen size of the image.
    pub fn display_size(&self, fit: &FitMetrics) -> Size {
        fit.min_display_size.scale(self.scale_applied_to_fit_size)
    }
}

impl From<TransformState> for Transform {
    fn from(state: TransformState) -> Self {
        Self {
            scale_applied_to_fit_size: state.scale_ratio,
            offset: state.offset,
        }
    }
}

/// Which continuous gesture, if any, is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    #[default]
    Idle,
    PinchActive,
    DragActive,
}

/// Gesture family of an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Pinch,
    Drag,
    DoubleTap,
}

/// One gesture callback. Pinch and drag values are cumulative since the
/// gesture began.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    PinchChanged { magnitude: f64 },
    PinchEnded { magnitude: f64 },
    DragChanged { translation: Vec2 },
    DragEnded { translation: Vec2 },
    DoubleTap,
}

impl GestureEvent {
    /// Gesture family.
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::PinchChanged { .. } | Self::PinchEnded { .. } => GestureKind::Pinch,
            Self::DragChanged { .. } | Self::DragEnded { .. } => GestureKind::Drag,
            Self::DoubleTap => GestureKind::DoubleTap,
        }
    }

    /// Whether this is the terminal callback of a pinch or drag.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::PinchEnded { .. } | Self::DragEnded { .. })
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::PinchChanged { magnitude } | Self::PinchEnded { magnitude } => {
                magnitude.is_finite()
            }
            Self::DragChanged { translation } | Self::DragEnded { translation } => {
                translation.is_finite()
            }
            Self::DoubleTap => true,
        }
    }
}

/// Why an event was not applied. State is untouched in every case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReducerError {
    /// Image or viewport size is missing or degenerate.
    GeometryUnavailable,
    /// The event belongs to a different gesture than the active one.
    OutOfSequence {
        event: GestureKind,
        phase: GesturePhase,
    },
    /// Pinch magnitude or drag translation was NaN or infinite.
    NonFiniteSample { event: GestureKind },
}

impl fmt::Display for ReducerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometryUnavailable => f.write_str("no usable image and viewport geometry"),
            Self::OutOfSequence { event, phase } => {
                write!(f, "{event:?} event rejected while {phase:?}")
            }
            Self::NonFiniteSample { event } => write!(f, "non-finite {event:?} sample"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReducerError {}

/// Owns the transform of one viewer and applies gesture events to it.
#[derive(Clone, Debug, Default)]
pub struct TransformReducer {
    image: Option<Size>,
    viewport: Option<Size>,
    fit: FitMetrics,
    state: TransformState,
    phase: GesturePhase,
    tracker: GestureSampleTracker,
}

impl TransformReducer {
    /// Reducer with no geometry yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reducer for a known image and viewport.
    pub fn with_geometry(image: Size, viewport: Size) -> Self {
        let mut reducer = Self::new();
        reducer.image = Some(image);
        reducer.viewport = Some(viewport);
        reducer.retarget();
        reducer
    }

    /// Record the image's intrinsic size. Resets the transform if it changed.
    pub fn set_image_size(&mut self, image: Size) {
        if self.image == Some(image) {
            return;
        }
        self.image = Some(image);
        self.retarget();
    }

    /// Record the viewport size. Resets the transform if it changed.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.retarget();
    }

    fn retarget(&mut self) {
        self.fit = match (self.image, self.viewport) {
            (Some(image), Some(viewport)) => FitMetrics::compute(image, viewport),
            _ => FitMetrics::DEGENERATE,
        };
        if self.phase != GesturePhase::Idle {
            log::debug!("geometry changed during {:?}; gesture aborted", self.phase);
        }
        log::debug!(
            "retarget: image {:?}, viewport {:?}, fit {:?}",
            self.image,
            self.viewport,
            self.fit
        );
        self.state = TransformState::FIT;
        self.phase = GesturePhase::Idle;
        self.tracker.reset();
    }

    /// Apply one gesture event and return the resulting state.
    pub fn apply(&mut self, event: GestureEvent) -> Result<TransformState, ReducerError> {
        if let Err(e) = self.admit(&event) {
            match e {
                ReducerError::OutOfSequence { .. } => log::warn!("{e}"),
                _ => log::debug!("{e}"),
            }
            return Err(e);
        }

        match event {
            GestureEvent::PinchChanged { magnitude } => {
                let ratio = self.tracker.pinch_changed(magnitude);
                self.state.scale_ratio *= ratio;
                self.phase = GesturePhase::PinchActive;
            }
            GestureEvent::PinchEnded { magnitude } => {
                let ratio = self.tracker.pinch_ended(magnitude);
                self.state.scale_ratio =
                    clamp_scale_ratio(self.state.scale_ratio * ratio, &self.fit);
                self.settle_offset();
                self.phase = GesturePhase::Idle;
            }
            GestureEvent::DragChanged { translation } => {
                let delta = self.tracker.drag_changed(translation);
                self.state.offset += delta * self.state.scale_ratio;
                self.phase = GesturePhase::DragActive;
            }
            GestureEvent::DragEnded { translation } => {
                let delta = self.tracker.drag_ended(translation);
                self.state.offset += delta * self.state.scale_ratio;
                self.settle_offset();
                self.phase = GesturePhase::Idle;
            }
            GestureEvent::DoubleTap => {
                self.state.scale_ratio = if self.state.scale_ratio > 1.0 {
                    1.0
                } else {
                    self.fit.max_scale_ratio()
                };
                self.state.offset = Vec2::ZERO;
            }
        }

        Ok(self.state)
    }

    /// Check an event against geometry and the current phase.
    fn admit(&self, event: &GestureEvent) -> Result<(), ReducerError> {
        if self.fit.is_degenerate() {
            return Err(ReducerError::GeometryUnavailable);
        }
        let kind = event.kind();
        if !event.is_finite() {
            return Err(ReducerError::NonFiniteSample { event: kind });
        }
        let allowed = matches!(
            (self.phase, kind),
            (GesturePhase::Idle, _)
                | (GesturePhase::PinchActive, GestureKind::Pinch)
                | (GesturePhase::DragActive, GestureKind::Drag)
        );
        if !allowed {
            return Err(ReducerError::OutOfSequence {
                event: kind,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn settle_offset(&mut self) {
        if let Some(viewport) = self.viewport {
            self.state.offset =
                clamp_offset(self.state.offset, self.state.scale_ratio, &self.fit, viewport);
        }
    }

    /// Current zoom state, including mid-gesture overshoot.
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Active gesture.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Metrics for the current geometry.
    pub fn fit(&self) -> &FitMetrics {
        &self.fit
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    /// Transform for the renderer, or `None` until geometry is usable.
    pub fn current_transform(&self) -> Option<Transform> {
        if self.fit.is_degenerate() {
            return None;
        }
        Some(self.state.into())
    }

    /// Legal offset range along `axis` at the current scale ratio.
    pub fn offset_range(&self, axis: Axis) -> OffsetRange {
        match self.viewport {
            Some(viewport) if !self.fit.is_degenerate() => {
                offset_range(axis, self.state.scale_ratio, &self.fit, viewport)
            }
            _ => OffsetRange::CENTERED,
        }
    }

    /// Whether the current state satisfies every at-rest bound.
    pub fn is_within_bounds(&self) -> bool {
        let ratio = self.state.scale_ratio;
        ratio >= 1.0
            && ratio <= self.fit.max_scale_ratio()
            && Axis::BOTH
                .iter()
                .all(|&axis| self.offset_range(axis).contains(self.state.offset.along(axis)))
    }
}
