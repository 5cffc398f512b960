//! Cumulative-to-incremental conversion of gesture samples.
//!
//! Platform gesture recognizers report pinch magnitude and drag translation
//! as running totals since the gesture began. Applying those totals on every
//! callback would compound them, so each sample is diffed against the
//! previous one of the same gesture. Memory is cleared on the terminal
//! callback so the next gesture starts from a neutral delta.

use crate::geometry::Vec2;

/// Per-gesture memory of the last reported sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureSampleTracker {
    last_magnitude: Option<f64>,
    last_translation: Option<Vec2>,
}

impl GestureSampleTracker {
    /// Tracker with no gesture in progress.
    pub const fn new() -> Self {
        Self {
            last_magnitude: None,
            last_translation: None,
        }
    }

    /// Incremental ratio for a pinch sample: `1 + (magnitude - last)`,
    /// or `1` for the first sample of a gesture.
    pub fn pinch_changed(&mut self, magnitude: f64) -> f64 {
        let ratio = match self.last_magnitude {
            Some(last) => 1.0 + (magnitude - last),
            None => 1.0,
        };
        self.last_magnitude = Some(magnitude);
        log::trace!("pinch sample {magnitude} -> ratio {ratio}");
        ratio
    }

    /// Final incremental ratio for a pinch. Clears pinch memory.
    pub fn pinch_ended(&mut self, magnitude: f64) -> f64 {
        let ratio = match self.last_magnitude.take() {
            Some(last) => 1.0 + (magnitude - last),
            None => 1.0,
        };
        log::trace!("pinch end {magnitude} -> ratio {ratio}");
        ratio
    }

    /// Incremental translation for a drag sample: `translation - last`,
    /// or zero for the first sample of a gesture.
    pub fn drag_changed(&mut self, translation: Vec2) -> Vec2 {
        let delta = match self.last_translation {
            Some(last) => translation - last,
            None => Vec2::ZERO,
        };
        self.last_translation = Some(translation);
        log::trace!("drag sample {translation:?} -> delta {delta:?}");
        delta
    }

    /// Final incremental translation for a drag. Clears drag memory.
    pub fn drag_ended(&mut self, translation: Vec2) -> Vec2 {
        let delta = match self.last_translation.take() {
            Some(last) => translation - last,
            None => Vec2::ZERO,
        };
        log::trace!("drag end {translation:?} -> delta {delta:?}");
        delta
    }

    /// Forget both gestures.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether a pinch sample is remembered.
    pub fn is_tracking_pinch(&self) -> bool {
        self.last_magnitude.is_some()
    }

    /// Whether a drag sample is remembered.
    pub fn is_tracking_drag(&self) -> bool {
        self.last_translation.is_some()
    }
}
