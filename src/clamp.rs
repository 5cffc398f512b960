//! Scale and offset bounds.
//!
//! An image may never be shown smaller than its fit size, larger than native
//! resolution, or panned so that it exposes more empty viewport than it
//! would at fit size. Each axis is handled independently: an axis on which
//! the scaled image fits is pinned to center, an axis on which it overflows
//! may pan by at most half the overflow in either direction.

use crate::fit::FitMetrics;
use crate::geometry::{Axis, Size, Vec2};

/// Legal offsets along one axis, `min ≤ max`, symmetric around zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetRange {
    pub min: f64,
    pub max: f64,
}

impl OffsetRange {
    /// The single point `0`.
    pub const CENTERED: Self = Self { min: 0.0, max: 0.0 };

    /// Clamp `value` into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.is_pinned() {
            return 0.0;
        }
        value.max(self.min).min(self.max)
    }

    /// Whether `value` is inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The axis cannot pan at all.
    pub fn is_pinned(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }
}

/// Legal offset range along `axis` at `scale_ratio`.
pub fn offset_range(axis: Axis, scale_ratio: f64, fit: &FitMetrics, viewport: Size) -> OffsetRange {
    let scaled = fit.min_display_size.along(axis) * scale_ratio;
    let view = viewport.along(axis);
    if scaled.is_nan() || scaled <= view {
        return OffsetRange::CENTERED;
    }
    let half_overflow = (scaled - view) / 2.0;
    OffsetRange {
        min: -half_overflow,
        max: half_overflow,
    }
}

/// Clamp `offset` per axis so the image at `scale_ratio` stays in bounds.
pub fn clamp_offset(offset: Vec2, scale_ratio: f64, fit: &FitMetrics, viewport: Size) -> Vec2 {
    let mut out = offset;
    for axis in Axis::BOTH {
        let range = offset_range(axis, scale_ratio, fit, viewport);
        out = out.with(axis, range.clamp(offset.along(axis)));
    }
    out
}

/// Clamp `scale_ratio` to `[1, max_scale / min_scale]`.
/// A NaN ratio (possible after a wild pinch stream) resets to `1`.
pub fn clamp_scale_ratio(scale_ratio: f64, fit: &FitMetrics) -> f64 {
    if scale_ratio.is_nan() {
        return 1.0;
    }
    scale_ratio.max(1.0).min(fit.max_scale_ratio())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4000×3000 in 1000×800: fit size 1000×750, ratio ceiling 4.
    fn landscape() -> (FitMetrics, Size) {
        let viewport = Size::new(1000.0, 800.0);
        (
            FitMetrics::compute(Size::new(4000.0, 3000.0), viewport),
            viewport,
        )
    }

    #[test]
    fn fit_size_pins_both_axes() {
        let (fit, vp) = landscape();
        let out = clamp_offset(Vec2::new(120.0, -40.0), 1.0, &fit, vp);
        assert_eq!(out, Vec2::ZERO);
    }

    #[test]
    fn exactly_filling_axis_is_pinned() {
        // At ratio 1 the width is exactly 1000 == viewport.
        let (fit, vp) = landscape();
        let r = offset_range(Axis::Horizontal, 1.0, &fit, vp);
        assert!(r.is_pinned());
    }

    #[test]
    fn overflowing_axis_allows_half_overflow() {
        let (fit, vp) = landscape();
        // ratio 2: 2000×1500 in 1000×800 → ±500, ±350
        let rx = offset_range(Axis::Horizontal, 2.0, &fit, vp);
        let ry = offset_range(Axis::Vertical, 2.0, &fit, vp);
        assert_eq!(rx, OffsetRange { min: -500.0, max: 500.0 });
        assert_eq!(ry, OffsetRange { min: -350.0, max: 350.0 });

        assert_eq!(
            clamp_offset(Vec2::new(900.0, -900.0), 2.0, &fit, vp),
            Vec2::new(500.0, -350.0)
        );
        assert_eq!(
            clamp_offset(Vec2::new(-12.5, 100.0), 2.0, &fit, vp),
            Vec2::new(-12.5, 100.0)
        );
    }

    #[test]
    fn axes_are_independent() {
        let (fit, vp) = landscape();
        // ratio 1.05: 1050×787.5 → x overflows by 50, y still fits.
        let out = clamp_offset(Vec2::new(40.0, 30.0), 1.05, &fit, vp);
        assert!((out.x - 25.0).abs() < 1e-9);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn scale_ratio_clamped_to_fit_and_native() {
        let (fit, _) = landscape();
        assert_eq!(clamp_scale_ratio(0.3, &fit), 1.0);
        assert_eq!(clamp_scale_ratio(2.5, &fit), 2.5);
        assert_eq!(clamp_scale_ratio(40.0, &fit), 4.0);
        assert_eq!(clamp_scale_ratio(-0.4, &fit), 1.0);
        assert_eq!(clamp_scale_ratio(f64::INFINITY, &fit), 4.0);
        assert_eq!(clamp_scale_ratio(f64::NAN, &fit), 1.0);
    }

    #[test]
    fn degenerate_fit_clamps_to_identity() {
        let fit = FitMetrics::DEGENERATE;
        let vp = Size::new(100.0, 100.0);
        assert_eq!(clamp_scale_ratio(3.0, &fit), 1.0);
        assert_eq!(clamp_offset(Vec2::new(5.0, 5.0), 3.0, &fit, vp), Vec2::ZERO);
    }

    #[test]
    fn range_contains() {
        let r = OffsetRange { min: -2.0, max: 2.0 };
        assert!(r.contains(0.0));
        assert!(r.contains(2.0));
        assert!(!r.contains(2.5));
        assert_eq!(r.clamp(-7.0), -2.0);
        assert!(OffsetRange::CENTERED.contains(0.0));
    }
}
