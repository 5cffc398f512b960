//! Fit-to-viewport metrics: the zoom floor and ceiling for an image.
//!
//! The floor is the aspect-preserving scale at which the whole image fits
//! inside the viewport, never upscaling an image that already fits. The
//! ceiling is native resolution. Both are derived from the image's intrinsic
//! size and the viewport size alone, and must be recomputed whenever either
//! changes.
//!
//! # Example
//!
//! ```
//! use zenzoom::{FitMetrics, Size};
//!
//! let fit = FitMetrics::compute(Size::new(4000.0, 3000.0), Size::new(1000.0, 800.0));
//!
//! // Width constrains: 1000 / 4000 = 0.25
//! assert_eq!(fit.min_scale, 0.25);
//! assert_eq!(fit.min_display_size, Size::new(1000.0, 750.0));
//! assert_eq!(fit.max_display_size, Size::new(4000.0, 3000.0));
//! // Zooming from fit size to native resolution is a 4× ratio.
//! assert_eq!(fit.max_scale_ratio(), 4.0);
//! ```

use core::fmt;

use crate::geometry::Size;

/// Zoom bounds derived from image and viewport sizes.
///
/// `min_scale ∈ (0, 1]` and `max_scale ≥ min_scale` for every value this
/// type hands out, degenerate or not.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitMetrics {
    /// Scale (relative to native pixels) at which the image fits the viewport.
    pub min_scale: f64,
    /// Scale (relative to native pixels) at which the image is shown 1:1.
    pub max_scale: f64,
    /// Image size at `min_scale`.
    pub min_display_size: Size,
    /// Image size at `max_scale`; the intrinsic size.
    pub max_display_size: Size,
}

impl FitMetrics {
    /// Placeholder for unusable geometry. Callers treat it as "no transform yet".
    pub const DEGENERATE: Self = Self {
        min_scale: 1.0,
        max_scale: 1.0,
        min_display_size: Size::ZERO,
        max_display_size: Size::ZERO,
    };

    /// Compute metrics, falling back to [`DEGENERATE`](Self::DEGENERATE) for
    /// zero, negative or non-finite dimensions.
    pub fn compute(image: Size, viewport: Size) -> Self {
        match Self::try_compute(image, viewport) {
            Ok(fit) => fit,
            Err(e) => {
                log::debug!("degenerate fit metrics: {e} (image {image:?}, viewport {viewport:?})");
                Self::DEGENERATE
            }
        }
    }

    /// Compute metrics, reporting which input was unusable.
    pub fn try_compute(image: Size, viewport: Size) -> Result<Self, GeometryError> {
        if !image.is_valid() {
            return Err(GeometryError::InvalidImageSize);
        }
        if !viewport.is_valid() {
            return Err(GeometryError::InvalidViewportSize);
        }

        // Never upscale to "fit" an image already smaller than the viewport.
        let fit_ratio = (viewport.width / image.width)
            .min(viewport.height / image.height)
            .min(1.0);

        let max_display_size = image;
        let min_display_size = image.scale(fit_ratio);
        let max_scale = (max_display_size.width / min_display_size.width)
            .min(max_display_size.height / min_display_size.height)
            * fit_ratio;

        Ok(Self {
            min_scale: fit_ratio,
            // Rounding can leave max_scale a hair under min_scale when
            // fit_ratio == 1.
            max_scale: max_scale.max(fit_ratio),
            min_display_size,
            max_display_size,
        })
    }

    /// The fit scale. Same as [`min_scale`](Self::min_scale).
    pub fn fit_ratio(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed `scale_ratio`: `max_scale / min_scale`.
    pub fn max_scale_ratio(&self) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }
        self.max_scale / self.min_scale
    }

    /// Whether these metrics came from unusable geometry.
    pub fn is_degenerate(&self) -> bool {
        !self.min_display_size.is_valid()
    }
}

impl Default for FitMetrics {
    fn default() -> Self {
        Self::DEGENERATE
    }
}

/// Why fit metrics could not be computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Image has a zero, negative or non-finite dimension.
    InvalidImageSize,
    /// Viewport has a zero, negative or non-finite dimension.
    InvalidViewportSize,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImageSize => f.write_str("image size must be finite and positive"),
            Self::InvalidViewportSize => f.write_str("viewport size must be finite and positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
