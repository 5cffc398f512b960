//! Callback-style driver for a host view layer.
//!
//! The host forwards size changes and gesture callbacks to a [`Viewer`],
//! which runs them through a [`TransformReducer`] and pushes each resulting
//! [`Transform`] to a [`TransformSink`]. Animation is an explicit hint on that
//! push rather than something wrapped around every state change, so the
//! reducer never depends on a UI framework.
//!
//! # Example
//!
//! ```
//! use zenzoom::{Animation, Size, Transform, TransformSink, Vec2, Viewer};
//!
//! #[derive(Default)]
//! struct Last(Option<Transform>);
//!
//! impl TransformSink for Last {
//!     fn set_transform(&mut self, transform: Transform, _animation: Option<Animation>) {
//!         self.0 = Some(transform);
//!     }
//! }
//!
//! let mut viewer = Viewer::new(Last::default());
//! viewer.on_image_intrinsic_size_known(Size::new(2000.0, 1000.0));
//! viewer.on_viewport_size_changed(Size::new(500.0, 500.0));
//! viewer.on_double_tap().unwrap();
//!
//! let t = viewer.sink().0.unwrap();
//! assert_eq!(t.scale_applied_to_fit_size, 4.0);
//! assert_eq!(t.offset, Vec2::ZERO);
//! ```

use crate::geometry::{Size, Vec2};
use crate::reducer::{GestureEvent, ReducerError, Transform, TransformReducer};

/// How the renderer should move to a new transform. Durations in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Animation {
    /// Spring with a response time and damping fraction.
    Spring { response: f64, damping_fraction: f64 },
    /// Ease-in-out curve of fixed duration.
    EaseInOut { duration: f64 },
}

impl Animation {
    /// The spring used when a gesture settles: response 0.4 s, damping 0.9.
    pub const SETTLE: Self = Self::Spring {
        response: 0.4,
        damping_fraction: 0.9,
    };
}

/// Receives every transform the viewer produces.
pub trait TransformSink {
    /// Show the image with `transform`, optionally animating to it.
    fn set_transform(&mut self, transform: Transform, animation: Option<Animation>);

    /// Geometry became unusable; stop showing a transformed image.
    fn clear_transform(&mut self) {}
}

/// Animation choices for a [`Viewer`].
///
/// # Example
///
/// ```
/// use zenzoom::{Animation, ViewerOptions};
///
/// let options = ViewerOptions::new()
///     .live_animation(Some(Animation::EaseInOut { duration: 0.1 }))
///     .settle_animation(None);
/// assert_eq!(options.settle, None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewerOptions {
    /// Hint sent with `changed` callbacks. Default: none, follow the finger.
    pub live: Option<Animation>,
    /// Hint sent with gesture ends, double taps and geometry resets.
    /// Default: [`Animation::SETTLE`].
    pub settle: Option<Animation>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            live: None,
            settle: Some(Animation::SETTLE),
        }
    }
}

impl ViewerOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hint used while a gesture is in progress.
    pub fn live_animation(mut self, animation: Option<Animation>) -> Self {
        self.live = animation;
        self
    }

    /// Set the hint used when the transform settles.
    pub fn settle_animation(mut self, animation: Option<Animation>) -> Self {
        self.settle = animation;
        self
    }

    /// Never animate.
    pub fn no_animation(self) -> Self {
        self.live_animation(None).settle_animation(None)
    }
}

/// A [`TransformReducer`] wired to a [`TransformSink`].
#[derive(Debug)]
pub struct Viewer<S> {
    reducer: TransformReducer,
    options: ViewerOptions,
    sink: S,
}

impl<S: TransformSink> Viewer<S> {
    /// Viewer with default options and no geometry.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, ViewerOptions::default())
    }

    pub fn with_options(sink: S, options: ViewerOptions) -> Self {
        Self {
            reducer: TransformReducer::new(),
            options,
            sink,
        }
    }

    pub fn on_viewport_size_changed(&mut self, viewport: Size) {
        if self.reducer.viewport_size() == Some(viewport) {
            return;
        }
        self.reducer.set_viewport_size(viewport);
        self.publish_geometry();
    }

    pub fn on_image_intrinsic_size_known(&mut self, image: Size) {
        if self.reducer.image_size() == Some(image) {
            return;
        }
        self.reducer.set_image_size(image);
        self.publish_geometry();
    }

    pub fn on_pinch_changed(&mut self, magnitude: f64) -> Result<Transform, ReducerError> {
        self.dispatch(GestureEvent::PinchChanged { magnitude })
    }

    pub fn on_pinch_ended(&mut self, magnitude: f64) -> Result<Transform, ReducerError> {
        self.dispatch(GestureEvent::PinchEnded { magnitude })
    }

    pub fn on_drag_changed(&mut self, translation: Vec2) -> Result<Transform, ReducerError> {
        self.dispatch(GestureEvent::DragChanged { translation })
    }

    pub fn on_drag_ended(&mut self, translation: Vec2) -> Result<Transform, ReducerError> {
        self.dispatch(GestureEvent::DragEnded { translation })
    }

    pub fn on_double_tap(&mut self) -> Result<Transform, ReducerError> {
        self.dispatch(GestureEvent::DoubleTap)
    }

    /// Apply an event and push the result. Rejected events push nothing.
    pub fn dispatch(&mut self, event: GestureEvent) -> Result<Transform, ReducerError> {
        let transform: Transform = self.reducer.apply(event)?.into();
        let animation = match event {
            GestureEvent::PinchChanged { .. } | GestureEvent::DragChanged { .. } => {
                self.options.live
            }
            _ => self.options.settle,
        };
        self.sink.set_transform(transform, animation);
        Ok(transform)
    }

    fn publish_geometry(&mut self) {
        match self.reducer.current_transform() {
            Some(transform) => self.sink.set_transform(transform, self.options.settle),
            None => self.sink.clear_transform(),
        }
    }

    /// Transform for the renderer, or `None` until geometry is usable.
    pub fn current_transform(&self) -> Option<Transform> {
        self.reducer.current_transform()
    }

    pub fn reducer(&self) -> &TransformReducer {
        &self.reducer
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::GesturePhase;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Set(Transform, Option<Animation>),
        Clear,
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl TransformSink for Recorder {
        fn set_transform(&mut self, transform: Transform, animation: Option<Animation>) {
            self.0.push(Call::Set(transform, animation));
        }

        fn clear_transform(&mut self) {
            self.0.push(Call::Clear);
        }
    }

    fn fit_transform() -> Transform {
        Transform {
            scale_applied_to_fit_size: 1.0,
            offset: Vec2::ZERO,
        }
    }

    fn ready() -> Viewer<Recorder> {
        let mut v = Viewer::new(Recorder::default());
        v.on_image_intrinsic_size_known(Size::new(4000.0, 3000.0));
        v.on_viewport_size_changed(Size::new(1000.0, 800.0));
        v.sink_mut().0.clear();
        v
    }

    #[test]
    fn geometry_without_viewport_clears() {
        let mut v = Viewer::new(Recorder::default());
        v.on_image_intrinsic_size_known(Size::new(100.0, 100.0));
        assert_eq!(v.sink().0, vec![Call::Clear]);
        assert!(v.current_transform().is_none());
    }

    #[test]
    fn complete_geometry_publishes_fit() {
        let mut v = Viewer::new(Recorder::default());
        v.on_viewport_size_changed(Size::new(1000.0, 800.0));
        v.on_image_intrinsic_size_known(Size::new(4000.0, 3000.0));
        assert_eq!(
            v.sink().0,
            vec![
                Call::Clear,
                Call::Set(fit_transform(), Some(Animation::SETTLE))
            ]
        );
    }

    #[test]
    fn repeated_viewport_size_is_silent() {
        let mut v = ready();
        v.on_viewport_size_changed(Size::new(1000.0, 800.0));
        assert!(v.sink().0.is_empty());
    }

    #[test]
    fn live_and_settle_hints() {
        let mut v = ready();
        v.on_pinch_changed(1.0).unwrap();
        v.on_pinch_changed(1.5).unwrap();
        v.on_pinch_ended(1.5).unwrap();

        let hints: Vec<_> = v
            .sink()
            .0
            .iter()
            .map(|c| match c {
                Call::Set(_, a) => *a,
                Call::Clear => panic!("unexpected clear"),
            })
            .collect();
        assert_eq!(hints, vec![None, None, Some(Animation::SETTLE)]);
    }

    #[test]
    fn rejected_event_pushes_nothing() {
        let mut v = ready();
        v.on_drag_changed(Vec2::ZERO).unwrap();
        let pushed = v.sink().0.len();
        assert!(v.on_pinch_changed(1.0).is_err());
        assert!(v.on_double_tap().is_err());
        assert_eq!(v.sink().0.len(), pushed);
        assert_eq!(v.reducer().phase(), GesturePhase::DragActive);
    }

    #[test]
    fn returned_transform_matches_pushed() {
        let mut v = ready();
        let t = v.on_double_tap().unwrap();
        assert_eq!(v.sink().0.last(), Some(&Call::Set(t, Some(Animation::SETTLE))));
        assert_eq!(v.current_transform(), Some(t));
    }

    #[test]
    fn options_builder() {
        let o = ViewerOptions::new().no_animation();
        assert_eq!(o.live, None);
        assert_eq!(o.settle, None);

        let spring = Animation::Spring {
            response: 0.2,
            damping_fraction: 1.0,
        };
        let o = ViewerOptions::new().live_animation(Some(spring));
        assert_eq!(o.live, Some(spring));
        assert_eq!(o.settle, Some(Animation::SETTLE));
    }

    #[test]
    fn custom_options_are_used() {
        let ease = Animation::EaseInOut { duration: 0.25 };
        let mut v = Viewer::with_options(
            Recorder::default(),
            ViewerOptions::new().settle_animation(Some(ease)),
        );
        v.on_image_intrinsic_size_known(Size::new(4000.0, 3000.0));
        v.on_viewport_size_changed(Size::new(1000.0, 800.0));
        v.on_double_tap().unwrap();
        assert!(matches!(v.sink().0.last(), Some(Call::Set(_, Some(a))) if *a == ease));
        assert_eq!(v.options().settle, Some(ease));
        assert_eq!(v.into_sink().0.len(), 3);
    }
}
