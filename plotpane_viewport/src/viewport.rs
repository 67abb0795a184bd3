// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};

/// Smallest world-space extent a zoom may leave on either axis.
///
/// Zoom-in requests that would shrink `range_x` or `range_y` to this value or
/// below are rejected as a whole, so repeated zoom-in converges and then
/// becomes a no-op.
pub const MIN_RANGE: f64 = 1e-9;

/// Validation failure for a [`ViewportBounds`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// `left >= right`.
    EmptyHorizontalRange,
    /// `bottom >= top`.
    EmptyVerticalRange,
    /// One of the bounds is NaN or infinite.
    NonFinite,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHorizontalRange => write!(f, "viewport bounds require left < right"),
            Self::EmptyVerticalRange => write!(f, "viewport bounds require bottom < top"),
            Self::NonFinite => write!(f, "viewport bounds must be finite"),
        }
    }
}

impl core::error::Error for BoundsError {}

/// The visible world-space rectangle, as four explicit bounds.
///
/// Invariant: `left < right` and `bottom < top`. Values constructed through
/// [`ViewportBounds::new`] are validated; the pan/zoom operations on
/// [`Viewport`] preserve the invariant by construction.
///
/// This is a plain `Copy` value: the gesture layer stores one as its drag
/// anchor and the renderer copies one per frame as its consistent view of
/// the world window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    /// Minimum visible world x.
    pub left: f64,
    /// Maximum visible world x.
    pub right: f64,
    /// Maximum visible world y.
    pub top: f64,
    /// Minimum visible world y.
    pub bottom: f64,
}

impl ViewportBounds {
    /// Creates validated bounds.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, BoundsError> {
        if !(left.is_finite() && right.is_finite() && top.is_finite() && bottom.is_finite()) {
            return Err(BoundsError::NonFinite);
        }
        if left >= right {
            return Err(BoundsError::EmptyHorizontalRange);
        }
        if bottom >= top {
            return Err(BoundsError::EmptyVerticalRange);
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Visible world-space width.
    #[must_use]
    pub fn range_x(&self) -> f64 {
        self.right - self.left
    }

    /// Visible world-space height.
    #[must_use]
    pub fn range_y(&self) -> f64 {
        self.top - self.bottom
    }

    /// Returns these bounds shifted by a world-space delta.
    ///
    /// Shifting moves all four bounds by the same amount, so the ranges are
    /// preserved and the invariant cannot break.
    #[must_use]
    pub fn shifted(self, delta: Vec2) -> Self {
        Self {
            left: self.left + delta.x,
            right: self.right + delta.x,
            top: self.top + delta.y,
            bottom: self.bottom + delta.y,
        }
    }

    /// Converts a world-space point into screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, p: Point, size: ScreenSize) -> Point {
        Point::new(
            (p.x - self.left) * size.width / self.range_x(),
            (self.top - p.y) * size.height / self.range_y(),
        )
    }

    /// Converts a screen-pixel point into world space.
    #[must_use]
    pub fn screen_to_world(&self, p: Point, size: ScreenSize) -> Point {
        Point::new(
            self.left + p.x * self.range_x() / size.width,
            self.top - p.y * self.range_y() / size.height,
        )
    }

    /// Converts a screen-pixel delta into a world-space delta.
    ///
    /// The vertical component flips sign: screen y grows downward, world y
    /// grows upward.
    #[must_use]
    pub fn screen_delta_to_world(&self, delta: Vec2, size: ScreenSize) -> Vec2 {
        Vec2::new(
            delta.x * self.range_x() / size.width,
            -delta.y * self.range_y() / size.height,
        )
    }
}

impl Default for ViewportBounds {
    /// The default graph window: x in `[-10, 10]`, y in `[-10, 10]`.
    fn default() -> Self {
        Self {
            left: -10.0,
            right: 10.0,
            top: 10.0,
            bottom: -10.0,
        }
    }
}

/// Pixel dimensions of the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
}

impl ScreenSize {
    /// Creates a screen size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if the surface has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Direction of a zoom request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Shrink the visible rectangle (scroll up / negative wheel rotation).
    In,
    /// Grow the visible rectangle (scroll down / positive wheel rotation).
    Out,
}

impl ZoomDirection {
    /// Maps a wheel rotation sign onto a zoom direction.
    ///
    /// Negative rotation (scrolling up, toward the screen) zooms in.
    #[must_use]
    pub fn from_scroll(rotation: f64) -> Self {
        if rotation < 0.0 { Self::In } else { Self::Out }
    }
}

/// The graph's world-space window with pan and zoom operations.
///
/// A `Viewport` is created once with the default bounds and then mutated in
/// place for the life of the process. All mutations replace the four bounds
/// as a single unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    bounds: ViewportBounds,
}

impl Viewport {
    /// Creates a viewport over the default window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bounds: ViewportBounds::default(),
        }
    }

    /// Creates a viewport over explicit bounds.
    #[must_use]
    pub fn with_bounds(bounds: ViewportBounds) -> Self {
        Self { bounds }
    }

    /// Returns a copy of the current bounds.
    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        self.bounds
    }

    /// Replaces the bounds as one atomic unit.
    pub fn set_bounds(&mut self, bounds: ViewportBounds) {
        self.bounds = bounds;
    }

    /// Shifts the window by a world-space delta.
    ///
    /// Panning preserves both ranges, so it can never degenerate the window.
    pub fn pan(&mut self, dx_world: f64, dy_world: f64) {
        self.bounds = self.bounds.shifted(Vec2::new(dx_world, dy_world));
    }

    /// Zooms the window around its own center.
    ///
    /// The per-event increment is `coefficient * max(range_x, range_y)`,
    /// applied symmetrically to both axes: zoom-in moves every edge inward by
    /// half the increment, zoom-out moves it outward. A zoom-in that would
    /// leave either range at or below [`MIN_RANGE`] is silently rejected.
    pub fn zoom(&mut self, direction: ZoomDirection, coefficient: f64) {
        if coefficient <= 0.0 {
            return;
        }
        let b = self.bounds;
        let inc = coefficient * b.range_x().max(b.range_y());
        let half = match direction {
            ZoomDirection::In => {
                if b.range_x() - inc <= MIN_RANGE || b.range_y() - inc <= MIN_RANGE {
                    return;
                }
                -inc / 2.0
            }
            ZoomDirection::Out => inc / 2.0,
        };
        self.bounds = ViewportBounds {
            left: b.left - half,
            right: b.right + half,
            top: b.top + half,
            bottom: b.bottom - half,
        };
    }

    /// Converts a world-space point into screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, p: Point, size: ScreenSize) -> Point {
        self.bounds.world_to_screen(p, size)
    }

    /// Converts a screen-pixel point into world space.
    #[must_use]
    pub fn screen_to_world(&self, p: Point, size: ScreenSize) -> Point {
        self.bounds.screen_to_world(p, size)
    }

    /// Converts a screen-pixel delta into a world-space delta.
    #[must_use]
    pub fn screen_delta_to_world(&self, delta: Vec2, size: ScreenSize) -> Vec2 {
        self.bounds.screen_delta_to_world(delta, size)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(view: &Viewport) {
        let b = view.bounds();
        assert!(b.left < b.right, "left must stay below right: {b:?}");
        assert!(b.bottom < b.top, "bottom must stay below top: {b:?}");
    }

    #[test]
    fn default_window_is_symmetric() {
        let view = Viewport::new();
        let b = view.bounds();
        assert_eq!(b.left, -10.0);
        assert_eq!(b.right, 10.0);
        assert_eq!(b.top, 10.0);
        assert_eq!(b.bottom, -10.0);
    }

    #[test]
    fn bounds_validation_rejects_degenerate_rects() {
        assert_eq!(
            ViewportBounds::new(1.0, 1.0, 1.0, 0.0),
            Err(BoundsError::EmptyHorizontalRange)
        );
        assert_eq!(
            ViewportBounds::new(0.0, 1.0, 0.0, 0.0),
            Err(BoundsError::EmptyVerticalRange)
        );
        assert_eq!(
            ViewportBounds::new(f64::NAN, 1.0, 1.0, 0.0),
            Err(BoundsError::NonFinite)
        );
        assert!(ViewportBounds::new(-1.0, 1.0, 1.0, -1.0).is_ok());
    }

    #[test]
    fn pan_round_trip_restores_bounds_exactly() {
        let mut view = Viewport::new();
        let before = view.bounds();

        view.pan(3.25, -1.5);
        view.pan(-3.25, 1.5);

        assert_eq!(view.bounds(), before);
    }

    #[test]
    fn pan_preserves_ranges() {
        let mut view = Viewport::new();
        view.pan(123.0, -456.0);
        assert_eq!(view.bounds().range_x(), 20.0);
        assert_eq!(view.bounds().range_y(), 20.0);
        assert_invariant(&view);
    }

    #[test]
    fn zoom_in_standard_scenario() {
        // (-10, 10, 10, -10) with coefficient 0.1: inc = max(20, 20) * 0.1 = 2,
        // applied symmetrically.
        let mut view = Viewport::new();
        view.zoom(ZoomDirection::In, 0.1);

        let b = view.bounds();
        assert_eq!(b.left, -9.0);
        assert_eq!(b.right, 9.0);
        assert_eq!(b.top, 9.0);
        assert_eq!(b.bottom, -9.0);
    }

    #[test]
    fn zoom_out_then_in_keeps_invariant() {
        let mut view = Viewport::new();
        view.zoom(ZoomDirection::Out, 0.1);
        let b = view.bounds();
        assert_eq!(b.left, -11.0);
        assert_eq!(b.right, 11.0);

        view.zoom(ZoomDirection::In, 0.1);
        assert_invariant(&view);
    }

    #[test]
    fn repeated_zoom_in_converges_and_becomes_idempotent() {
        let mut view = Viewport::new();
        for _ in 0..10_000 {
            view.zoom(ZoomDirection::In, 0.1);
            assert_invariant(&view);
        }
        let settled = view.bounds();
        assert!(settled.range_x() > 0.0, "range must never collapse");

        // At the limit further zoom-in requests are no-ops.
        view.zoom(ZoomDirection::In, 0.1);
        assert_eq!(view.bounds(), settled);
    }

    #[test]
    fn zoom_rejects_collapse_of_the_smaller_axis() {
        // Wide but short window: the shared increment comes from the larger
        // range and would collapse the vertical one, so nothing moves.
        let bounds = ViewportBounds::new(-10.0, 10.0, 0.5, -0.5).expect("valid bounds");
        let mut view = Viewport::with_bounds(bounds);
        view.zoom(ZoomDirection::In, 0.1);
        assert_eq!(view.bounds(), bounds);
    }

    #[test]
    fn zoom_ignores_nonpositive_coefficient() {
        let mut view = Viewport::new();
        let before = view.bounds();
        view.zoom(ZoomDirection::In, 0.0);
        view.zoom(ZoomDirection::Out, -1.0);
        assert_eq!(view.bounds(), before);
    }

    #[test]
    fn world_screen_round_trip() {
        let view = Viewport::new();
        let size = ScreenSize::new(800.0, 500.0);

        for &p in &[
            Point::ORIGIN,
            Point::new(1.0, 1.0),
            Point::new(-7.25, 3.5),
            Point::new(9.99, -9.99),
        ] {
            let s = view.world_to_screen(p, size);
            let back = view.screen_to_world(s, size);
            assert!((back.x - p.x).abs() < 1e-9, "{p:?} -> {back:?}");
            assert!((back.y - p.y).abs() < 1e-9, "{p:?} -> {back:?}");
        }
    }

    #[test]
    fn screen_mapping_matches_formulas() {
        let view = Viewport::new();
        let size = ScreenSize::new(800.0, 500.0);

        // Top-left world corner maps to the pixel origin.
        let tl = view.world_to_screen(Point::new(-10.0, 10.0), size);
        assert_eq!(tl, Point::new(0.0, 0.0));

        // Bottom-right world corner maps to the far pixel corner.
        let br = view.world_to_screen(Point::new(10.0, -10.0), size);
        assert_eq!(br, Point::new(800.0, 500.0));
    }

    #[test]
    fn screen_delta_flips_vertical_axis() {
        let view = Viewport::new();
        let size = ScreenSize::new(800.0, 500.0);

        let d = view.screen_delta_to_world(Vec2::new(80.0, 50.0), size);
        assert_eq!(d.x, 80.0 * 20.0 / 800.0);
        assert_eq!(d.y, -50.0 * 20.0 / 500.0);
    }

    #[test]
    fn invariant_holds_under_mixed_operation_sequences() {
        let mut view = Viewport::new();
        let ops: [(f64, f64, bool); 7] = [
            (1.0, -2.0, true),
            (0.0, 0.0, false),
            (-3.5, 4.5, true),
            (0.0, 0.0, false),
            (100.0, 100.0, true),
            (0.0, 0.0, false),
            (-98.0, -102.0, true),
        ];
        for (dx, dy, is_pan) in ops {
            if is_pan {
                view.pan(dx, dy);
            } else {
                view.zoom(ZoomDirection::In, 0.1);
                view.zoom(ZoomDirection::Out, 0.1);
            }
            assert_invariant(&view);
        }
    }
}
