// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use plotpane_viewport::{ScreenSize, Viewport, ViewportBounds, ZoomDirection};

/// Zoom coefficient applied per wheel event.
const WHEEL_ZOOM_COEFFICIENT: f64 = 0.1;

/// Pointer input consumed by the gesture controller.
///
/// Positions are in screen pixels of the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer button was pressed at the given position.
    Press(Point),
    /// The pointer moved to the given position.
    Move(Point),
    /// The pointer button was released.
    Release,
    /// The wheel rotated; negative rotation (scroll up) zooms in.
    Scroll {
        /// Signed wheel rotation. Only the sign selects the zoom direction.
        rotation: f64,
    },
}

/// Snapshot taken on pointer press, consumed by every move while dragging.
///
/// Exists exactly while the pointer button is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at press time, in screen pixels.
    pub pointer: Point,
    /// Viewport bounds at press time.
    pub bounds: ViewportBounds,
}

/// Current phase of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GesturePhase {
    /// No button held; moves are ignored.
    #[default]
    Idle,
    /// Button held; moves pan relative to the anchor.
    Dragging(DragAnchor),
}

/// Translates pointer events into viewport mutations.
///
/// Two states: `Idle` and `Dragging`. Wheel zoom applies in either state.
/// A move without an anchor is a legal no-op since platforms deliver
/// spurious move events.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureController {
    phase: GesturePhase,
}

impl GestureController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    /// Applies one pointer event, mutating the viewport as needed.
    ///
    /// `screen` is the current surface size, used to convert pixel deltas
    /// into world deltas while dragging.
    pub fn apply(&mut self, event: PointerEvent, viewport: &mut Viewport, screen: ScreenSize) {
        match event {
            PointerEvent::Press(pointer) => {
                self.phase = GesturePhase::Dragging(DragAnchor {
                    pointer,
                    bounds: viewport.bounds(),
                });
            }
            PointerEvent::Move(pointer) => {
                let GesturePhase::Dragging(anchor) = self.phase else {
                    return;
                };
                if screen.is_empty() {
                    return;
                }
                // Always pan from the press-time snapshot. Converting the
                // total pixel offset once per move avoids the compounding
                // error an incremental update would accumulate.
                let pixel_delta = pointer - anchor.pointer;
                let world_delta = anchor.bounds.screen_delta_to_world(pixel_delta, screen);
                viewport.set_bounds(anchor.bounds.shifted(-world_delta));
            }
            PointerEvent::Release => {
                self.phase = GesturePhase::Idle;
            }
            PointerEvent::Scroll { rotation } => {
                viewport.zoom(ZoomDirection::from_scroll(rotation), WHEEL_ZOOM_COEFFICIENT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize::new(800.0, 500.0);

    #[test]
    fn new_controller_is_idle() {
        let gestures = GestureController::new();
        assert_eq!(gestures.phase(), GesturePhase::Idle);
        assert!(!gestures.is_dragging());
    }

    #[test]
    fn press_captures_pointer_and_bounds() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Press(Point::new(10.0, 20.0)), &mut view, SCREEN);

        let GesturePhase::Dragging(anchor) = gestures.phase() else {
            panic!("press must enter the dragging phase");
        };
        assert_eq!(anchor.pointer, Point::new(10.0, 20.0));
        assert_eq!(anchor.bounds, view.bounds());
    }

    #[test]
    fn move_while_idle_is_a_no_op() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();
        let before = view.bounds();

        gestures.apply(PointerEvent::Move(Point::new(300.0, 300.0)), &mut view, SCREEN);

        assert_eq!(view.bounds(), before);
        assert!(!gestures.is_dragging());
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Release, &mut view, SCREEN);

        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn horizontal_drag_pans_against_pointer_motion() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Press(Point::new(100.0, 100.0)), &mut view, SCREEN);
        gestures.apply(PointerEvent::Move(Point::new(150.0, 100.0)), &mut view, SCREEN);

        // 50 px right over an 800 px wide window showing 20 world units:
        // the window shifts left by 50 * 20 / 800 = 1.25.
        let b = view.bounds();
        assert_eq!(b.left, -11.25);
        assert_eq!(b.right, 8.75);
        assert_eq!(b.top, 10.0);
        assert_eq!(b.bottom, -10.0);
    }

    #[test]
    fn moves_pan_from_the_anchor_not_incrementally() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Press(Point::new(100.0, 100.0)), &mut view, SCREEN);
        // Many small moves ending where a single large move would.
        for i in 1..=50 {
            let x = 100.0 + f64::from(i);
            gestures.apply(PointerEvent::Move(Point::new(x, 100.0)), &mut view, SCREEN);
        }

        let b = view.bounds();
        assert_eq!(b.left, -11.25);
        assert_eq!(b.right, 8.75);
    }

    #[test]
    fn fresh_anchor_after_release_and_re_press() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        // First drag: 50 px right.
        gestures.apply(PointerEvent::Press(Point::new(100.0, 100.0)), &mut view, SCREEN);
        gestures.apply(PointerEvent::Move(Point::new(150.0, 100.0)), &mut view, SCREEN);
        gestures.apply(PointerEvent::Release, &mut view, SCREEN);
        let after_first = view.bounds();

        // Second drag starts where the first ended and moves only vertically.
        gestures.apply(PointerEvent::Press(Point::new(150.0, 100.0)), &mut view, SCREEN);
        gestures.apply(PointerEvent::Move(Point::new(150.0, 150.0)), &mut view, SCREEN);

        // Horizontal bounds must not shift again: the anchor was reset.
        let b = view.bounds();
        assert_eq!(b.left, after_first.left);
        assert_eq!(b.right, after_first.right);

        // 50 px down over a 500 px tall window showing 20 world units pans
        // the window up by 2 world units.
        assert_eq!(b.top, after_first.top + 2.0);
        assert_eq!(b.bottom, after_first.bottom + 2.0);
    }

    #[test]
    fn vertical_drag_respects_screen_y_flip() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Press(Point::new(400.0, 250.0)), &mut view, SCREEN);
        // Dragging downward should carry the window contents downward, which
        // means the world window moves up.
        gestures.apply(PointerEvent::Move(Point::new(400.0, 300.0)), &mut view, SCREEN);

        let b = view.bounds();
        assert_eq!(b.top, 12.0);
        assert_eq!(b.bottom, -8.0);
        assert_eq!(b.left, -10.0);
        assert_eq!(b.right, 10.0);
    }

    #[test]
    fn scroll_up_zooms_in_scroll_down_zooms_out() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Scroll { rotation: -1.0 }, &mut view, SCREEN);
        assert_eq!(view.bounds().left, -9.0);
        assert_eq!(view.bounds().right, 9.0);

        gestures.apply(PointerEvent::Scroll { rotation: 3.0 }, &mut view, SCREEN);
        let b = view.bounds();
        // Zoom out from an 18-unit window: inc = 1.8, so 0.9 per side.
        assert!((b.left - -9.9).abs() < 1e-12);
        assert!((b.right - 9.9).abs() < 1e-12);
    }

    #[test]
    fn scroll_applies_even_mid_drag() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();

        gestures.apply(PointerEvent::Press(Point::new(100.0, 100.0)), &mut view, SCREEN);
        gestures.apply(PointerEvent::Scroll { rotation: -1.0 }, &mut view, SCREEN);

        assert!(gestures.is_dragging());
        assert_eq!(view.bounds().range_x(), 18.0);
    }

    #[test]
    fn drag_on_an_empty_surface_does_not_divide_by_zero() {
        let mut view = Viewport::new();
        let mut gestures = GestureController::new();
        let empty = ScreenSize::new(0.0, 0.0);

        gestures.apply(PointerEvent::Press(Point::new(0.0, 0.0)), &mut view, empty);
        gestures.apply(PointerEvent::Move(Point::new(10.0, 10.0)), &mut view, empty);

        assert_eq!(view.bounds(), ViewportBounds::default());
    }
}
