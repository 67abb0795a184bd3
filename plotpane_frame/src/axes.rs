// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis emission.
//!
//! Four arrow-terminated strokes run from the world origin to the midpoint
//! of each viewport edge (right and left edges at `y = 0`, top and bottom
//! edges at `x = 0`). Each arrow is a canonical rightward shape, a shaft
//! along positive x plus a triangular head, rotated into place by the
//! screen-space angle of the segment.

use alloc::boxed::Box;
use kurbo::{Affine, Point};
use plotpane_imaging::{DrawOp, ImagingBackend, PointF, StateOp, StrokeStyle};
use plotpane_viewport::{ScreenSize, ViewportBounds};

use crate::scene::ScenePaints;

/// Stroke width of the axis shafts, in pixels.
pub const AXIS_WIDTH: f64 = 3.0;

/// Size of the triangular arrowhead, in pixels.
pub const ARROW_HEAD_SIZE: f64 = 10.0;

/// Emits both axes as four arrows radiating from the world origin.
pub fn emit_axes(
    backend: &mut dyn ImagingBackend,
    paints: &ScenePaints,
    bounds: ViewportBounds,
    screen: ScreenSize,
) {
    backend.state(StateOp::SetPaint(paints.axis));
    backend.state(StateOp::SetStroke(StrokeStyle::new(AXIS_WIDTH)));

    let origin = bounds.world_to_screen(Point::ZERO, screen);
    let tips = [
        Point::new(bounds.right, 0.0),
        Point::new(bounds.left, 0.0),
        Point::new(0.0, bounds.top),
        Point::new(0.0, bounds.bottom),
    ];
    for tip in tips {
        let tip = bounds.world_to_screen(tip, screen);
        emit_arrow(backend, origin, tip);
    }

    backend.state(StateOp::SetTransform(Affine::IDENTITY));
}

/// Emits a single arrow from `a` to `b` in screen coordinates.
///
/// Leaves the backend transform set to the arrow's placement; callers reset
/// it once after the last arrow.
fn emit_arrow(backend: &mut dyn ImagingBackend, a: Point, b: Point) {
    let v = b - a;
    let shaft = v.hypot();
    let placement = Affine::translate(a.to_vec2()) * Affine::rotate(v.atan2());
    backend.state(StateOp::SetTransform(placement));

    #[expect(
        clippy::cast_possible_truncation,
        reason = "Screen coordinates comfortably fit f32 precision"
    )]
    let (len, head) = (shaft as f32, ARROW_HEAD_SIZE as f32);

    backend.draw(DrawOp::StrokeLine {
        p0: PointF::new(0.0, 0.0),
        p1: PointF::new(len, 0.0),
    });
    backend.draw(DrawOp::FillPolygon {
        points: Box::new([
            PointF::new(len, 0.0),
            PointF::new(len - head, -head),
            PointF::new(len - head, head),
        ]),
    });
}
