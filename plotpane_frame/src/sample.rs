// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve sampling.
//!
//! Each curve is walked across the visible x-range at a fixed world-space
//! step of `range_x / 200`, independent of the actual pixel width. Defined
//! samples accumulate into polyline runs; an undefined or non-finite sample
//! ends the current run, so exactly the segments touching that sample are
//! skipped and nothing else. A failing curve never prevents later curves
//! from rendering.

use alloc::vec::Vec;
use kurbo::Point;
use plotpane_curves::{Curve, CurveFn};
use plotpane_imaging::{DrawOp, ImagingBackend, PointF, StateOp, StrokeStyle};
use plotpane_viewport::{ScreenSize, ViewportBounds};

use crate::scene::ScenePaints;
use crate::to_point_f;

/// Number of samples across the visible width.
pub const SAMPLES_PER_WIDTH: f64 = 200.0;

/// Stroke width of curve polylines, in pixels.
pub const CURVE_WIDTH: f64 = 2.0;

/// Emits every curve in the slice, coloring by index.
pub fn emit_curves(
    backend: &mut dyn ImagingBackend,
    paints: &ScenePaints,
    bounds: ViewportBounds,
    screen: ScreenSize,
    curves: &[Curve],
) {
    backend.state(StateOp::SetStroke(StrokeStyle::new(CURVE_WIDTH)));
    for (index, curve) in curves.iter().enumerate() {
        backend.state(StateOp::SetPaint(paints.curve_paint(index)));
        emit_curve(backend, curve.as_ref(), bounds, screen);
    }
}

/// Samples one curve and emits its polyline runs.
pub fn emit_curve(
    backend: &mut dyn ImagingBackend,
    curve: &dyn CurveFn,
    bounds: ViewportBounds,
    screen: ScreenSize,
) {
    let inc = bounds.range_x() / SAMPLES_PER_WIDTH;
    let mut run: Vec<PointF> = Vec::new();
    let mut x = bounds.left;
    while x <= bounds.right {
        match sample(curve, x) {
            Some(y) => run.push(to_point_f(bounds.world_to_screen(Point::new(x, y), screen))),
            None => flush_run(backend, &mut run),
        }
        x += inc;
    }
    flush_run(backend, &mut run);
}

/// Evaluates the curve at `x`, treating NaN and infinities as undefined.
fn sample(curve: &dyn CurveFn, x: f64) -> Option<f64> {
    curve.eval(x).filter(|y| y.is_finite())
}

fn flush_run(backend: &mut dyn ImagingBackend, run: &mut Vec<PointF>) {
    if run.len() >= 2 {
        let points = core::mem::take(run).into_boxed_slice();
        backend.draw(DrawOp::StrokePolyline { points });
    } else {
        run.clear();
    }
}
