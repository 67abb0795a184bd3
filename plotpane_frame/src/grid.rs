// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline emission.
//!
//! One gridline per integer world coordinate, extended five units past each
//! viewport edge so lines stay visible at the fringe during fast pans. The
//! spacing is fixed rather than zoom-adaptive; at extreme zoom-out gridlines
//! may visually merge.

use kurbo::Point;
use plotpane_imaging::{DrawOp, ImagingBackend, StateOp, StrokeStyle};
use plotpane_viewport::{ScreenSize, ViewportBounds};

use crate::scene::ScenePaints;
use crate::to_point_f;

/// Overscan past each viewport edge, in world units.
pub const GRID_OVERSCAN: i64 = 5;

/// Spacing between major gridlines, in world units.
pub const MAJOR_GRID_SPACING: i64 = 5;

/// Stroke width of minor gridlines, in pixels.
pub const MINOR_GRID_WIDTH: f64 = 0.5;

/// Stroke width of major gridlines, in pixels.
pub const MAJOR_GRID_WIDTH: f64 = 2.0;

#[expect(
    clippy::cast_possible_truncation,
    reason = "Gridline indices are bounded by the viewport's world range"
)]
fn floor_i(v: f64) -> i64 {
    let n = v as i64;
    if (n as f64) > v { n - 1 } else { n }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Gridline indices are bounded by the viewport's world range"
)]
fn ceil_i(v: f64) -> i64 {
    let n = v as i64;
    if (n as f64) < v { n + 1 } else { n }
}

fn is_major(line: i64) -> bool {
    line.rem_euclid(MAJOR_GRID_SPACING) == 0
}

/// Emits all visible gridlines: minor pass first, then major on top.
pub fn emit_grid(
    backend: &mut dyn ImagingBackend,
    paints: &ScenePaints,
    bounds: ViewportBounds,
    screen: ScreenSize,
) {
    backend.state(StateOp::SetPaint(paints.grid_minor));
    backend.state(StateOp::SetStroke(StrokeStyle::new(MINOR_GRID_WIDTH)));
    emit_lines(backend, bounds, screen, false);

    backend.state(StateOp::SetPaint(paints.grid_major));
    backend.state(StateOp::SetStroke(StrokeStyle::new(MAJOR_GRID_WIDTH)));
    emit_lines(backend, bounds, screen, true);
}

fn emit_lines(
    backend: &mut dyn ImagingBackend,
    bounds: ViewportBounds,
    screen: ScreenSize,
    major: bool,
) {
    for x in floor_i(bounds.left) - GRID_OVERSCAN..=ceil_i(bounds.right) + GRID_OVERSCAN {
        if is_major(x) != major {
            continue;
        }
        let x = x as f64;
        let a = bounds.world_to_screen(Point::new(x, bounds.top), screen);
        let b = bounds.world_to_screen(Point::new(x, bounds.bottom), screen);
        backend.draw(DrawOp::StrokeLine {
            p0: to_point_f(a),
            p1: to_point_f(b),
        });
    }

    for y in floor_i(bounds.bottom) - GRID_OVERSCAN..=ceil_i(bounds.top) + GRID_OVERSCAN {
        if is_major(y) != major {
            continue;
        }
        let y = y as f64;
        let a = bounds.world_to_screen(Point::new(bounds.left, y), screen);
        let b = bounds.world_to_screen(Point::new(bounds.right, y), screen);
        backend.draw(DrawOp::StrokeLine {
            p0: to_point_f(a),
            p1: to_point_f(b),
        });
    }
}
