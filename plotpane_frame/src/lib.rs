// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Frame: turns viewport state and curves into imaging ops.
//!
//! One frame is emitted in a fixed order: background fill, gridlines, axes
//! with arrowheads, then one sampled polyline pass per registered curve.
//! Everything is expressed through the [`plotpane_imaging`] IR, so the same
//! emission code drives the CPU rasterizer and the op-recording test
//! backend.
//!
//! Paint resources are fixed for a given backend and created once against
//! it via [`ScenePaints::create`]; geometry is regenerated from the
//! viewport every frame and carried inline in the draw ops.
//!
//! ```ignore
//! # use plotpane_frame::{render_frame, ScenePaints};
//! # use plotpane_viewport::{ScreenSize, ViewportBounds};
//! let paints = ScenePaints::create(backend);
//! render_frame(
//!     backend,
//!     &paints,
//!     ViewportBounds::default(),
//!     ScreenSize::new(800.0, 500.0),
//!     &curves,
//! );
//! ```

#![no_std]

extern crate alloc;

mod axes;
mod grid;
mod palette;
mod sample;
mod scene;

pub use axes::{ARROW_HEAD_SIZE, AXIS_WIDTH, emit_axes};
pub use grid::{GRID_OVERSCAN, MAJOR_GRID_SPACING, MAJOR_GRID_WIDTH, MINOR_GRID_WIDTH, emit_grid};
pub use palette::{CURVE_PALETTE, curve_color};
pub use sample::{CURVE_WIDTH, SAMPLES_PER_WIDTH, emit_curve, emit_curves};
pub use scene::{ScenePaints, render_frame};

use plotpane_imaging::PointF;

/// Narrows a world-to-screen result to the IR's f32 pixel coordinates.
#[inline]
pub(crate) fn to_point_f(p: kurbo::Point) -> PointF {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Screen coordinates comfortably fit f32 precision"
    )]
    PointF::new(p.x as f32, p.y as f32)
}
