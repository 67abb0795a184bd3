// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene paints and the frame entry point.

use kurbo::Affine;
use peniko::{Brush, Color};
use plotpane_curves::Curve;
use plotpane_imaging::{
    DrawOp, ImagingBackend, PaintDesc, PaintId, ResourceBackend, StateOp,
};
use plotpane_viewport::{ScreenSize, ViewportBounds};

use crate::axes::emit_axes;
use crate::grid::emit_grid;
use crate::palette::CURVE_PALETTE;
use crate::sample::emit_curves;

/// The frame's fixed paint resources.
///
/// Paints are constant for a given backend: created once against it and
/// reused for every frame drawn through it. A caller that rebuilds its
/// backend per frame creates a matching set of paints each time.
#[derive(Clone, Debug)]
pub struct ScenePaints {
    /// Background clear color (white).
    pub background: PaintId,
    /// Minor gridlines.
    pub grid_minor: PaintId,
    /// Major gridlines.
    pub grid_major: PaintId,
    /// Axis shafts and arrowheads.
    pub axis: PaintId,
    /// One paint per palette slot, indexed modulo by curve index.
    pub curves: [PaintId; CURVE_PALETTE.len()],
}

impl ScenePaints {
    /// Creates all scene paints against `backend`.
    pub fn create(backend: &mut dyn ResourceBackend) -> Self {
        let mut solid = |color: Color| {
            backend.create_paint(PaintDesc {
                brush: Brush::Solid(color),
            })
        };
        Self {
            background: solid(Color::WHITE),
            grid_minor: solid(Color::BLACK),
            grid_major: solid(Color::BLACK),
            axis: solid(Color::BLACK),
            curves: CURVE_PALETTE.map(&mut solid),
        }
    }

    /// Returns the paint for the curve at `index`, wrapping by modulo.
    #[must_use]
    pub fn curve_paint(&self, index: usize) -> PaintId {
        self.curves[index % self.curves.len()]
    }

    /// Destroys all scene paints.
    pub fn destroy(self, backend: &mut dyn ResourceBackend) {
        backend.destroy_paint(self.background);
        backend.destroy_paint(self.grid_minor);
        backend.destroy_paint(self.grid_major);
        backend.destroy_paint(self.axis);
        for paint in self.curves {
            backend.destroy_paint(paint);
        }
    }
}

/// Emits one complete frame: background, grid, axes, then curves.
///
/// An empty surface is a no-op. A failing curve only affects its own
/// segments; grid, axes, and the remaining curves always render.
pub fn render_frame(
    backend: &mut dyn ImagingBackend,
    paints: &ScenePaints,
    bounds: ViewportBounds,
    screen: ScreenSize,
    curves: &[Curve],
) {
    if screen.is_empty() {
        return;
    }

    backend.state(StateOp::SetTransform(Affine::IDENTITY));
    backend.state(StateOp::SetPaint(paints.background));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Screen coordinates comfortably fit f32 precision"
    )]
    backend.draw(DrawOp::FillRect {
        x0: 0.0,
        y0: 0.0,
        x1: screen.width as f32,
        y1: screen.height as f32,
    });

    emit_grid(backend, paints, bounds, screen);
    emit_axes(backend, paints, bounds, screen);
    emit_curves(backend, paints, bounds, screen, curves);
}
