// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Imaging: backend-agnostic imaging IR and backend traits.
//!
//! This crate defines a small, plain-old-data imaging intermediate
//! representation and traits for backends that consume it. It sits between
//! the frame-emission layer (`plotpane_frame`) and concrete renderers such
//! as the Vello CPU backend.
//!
//! # Core concepts
//!
//! - **Paint resources**: small, opaque [`PaintId`] handles managed via
//!   [`ResourceBackend`]. The graph scene's paints (background, grid weights,
//!   axis, palette colors) are fixed for the process lifetime, so they are
//!   resources created once and reused every frame.
//! - **Inline geometry**: gridlines, axis shafts, arrowheads, and curve
//!   polylines are regenerated from the viewport every frame, so draw
//!   operations carry their geometry inline instead of referencing path
//!   resources.
//! - **Imaging operations**: [`StateOp`] (mutate state) and [`DrawOp`]
//!   (produce pixels), combined into [`ImagingOp`] where a backend logs or
//!   replays sequences.
//!
//! Coordinates in draw operations are f32 screen pixels; the world→screen
//! mapping happens before ops are emitted.
//!
//! # Example
//!
//! A minimal sketch of how a backend is driven:
//!
//! ```ignore
//! # use plotpane_imaging::*;
//! # use peniko::{Brush, Color};
//! # struct MyBackend { /* implements ResourceBackend + ImagingBackend */ }
//! let mut backend = MyBackend { /* ... */ };
//!
//! let axis = backend.create_paint(PaintDesc {
//!     brush: Brush::Solid(Color::BLACK),
//! });
//! backend.state(StateOp::SetPaint(axis));
//! backend.state(StateOp::SetStroke(StrokeStyle::new(3.0)));
//! backend.draw(DrawOp::StrokeLine {
//!     p0: PointF::new(0.0, 250.0),
//!     p1: PointF::new(800.0, 250.0),
//! });
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use peniko::Brush;

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by `StateOp::SetStroke`.
///
/// This is currently a re-export of [`kurbo::Stroke`], which captures width,
/// joins, caps, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// Identifier for a paint resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Paints may be shared by many draw operations and are expected
/// to be reused across frames while they remain alive.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Description of a paint resource.
#[derive(Clone, Debug)]
pub struct PaintDesc {
    /// Brush used when rendering (solid color, gradient, etc.).
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto
    /// their native paint representation.
    pub brush: Brush,
}

/// A point in f32 screen-pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointF {
    /// X coordinate in pixels.
    pub x: f32,
    /// Y coordinate in pixels.
    pub y: f32,
}

impl PointF {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to kurbo's point type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(f32, f32)> for PointF {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
    /// Stroke a straight segment with the current stroke and paint.
    StrokeLine {
        /// Segment start.
        p0: PointF,
        /// Segment end.
        p1: PointF,
    },
    /// Stroke an open polyline through the given points.
    ///
    /// Backends may ignore polylines with fewer than two points.
    StrokePolyline {
        /// Vertices in order.
        points: Box<[PointF]>,
    },
    /// Fill the closed polygon through the given points with the current
    /// paint.
    ///
    /// The last point is implicitly connected back to the first. Backends
    /// may ignore polygons with fewer than three points.
    FillPolygon {
        /// Vertices in order.
        points: Box<[PointF]>,
    },
}

/// Unified imaging operation, for backends that log or replay sequences.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Builds a [`kurbo::BezPath`] through the given points.
///
/// Returns `None` when there are fewer than two points. With `close` set the
/// path is closed back to its first point, which is how
/// [`DrawOp::FillPolygon`] geometry is realized by backends.
pub fn points_to_bez_path(points: &[PointF], close: bool) -> Option<kurbo::BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut path = kurbo::BezPath::new();
    path.move_to(first.to_kurbo());
    for p in rest {
        path.line_to(p.to_kurbo());
    }
    if close {
        path.close_path();
    }
    Some(path)
}

/// Resource lifetime interface.
///
/// Backends implement this to manage their own paint storage. IDs must stay
/// valid and refer to the same logical paint until `destroy_paint` is
/// called.
pub trait ResourceBackend {
    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Minimal imaging backend trait.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}
