// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Viewport: the visible world-space window of a 2D graph.
//!
//! This crate provides a small, headless model of the rectangular region of
//! the Cartesian plane that is currently mapped onto the screen. It focuses
//! on:
//! - Viewport state as four explicit bounds (`left < right`, `bottom < top`).
//! - Panning by world-space deltas and symmetric center zooming.
//! - Coordinate conversion between world space and screen pixels.
//!
//! It does **not** own any function list or rendering backend. Callers are
//! expected to:
//! - Drive pan/zoom from input events at a higher layer (see
//!   `plotpane_event_state`).
//! - Read a [`ViewportBounds`] snapshot once per frame and derive the
//!   world→screen mapping from it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotpane_viewport::{ScreenSize, Viewport, ZoomDirection};
//!
//! // Default window over the plane: x in [-10, 10], y in [-10, 10].
//! let mut view = Viewport::new();
//! let screen = ScreenSize::new(800.0, 600.0);
//!
//! // The world origin sits at the screen center.
//! let center = view.world_to_screen(Point::ORIGIN, screen);
//! assert_eq!(center, Point::new(400.0, 300.0));
//!
//! // Zoom in once with the standard wheel coefficient.
//! view.zoom(ZoomDirection::In, 0.1);
//! assert_eq!(view.bounds().left, -9.0);
//! ```
//!
//! ## Design notes
//!
//! - The four bounds are only ever replaced as one unit; a renderer that
//!   copies [`Viewport::bounds`] can never observe a torn rectangle.
//! - Screen y grows downward while world y grows upward, so vertical
//!   conversions flip sign.
//! - Zoom requests that would collapse a range are rejected whole; there is
//!   no error to handle, the viewport simply stays put.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{
    BoundsError, MIN_RANGE, ScreenSize, Viewport, ViewportBounds, ZoomDirection,
};
