// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared session state: viewport, gestures, and the curve registry.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use plotpane_curves::{Curve, CurveFn, CurveSet};
use plotpane_event_state::{GestureController, PointerEvent};
use plotpane_viewport::{ScreenSize, Viewport, ViewportBounds};

/// Cheaply clonable handle to the mutex-guarded viewport.
///
/// All four bounds are updated as one unit under the lock, so the render
/// task never observes a torn rectangle even when input callbacks arrive on
/// another thread.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport {
    inner: Arc<Mutex<Viewport>>,
}

impl SharedViewport {
    /// Creates a viewport at the default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a viewport at the given bounds.
    #[must_use]
    pub fn with_bounds(bounds: ViewportBounds) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Viewport::with_bounds(bounds))),
        }
    }

    /// Copies out the current bounds.
    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        self.lock().bounds()
    }

    /// Locks the viewport for a short mutation or read.
    #[must_use]
    pub fn lock(&self) -> MutexGuard<'_, Viewport> {
        self.inner.lock().expect("viewport lock poisoned")
    }
}

/// One interactive graphing session.
///
/// Clones share the same viewport, gesture state, and curve registry, so an
/// input handler and the render loop each hold their own handle.
#[derive(Clone, Default)]
pub struct GraphSession {
    viewport: SharedViewport,
    curves: CurveSet,
    gestures: Arc<Mutex<GestureController>>,
}

impl GraphSession {
    /// Creates a session with default bounds and no curves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session starting at the given bounds.
    #[must_use]
    pub fn with_bounds(bounds: ViewportBounds) -> Self {
        Self {
            viewport: SharedViewport::with_bounds(bounds),
            ..Self::default()
        }
    }

    /// Returns the shared viewport handle.
    #[must_use]
    pub fn viewport(&self) -> &SharedViewport {
        &self.viewport
    }

    /// Returns the shared curve registry.
    #[must_use]
    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }

    /// Copies out the current viewport bounds.
    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        self.viewport.bounds()
    }

    /// Feeds one pointer event through the gesture state machine.
    ///
    /// `screen` is the current surface size in pixels, needed to convert
    /// pixel drag deltas into world deltas.
    pub fn pointer_event(&self, event: PointerEvent, screen: ScreenSize) {
        let mut viewport = self.viewport.lock();
        let mut gestures = self.gestures.lock().expect("gesture lock poisoned");
        gestures.apply(event, &mut viewport, screen);
    }

    /// Registers a curve and returns its index (which selects its color).
    pub fn add_curve<C: CurveFn + 'static>(&self, curve: C) -> usize {
        self.curves.add(curve)
    }

    /// Removes the curve at `index`, if any.
    pub fn remove_curve(&self, index: usize) -> Option<Curve> {
        self.curves.remove(index)
    }

    /// Removes all curves.
    pub fn clear_curves(&self) {
        self.curves.clear();
    }
}

impl fmt::Debug for GraphSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSession")
            .field("bounds", &self.bounds())
            .field("curves", &self.curves)
            .finish()
    }
}
