// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] for **IR recording and state
//! tracing**.
//!
//! It is intentionally *not* a reference renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended primarily for tests that want to assert on emitted ops
//!   and the imaging state at the time each op was applied, for example how
//!   many curve segments a sampling pass produced, or which stroke weight a
//!   gridline was drawn with.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use plotpane_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingOp, PaintDesc, PaintId, ResourceBackend, StateOp,
    StrokeStyle,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores paint descriptors in a vector keyed by their IDs,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    paints: Vec<Option<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops in the order they were applied.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Returns the paint descriptor for `id`, if it is still alive.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize)?.as_ref()
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Returns the recorded draw operations, in order.
    pub fn draws(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter_map(|op| match op {
            ImagingOp::Draw(d) => Some(d),
            ImagingOp::State(_) => None,
        })
    }
}

impl ResourceBackend for RefBackend {
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("RefBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paints.get_mut(idx) {
            *slot = None;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}
