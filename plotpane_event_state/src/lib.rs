// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Event State: the pointer gesture state machine.
//!
//! This crate translates raw pointer and wheel events into mutations of a
//! [`Viewport`]. It is a small, focused state manager in the spirit of a
//! drag-state helper:
//!
//! - **Stateful but simple**: the only state is whether a drag is active and,
//!   if so, its anchor.
//! - **Integration-friendly**: callers feed it [`PointerEvent`]s from any
//!   windowing layer; it does not assume an event loop or a framework.
//!
//! ## Drag semantics
//!
//! A drag pans the viewport. On press the controller snapshots both the
//! pointer position and the viewport bounds; every subsequent move recomputes
//! the pan **from that snapshot**, not incrementally, so repeated tiny
//! conversions cannot accumulate drift. Release discards the anchor and the
//! next press starts fresh.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotpane_event_state::{GestureController, PointerEvent};
//! use plotpane_viewport::{ScreenSize, Viewport};
//!
//! let mut view = Viewport::new();
//! let mut gestures = GestureController::new();
//! let screen = ScreenSize::new(800.0, 500.0);
//!
//! gestures.apply(PointerEvent::Press(Point::new(100.0, 100.0)), &mut view, screen);
//! assert!(gestures.is_dragging());
//!
//! // Dragging 80 px to the right moves the window 2 world units to the left.
//! gestures.apply(PointerEvent::Move(Point::new(180.0, 100.0)), &mut view, screen);
//! assert_eq!(view.bounds().left, -12.0);
//!
//! gestures.apply(PointerEvent::Release, &mut view, screen);
//! assert!(!gestures.is_dragging());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod gesture;

pub use gesture::{DragAnchor, GestureController, GesturePhase, PointerEvent};

#[doc(no_inline)]
pub use plotpane_viewport::Viewport;
