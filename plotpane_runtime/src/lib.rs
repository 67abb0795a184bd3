// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotpane Runtime: shared state, render loop, and presentation.
//!
//! This crate wires the lower layers together for a running process:
//!
//! - [`GraphSession`] holds the viewport, the gesture state machine, and the
//!   shared curve registry; input call sites feed it pointer events and
//!   register curves.
//! - [`RenderLoop`] runs a background thread on a fixed tick (~10 ms),
//!   rendering the session into the back of a [`DoubleBuffer`] and swapping
//!   it in atomically, so a presenter never observes a torn frame.
//!
//! The render tick is decoupled from input: frames are produced on the
//! timer whether or not anything changed, and a frame that runs long simply
//! delays the next tick.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use plotpane_runtime::{DoubleBuffer, GraphSession, RenderLoop};
//!
//! let session = GraphSession::new();
//! session.add_curve(|x: f64| Some(x.sin()));
//!
//! let buffer = Arc::new(DoubleBuffer::new(320, 200));
//! let handle = RenderLoop::spawn(session, buffer.clone(), Duration::from_millis(10));
//! // ... feed input events, read presented frames ...
//! handle.stop();
//! ```

mod buffer;
mod render_loop;
mod session;

pub use buffer::DoubleBuffer;
pub use render_loop::{DEFAULT_TICK, RenderLoop, RenderLoopHandle, render_session_frame};
pub use session::{GraphSession, SharedViewport};

#[doc(no_inline)]
pub use plotpane_event_state::PointerEvent;
#[doc(no_inline)]
pub use plotpane_viewport::{ScreenSize, Viewport, ViewportBounds};
