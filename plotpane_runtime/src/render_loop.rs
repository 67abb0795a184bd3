// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed-tick render loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use plotpane_frame::{ScenePaints, render_frame};
use plotpane_imaging_vello_cpu::render_to_rgba;
use plotpane_viewport::ScreenSize;

use crate::buffer::DoubleBuffer;
use crate::session::GraphSession;

/// Default render tick.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Renders one frame of the session into RGBA8 bytes.
///
/// Viewport bounds are copied out under the lock once, and the curve read
/// guard is held for the whole sampling pass, so the frame observes a
/// consistent snapshot of both.
///
/// Each call builds a fresh CPU render context and its scene paints, so the
/// output depends only on the session state and the requested size.
#[must_use]
pub fn render_session_frame(session: &GraphSession, width: u16, height: u16) -> Vec<u8> {
    let bounds = session.bounds();
    let screen = ScreenSize::new(f64::from(width), f64::from(height));
    render_to_rgba(width, height, |backend| {
        let paints = ScenePaints::create(backend);
        let curves = session.curves().read();
        render_frame(backend, &paints, bounds, screen, &curves);
    })
}

/// Spawns and owns the periodic render task.
#[derive(Debug)]
pub struct RenderLoop;

impl RenderLoop {
    /// Spawns a render thread that redraws `session` into `buffer` every
    /// `tick`.
    ///
    /// Frames are produced on the timer regardless of input activity. A
    /// frame that takes longer than the tick delays the next one; there is
    /// no frame skipping.
    pub fn spawn(
        session: GraphSession,
        buffer: Arc<DoubleBuffer>,
        tick: Duration,
    ) -> RenderLoopHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let thread = {
            let stop = stop.clone();
            thread::spawn(move || {
                let width = buffer.width();
                let height = buffer.height();
                while !stop.load(Ordering::Relaxed) {
                    let started = Instant::now();
                    let mut frame = render_session_frame(&session, width, height);
                    buffer.present(&mut frame);
                    if let Some(rest) = tick.checked_sub(started.elapsed()) {
                        thread::sleep(rest);
                    }
                }
            })
        };
        RenderLoopHandle { stop, thread }
    }
}

/// Handle to a running render loop.
#[derive(Debug)]
pub struct RenderLoopHandle {
    stop: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

impl RenderLoopHandle {
    /// Asks the loop to finish its current frame and joins the thread.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        self.thread.join().expect("render thread panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn background_is_cleared_to_white() {
        // Bounds chosen so every gridline and both axes fall outside the
        // surface; only the background fill remains visible.
        let bounds = crate::ViewportBounds::new(0.2, 0.8, 0.8, 0.2).expect("valid bounds");
        let session = GraphSession::with_bounds(bounds);
        let frame = render_session_frame(&session, 32, 32);

        assert_eq!(frame.len(), 32 * 32 * 4);
        for px in frame.chunks_exact(4) {
            assert_eq!(px, WHITE);
        }
    }

    #[test]
    fn default_bounds_show_grid_and_axes() {
        let session = GraphSession::new();
        let frame = render_session_frame(&session, 32, 32);
        assert!(frame.chunks_exact(4).any(|px| px != WHITE));
    }

    #[test]
    fn a_curve_marks_non_background_pixels() {
        let session = GraphSession::new();
        let empty = render_session_frame(&session, 64, 64);

        session.add_curve(|x: f64| Some(x));
        let with_curve = render_session_frame(&session, 64, 64);

        assert_ne!(empty, with_curve);
    }

    #[test]
    fn loop_presents_frames_and_stops_cleanly() {
        let session = GraphSession::new();
        session.add_curve(|x: f64| Some(x * x));
        let buffer = Arc::new(DoubleBuffer::new(48, 32));

        let handle = RenderLoop::spawn(session.clone(), buffer.clone(), Duration::from_millis(5));

        // Mutate shared state while the loop runs.
        session.add_curve(|x: f64| Some(-x));
        session.pointer_event(
            crate::PointerEvent::Scroll { rotation: -1.0 },
            ScreenSize::new(48.0, 32.0),
        );

        // Wait until a rendered frame has been presented (the initial front
        // buffer is all zeroes, a rendered one has a white background).
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if buffer.with_front(|front| front.iter().any(|&b| b != 0)) {
                break;
            }
            assert!(Instant::now() < deadline, "no frame presented in time");
            thread::sleep(Duration::from_millis(1));
        }

        handle.stop();
        assert_eq!(buffer.snapshot().len(), 48 * 32 * 4);
    }
}
