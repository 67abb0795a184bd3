// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests driving input, session state, and CPU rendering.

use kurbo::Point;
use plotpane_runtime::{GraphSession, PointerEvent, ScreenSize, render_session_frame};

#[test]
fn rendering_is_deterministic_for_a_given_state() {
    let session = GraphSession::new();
    session.add_curve(|x: f64| Some(x * x));

    // Every call rebuilds its render context and paints from scratch, so two
    // renders of the same state must produce identical bytes.
    let first = render_session_frame(&session, 48, 48);
    let second = render_session_frame(&session, 48, 48);
    assert_eq!(first, second);
}

#[test]
fn a_drag_moves_the_rendered_scene() {
    let session = GraphSession::new();
    session.add_curve(|x: f64| Some(x));
    let before = render_session_frame(&session, 64, 64);

    let screen = ScreenSize::new(64.0, 64.0);
    session.pointer_event(PointerEvent::Press(Point::new(10.0, 10.0)), screen);
    session.pointer_event(PointerEvent::Move(Point::new(20.0, 10.0)), screen);
    session.pointer_event(PointerEvent::Release, screen);

    let after = render_session_frame(&session, 64, 64);
    assert_ne!(before, after);
}

#[test]
fn zoom_changes_the_gridline_spacing() {
    let session = GraphSession::new();
    let before = render_session_frame(&session, 64, 64);

    session.pointer_event(
        PointerEvent::Scroll { rotation: -1.0 },
        ScreenSize::new(64.0, 64.0),
    );

    let after = render_session_frame(&session, 64, 64);
    assert_ne!(before, after);
}

#[test]
fn removing_a_curve_restores_the_empty_frame() {
    let session = GraphSession::new();
    let empty = render_session_frame(&session, 48, 48);

    let index = session.add_curve(|x: f64| Some(x));
    assert_ne!(empty, render_session_frame(&session, 48, 48));

    session.remove_curve(index);
    assert_eq!(empty, render_session_frame(&session, 48, 48));
}
