// Host-side tests for click/drag recognition and wheel zoom stepping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod gesture {
    include!("../src/gesture.rs");
}

use gesture::{GestureEvent, GestureTracker, DELTA_LINE, DELTA_PAGE, DELTA_PIXEL};
use glam::DVec2;

const ORIGIN: DVec2 = DVec2::new(100.0, 100.0);

fn pressed(id: i32) -> GestureTracker {
    let mut g = GestureTracker::default();
    g.pointer_down(id, ORIGIN);
    g
}

fn zoom_steps(events: &[GestureEvent]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|e| match e {
            GestureEvent::Zoom { steps, .. } => Some(*steps),
            _ => None,
        })
        .collect()
}

#[test]
fn press_and_release_in_place_is_a_click() {
    let mut g = pressed(1);
    assert_eq!(
        g.pointer_up(1, ORIGIN),
        Some(GestureEvent::Click(ORIGIN))
    );
    // the press is consumed
    assert_eq!(g.pointer_up(1, ORIGIN), None);
}

#[test]
fn travel_of_exactly_the_threshold_still_clicks() {
    let mut g = pressed(1);
    let edge = ORIGIN + DVec2::new(4.0, 0.0);
    assert!(g.pointer_move(1, edge).is_empty());
    assert_eq!(g.pointer_up(1, edge), Some(GestureEvent::Click(edge)));
}

#[test]
fn travel_past_the_threshold_starts_a_pan() {
    let mut g = pressed(1);
    let events = g.pointer_move(1, ORIGIN + DVec2::new(3.0, 3.0));
    // first pan delta covers the whole travel from the press point
    assert_eq!(
        events,
        [
            GestureEvent::MoveStart,
            GestureEvent::Pan(DVec2::new(3.0, 3.0))
        ]
    );
    assert_eq!(
        g.pointer_move(1, ORIGIN + DVec2::new(5.0, 1.0)),
        [GestureEvent::Pan(DVec2::new(2.0, -2.0))]
    );
    assert_eq!(
        g.pointer_up(1, ORIGIN + DVec2::new(5.0, 1.0)),
        Some(GestureEvent::MoveEnd)
    );
}

#[test]
fn returning_to_the_press_point_is_still_a_drag() {
    let mut g = pressed(1);
    g.pointer_move(1, ORIGIN + DVec2::new(10.0, 0.0));
    g.pointer_move(1, ORIGIN);
    assert_eq!(g.pointer_up(1, ORIGIN), Some(GestureEvent::MoveEnd));
}

#[test]
fn move_start_fires_once_per_drag() {
    let mut g = pressed(1);
    let mut starts = 0;
    for x in 1..30 {
        let events = g.pointer_move(1, ORIGIN + DVec2::new(x as f64, 0.0));
        starts += events
            .iter()
            .filter(|e| **e == GestureEvent::MoveStart)
            .count();
    }
    assert_eq!(starts, 1);
}

#[test]
fn stationary_move_during_a_drag_emits_nothing() {
    let mut g = pressed(1);
    let p = ORIGIN + DVec2::new(20.0, 0.0);
    g.pointer_move(1, p);
    assert!(g.pointer_move(1, p).is_empty());
}

#[test]
fn hover_without_press_is_ignored() {
    let mut g = GestureTracker::default();
    assert!(g.pointer_move(1, ORIGIN + DVec2::new(50.0, 0.0)).is_empty());
    assert_eq!(g.pointer_up(1, ORIGIN), None);
    assert_eq!(g.pointer_cancel(1), None);
}

#[test]
fn foreign_pointer_does_not_touch_the_press() {
    let mut g = pressed(1);
    assert!(g.pointer_move(2, ORIGIN + DVec2::new(50.0, 0.0)).is_empty());
    assert_eq!(g.pointer_up(2, ORIGIN), None);
    assert_eq!(g.pointer_cancel(2), None);
    // the original press is still a click
    assert_eq!(g.pointer_up(1, ORIGIN), Some(GestureEvent::Click(ORIGIN)));
}

#[test]
fn foreign_release_mid_drag_keeps_the_drag() {
    let mut g = pressed(1);
    g.pointer_move(1, ORIGIN + DVec2::new(10.0, 0.0));
    assert_eq!(g.pointer_up(7, ORIGIN), None);
    assert_eq!(
        g.pointer_move(1, ORIGIN + DVec2::new(12.0, 0.0)),
        [GestureEvent::Pan(DVec2::new(2.0, 0.0))]
    );
}

#[test]
fn cancel_during_a_drag_ends_the_move() {
    let mut g = pressed(1);
    g.pointer_move(1, ORIGIN + DVec2::new(10.0, 0.0));
    assert_eq!(g.pointer_cancel(1), Some(GestureEvent::MoveEnd));
    // nothing left to release
    assert_eq!(g.pointer_up(1, ORIGIN), None);
}

#[test]
fn cancel_before_the_threshold_never_clicks() {
    let mut g = pressed(1);
    g.pointer_move(1, ORIGIN + DVec2::new(1.0, 0.0));
    assert_eq!(g.pointer_cancel(1), None);
    assert_eq!(g.pointer_up(1, ORIGIN), None);
}

#[test]
fn new_press_replaces_an_unreleased_one() {
    let mut g = pressed(1);
    g.pointer_down(2, ORIGIN);
    assert_eq!(g.pointer_up(1, ORIGIN), None);
    assert_eq!(g.pointer_up(2, ORIGIN), Some(GestureEvent::Click(ORIGIN)));
}

#[test]
fn wheel_notch_is_one_level_wrapped_in_a_move() {
    let mut g = GestureTracker::default();
    let events = g.wheel(-100.0, DELTA_PIXEL, ORIGIN);
    assert_eq!(
        events,
        [
            GestureEvent::MoveStart,
            GestureEvent::Zoom {
                steps: 1.0,
                anchor: ORIGIN
            },
            GestureEvent::MoveEnd,
        ]
    );
    assert_eq!(zoom_steps(&g.wheel(100.0, DELTA_PIXEL, ORIGIN)), [-1.0]);
}

#[test]
fn small_wheel_deltas_accumulate_to_a_step() {
    let mut g = GestureTracker::default();
    for _ in 0..9 {
        assert!(g.wheel(-10.0, DELTA_PIXEL, ORIGIN).is_empty());
    }
    assert_eq!(zoom_steps(&g.wheel(-10.0, DELTA_PIXEL, ORIGIN)), [1.0]);
    // remainder was consumed
    assert!(g.wheel(-10.0, DELTA_PIXEL, ORIGIN).is_empty());
}

#[test]
fn large_wheel_delta_steps_several_levels() {
    let mut g = GestureTracker::default();
    assert_eq!(zoom_steps(&g.wheel(250.0, DELTA_PIXEL, ORIGIN)), [-2.0]);
    // the 50px left over needs another 50 to step
    assert!(g.wheel(40.0, DELTA_PIXEL, ORIGIN).is_empty());
    assert_eq!(zoom_steps(&g.wheel(10.0, DELTA_PIXEL, ORIGIN)), [-1.0]);
}

#[test]
fn direction_change_drops_the_remainder() {
    let mut g = GestureTracker::default();
    assert!(g.wheel(90.0, DELTA_PIXEL, ORIGIN).is_empty());
    assert!(g.wheel(-90.0, DELTA_PIXEL, ORIGIN).is_empty());
    assert_eq!(zoom_steps(&g.wheel(-10.0, DELTA_PIXEL, ORIGIN)), [1.0]);
}

#[test]
fn wheel_delta_mode_is_normalised() {
    let mut g = GestureTracker::default();
    // 3 lines = 120px
    assert_eq!(zoom_steps(&g.wheel(-3.0, DELTA_LINE, ORIGIN)), [1.0]);

    let mut g = GestureTracker::default();
    assert!(g.wheel(-2.0, DELTA_LINE, ORIGIN).is_empty());

    let mut g = GestureTracker::default();
    // one page = 800px
    assert_eq!(zoom_steps(&g.wheel(1.0, DELTA_PAGE, ORIGIN)), [-8.0]);
}

#[test]
fn zero_or_nan_wheel_is_ignored() {
    let mut g = GestureTracker::default();
    assert!(g.wheel(0.0, DELTA_PIXEL, ORIGIN).is_empty());
    assert!(g.wheel(f64::NAN, DELTA_PIXEL, ORIGIN).is_empty());
    assert_eq!(g.wheel(-100.0, DELTA_PIXEL, ORIGIN).len(), 3);
}

#[test]
fn wheel_during_a_drag_leaves_the_drag_alone() {
    let mut g = pressed(1);
    g.pointer_move(1, ORIGIN + DVec2::new(10.0, 0.0));
    g.wheel(-100.0, DELTA_PIXEL, ORIGIN);
    assert_eq!(g.pointer_up(1, ORIGIN), Some(GestureEvent::MoveEnd));
}
