// Pointer and wheel gesture recognition, kept free of DOM types so the
// viewer only has to apply the events it returns.

use crate::constants::{DRAG_THRESHOLD_PX, WHEEL_LINE_PX, WHEEL_PAGE_PX, WHEEL_STEP_PX};
use glam::DVec2;

/// `WheelEvent.deltaMode` values.
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Press and release without crossing the drag threshold.
    Click(DVec2),
    MoveStart,
    /// Pan by this many CSS pixels.
    Pan(DVec2),
    /// Zoom by whole levels around `anchor`; positive zooms in.
    Zoom { steps: f64, anchor: DVec2 },
    MoveEnd,
}

#[derive(Clone, Copy, Debug)]
struct DragState {
    pointer_id: i32,
    start: DVec2,
    last: DVec2,
    moving: bool,
}

#[derive(Debug)]
pub struct GestureTracker {
    drag: Option<DragState>,
    wheel_px: f64,
    threshold_px: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            drag: None,
            wheel_px: 0.0,
            threshold_px: DRAG_THRESHOLD_PX,
        }
    }
}

impl GestureTracker {
    /// A new press replaces any press still being tracked.
    pub fn pointer_down(&mut self, pointer_id: i32, pos: DVec2) {
        self.drag = Some(DragState {
            pointer_id,
            start: pos,
            last: pos,
            moving: false,
        });
    }

    pub fn pointer_move(&mut self, pointer_id: i32, pos: DVec2) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        let Some(drag) = self.drag.as_mut().filter(|d| d.pointer_id == pointer_id) else {
            return out;
        };
        if !drag.moving && pos.distance(drag.start) > self.threshold_px {
            drag.moving = true;
            out.push(GestureEvent::MoveStart);
        }
        if drag.moving {
            let delta = pos - drag.last;
            drag.last = pos;
            if delta != DVec2::ZERO {
                out.push(GestureEvent::Pan(delta));
            }
        }
        out
    }

    pub fn pointer_up(&mut self, pointer_id: i32, pos: DVec2) -> Option<GestureEvent> {
        match self.drag {
            Some(d) if d.pointer_id == pointer_id => {
                self.drag = None;
                Some(if d.moving {
                    GestureEvent::MoveEnd
                } else {
                    GestureEvent::Click(pos)
                })
            }
            _ => None,
        }
    }

    /// A cancelled press never clicks, but an active pan still ends.
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> Option<GestureEvent> {
        match self.drag {
            Some(d) if d.pointer_id == pointer_id => {
                self.drag = None;
                d.moving.then_some(GestureEvent::MoveEnd)
            }
            _ => None,
        }
    }

    /// Accumulate scroll distance and zoom one level per `WHEEL_STEP_PX`.
    ///
    /// Trackpads send many small deltas and mice send a few large ones, so
    /// the distance is summed until it crosses a step. A change of direction
    /// drops whatever was left over.
    pub fn wheel(&mut self, delta_y: f64, delta_mode: u32, anchor: DVec2) -> Vec<GestureEvent> {
        let px = delta_y * wheel_scale(delta_mode);
        if !px.is_finite() || px == 0.0 {
            return Vec::new();
        }
        if self.wheel_px * px < 0.0 {
            self.wheel_px = 0.0;
        }
        self.wheel_px += px;

        let whole = (self.wheel_px / WHEEL_STEP_PX).trunc();
        if whole == 0.0 {
            return Vec::new();
        }
        self.wheel_px -= whole * WHEEL_STEP_PX;
        vec![
            GestureEvent::MoveStart,
            // scrolling down (positive delta) zooms out
            GestureEvent::Zoom {
                steps: -whole,
                anchor,
            },
            GestureEvent::MoveEnd,
        ]
    }
}

fn wheel_scale(delta_mode: u32) -> f64 {
    match delta_mode {
        DELTA_PIXEL => 1.0,
        DELTA_LINE => WHEEL_LINE_PX,
        DELTA_PAGE => WHEEL_PAGE_PX,
        // unknown modes are treated as pixels
        _ => 1.0,
    }
}
