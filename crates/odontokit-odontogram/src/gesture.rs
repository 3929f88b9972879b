//! Press-drag-release gesture tracking.

use crate::model::Point;

/// What a drag is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Freehand,
    Move,
    Rotate,
    Pan,
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    /// Overlay being moved or rotated.
    pub origin_id: Option<u64>,
    /// Screen point of the press.
    pub start: Point,
    /// Screen point of the latest move.
    pub last: Point,
    /// Local press point (freehand), overlay position (move) or angle in `x`
    /// (rotate) at press time.
    pub anchor: Point,
    pub moved: bool,
}

impl DragSession {
    pub fn new(kind: DragKind, start: Point) -> Self {
        Self {
            kind,
            origin_id: None,
            start,
            last: start,
            anchor: Point::origin(),
            moved: false,
        }
    }

    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_target(mut self, id: u64, anchor: Point) -> Self {
        self.origin_id = Some(id);
        self.with_anchor(anchor)
    }

    /// Cumulative screen delta since the press.
    pub fn total_delta(&self) -> Point {
        self.last - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl GestureSession {
    pub fn is_active(&self) -> bool {
        matches!(self, GestureSession::Dragging(_))
    }

    pub fn current(&self) -> Option<&DragSession> {
        match self {
            GestureSession::Dragging(drag) => Some(drag),
            GestureSession::Idle => None,
        }
    }

    /// Starts `drag`. If a drag was still active, it is handed back so the
    /// caller can finalise it first.
    pub fn begin(&mut self, drag: DragSession) -> Option<DragSession> {
        match std::mem::replace(self, GestureSession::Dragging(drag)) {
            GestureSession::Dragging(stale) => Some(stale),
            GestureSession::Idle => None,
        }
    }

    /// Records a pointer move. Returns the previous screen point and the
    /// updated session, or `None` when idle.
    pub fn track(&mut self, screen: Point) -> Option<(Point, DragSession)> {
        match self {
            GestureSession::Dragging(drag) => {
                let previous = drag.last;
                drag.last = screen;
                drag.moved = drag.moved || screen != drag.start;
                Some((previous, *drag))
            }
            GestureSession::Idle => None,
        }
    }

    /// Takes the drag out, leaving the session idle.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            GestureSession::Dragging(drag) => Some(drag),
            GestureSession::Idle => None,
        }
    }
}
