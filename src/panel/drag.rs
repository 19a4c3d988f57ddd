//! Drag tracking
//!
//! Translates raw pointer positions into deltas relative to where a drag
//! started, and tells clicks apart from drags for press targets that support
//! both (the panel toggle is clickable and draggable).

/// A point in logical window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pointer offset from the drag origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragDelta {
    pub x: f32,
    pub y: f32,
}

impl DragDelta {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero_x(&self) -> bool {
        self.x == 0.0
    }
}

/// An active drag, anchored at the pointer position where it started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    origin: Point,
}

impl DragSession {
    pub fn start(origin: Point) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn delta(&self, position: Point) -> DragDelta {
        DragDelta {
            x: position.x - self.origin.x,
            y: position.y - self.origin.y,
        }
    }
}

/// Outcome of feeding pointer input into a `PointerGesture`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent<T> {
    /// Nothing to report
    Idle,
    /// Pointer moved past the drag threshold for the first time
    DragStarted { origin: Point, position: Point },
    /// Pointer moved while dragging
    DragMoved { position: Point },
    /// Released without dragging
    Clicked(T),
    /// Released after dragging
    DragEnded,
}

/// Press-to-release tracking for a single pointer button
#[derive(Debug, Clone, Copy)]
pub struct PointerGesture<T> {
    target: T,
    origin: Point,
    dragging: bool,
}

impl<T: Copy> PointerGesture<T> {
    /// Movement (in logical pixels) before a press becomes a drag
    pub const DRAG_THRESHOLD: f32 = 4.0;

    pub fn press(target: T, origin: Point) -> Self {
        Self {
            target,
            origin,
            dragging: false,
        }
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn moved(&mut self, position: Point) -> GestureEvent<T> {
        if self.dragging {
            return GestureEvent::DragMoved { position };
        }

        let dx = position.x - self.origin.x;
        let dy = position.y - self.origin.y;
        if (dx * dx + dy * dy).sqrt() >= Self::DRAG_THRESHOLD {
            self.dragging = true;
            GestureEvent::DragStarted {
                origin: self.origin,
                position,
            }
        } else {
            GestureEvent::Idle
        }
    }

    pub fn release(self) -> GestureEvent<T> {
        if self.dragging {
            GestureEvent::DragEnded
        } else {
            GestureEvent::Clicked(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_delta() {
        let session = DragSession::start(Point::new(500.0, 100.0));
        assert_eq!(
            session.delta(Point::new(450.0, 130.0)),
            DragDelta::new(-50.0, 30.0)
        );
        assert!(session.delta(Point::new(500.0, 300.0)).is_zero_x());
    }

    #[test]
    fn test_press_release_is_click() {
        let mut gesture = PointerGesture::press('t', Point::new(10.0, 10.0));
        assert_eq!(gesture.moved(Point::new(12.0, 11.0)), GestureEvent::Idle);
        assert_eq!(gesture.release(), GestureEvent::Clicked('t'));
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        let origin = Point::new(10.0, 10.0);
        let mut gesture = PointerGesture::press('t', origin);

        let started = gesture.moved(Point::new(15.0, 10.0));
        assert_eq!(
            started,
            GestureEvent::DragStarted {
                origin,
                position: Point::new(15.0, 10.0)
            }
        );
        assert!(gesture.is_dragging());

        // Small moves after the drag started are still reported
        assert_eq!(
            gesture.moved(Point::new(16.0, 10.0)),
            GestureEvent::DragMoved {
                position: Point::new(16.0, 10.0)
            }
        );
        assert_eq!(gesture.release(), GestureEvent::DragEnded);
    }
}
