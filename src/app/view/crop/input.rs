// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/input.rs
//
// Platform pointer input and its normalized form.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

/// Raw mouse and touch events as delivered by the host, in image pixels.
///
/// Serializable so recorded gestures can be replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp,
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd,
    TouchCancel,
}

/// Input after normalization. The controller only sees this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
}

impl InputEvent {
    /// Normalize to a `PointerEvent`.
    ///
    /// Touch events track the first touch point only. A touch down/move with
    /// no touch points yields `None`.
    pub fn normalize(&self) -> Option<PointerEvent> {
        match self {
            Self::MouseDown { x, y } => Some(PointerEvent::Down(Point::new(*x, *y))),
            Self::MouseMove { x, y } => Some(PointerEvent::Move(Point::new(*x, *y))),
            Self::MouseUp | Self::TouchEnd => Some(PointerEvent::Up),
            Self::TouchStart { touches } => touches.first().copied().map(PointerEvent::Down),
            Self::TouchMove { touches } => touches.first().copied().map(PointerEvent::Move),
            Self::TouchCancel => Some(PointerEvent::Cancel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_and_touch_normalize_alike() {
        let mouse = InputEvent::MouseMove { x: 4.0, y: 5.0 };
        let touch = InputEvent::TouchMove {
            touches: vec![Point::new(4.0, 5.0)],
        };

        assert_eq!(mouse.normalize(), touch.normalize());
    }

    #[test]
    fn test_touch_uses_first_point() {
        let event = InputEvent::TouchStart {
            touches: vec![Point::new(1.0, 2.0), Point::new(100.0, 200.0)],
        };
        assert_eq!(event.normalize(), Some(PointerEvent::Down(Point::new(1.0, 2.0))));
    }

    #[test]
    fn test_empty_touch_list_is_dropped() {
        assert_eq!(InputEvent::TouchMove { touches: vec![] }.normalize(), None);
        assert_eq!(InputEvent::TouchStart { touches: vec![] }.normalize(), None);
    }

    #[test]
    fn test_release_and_cancel() {
        assert_eq!(InputEvent::MouseUp.normalize(), Some(PointerEvent::Up));
        assert_eq!(InputEvent::TouchEnd.normalize(), Some(PointerEvent::Up));
        assert_eq!(InputEvent::TouchCancel.normalize(), Some(PointerEvent::Cancel));
    }

    #[test]
    fn test_gesture_json() {
        let events: Vec<InputEvent> = serde_json::from_str(
            r#"[
                {"type": "mouse_down", "x": 10, "y": 20},
                {"type": "touch_move", "touches": [{"x": 1.5, "y": 2.5}]},
                {"type": "touch_cancel"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                InputEvent::MouseDown { x: 10.0, y: 20.0 },
                InputEvent::TouchMove {
                    touches: vec![Point::new(1.5, 2.5)]
                },
                InputEvent::TouchCancel,
            ]
        );
    }
}
