//! Pointer events delivered by the display collaborator, in device space.

use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseDownEvent {
    pub position: Point,
    pub button: MouseButton,
}

impl MouseDownEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub position: Point,
}

impl MouseMoveEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseUpEvent {
    pub position: Point,
    pub button: MouseButton,
}

impl MouseUpEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }
}

/// Wheel direction; up zooms in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}
