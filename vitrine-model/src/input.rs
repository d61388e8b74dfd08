//! Normalized input events delivered by the host.
//!
//! Gesture recognition itself happens outside the engine; whichever library
//! the host uses is expected to translate its callbacks into these types.

/// Horizontal direction reported by the recognizer for a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Finger moved towards the left edge: advance to the next page.
    Left,
    /// Finger moved towards the right edge: go back one page.
    Right,
}

impl SwipeDirection {
    /// Page step implied by the swipe.
    pub fn page_step(self) -> isize {
        match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureKind {
    /// Continuous drag update.
    Pan,
    /// Fast flick, at most once per physical gesture.
    Swipe,
    /// Drag released.
    PanEnd,
}

/// One normalized gesture event.
///
/// `delta_x` is cumulative since the start of the physical gesture, in
/// pixels, negative when the pointer moved left.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub delta_x: f32,
    pub direction: SwipeDirection,
}

impl GestureEvent {
    pub fn pan(delta_x: f32) -> Self {
        let direction = if delta_x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };
        Self {
            kind: GestureKind::Pan,
            delta_x,
            direction,
        }
    }

    pub fn swipe(direction: SwipeDirection) -> Self {
        Self {
            kind: GestureKind::Swipe,
            delta_x: 0.0,
            direction,
        }
    }

    pub fn pan_end(delta_x: f32) -> Self {
        Self {
            kind: GestureKind::PanEnd,
            ..Self::pan(delta_x)
        }
    }
}

/// Raw wheel deltas as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelDelta {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl WheelDelta {
    pub const fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }

    pub const fn horizontal(delta_x: f32) -> Self {
        Self {
            delta_x,
            delta_y: 0.0,
        }
    }

    /// Whether the horizontal component dominates the vertical one.
    pub fn is_horizontal(&self) -> bool {
        self.delta_x.abs() > self.delta_y.abs()
    }
}

/// Keys the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Other,
}
