//! Viewport and bounding-box geometry in CSS pixels.

use crate::error::{ModelError, Result};

/// Size of the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A bounding rectangle relative to the viewport's top-left corner, as
/// reported by a client-rect query. Edges may be negative when the element
/// is scrolled past.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Build a rect from its edges, rejecting inverted or non-finite input.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Result<Self> {
        if ![left, top, right, bottom].iter().all(|v| v.is_finite()) {
            return Err(ModelError::InvalidGeometry(
                "rect edges must be finite".to_string(),
            ));
        }
        if right < left || bottom < top {
            return Err(ModelError::InvalidGeometry(format!(
                "inverted rect ({left}, {top}) -> ({right}, {bottom})"
            )));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Build a rect from an origin and a size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        Self::from_edges(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether any part of the rect lies within `[0, width] x [0, height]`.
    /// Touching an edge counts as visible.
    pub fn intersects_viewport(&self, viewport: ViewportSize) -> bool {
        !(self.bottom < 0.0
            || self.right < 0.0
            || self.left > viewport.width
            || self.top > viewport.height)
    }
}
