//! Position - element placement with CSS output
//!
//! Positions are absolute offsets within the browser viewport.

/// Position in pixels, absolute within the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn left_css(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top_css(&self) -> String {
        format!("{}px", self.y)
    }
}

/// Viewport dimensions in pixels, as read from the host window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Room left for an element of `elem_size` to move along each axis.
    /// Never negative: a viewport smaller than the element has no travel.
    pub fn travel(&self, elem_size: f32) -> (f32, f32) {
        (
            (self.width - elem_size).max(0.0),
            (self.height - elem_size).max(0.0),
        )
    }
}
