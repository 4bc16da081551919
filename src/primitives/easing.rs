//! Easing - timing curve handed to the host's animation engine
//!
//! Only the curve parameters are modelled; interpolation is left to
//! whatever renders the animation.

/// Timing curve for an animation binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Symmetric ease-in-ease-out
    pub const EASE_IN_OUT: Self = Self::CubicBezier { x1: 0.42, y1: 0.0, x2: 0.58, y2: 1.0 };

    pub fn to_css(&self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EASE_IN_OUT
    }
}
