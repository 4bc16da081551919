//! Direction - which side of the start point an axis travels toward

/// Sign applied to one axis of the bounce path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward (right / down), -1 for backward (left / up)
    pub const fn sign(&self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}
