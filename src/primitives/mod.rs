//! Bounce primitives - the values one bouncing element is built from
//!
//! Each primitive renders itself with `to_css()`; none of them touch the DOM.

#[macro_use]
pub mod bounded;
pub mod animation;
pub mod direction;
pub mod easing;
pub mod position;

pub use animation::{
    AnimationBinding, AnimationDefinition, CycleDuration, Iterations, Keyframe, KeyframeCycle,
    StartDelay,
};
pub use direction::Direction;
pub use easing::Easing;
pub use position::{Position, Viewport};
