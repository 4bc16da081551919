//! Transform - turns viewport and element size into a bounce
//!
//! The sampler draws the random parameters; a BouncePlan holds them and
//! derives the keyframe rule and the animation binding from them.

pub mod placed;
pub mod sampler;

pub use placed::BouncePlan;
pub use sampler::{Sampler, fresh_rng};
