//! Randomized bouncing images for the browser
//!
//! Every element matching a marker selector is placed at a random spot and
//! bound to its own `@keyframes` rule, so each one loops along a rectangular
//! path with its own speed, delay and direction.

pub mod bounce;
pub mod canvas;
pub mod config;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod primitives;
pub mod style;
pub mod transform;

pub use bounce::{AnimatedTarget, Bouncer};
pub use config::BounceConfig;
pub use error::BounceError;
pub use style::{MemoryRegistry, NameAllocator, StyleRegistry};
pub use transform::{BouncePlan, Sampler};
