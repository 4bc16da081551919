//! Style - where generated animation rules go and what they are called

pub mod names;
pub mod registry;

pub use names::NameAllocator;
pub use registry::{MemoryRegistry, StyleRegistry};
