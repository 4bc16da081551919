//! NameAllocator - unique names for generated `@keyframes` rules

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `prefix0`, `prefix1`, ... in allocation order.
///
/// Clones share one counter, so every clone keeps drawing fresh numbers.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    prefix: String,
    next: Arc<AtomicU64>,
}

impl NameAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_counter(prefix, Arc::new(AtomicU64::new(0)))
    }

    /// Allocator drawing from an existing counter
    pub fn with_counter(prefix: impl Into<String>, counter: Arc<AtomicU64>) -> Self {
        Self { prefix: prefix.into(), next: counter }
    }

    pub fn allocate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }

    /// Number of names handed out so far on this counter
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
