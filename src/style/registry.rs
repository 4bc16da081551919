//! StyleRegistry - append-only sink for generated `@keyframes` rules

use crate::error::BounceError;
use crate::primitives::AnimationDefinition;

/// Somewhere animation definitions become globally visible.
///
/// Rules are only ever appended; nothing is looked up or removed.
pub trait StyleRegistry {
    fn insert(&mut self, definition: &AnimationDefinition) -> Result<(), BounceError>;
}

/// Keeps rendered rules in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    rules: Vec<(String, String)>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered rule text, in insertion order
    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(_, css)| css.as_str())
    }

    /// Names of the inserted definitions, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl StyleRegistry for MemoryRegistry {
    fn insert(&mut self, definition: &AnimationDefinition) -> Result<(), BounceError> {
        self.rules.push((definition.name.clone(), definition.to_css()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Direction, KeyframeCycle};

    fn def(name: &str) -> AnimationDefinition {
        AnimationDefinition::new(
            name,
            KeyframeCycle::rectangular((100.0, 100.0), Direction::Forward, Direction::Forward),
        )
    }

    #[test]
    fn insert_appends_in_order() -> Result<(), BounceError> {
        let mut reg = MemoryRegistry::new();
        assert!(reg.is_empty());
        reg.insert(&def("a0"))?;
        reg.insert(&def("a1"))?;
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["a0", "a1"]);
        Ok(())
    }

    #[test]
    fn same_name_is_kept_twice() -> Result<(), BounceError> {
        let mut reg = MemoryRegistry::new();
        reg.insert(&def("dup"))?;
        reg.insert(&def("dup"))?;
        assert_eq!(reg.len(), 2);
        Ok(())
    }

    #[test]
    fn rules_hold_rendered_keyframes() -> Result<(), BounceError> {
        let mut reg = MemoryRegistry::new();
        reg.insert(&def("x0"))?;
        reg.insert(&def("x1"))?;
        let rules: Vec<&str> = reg.rules().collect();
        assert!(rules[0].starts_with("@keyframes x0 {"));
        assert!(rules[1].starts_with("@keyframes x1 {"));
        Ok(())
    }
}
