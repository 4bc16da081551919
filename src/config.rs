//! BounceConfig - knobs for the startup initializer

use crate::primitives::Easing;

/// Marker, sizing and naming used when mounting the bounce
#[derive(Debug, Clone, PartialEq)]
pub struct BounceConfig {
    /// Class carried by every element to animate
    pub marker_class: String,
    /// Assumed width and height of every marked element, in px
    pub element_size: f32,
    /// Prefix for generated `@keyframes` names
    pub name_prefix: String,
    pub easing: Easing,
}

impl BounceConfig {
    pub const DEFAULT_MARKER_CLASS: &'static str = "bouncing";
    pub const DEFAULT_ELEMENT_SIZE: f32 = 100.0;
    pub const DEFAULT_NAME_PREFIX: &'static str = "bounce";

    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    /// CSS selector matching the marked elements
    pub fn selector(&self) -> String {
        format!(".{}", self.marker_class)
    }

    pub fn with_element_size(mut self, size: f32) -> Self {
        self.element_size = size;
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            marker_class: Self::DEFAULT_MARKER_CLASS.to_string(),
            element_size: Self::DEFAULT_ELEMENT_SIZE,
            name_prefix: Self::DEFAULT_NAME_PREFIX.to_string(),
            easing: Easing::EASE_IN_OUT,
        }
    }
}
