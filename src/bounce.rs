//! Bouncer - the run-once initializer that sets marked elements bouncing
//!
//! For every target: draw a plan, place the element at its start offset,
//! register a uniquely named `@keyframes` rule, then bind the element to it.
//! The host is reached only through [`AnimatedTarget`] and [`StyleRegistry`].

use rand::Rng;

use crate::config::BounceConfig;
use crate::error::BounceError;
use crate::primitives::{AnimationBinding, Position, Viewport};
use crate::style::{NameAllocator, StyleRegistry};
use crate::transform::{BouncePlan, Sampler};

/// An element that can be placed and given an animation
pub trait AnimatedTarget {
    fn set_position(&mut self, position: Position) -> Result<(), BounceError>;
    fn bind_animation(&mut self, binding: &AnimationBinding) -> Result<(), BounceError>;
}

/// Applies bounce plans to targets.
///
/// Names come from the bouncer's allocator, so a second `run` over the same
/// targets adds a fresh set of rules rather than reusing the first set's
/// names. Bouncers built with [`Bouncer::with_names`] on clones of one
/// allocator never collide with each other either.
pub struct Bouncer {
    config: BounceConfig,
    names: NameAllocator,
}

impl Bouncer {
    pub fn new(config: BounceConfig) -> Self {
        let names = NameAllocator::new(config.name_prefix.clone());
        Self { config, names }
    }

    pub fn with_names(config: BounceConfig, names: NameAllocator) -> Self {
        Self { config, names }
    }

    pub fn config(&self) -> &BounceConfig {
        &self.config
    }

    pub fn names(&self) -> &NameAllocator {
        &self.names
    }

    /// Animate every target once.
    ///
    /// `viewport` is asked once per element. Returns the applied plans in
    /// target order; no targets means nothing is registered or touched.
    pub fn run<'a, R, T, S, V>(
        &mut self,
        rng: &mut R,
        mut viewport: V,
        targets: impl IntoIterator<Item = &'a mut T>,
        registry: &mut S,
    ) -> Result<Vec<BouncePlan>, BounceError>
    where
        R: Rng,
        T: AnimatedTarget + 'a,
        S: StyleRegistry + ?Sized,
        V: FnMut() -> Viewport,
    {
        let mut plans = Vec::new();

        for target in targets {
            let plan = Sampler::random_plan(rng, viewport(), self.config.element_size);
            target.set_position(plan.position)?;

            let name = self.names.allocate();
            registry.insert(&plan.definition(&name))?;
            target.bind_animation(&plan.binding(&name, self.config.easing))?;

            log::debug!("{name}: {}", plan.describe());
            plans.push(plan);
        }

        Ok(plans)
    }
}
