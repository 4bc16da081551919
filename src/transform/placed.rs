//! BouncePlan - the drawn parameters for one element and what follows from them

use crate::primitives::{
    AnimationBinding, AnimationDefinition, CycleDuration, Direction, Easing, Iterations,
    KeyframeCycle, Position, StartDelay,
};

/// Everything decided for a single bouncing element
#[derive(Debug, Clone, PartialEq)]
pub struct BouncePlan {
    pub position: Position,
    pub duration: CycleDuration,
    pub delay: StartDelay,
    pub direction_x: Direction,
    pub direction_y: Direction,
    /// Available travel per axis (viewport minus element size)
    pub travel: (f32, f32),
}

impl BouncePlan {
    pub fn new(position: Position, travel: (f32, f32)) -> Self {
        Self {
            position,
            duration: CycleDuration::default(),
            delay: StartDelay::default(),
            direction_x: Direction::Forward,
            direction_y: Direction::Forward,
            travel,
        }
    }

    pub fn with_duration(mut self, duration: CycleDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: StartDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_directions(mut self, x: Direction, y: Direction) -> Self {
        self.direction_x = x;
        self.direction_y = y;
        self
    }

    pub fn cycle(&self) -> KeyframeCycle {
        KeyframeCycle::rectangular(self.travel, self.direction_x, self.direction_y)
    }

    /// The `@keyframes` rule for this plan under `name`
    pub fn definition(&self, name: &str) -> AnimationDefinition {
        AnimationDefinition::new(name, self.cycle())
    }

    /// The element's reference to the rule called `name`
    pub fn binding(&self, name: &str, easing: Easing) -> AnimationBinding {
        AnimationBinding {
            name: name.to_string(),
            duration: self.duration,
            easing,
            iterations: Iterations::Infinite,
            delay: self.delay,
        }
    }

    /// One-line summary for logs
    pub fn describe(&self) -> String {
        format!(
            "at ({}, {}) every {} after {}, heading ({:+}, {:+})",
            self.position.x,
            self.position.y,
            self.duration.to_css(),
            self.delay.to_css(),
            self.direction_x.sign(),
            self.direction_y.sign(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Viewport;

    fn scenario_plan() -> BouncePlan {
        let travel = Viewport::new(800.0, 600.0).travel(100.0);
        BouncePlan::new(Position::new(120.0, 40.0), travel)
            .with_duration(CycleDuration::new(5.0))
            .with_delay(StartDelay::new(1.0))
            .with_directions(Direction::Forward, Direction::Backward)
    }

    #[test]
    fn scenario_keyframes() {
        let css = scenario_plan().definition("bounce0").to_css();
        assert!(css.contains("25% { transform: translate(350px, 0); }"));
        assert!(css.contains("50% { transform: translate(350px, -250px); }"));
        assert!(css.contains("75% { transform: translate(0, -250px); }"));
    }

    #[test]
    fn binding_references_definition_name() {
        let plan = scenario_plan();
        let def = plan.definition("bounce7");
        let binding = plan.binding("bounce7", Easing::EASE_IN_OUT);
        assert_eq!(def.name, binding.name);
        assert_eq!(binding.iterations, Iterations::Infinite);
        assert_eq!(binding.to_css(), "bounce7 5s cubic-bezier(0.42, 0, 0.58, 1) infinite 1s");
    }

    #[test]
    fn describe_mentions_directions() {
        let desc = scenario_plan().describe();
        assert!(desc.contains("at (120, 40)"));
        assert!(desc.contains("(+1, -1)"));
    }
}
