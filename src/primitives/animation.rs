//! Animation - per-element CSS keyframe animations
//!
//! Every bouncing element gets its own `@keyframes` rule, because the
//! travel distances baked into the keyframes depend on the viewport and on
//! the directions drawn for that element. The element then references the
//! rule by name through the `animation` shorthand.

use super::bounded::bounded_secs;
use super::direction::Direction;
use super::easing::Easing;

bounded_secs!(CycleDuration, 3.0, 7.0);
bounded_secs!(StartDelay, 0.0, 2.0);

/// Renders a translate component: bare `0` for no offset, `<n>px` otherwise
fn px(value: f32) -> String {
    if value == 0.0 { "0".to_string() } else { format!("{value}px") }
}

/// A time fraction paired with a translate offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Percentage of the cycle, 0..=100
    pub percent: u8,
    pub dx: f32,
    pub dy: f32,
}

impl Keyframe {
    pub const fn new(percent: u8, dx: f32, dy: f32) -> Self {
        Self { percent, dx, dy }
    }

    pub fn transform_css(&self) -> String {
        format!("translate({}, {})", px(self.dx), px(self.dy))
    }

    pub fn to_css(&self) -> String {
        format!("{}% {{ transform: {}; }}", self.percent, self.transform_css())
    }
}

/// Ordered keyframes describing one loop of motion
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeCycle {
    frames: Vec<Keyframe>,
}

impl KeyframeCycle {
    /// Rectangular bounce: out along x, then y, back along x, then home.
    ///
    /// Each axis moves half of its available travel, signed by its direction.
    pub fn rectangular(travel: (f32, f32), dir_x: Direction, dir_y: Direction) -> Self {
        let hx = dir_x.sign() * travel.0 * 0.5;
        let hy = dir_y.sign() * travel.1 * 0.5;
        Self {
            frames: vec![
                Keyframe::new(0, 0.0, 0.0),
                Keyframe::new(25, hx, 0.0),
                Keyframe::new(50, hx, hy),
                Keyframe::new(75, 0.0, hy),
                Keyframe::new(100, 0.0, 0.0),
            ],
        }
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }
}

/// Repeat policy of a bound animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Iterations {
    Infinite,
}

impl Iterations {
    pub fn to_css(&self) -> String {
        match self {
            Self::Infinite => "infinite".to_string(),
        }
    }
}

/// A named `@keyframes` rule
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDefinition {
    pub name: String,
    pub cycle: KeyframeCycle,
}

impl AnimationDefinition {
    pub fn new(name: impl Into<String>, cycle: KeyframeCycle) -> Self {
        Self { name: name.into(), cycle }
    }

    /// The full rule, ready to be inserted into a stylesheet
    pub fn to_css(&self) -> String {
        let body: Vec<String> = self.cycle.frames().iter().map(Keyframe::to_css).collect();
        format!("@keyframes {} {{ {} }}", self.name, body.join(" "))
    }
}

/// Reference from an element to a definition, plus its playback settings
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationBinding {
    pub name: String,
    pub duration: CycleDuration,
    pub easing: Easing,
    pub iterations: Iterations,
    pub delay: StartDelay,
}

impl AnimationBinding {
    /// Value for the `animation` shorthand property
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name,
            self.duration.to_css(),
            self.easing.to_css(),
            self.iterations.to_css(),
            self.delay.to_css(),
        )
    }
}
