//! Bounded - macro for creating half-open ranges of seconds
//!
//! Generates types with compile-time validation for const contexts.
//! Values live in `[MIN, MAX)`, which is also the range random draws use.

/// Creates a bounded seconds type with `[min, max)` constraints.
///
/// # Example
/// ```ignore
/// bounded_secs!(StartDelay, 0.0, 2.0);
/// let d = StartDelay::new(1.5);
/// assert_eq!(d.to_css(), "1.5s");
/// ```
macro_rules! bounded_secs {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value >= Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        ")"
                    ));
                }
                Self(value)
            }

            pub const fn seconds(&self) -> f32 {
                self.0
            }

            /// Uniform draw over `[MIN, MAX)`
            pub fn sample<R: ::rand::Rng>(rng: &mut R) -> Self {
                Self(rng.random_range(Self::MIN..Self::MAX))
            }

            /// CSS time value, e.g. `4.25s`
            pub fn to_css(&self) -> String {
                format!("{}s", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

pub(crate) use bounded_secs;
