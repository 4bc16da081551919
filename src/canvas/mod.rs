//! Canvas - Dioxus components for the demo page

pub mod image;
pub mod stage;

pub use image::BouncingImage;
pub use stage::Stage;
