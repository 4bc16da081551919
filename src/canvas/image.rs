//! Image renderer - one marked img for the bouncer to pick up
//!
//! The element only carries the marker class and its size; position and
//! animation are written into its inline style by the bouncer after mount.

use dioxus::prelude::*;

use crate::gallery::GalleryImage;

/// Renders a gallery image as a bounce target
#[component]
pub fn BouncingImage(image: GalleryImage, marker: String, size: f32) -> Element {
    let style = format!("position: absolute; width: {size}px; height: {size}px;");

    rsx! {
        img {
            class: "{marker}",
            style: "{style}",
            src: "{image.src}",
            alt: "{image.label}",
            "data-image-id": "{image.id}",
        }
    }
}
