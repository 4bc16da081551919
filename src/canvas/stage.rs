//! Stage - full-viewport backdrop hosting the bouncing gallery

use dioxus::prelude::*;

use super::image::BouncingImage;
use crate::config::BounceConfig;
use crate::dom;
use crate::gallery::builtin_images;

/// Renders the gallery, then sets it bouncing once the DOM is in place
#[component]
pub fn Stage() -> Element {
    let config = use_hook(BounceConfig::default);
    let images = use_hook(builtin_images);
    let marker = config.marker_class.clone();
    let size = config.element_size;

    // Effects run after the first render, so the marked images exist by now
    use_effect(move || match dom::mount(&config) {
        Ok(count) => log::debug!("stage mounted {count} bouncing image(s)"),
        Err(err) => log::error!("could not start bouncing: {err}"),
    });

    rsx! {
        div {
            style: "position: fixed; inset: 0; overflow: hidden; background: #0f0f1a;",
            for image in images {
                BouncingImage {
                    key: "{image.id}",
                    image: image.clone(),
                    marker: marker.clone(),
                    size: size,
                }
            }
        }
    }
}
