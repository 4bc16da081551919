//! Built-in gallery - the images the demo stage sets bouncing

/// One image on the stage
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    /// Unique identifier
    pub id: String,
    /// Alt text
    pub label: String,
    /// Inline `data:` URI
    pub src: String,
}

impl GalleryImage {
    pub fn new(id: impl Into<String>, label: impl Into<String>, svg: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            src: svg_data_uri(svg),
        }
    }
}

/// Wrap raw SVG markup in a `data:` URI usable as an `img` src
pub fn svg_data_uri(svg: &str) -> String {
    let escaped = svg.replace('"', "'").replace('#', "%23");
    format!("data:image/svg+xml;utf8,{escaped}")
}

fn ball(color: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><circle cx="50" cy="50" r="46" fill="{color}"/><circle cx="36" cy="34" r="12" fill="#ffffff" fill-opacity="0.35"/></svg>"##
    )
}

fn star(color: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><polygon points="50,4 61,38 97,38 68,59 79,94 50,72 21,94 32,59 3,38 39,38" fill="{color}"/></svg>"##
    )
}

fn square(color: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><rect x="8" y="8" width="84" height="84" rx="18" fill="{color}"/></svg>"##
    )
}

/// The default set of bouncing images
pub fn builtin_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new("ball-red", "red ball", &ball("#ef4444")),
        GalleryImage::new("ball-blue", "blue ball", &ball("#3b82f6")),
        GalleryImage::new("star-gold", "gold star", &star("#facc15")),
        GalleryImage::new("star-violet", "violet star", &star("#8b5cf6")),
        GalleryImage::new("square-green", "green square", &square("#22c55e")),
        GalleryImage::new("square-cyan", "cyan square", &square("#06b6d4")),
    ]
}
