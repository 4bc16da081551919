//! DOM host - web-sys backed targets and stylesheet
//!
//! Only reachable in a browser; everything here is a thin shim over the
//! `AnimatedTarget` and `StyleRegistry` seams.

use std::sync::atomic::AtomicU64;
use std::sync::{Arc, LazyLock};

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::bounce::{AnimatedTarget, Bouncer};
use crate::config::BounceConfig;
use crate::error::BounceError;
use crate::primitives::{AnimationBinding, AnimationDefinition, Position, Viewport};
use crate::style::{NameAllocator, StyleRegistry};
use crate::transform::fresh_rng;

/// One counter for every rule this page ever inserts into its document
static DOCUMENT_NAMES: LazyLock<Arc<AtomicU64>> = LazyLock::new(|| Arc::new(AtomicU64::new(0)));

/// Allocator for names of rules inserted into the live document.
/// All allocators handed out here share one counter, so repeated mounts never
/// reuse a name already in `document.head`.
pub fn document_names(prefix: &str) -> NameAllocator {
    NameAllocator::with_counter(prefix, DOCUMENT_NAMES.clone())
}

/// Current window inner size, or 0x0 outside a browser
pub fn viewport_size() -> Viewport {
    if let Some(window) = web_sys::window() {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Viewport::new(w, h)
    } else {
        Viewport::default()
    }
}

/// A marked element in the live document
pub struct DomElement(HtmlElement);

impl DomElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), BounceError> {
        self.0.style().set_property(property, value).map_err(BounceError::dom)
    }
}

impl AnimatedTarget for DomElement {
    fn set_position(&mut self, position: Position) -> Result<(), BounceError> {
        self.set_style("left", &position.left_css())?;
        self.set_style("top", &position.top_css())
    }

    fn bind_animation(&mut self, binding: &AnimationBinding) -> Result<(), BounceError> {
        self.set_style("animation", &binding.to_css())
    }
}

/// Appends one `<style>` element per definition to `document.head`
pub struct DocumentRegistry {
    document: Document,
}

impl DocumentRegistry {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl StyleRegistry for DocumentRegistry {
    fn insert(&mut self, definition: &AnimationDefinition) -> Result<(), BounceError> {
        let head = self.document.head().ok_or(BounceError::NoHead)?;
        let sheet = self.document.create_element("style").map_err(BounceError::dom)?;
        sheet.set_text_content(Some(&definition.to_css()));
        head.append_child(&sheet).map_err(BounceError::dom)?;
        Ok(())
    }
}

/// All HTML elements matching `selector`, in document order.
/// Non-HTML matches (e.g. SVG nodes) are skipped.
pub fn marked_elements(document: &Document, selector: &str) -> Result<Vec<DomElement>, BounceError> {
    let nodes = document.query_selector_all(selector).map_err(BounceError::dom)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            elements.push(DomElement(el));
        }
    }
    Ok(elements)
}

/// Set every marked element in the current document bouncing.
///
/// Meant to run once, when the document's structure is ready. Returns how
/// many elements were animated.
pub fn mount(config: &BounceConfig) -> Result<usize, BounceError> {
    let window = web_sys::window().ok_or(BounceError::NoWindow)?;
    let document = window.document().ok_or(BounceError::NoDocument)?;

    let selector = config.selector();
    let mut elements = marked_elements(&document, &selector)?;
    if elements.is_empty() {
        log::debug!("no elements match {selector:?}");
        return Ok(0);
    }

    let mut rng = fresh_rng()?;
    let mut registry = DocumentRegistry::new(document);
    let names = document_names(&config.name_prefix);
    let mut bouncer = Bouncer::with_names(config.clone(), names);
    let plans = bouncer.run(&mut rng, viewport_size, elements.iter_mut(), &mut registry)?;

    log::info!(
        "bouncing {} element(s) matching {selector:?}, {} rule name(s) issued on this page",
        plans.len(),
        bouncer.names().issued(),
    );
    Ok(plans.len())
}
