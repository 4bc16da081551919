//! Host failures while mounting the bounce

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BounceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("could not seed random generator: {0}")]
    Entropy(String),
}

impl BounceError {
    /// Wrap a JS exception value thrown by a DOM call
    pub fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}
