use thiserror::Error;

/// Failures raised while attaching stars to the page.
#[derive(Debug, Error)]
pub enum StarfieldError {
    /// No element matched the container selector.
    #[error("star container `{selector}` not found")]
    ContainerNotFound { selector: String },
    /// Running outside a browser page.
    #[error("no window/document available")]
    NoDocument,
    /// A web-sys call returned `Err(JsValue)`.
    #[error("dom: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl StarfieldError {
    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", err))
    }
}
