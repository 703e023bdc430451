//! Error types for DOM wiring
//!
//! Nothing here reaches the visitor: `web::init` logs and moves on.

use thiserror::Error;

/// Errors raised while wiring behaviors to the page
#[derive(Debug, Error)]
pub enum FxError {
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
