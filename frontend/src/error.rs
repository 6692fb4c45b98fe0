use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("node is not mounted")]
    Unmounted,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, DomError>;
