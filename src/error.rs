use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window.performance is unavailable")]
    NoPerformance,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid site content: {0}")]
    Content(#[from] serde_json::Error),
    #[error("word rotation needs at least one word")]
    EmptyWordList,
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
