//! Engine-level errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::host::HostError;

#[derive(Debug, Error)]
pub enum BackdropError {
    /// A stopped backdrop cannot be mounted again; build a new one.
    #[error("backdrop already stopped")]
    Stopped,
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<BackdropError> for JsValue {
    fn from(err: BackdropError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
