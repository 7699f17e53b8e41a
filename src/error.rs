//! Error types for the front-page builder

use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the builder. None of them are fatal: the UI layer logs
/// them and turns them into toasts.
#[derive(Error, Debug)]
pub enum Error {
    /// Page data or a server response is not the JSON we expect
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Save or print was attempted without a group name
    #[error("group name is required")]
    MissingGroupName,

    /// A browser API call (fetch, print, timers) failed
    #[error("browser call failed: {0}")]
    Browser(String),

    /// The server answered but reported `success: false`
    #[error("save rejected by server")]
    Rejected,

    /// An expected DOM anchor is absent
    #[error("missing DOM element: {0}")]
    MissingElement(String),

    /// localStorage is not reachable
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
