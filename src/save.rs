//! Save protocol: one JSON POST of the slot mapping to `/save`.
//!
//! No retry and no de-duplication; a second save racing the first simply
//! lands last.

use std::collections::BTreeMap;

use dioxus::logger::tracing::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::catalog::ArticleId;
use crate::error::{Error, Result};
use crate::workflow::require_group_name;

pub const SAVE_ENDPOINT: &str = "/save";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub group_name: String,
    pub slots: BTreeMap<String, Option<ArticleId>>,
    /// ISO-8601, taken from the browser clock.
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait SaveTransport {
    async fn post(&self, request: &SaveRequest) -> Result<SaveResponse>;
}

/// Validates and sends a save. Returns the saved name with its `.json`
/// extension stripped. An empty group name fails before anything is sent.
pub async fn save_layout(
    transport: &impl SaveTransport,
    group_name: &str,
    slots: BTreeMap<String, Option<ArticleId>>,
    timestamp: String,
) -> Result<String> {
    let group_name = require_group_name(group_name)?;
    let request = SaveRequest {
        group_name: group_name.to_string(),
        slots,
        timestamp,
    };
    let response = transport.post(&request).await.inspect_err(|e| {
        error!(error = %e, "save failed");
    })?;

    if !response.success {
        return Err(Error::Rejected);
    }
    let filename = response.filename.unwrap_or_default();
    let saved_as = filename.replacen(".json", "", 1);
    info!(saved_as = %saved_as, "front page saved");
    Ok(saved_as)
}

/// Toast text for the outcome of [`save_layout`].
pub fn save_notice(result: &Result<String>) -> String {
    match result {
        Ok(saved_as) => format!("Sparat som {saved_as}"),
        Err(Error::MissingGroupName) => MISSING_GROUP_NOTICE.to_string(),
        Err(Error::Rejected) => "Något gick fel vid sparande".to_string(),
        Err(_) => "Kunde inte spara".to_string(),
    }
}

pub const MISSING_GROUP_NOTICE: &str = "Ange ett gruppnamn först!";
pub const SAVING_NOTICE: &str = "Sparar framsida...";

/// `fetch`-backed transport used in the browser.
pub struct FetchTransport;

impl SaveTransport for FetchTransport {
    async fn post(&self, request: &SaveRequest) -> Result<SaveResponse> {
        let window = web_sys::window().ok_or_else(|| Error::MissingElement("window".into()))?;
        let body = serde_json::to_string(request)?;

        let headers = web_sys::Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&wasm_bindgen::JsValue::from_str(&body));

        let req = web_sys::Request::new_with_str_and_init(SAVE_ENDPOINT, &init)?;
        let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&req))
            .await?
            .dyn_into()?;
        let text = JsFuture::from(resp.text()?)
            .await?
            .as_string()
            .unwrap_or_default();
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let mut slots = BTreeMap::new();
        slots.insert("puff1".to_string(), Some(ArticleId::new("7")));
        slots.insert("citat".to_string(), None);
        let json = serde_json::to_value(SaveRequest {
            group_name: "Grupp 3".into(),
            slots,
            timestamp: "2026-10-19T10:00:00.000Z".into(),
        })
        .unwrap();

        assert_eq!(json["groupName"], "Grupp 3");
        assert_eq!(json["slots"]["puff1"], "7");
        assert!(json["slots"]["citat"].is_null());
        assert_eq!(json["timestamp"], "2026-10-19T10:00:00.000Z");
    }

    #[test]
    fn notices_per_outcome() {
        assert_eq!(save_notice(&Ok("grupp_1".into())), "Sparat som grupp_1");
        assert_eq!(save_notice(&Err(Error::Rejected)), "Något gick fel vid sparande");
        assert_eq!(save_notice(&Err(Error::Browser("offline".into()))), "Kunde inte spara");
    }
}
