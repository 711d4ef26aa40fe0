use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::ApiError;

pub const SUPERCHARGE_ENDPOINT: &str = "/api/supercharge";

/// Request body for the supercharge endpoint.
#[derive(Debug, Serialize)]
struct SuperchargeRequest<'a> {
    prompt: &'a str,
}

/// Response body from the supercharge endpoint. Every field is optional;
/// the backend has shipped both `refined_prompt` and the older `result`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuperchargeResponse {
    #[serde(default)]
    pub evaluation: Option<String>,
    #[serde(default)]
    pub refined_prompt: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

impl SuperchargeResponse {
    pub fn evaluation_text(&self) -> String {
        self.evaluation.clone().unwrap_or_default()
    }

    /// The refined prompt to display: `refined_prompt` wins, `result` is the
    /// legacy field name, first non-empty of the two.
    pub fn refined_text(&self) -> String {
        match &self.refined_prompt {
            Some(text) if !text.is_empty() => text.clone(),
            _ => self
                .result
                .clone()
                .filter(|text| !text.is_empty())
                .unwrap_or_default(),
        }
    }
}

/// Submit a draft prompt for evaluation and refinement.
///
/// One POST, no retries, no client-imposed timeout. A 429 maps to the fixed
/// rate-limit message, any other non-2xx to the generic failure message, and
/// fetch/decode failures surface their own description.
pub async fn supercharge(prompt: &str) -> Result<SuperchargeResponse, ApiError> {
    let body = serde_json::to_string(&SuperchargeRequest { prompt })
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let headers = web_sys::Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request =
        web_sys::Request::new_with_str_and_init(SUPERCHARGE_ENDPOINT, &init).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| ApiError::Network("unexpected fetch result".to_string()))?;

    if !response.ok() {
        if response.status() == 429 {
            return Err(ApiError::RateLimited);
        }
        return Err(ApiError::RequestFailed);
    }

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
}

/// Write the refined prompt to the platform clipboard. Best-effort: the
/// caller logs a failure and moves on.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| {
            e.as_string()
                .unwrap_or_else(|| "clipboard unavailable".to_string())
        })
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refined_prompt_wins_over_result() {
        let response = SuperchargeResponse {
            evaluation: Some("report".into()),
            refined_prompt: Some("refined".into()),
            result: Some("legacy".into()),
        };
        assert_eq!(response.refined_text(), "refined");
    }

    #[test]
    fn test_result_used_when_refined_prompt_missing_or_empty() {
        let missing = SuperchargeResponse {
            result: Some("legacy".into()),
            ..Default::default()
        };
        assert_eq!(missing.refined_text(), "legacy");

        let empty = SuperchargeResponse {
            refined_prompt: Some(String::new()),
            result: Some("legacy".into()),
            ..Default::default()
        };
        assert_eq!(empty.refined_text(), "legacy");
    }

    #[test]
    fn test_missing_fields_yield_empty_text() {
        let response = SuperchargeResponse::default();
        assert_eq!(response.evaluation_text(), "");
        assert_eq!(response.refined_text(), "");
    }

    #[test]
    fn test_response_decodes_with_unknown_fields() {
        let response: SuperchargeResponse = serde_json::from_str(
            r#"{"evaluation":"Report A","refined_prompt":"Polished resume prompt","model":"x"}"#,
        )
        .unwrap();
        assert_eq!(response.evaluation_text(), "Report A");
        assert_eq!(response.refined_text(), "Polished resume prompt");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&SuperchargeRequest {
            prompt: "Help me with my resume",
        })
        .unwrap();
        assert_eq!(body, r#"{"prompt":"Help me with my resume"}"#);
    }
}
