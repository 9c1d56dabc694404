//! Browser `fetch` bindings for the conversion endpoint.

use std::future::Future;

use voxconv_core::{ConversionClient, ConversionError, HttpReply};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// Posts form data to the conversion endpoint with `window.fetch`.
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    /// Create a client posting to `endpoint` (relative to the page origin).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ConversionClient for FetchClient {
    type Submission = FormData;

    fn send(
        &self,
        submission: FormData,
    ) -> impl Future<Output = Result<HttpReply, ConversionError>> {
        let endpoint = self.endpoint.clone();
        async move { post_form(&endpoint, &submission).await }
    }
}

async fn post_form(endpoint: &str, form: &FormData) -> Result<HttpReply, ConversionError> {
    let window = web_sys::window()
        .ok_or_else(|| ConversionError::Network("No browser window available".to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form);

    let request = Request::new_with_str_and_init(endpoint, &init)
        .map_err(|e| ConversionError::Network(js_error_message(&e)))?;

    leptos::logging::log!("POST {} started", endpoint);

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ConversionError::Network(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| ConversionError::Network("fetch did not resolve to a Response".to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .map_err(|e| ConversionError::MalformedResponse(js_error_message(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| ConversionError::MalformedResponse(js_error_message(&e)))?
        .as_string()
        .unwrap_or_default();

    leptos::logging::log!("POST {} finished with status {}", endpoint, status);

    Ok(HttpReply::new(status, body))
}

/// Message of a rejected JS promise or thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Request failed".to_string())
}
