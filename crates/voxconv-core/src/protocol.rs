//! Wire contract of the `/convert` endpoint.
//!
//! The server renders [`ConversionResponse`] and [`ErrorResponse`]; the client
//! reads any reply back through [`interpret_reply`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConversionError;

/// Path the upload form posts to.
pub const CONVERT_ENDPOINT: &str = "/convert";

/// Message used when a failed reply carries no usable `detail`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Body of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionResponse {
    /// Always `true` when produced by the server; absent in older replies.
    #[serde(default)]
    pub success: bool,
    /// Path of the produced audio resource.
    pub url: String,
}

impl ConversionResponse {
    /// Creates a successful response pointing at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            success: true,
            url: url.into(),
        }
    }
}

/// Body of a failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub detail: String,
}

impl ErrorResponse {
    /// Creates an error body with the given detail.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// A raw HTTP reply as seen by a [`ConversionClient`](crate::ConversionClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpReply {
    /// Creates a reply from a status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Converted audio ready to be played and downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAudio {
    /// Where the audio can be fetched from.
    pub url: String,
    /// Suggested filename for the download link.
    pub file_name: String,
}

impl ConvertedAudio {
    /// Builds the result for `url`, deriving the download name from its last segment.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let file_name = download_file_name(&url).to_string();
        Self { url, file_name }
    }
}

/// Returns the final `/`-separated segment of `url`.
///
/// A URL ending in `/` yields an empty name.
pub fn download_file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Reads a reply from the conversion endpoint.
///
/// The body is parsed as JSON whatever the status. Non-2xx replies become
/// [`ConversionError::Server`] carrying the `detail` field, or
/// [`UNKNOWN_ERROR_MESSAGE`] when there is none.
pub fn interpret_reply(reply: &HttpReply) -> Result<ConvertedAudio, ConversionError> {
    let body: Value = serde_json::from_str(&reply.body).map_err(|e| {
        ConversionError::MalformedResponse(format!("Response is not valid JSON: {e}"))
    })?;

    if !reply.is_success() {
        return Err(ConversionError::Server {
            status: reply.status,
            detail: detail_message(&body),
        });
    }

    let response: ConversionResponse = serde_json::from_value(body).map_err(|e| {
        ConversionError::MalformedResponse(format!("Unexpected response shape: {e}"))
    })?;

    Ok(ConvertedAudio::new(response.url))
}

/// Extracts a displayable message from a failure body.
fn detail_message(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        None | Some(Value::Null | Value::Bool(false) | Value::String(_)) => {
            UNKNOWN_ERROR_MESSAGE.to_string()
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => UNKNOWN_ERROR_MESSAGE.to_string(),
        // Validation failures carry structured detail; show it as compact JSON.
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reply_yields_audio() {
        let reply = HttpReply::new(200, r#"{"url": "/files/out.wav"}"#);
        let audio = interpret_reply(&reply).unwrap();
        assert_eq!(audio.url, "/files/out.wav");
        assert_eq!(audio.file_name, "out.wav");
    }

    #[test]
    fn test_server_reply_with_success_flag() {
        let reply = HttpReply::new(
            201,
            r#"{"success": true, "url": "/static/audio/converted_1.mp3"}"#,
        );
        let audio = interpret_reply(&reply).unwrap();
        assert_eq!(audio.file_name, "converted_1.mp3");
    }

    #[test]
    fn test_failure_reply_uses_detail() {
        let reply = HttpReply::new(500, r#"{"detail": "unsupported codec"}"#);
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(
            err,
            ConversionError::Server {
                status: 500,
                detail: "unsupported codec".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_reply_without_detail_uses_fallback() {
        for body in [
            r"{}",
            r#"{"detail": null}"#,
            r#"{"detail": ""}"#,
            r#"{"detail": false}"#,
            r#"{"detail": 0}"#,
            r#""oops""#,
        ] {
            let err = interpret_reply(&HttpReply::new(502, body)).unwrap_err();
            assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE, "body: {body}");
        }
    }

    #[test]
    fn test_structured_detail_is_rendered_as_json() {
        let reply = HttpReply::new(422, r#"{"detail": [{"msg": "field required"}]}"#);
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(err.to_string(), r#"[{"msg":"field required"}]"#);
    }

    #[test]
    fn test_non_json_body_is_malformed_regardless_of_status() {
        for status in [200, 500] {
            let err = interpret_reply(&HttpReply::new(status, "<html>Bad Gateway</html>"))
                .unwrap_err();
            assert!(matches!(err, ConversionError::MalformedResponse(_)));
        }
    }

    #[test]
    fn test_success_without_url_is_malformed() {
        let err = interpret_reply(&HttpReply::new(200, r#"{"success": true}"#)).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedResponse(_)));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("/files/out.wav"), "out.wav");
        assert_eq!(download_file_name("out.wav"), "out.wav");
        assert_eq!(download_file_name("/files/"), "");
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(HttpReply::new(200, "").is_success());
        assert!(HttpReply::new(299, "").is_success());
        assert!(!HttpReply::new(199, "").is_success());
        assert!(!HttpReply::new(300, "").is_success());
    }

    #[test]
    fn test_error_response_serializes_detail() {
        let json = serde_json::to_string(&ErrorResponse::new("nope")).unwrap();
        assert_eq!(json, r#"{"detail":"nope"}"#);
    }
}
