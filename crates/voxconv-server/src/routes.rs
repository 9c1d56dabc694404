//! HTTP routes.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use voxconv_core::CONVERT_ENDPOINT;

use crate::config::ServerConfig;
use crate::convert::convert_voice;
use crate::converter::VoiceConverter;

/// Mount point of the static directory.
pub const STATIC_ROUTE: &str = "/static";
/// Public prefix of converted files (`static_dir/audio`).
pub const OUTPUT_ROUTE: &str = "/static/audio";

/// Shared state of the request handlers.
pub struct AppState {
    /// Conversion backend.
    pub converter: Arc<dyn VoiceConverter>,
    /// Directory converted files are written to; must be served at [`OUTPUT_ROUTE`].
    pub output_dir: PathBuf,
}

/// Build the application router.
///
/// - `POST /convert` runs a conversion
/// - `/static/*` serves `static_dir`
/// - anything else is served from the UI bundle, falling back to its `index.html`
pub fn build_router(config: &ServerConfig, converter: Arc<dyn VoiceConverter>) -> Router {
    let state = Arc::new(AppState {
        converter,
        output_dir: config.output_dir(),
    });

    let site = ServeDir::new(&config.site_dir)
        .fallback(ServeFile::new(config.site_dir.join("index.html")));

    Router::new()
        .route(CONVERT_ENDPOINT, post(convert_voice))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state)
        .nest_service(STATIC_ROUTE, ServeDir::new(&config.static_dir))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use async_trait::async_trait;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode, header};
    use tempfile::TempDir;
    use tower::ServiceExt;
    use voxconv_core::{ConversionResponse, ErrorResponse};

    use super::*;
    use crate::converter::{ConversionJob, ConverterError, UnavailableConverter};

    const BOUNDARY: &str = "voxconv-test-boundary";

    /// Returns the uploaded bytes unchanged.
    struct EchoConverter;

    #[async_trait]
    impl VoiceConverter for EchoConverter {
        async fn convert(&self, job: &ConversionJob) -> Result<Vec<u8>, ConverterError> {
            tokio::fs::read(&job.input)
                .await
                .map_err(|e| ConverterError::Failed(e.to_string()))
        }
    }

    struct BrokenConverter;

    #[async_trait]
    impl VoiceConverter for BrokenConverter {
        async fn convert(&self, _job: &ConversionJob) -> Result<Vec<u8>, ConverterError> {
            Err(ConverterError::Failed("backend crashed".to_string()))
        }
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File {
            name: &'a str,
            file_name: &'a str,
            content_type: &'a str,
            data: &'a [u8],
        },
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                            .as_bytes(),
                    );
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn convert_request(parts: &[Part<'_>]) -> Request<Body> {
        let body = multipart_body(parts);
        Request::post(CONVERT_ENDPOINT)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .expect("request")
    }

    fn wav_upload(data: &[u8]) -> Part<'_> {
        Part::File {
            name: "audio_file",
            file_name: "voice.wav",
            content_type: "audio/wav",
            data,
        }
    }

    fn test_app(converter: Arc<dyn VoiceConverter>) -> (Router, TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ServerConfig::default()
            .with_static_dir(dir.path().join("static"))
            .with_site_dir(dir.path().join("site"))
            .with_max_upload_bytes(1024 * 1024);
        std::fs::create_dir_all(config.output_dir()).expect("output dir");
        std::fs::create_dir_all(&config.site_dir).expect("site dir");
        std::fs::write(config.site_dir.join("index.html"), "<html>upload page</html>")
            .expect("index");
        (build_router(&config, converter), dir)
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_successful_conversion_is_published_under_static() {
        let (app, dir) = test_app(Arc::new(EchoConverter));
        let request = convert_request(&[wav_upload(b"RIFF-audio"), Part::Text("voice_id", "narrator")]);

        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let reply: ConversionResponse = json_body(response).await;
        assert!(reply.success);
        assert!(reply.url.starts_with("/static/audio/converted_"));
        assert!(reply.url.ends_with(".mp3"));

        let file_name = voxconv_core::download_file_name(&reply.url);
        let saved = std::fs::read(dir.path().join("static/audio").join(file_name)).expect("saved");
        assert_eq!(saved, b"RIFF-audio");

        let download = Request::get(reply.url.as_str()).body(Body::empty()).expect("request");
        let response = app.oneshot(download).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(bytes.as_ref(), b"RIFF-audio");
    }

    #[tokio::test]
    async fn test_unavailable_backend_returns_not_implemented() {
        let (app, _dir) = test_app(Arc::new(UnavailableConverter));
        let request = convert_request(&[wav_upload(b"data"), Part::Text("voice_id", "narrator")]);

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(
            error.detail,
            "Voice conversion service is currently not implemented. Please check back later."
        );
    }

    #[tokio::test]
    async fn test_non_audio_upload_is_rejected() {
        let (app, _dir) = test_app(Arc::new(EchoConverter));
        let request = convert_request(&[
            Part::File {
                name: "audio_file",
                file_name: "notes.txt",
                content_type: "text/plain",
                data: b"hello",
            },
            Part::Text("voice_id", "narrator"),
        ]);

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.detail, "Invalid file type. Please upload an audio file.");
    }

    #[tokio::test]
    async fn test_missing_voice_id_is_unprocessable() {
        let (app, _dir) = test_app(Arc::new(EchoConverter));
        let request = convert_request(&[wav_upload(b"data")]);

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.detail, "Missing form field: voice_id");
    }

    #[tokio::test]
    async fn test_backend_failure_is_internal_error() {
        let (app, dir) = test_app(Arc::new(BrokenConverter));
        let request = convert_request(&[wav_upload(b"data"), Part::Text("voice_id", "narrator")]);

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorResponse = json_body(response).await;
        assert_eq!(error.detail, "An unexpected error occurred: backend crashed");

        let outputs = std::fs::read_dir(dir.path().join("static/audio")).expect("read dir");
        assert_eq!(outputs.count(), 0);
    }

    #[tokio::test]
    async fn test_non_multipart_body_gets_json_detail() {
        let (app, _dir) = test_app(Arc::new(EchoConverter));
        let request = Request::post(CONVERT_ENDPOINT)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = json_body(response).await;
        assert!(!error.detail.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected_with_json_detail() {
        let (app, dir) = test_app(Arc::new(EchoConverter));
        let big = vec![0u8; 2 * 1024 * 1024];
        let request = convert_request(&[wav_upload(&big), Part::Text("voice_id", "narrator")]);

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let status = response.status().as_u16();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let text = String::from_utf8(bytes.to_vec()).expect("utf-8 body");

        let error: ErrorResponse = serde_json::from_str(&text).expect("json body");
        assert_eq!(error.detail, "Uploaded file is too large.");

        let seen = voxconv_core::interpret_reply(&voxconv_core::HttpReply::new(status, text));
        assert_eq!(
            seen.unwrap_err(),
            voxconv_core::ConversionError::Server {
                status: 413,
                detail: "Uploaded file is too large.".to_string(),
            }
        );

        let outputs = std::fs::read_dir(dir.path().join("static/audio")).expect("read dir");
        assert_eq!(outputs.count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_paths_serve_the_upload_page() {
        let (app, _dir) = test_app(Arc::new(EchoConverter));
        let request = Request::get("/").body(Body::empty()).expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(bytes.as_ref(), b"<html>upload page</html>");
    }
}
