//! `POST /convert`: receive an upload, run the converter, publish the result.

use std::io::Write;
use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::{Multipart, State};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;
use voxconv_core::ConversionResponse;

use crate::converter::ConversionJob;
use crate::error::ApiError;
use crate::routes::{AppState, OUTPUT_ROUTE};

/// Multipart field carrying the audio upload.
pub const AUDIO_FIELD: &str = "audio_file";
/// Multipart field carrying the target voice.
pub const VOICE_FIELD: &str = "voice_id";

/// The file part of the form, kept only if it claims to be audio.
struct AudioUpload {
    content_type: String,
    spooled: Option<NamedTempFile>,
}

/// Handle one conversion request.
pub async fn convert_voice(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut upload = None;
    let mut voice_id = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(AUDIO_FIELD) => upload = Some(receive_audio(field).await?),
            Some(VOICE_FIELD) => voice_id = Some(field.text().await?),
            _ => {}
        }
    }

    let upload = upload.ok_or(ApiError::MissingField(AUDIO_FIELD))?;
    let voice_id = voice_id.ok_or(ApiError::MissingField(VOICE_FIELD))?;
    let Some(spooled) = upload.spooled else {
        return Err(ApiError::InvalidFileType);
    };

    let job = ConversionJob {
        input: spooled.path().to_path_buf(),
        voice_id,
        content_type: upload.content_type,
    };
    let audio = state.converter.convert(&job).await?;

    let file_name = format!("converted_{}.mp3", Uuid::new_v4());
    let output_path = state.output_dir.join(&file_name);
    tokio::fs::write(&output_path, &audio).await?;
    info!(path = %output_path.display(), bytes = audio.len(), "Saved converted audio");

    // `spooled` is deleted when it drops at the end of this request.
    Ok(Json(ConversionResponse::new(format!(
        "{OUTPUT_ROUTE}/{file_name}"
    ))))
}

/// Copy an audio part to a temporary `.wav` file; skip the body of anything else.
async fn receive_audio(mut field: Field<'_>) -> Result<AudioUpload, ApiError> {
    let content_type = field.content_type().unwrap_or_default().to_string();
    if !content_type.starts_with("audio/") {
        return Ok(AudioUpload {
            content_type,
            spooled: None,
        });
    }

    let mut file = tempfile::Builder::new()
        .prefix("voxconv-upload-")
        .suffix(".wav")
        .tempfile()?;
    let mut received = 0usize;
    while let Some(chunk) = field.chunk().await? {
        received += chunk.len();
        file.write_all(&chunk)?;
    }
    file.flush()?;

    debug!(
        file_name = field.file_name().unwrap_or_default(),
        %content_type,
        bytes = received,
        "Upload spooled to {}",
        file.path().display()
    );

    Ok(AudioUpload {
        content_type,
        spooled: Some(file),
    })
}
