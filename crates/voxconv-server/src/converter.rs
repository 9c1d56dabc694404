//! Conversion backend seam.
//!
//! The server only knows how to receive uploads and publish results; turning
//! one voice into another is delegated to a [`VoiceConverter`].

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

/// One uploaded file waiting to be converted.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Temporary copy of the uploaded audio.
    pub input: PathBuf,
    /// Target voice chosen on the form.
    pub voice_id: String,
    /// MIME type the browser sent for the upload.
    pub content_type: String,
}

/// Errors a conversion backend can report.
#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    /// No backend is configured.
    #[error("Voice conversion service is currently not implemented. Please check back later.")]
    NotImplemented,

    /// The backend ran and failed.
    #[error("{0}")]
    Failed(String),
}

/// Produces converted audio (MP3 bytes) for a job.
#[async_trait]
pub trait VoiceConverter: Send + Sync {
    /// Convert the job's input to the requested voice.
    async fn convert(&self, job: &ConversionJob) -> Result<Vec<u8>, ConverterError>;
}

/// Backend used when no conversion service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableConverter;

#[async_trait]
impl VoiceConverter for UnavailableConverter {
    async fn convert(&self, job: &ConversionJob) -> Result<Vec<u8>, ConverterError> {
        warn!(voice_id = %job.voice_id, "Voice conversion functionality is currently disabled");
        Err(ConverterError::NotImplemented)
    }
}
