//! UI state of the upload page.
//!
//! The page shows at most one of two panels: the status panel (progress or
//! error text) and the result panel (player and download link). Which one is
//! visible, what the status text says and whether the submit button accepts
//! clicks all derive from a single [`UiState`].

use crate::error::ConversionError;
use crate::protocol::ConvertedAudio;

/// Status text shown while a submission is in flight.
pub const WORKING_MESSAGE: &str = "Uploading and converting... Please wait.";

/// Color role of the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    /// Regular progress text.
    #[default]
    Neutral,
    /// Failure text.
    Alert,
}

/// Display state of the upload page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    /// Nothing submitted yet; both panels hidden.
    #[default]
    Idle,
    /// A submission is in flight.
    Working,
    /// The last submission produced audio.
    Success(ConvertedAudio),
    /// The last submission failed with this message.
    Error(String),
}

impl UiState {
    /// Builds the failure state for `error`.
    #[must_use]
    pub fn failed(error: &ConversionError) -> Self {
        Self::Error(error.to_string())
    }

    /// Whether a request is outstanding. The submit control is disabled exactly then.
    #[must_use]
    pub const fn is_working(&self) -> bool {
        matches!(self, Self::Working)
    }

    /// Whether the status panel is shown.
    #[must_use]
    pub const fn status_panel_visible(&self) -> bool {
        matches!(self, Self::Working | Self::Error(_))
    }

    /// Whether the result panel is shown.
    #[must_use]
    pub const fn result_panel_visible(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text of the status message, if the status panel has any.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match self {
            Self::Working => Some(WORKING_MESSAGE.to_string()),
            Self::Error(message) => Some(format!("Error: {message}")),
            Self::Idle | Self::Success(_) => None,
        }
    }

    /// Color role of the status message.
    #[must_use]
    pub const fn status_tone(&self) -> StatusTone {
        match self {
            Self::Error(_) => StatusTone::Alert,
            _ => StatusTone::Neutral,
        }
    }

    /// The converted audio, when the last submission succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&ConvertedAudio> {
        match self {
            Self::Success(audio) => Some(audio),
            _ => None,
        }
    }
}
