//! Seam between the upload cycle and the page it drives.

use crate::error::ConversionError;
use crate::protocol::ConvertedAudio;
use crate::state::UiState;

/// The page elements an [`UploadController`](crate::UploadController) writes to.
///
/// Implementors own their element handles; the controller never reaches for
/// the page on its own. This trait allows the cycle to be tested with a mock page.
#[cfg_attr(test, mockall::automock)]
pub trait UploadView {
    /// Enable or disable the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Apply panel visibility and status text for `state`.
    fn show(&mut self, state: &UiState);

    /// Point the player and download link at `audio` and start playback.
    fn present_result(&mut self, audio: &ConvertedAudio);

    /// Emit diagnostic output for a failed submission.
    fn report_failure(&mut self, error: &ConversionError);

    /// Clear every form field back to its default.
    fn reset_form(&mut self);
}
