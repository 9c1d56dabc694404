//! The submission cycle.
//!
//! One call to [`UploadController::handle`] is one submission cycle:
//!
//! 1. disable the submit control and show the working status
//! 2. send the form payload and read the reply
//! 3. show either the result panel or the error text
//! 4. re-enable the control and reset the form
//!
//! Steps 3 and 4 run for every outcome. Nothing is retried and a running
//! request is never cancelled; the disabled control is the only guard
//! against overlapping submissions.

use tracing::{debug, info, warn};

use crate::client::ConversionClient;
use crate::error::ConversionError;
use crate::protocol::{ConvertedAudio, interpret_reply};
use crate::state::UiState;
use crate::view::UploadView;

/// Drives submissions from an upload form through a [`ConversionClient`].
#[derive(Debug, Clone)]
pub struct UploadController<C> {
    client: C,
}

impl<C: ConversionClient> UploadController<C> {
    /// Create a controller that sends submissions through `client`.
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Run one submission cycle against `view`.
    ///
    /// Every failure is rendered on the view before this returns; the result
    /// is handed back only so callers can observe it.
    pub async fn handle<V>(
        &self,
        view: &mut V,
        submission: C::Submission,
    ) -> Result<ConvertedAudio, ConversionError>
    where
        V: UploadView + ?Sized,
    {
        debug!("Submission started");
        view.set_submit_enabled(false);
        view.show(&UiState::Working);

        let outcome = self
            .client
            .send(submission)
            .await
            .and_then(|reply| interpret_reply(&reply));

        match &outcome {
            Ok(audio) => {
                info!(url = %audio.url, "Conversion succeeded");
                view.show(&UiState::Success(audio.clone()));
                view.present_result(audio);
            }
            Err(e) => {
                warn!(kind = %e.kind(), status = ?e.status(), "Conversion failed: {e}");
                view.show(&UiState::failed(e));
                view.report_failure(e);
            }
        }

        view.set_submit_enabled(true);
        view.reset_form();
        debug!("Submission settled");

        outcome
    }
}
