//! Transport seam for the conversion request.

use std::future::Future;

use crate::error::ConversionError;
use crate::protocol::HttpReply;

/// Sends one submission to the conversion endpoint.
///
/// Implementations return the raw reply for any HTTP status; only a request
/// that never produced a response is an error, and it must be reported as
/// [`ConversionError::Network`]. The returned future is not required to be
/// `Send` so browser clients can hold JS handles across the await.
pub trait ConversionClient {
    /// Payload built from the form at submission time.
    type Submission;

    /// POST `submission` and wait for the reply.
    fn send(
        &self,
        submission: Self::Submission,
    ) -> impl Future<Output = Result<HttpReply, ConversionError>>;
}
