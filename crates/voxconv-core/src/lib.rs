//! `Voxconv` Core Library
//!
//! This crate provides the platform-neutral half of the `Voxconv` application:
//! - Wire types shared by the conversion server and the browser client
//! - The error taxonomy for a failed submission
//! - The UI state of the upload page and its display rules
//! - The [`UploadController`] that drives one submission cycle through the
//!   [`UploadView`] and [`ConversionClient`] seams
//!
//! Nothing here touches the DOM or the network directly, so the whole
//! submission cycle can be tested on the host.
//!
//! ```rust,ignore
//! use voxconv_core::{UploadController, CONVERT_ENDPOINT};
//!
//! let controller = UploadController::new(FetchClient::new(CONVERT_ENDPOINT));
//! controller.handle(&mut view, form_data).await;
//! ```

pub mod client;
pub mod controller;
pub mod error;
pub mod protocol;
pub mod state;
pub mod view;

pub use client::ConversionClient;
pub use controller::UploadController;
pub use error::{ConversionError, ErrorKind};
pub use protocol::{
    CONVERT_ENDPOINT, ConversionResponse, ConvertedAudio, ErrorResponse, HttpReply,
    UNKNOWN_ERROR_MESSAGE, download_file_name, interpret_reply,
};
pub use state::{StatusTone, UiState, WORKING_MESSAGE};
pub use view::UploadView;
