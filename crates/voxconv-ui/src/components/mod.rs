//! UI components for the upload page.

mod header;
mod result_panel;
mod status_panel;

pub use header::Header;
pub use result_panel::ResultPanel;
pub use status_panel::StatusPanel;
