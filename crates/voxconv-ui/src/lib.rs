//! `Voxconv` UI - Leptos-based upload page.
//!
//! Renders the upload form, status panel and result panel, and runs each
//! submission through [`voxconv_core::UploadController`] using the browser's
//! `fetch`.

pub mod app;
pub mod components;
pub mod fetch_api;
pub mod page_view;
pub mod theme;

pub use app::App;
pub use fetch_api::FetchClient;
pub use page_view::PageView;
