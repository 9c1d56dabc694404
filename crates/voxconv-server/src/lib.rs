//! `Voxconv` server library.
//!
//! Hosts the built upload page and answers `POST /convert`. The binary in
//! `main.rs` wires configuration, logging and the router together.

pub mod config;
pub mod convert;
pub mod converter;
pub mod error;
pub mod logging;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use converter::{ConversionJob, ConverterError, UnavailableConverter, VoiceConverter};
pub use error::ApiError;
pub use routes::{AppState, build_router};
