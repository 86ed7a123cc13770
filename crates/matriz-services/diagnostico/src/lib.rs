//! Diagnostico service: GTC-45 risk matrix backend.
//!
//! Owns the empresa, cargo and GES catalog records, scores hazard
//! evaluations through the `matriz-gtc45` domain crate, and serves the
//! assembled risk matrix as JSON, CSV or xlsx.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod service;

pub use api::create_router;
pub use config::Config;
pub use db::{DbPool, DiagnosticoRepository};
pub use error::{DiagnosticoErrorExt, MatrizError, Result};
pub use export::{CsvExporter, XlsxExporter};
pub use service::MatrizService;
