//! Shared types and core logic for the KrishiMitra Platform
//!
//! This crate contains the models, response-text extraction, derived
//! metrics, and chart rendering shared between the backend and the
//! browser (via WASM). Everything here is pure and synchronous; network
//! I/O lives in the backend crate.

pub mod chart;
pub mod extract;
pub mod metrics;
pub mod models;
pub mod validation;

pub use chart::*;
pub use extract::*;
pub use metrics::*;
pub use models::*;
pub use validation::*;
