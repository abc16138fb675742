//! FreshCheck API
//!
//! HTTP surface for the food freshness analyzer: accepts an uploaded
//! photograph, runs it through the intake pipeline, and returns the
//! normalized analysis result.

pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use error::ErrorResponse;
pub use state::AppState;
