pub mod analyze;
pub mod healthcheck;
