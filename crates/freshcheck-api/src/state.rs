//! Application state.
//!
//! One pipeline instance is shared across requests behind an `Arc`; it
//! holds no per-request mutable state, so no locking is needed.

use anyhow::Result;
use freshcheck_core::Config;

use crate::services::pipeline::IntakePipeline;

pub struct AppState {
    pub config: Config,
    pub pipeline: IntakePipeline,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let pipeline = IntakePipeline::new(&config)?;
        Ok(Self { config, pipeline })
    }
}
