//! JSON configuration for the demo tools.

pub mod scenario;

pub use scenario::{load_config, OutputConfig, ScenarioConfig};
