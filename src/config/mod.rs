//! TOML configuration for the backend simulation, pipeline and UI.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, PipelineConfig, UiConfig};
