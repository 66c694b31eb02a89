//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "counter-demo", version, about = "Optimistic counter with a simulated backend")]
pub struct Cli {
    /// Path to the config file (default: <config_dir>/counter-demo/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the simulated backend latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Override the debounce quiet window in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Override the value the remote counter starts at
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Revert to the last confirmed value when a persist fails
    #[arg(long)]
    pub rollback_on_failure: bool,

    /// Run the given actions without a terminal UI and print the result
    #[arg(long, value_enum, num_args = 1.., value_name = "ACTION")]
    pub headless: Option<Vec<Action>>,
}

/// An action the headless runner can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Inc,
    Dec,
    Get,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(latency_ms) = self.latency_ms {
            config.backend.latency_ms = latency_ms;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.pipeline.debounce_ms = debounce_ms;
        }
        if let Some(initial) = self.initial {
            config.backend.initial_value = initial;
        }
        if self.rollback_on_failure {
            config.pipeline.rollback_on_failure = true;
        }
    }
}
