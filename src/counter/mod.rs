//! The counter feature, layered as domain → data → use cases → view-model.

pub mod data;
pub mod domain;
pub mod error;
pub mod use_cases;
pub mod view_model;

use std::sync::Arc;

use crate::config::Config;
use data::{CounterService, CounterStoreImpl, RemoteCounter, StorePolicy};
use use_cases::Debouncer;
use view_model::CounterViewModel;

/// Fully wired counter feature.
pub struct CounterComponents {
    /// Handle on the simulated server value.
    pub remote: RemoteCounter,
    pub view_model: CounterViewModel<CounterStoreImpl>,
}

impl CounterComponents {
    pub fn from_config(config: &Config) -> Self {
        let remote = RemoteCounter::new(config.backend.initial_value);
        let service = CounterService::new(remote.clone(), config.backend.latency());
        let store = CounterStoreImpl::new(
            Arc::new(service),
            StorePolicy {
                rollback_on_failure: config.pipeline.rollback_on_failure,
            },
        );
        let debouncer = Debouncer::new(config.pipeline.debounce_window());

        tracing::debug!(
            initial_value = config.backend.initial_value,
            latency_ms = config.backend.latency_ms,
            debounce_ms = config.pipeline.debounce_ms,
            "Counter components wired"
        );

        Self {
            remote,
            view_model: CounterViewModel::new(store, debouncer),
        }
    }
}
