//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

use counter_demo::config::Config;
use counter_demo::counter::domain::{create, Counter, CounterFuture, UpdateCounterStore};
use counter_demo::counter::error::CounterError;
use counter_demo::counter::CounterComponents;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const LATENCY: Duration = Duration::from_millis(1000);
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Store double that records every capability call.
///
/// `update_counter` is recorded when it is invoked, which for the pipeline
/// means when the debounce window elapses, not when the user acted.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Default)]
struct Recorded {
    counter: Option<Counter>,
    set_calls: Vec<i64>,
    update_calls: Vec<i64>,
    fail_updates: bool,
}

impl RecordingStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_value(value: i64) -> Self {
        let store = Self::default();
        store.inner.lock().counter = Some(create(value));
        store
    }

    pub fn fail_updates(&self) {
        self.inner.lock().fail_updates = true;
    }

    pub fn set_calls(&self) -> Vec<i64> {
        self.inner.lock().set_calls.clone()
    }

    pub fn update_calls(&self) -> Vec<i64> {
        self.inner.lock().update_calls.clone()
    }

    pub fn value(&self) -> Option<i64> {
        self.inner.lock().counter.map(|c| c.value())
    }
}

impl UpdateCounterStore for RecordingStore {
    fn counter(&self) -> Option<Counter> {
        self.inner.lock().counter
    }

    fn set_counter(&self, counter: Counter) {
        let mut inner = self.inner.lock();
        inner.counter = Some(counter);
        inner.set_calls.push(counter.value());
    }

    fn update_counter(&self, counter: Counter) -> CounterFuture {
        let mut inner = self.inner.lock();
        inner.update_calls.push(counter.value());
        let fail = inner.fail_updates;
        Box::pin(async move {
            if fail {
                Err(CounterError::transient("persist", "recorded failure"))
            } else {
                Ok(counter)
            }
        })
    }
}

/// Config with the default latency and debounce, starting at `initial`.
pub fn config_with_initial(initial: i64) -> Config {
    let mut config = Config::default();
    config.backend.initial_value = initial;
    config
}

/// Wired components over the real store and simulated gateway.
pub fn components(initial: i64) -> CounterComponents {
    CounterComponents::from_config(&config_with_initial(initial))
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
