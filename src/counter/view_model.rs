//! UI-facing adapter over the store and use cases.

use tokio::task::JoinHandle;

use crate::counter::domain::{Counter, CounterStore};
use crate::counter::error::CounterError;
use crate::counter::use_cases::{
    decrement_counter_use_case, get_counter_use_case, increment_counter_use_case, Debouncer,
    PersistTicket,
};

/// Derived values the view renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterView {
    pub count: Option<i64>,
    /// True while loading, and while no counter has been loaded yet.
    pub is_loading: bool,
    pub is_updating: bool,
    pub can_decrement: bool,
}

/// Binds one store to one debouncer.
///
/// Increment and decrement share the debouncer, so a mixed burst still
/// produces a single remote persist.
#[derive(Clone)]
pub struct CounterViewModel<S> {
    store: S,
    debouncer: Debouncer,
}

impl<S> CounterViewModel<S>
where
    S: CounterStore + Clone,
{
    pub fn new(store: S, debouncer: Debouncer) -> Self {
        Self { store, debouncer }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True while a local change has not yet reached the remote: a burst
    /// is waiting out its quiet window or a persist is in flight.
    ///
    /// A fetch issued now would return a value older than the local one.
    pub fn has_unsaved_changes(&self) -> bool {
        self.debouncer.is_pending() || self.store.is_updating()
    }

    pub fn view(&self) -> CounterView {
        let counter = self.store.counter();
        CounterView {
            count: counter.map(|c| c.value()),
            is_loading: counter.is_none() || self.store.is_loading(),
            is_updating: self.store.is_updating(),
            can_decrement: counter.is_some_and(|c| c.value() > 0),
        }
    }

    /// Load the counter in the background. Must be called from within a
    /// tokio runtime.
    pub fn get_counter(&self) -> JoinHandle<Result<Counter, CounterError>> {
        let load = get_counter_use_case(&self.store);
        tokio::spawn(async move {
            let result = load.await;
            match &result {
                Ok(counter) => tracing::info!(value = counter.value(), "Counter loaded"),
                Err(err) => tracing::warn!(error = %err, "Counter load failed"),
            }
            result
        })
    }

    pub fn increment_counter(&self) -> PersistTicket {
        increment_counter_use_case(&self.store, &self.debouncer)
    }

    pub fn decrement_counter(&self) -> PersistTicket {
        decrement_counter_use_case(&self.store, &self.debouncer)
    }
}
