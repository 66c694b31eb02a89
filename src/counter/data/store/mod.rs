//! Reducer-backed counter store.
//!
//! All state transitions go through `CounterReducer`; the store only owns
//! the lock, the gateway and the failure policy.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::counter::data::service::CounterGateway;
use crate::counter::domain::{
    Counter, CounterFuture, CounterStore, LoadCounterStore, UpdateCounterStore,
};
use crate::mvi::Reducer;

/// How the store reacts to a failed remote persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorePolicy {
    /// Revert the local counter to the last confirmed remote value.
    pub rollback_on_failure: bool,
}

/// Thread-safe counter store. Clones share state.
#[derive(Clone)]
pub struct CounterStoreImpl {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<CounterState>,
    gateway: Arc<dyn CounterGateway>,
    policy: StorePolicy,
}

impl CounterStoreImpl {
    pub fn new(gateway: Arc<dyn CounterGateway>, policy: StorePolicy) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(CounterState::default()),
                gateway,
                policy,
            }),
        }
    }

    /// Clone of the current state, for rendering.
    pub fn snapshot(&self) -> CounterState {
        self.inner.state.lock().clone()
    }

    fn dispatch(&self, intent: CounterIntent) {
        let mut state = self.inner.state.lock();
        *state = CounterReducer::reduce(std::mem::take(&mut *state), intent);
    }
}

impl UpdateCounterStore for CounterStoreImpl {
    fn counter(&self) -> Option<Counter> {
        self.inner.state.lock().counter
    }

    fn set_counter(&self, counter: Counter) {
        self.dispatch(CounterIntent::SetCounter(counter));
    }

    fn update_counter(&self, counter: Counter) -> CounterFuture {
        self.dispatch(CounterIntent::UpdateStarted);
        let persist = self.inner.gateway.persist(counter);
        let store = self.clone();
        Box::pin(async move {
            match persist.await {
                Ok(confirmed) => {
                    store.dispatch(CounterIntent::UpdateSucceeded(confirmed));
                    Ok(counter)
                }
                Err(err) => {
                    let rollback = store.inner.policy.rollback_on_failure;
                    tracing::warn!(
                        value = counter.value(),
                        rollback,
                        error = %err,
                        "Counter update failed"
                    );
                    store.dispatch(CounterIntent::UpdateFailed {
                        attempted: counter,
                        message: err.to_string(),
                        rollback,
                    });
                    Err(err)
                }
            }
        })
    }
}

impl LoadCounterStore for CounterStoreImpl {
    fn load_initial_counter(&self) -> CounterFuture {
        self.dispatch(CounterIntent::LoadStarted);
        let fetch = self.inner.gateway.fetch();
        let store = self.clone();
        Box::pin(async move {
            match fetch.await {
                Ok(counter) => {
                    store.dispatch(CounterIntent::LoadSucceeded(counter));
                    Ok(counter)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Initial counter load failed");
                    store.dispatch(CounterIntent::LoadFailed(err.to_string()));
                    Err(err)
                }
            }
        })
    }
}

impl CounterStore for CounterStoreImpl {
    fn is_loading(&self) -> bool {
        self.inner.state.lock().is_loading
    }

    fn is_updating(&self) -> bool {
        self.inner.state.lock().is_updating()
    }
}
