//! Store capabilities consumed by the use cases.
//!
//! The use cases never see a concrete state container. They depend on the
//! narrow capability they need: `UpdateCounterStore` for increment and
//! decrement, `LoadCounterStore` for the initial fetch.

use std::future::Future;
use std::pin::Pin;

use crate::counter::domain::model::Counter;
use crate::counter::error::CounterError;

/// Boxed future returned by asynchronous store and gateway operations.
pub type CounterFuture = Pin<Box<dyn Future<Output = Result<Counter, CounterError>> + Send>>;

/// Capabilities needed by the update pipeline.
pub trait UpdateCounterStore: Send + Sync + 'static {
    /// Current local counter, `None` until the initial load completes.
    fn counter(&self) -> Option<Counter>;

    /// Synchronously replace the local counter.
    fn set_counter(&self, counter: Counter);

    /// Persist a counter remotely.
    fn update_counter(&self, counter: Counter) -> CounterFuture;
}

/// Capability needed by the initial fetch.
pub trait LoadCounterStore: Send + Sync + 'static {
    /// Populate the local counter from the gateway.
    ///
    /// Implementations flip their loading flag when this is called, not when
    /// the returned future is first polled.
    fn load_initial_counter(&self) -> CounterFuture;
}

/// Full store surface read by the view-model.
pub trait CounterStore: UpdateCounterStore + LoadCounterStore {
    fn is_loading(&self) -> bool;
    fn is_updating(&self) -> bool;
}
