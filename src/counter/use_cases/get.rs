use crate::counter::domain::{CounterFuture, LoadCounterStore};

/// Start the initial load. The store's loading flag is set on return.
pub fn get_counter_use_case<S: LoadCounterStore>(store: &S) -> CounterFuture {
    store.load_initial_counter()
}
