use crate::counter::domain::{CounterTransform, UpdateCounterStore};
use crate::counter::use_cases::debounce::{Debouncer, PersistTicket};

/// Apply `update_by` optimistically and schedule a debounced remote persist.
///
/// A missing counter, or a transform that leaves the value unchanged (the
/// decrement floor), is a no-op: nothing is set locally and nothing is
/// scheduled. Otherwise the store is updated before this returns and the
/// persist joins the debouncer's current burst.
pub fn update_counter_use_case<S>(
    store: &S,
    debouncer: &Debouncer,
    update_by: CounterTransform,
) -> PersistTicket
where
    S: UpdateCounterStore + Clone,
{
    let Some(current) = store.counter() else {
        tracing::debug!("Counter not loaded yet, ignoring update");
        return PersistTicket::noop();
    };

    let updated = update_by(&current);
    if updated.value() == current.value() {
        tracing::debug!(value = current.value(), "Update leaves counter unchanged");
        return PersistTicket::noop();
    }

    store.set_counter(updated);

    let store = store.clone();
    debouncer.schedule(move || store.update_counter(updated))
}
