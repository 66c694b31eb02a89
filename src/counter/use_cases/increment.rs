use crate::counter::domain::{increment, UpdateCounterStore};
use crate::counter::use_cases::debounce::{Debouncer, PersistTicket};
use crate::counter::use_cases::update::update_counter_use_case;

pub fn increment_counter_use_case<S>(store: &S, debouncer: &Debouncer) -> PersistTicket
where
    S: UpdateCounterStore + Clone,
{
    update_counter_use_case(store, debouncer, increment)
}
