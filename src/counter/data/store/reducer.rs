use crate::counter::data::store::intent::CounterIntent;
use crate::counter::data::store::state::CounterState;
use crate::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::SetCounter(counter) => CounterState {
                counter: Some(counter),
                ..state
            },
            CounterIntent::LoadStarted => CounterState {
                is_loading: true,
                ..state
            },
            CounterIntent::LoadSucceeded(counter) => CounterState {
                counter: Some(counter),
                confirmed: Some(counter),
                is_loading: false,
                last_error: None,
                ..state
            },
            CounterIntent::LoadFailed(message) => CounterState {
                is_loading: false,
                last_error: Some(message),
                ..state
            },
            CounterIntent::UpdateStarted => CounterState {
                updates_in_flight: state.updates_in_flight + 1,
                ..state
            },
            CounterIntent::UpdateSucceeded(counter) => CounterState {
                confirmed: Some(counter),
                updates_in_flight: state.updates_in_flight.saturating_sub(1),
                last_error: None,
                ..state
            },
            CounterIntent::UpdateFailed {
                attempted,
                message,
                rollback,
            } => {
                // A newer local value belongs to a later burst; leave it be.
                let counter = if rollback && state.counter == Some(attempted) {
                    // Nothing confirmed yet means nothing to roll back to.
                    state.confirmed.or(state.counter)
                } else {
                    state.counter
                };
                CounterState {
                    counter,
                    updates_in_flight: state.updates_in_flight.saturating_sub(1),
                    last_error: Some(message),
                    ..state
                }
            }
        }
    }
}
