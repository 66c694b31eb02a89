use crate::counter::domain::Counter;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    /// Locally observed counter. `None` until the first load succeeds.
    pub counter: Option<Counter>,
    /// Last value the gateway confirmed, by load or by persist.
    pub confirmed: Option<Counter>,
    pub is_loading: bool,
    /// Persists started and not yet finished. Bursts may overlap.
    pub updates_in_flight: u32,
    /// Message of the most recent gateway failure, cleared on next success.
    pub last_error: Option<String>,
}

impl CounterState {
    pub fn is_updating(&self) -> bool {
        self.updates_in_flight > 0
    }
}

impl UiState for CounterState {}
