use crate::counter::domain::Counter;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CounterIntent {
    /// Optimistic local replace.
    SetCounter(Counter),
    LoadStarted,
    LoadSucceeded(Counter),
    LoadFailed(String),
    UpdateStarted,
    /// Gateway confirmed this value. The local counter is left alone: it
    /// already shows the optimistic value, possibly a newer one.
    UpdateSucceeded(Counter),
    /// Persisting `attempted` failed. With `rollback` set, the local counter
    /// reverts to the last confirmed value, but only while it still shows
    /// `attempted`.
    UpdateFailed {
        attempted: Counter,
        message: String,
        rollback: bool,
    },
}

impl Intent for CounterIntent {}
