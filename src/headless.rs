//! Run counter actions without a terminal.

use crate::args::Action;
use crate::counter::data::{CounterStoreImpl, RemoteCounter};
use crate::counter::error::CounterError;
use crate::counter::use_cases::PersistTicket;
use crate::counter::view_model::CounterViewModel;

/// Local and remote values after a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub local: i64,
    pub remote: i64,
}

impl std::fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "local={} remote={}", self.local, self.remote)
    }
}

/// Load the counter, apply `actions` back to back, then wait for the last
/// scheduled persist to settle.
pub async fn run(
    view_model: &CounterViewModel<CounterStoreImpl>,
    remote: &RemoteCounter,
    actions: &[Action],
) -> Result<HeadlessReport, CounterError> {
    load(view_model).await?;

    let mut last_ticket = PersistTicket::noop();
    for action in actions {
        tracing::debug!(?action, "Headless action");
        match action {
            Action::Inc => replace_ticket(&mut last_ticket, view_model.increment_counter()),
            Action::Dec => replace_ticket(&mut last_ticket, view_model.decrement_counter()),
            Action::Get => {
                // Let pending local changes land first, or the fetch would
                // replace them with the older remote value.
                std::mem::replace(&mut last_ticket, PersistTicket::noop())
                    .settled()
                    .await?;
                load(view_model).await?;
            }
        }
    }
    last_ticket.settled().await?;

    let local = view_model
        .view()
        .count
        .ok_or_else(|| CounterError::InvalidState("counter was never loaded".to_string()))?;
    Ok(HeadlessReport {
        local,
        remote: remote.value(),
    })
}

async fn load(view_model: &CounterViewModel<CounterStoreImpl>) -> Result<(), CounterError> {
    view_model
        .get_counter()
        .await
        .map_err(|_| CounterError::Cancelled)??;
    Ok(())
}

/// Every ticket of a burst settles with the same outcome, so only the most
/// recent scheduling one is worth keeping.
fn replace_ticket(slot: &mut PersistTicket, ticket: PersistTicket) {
    if !ticket.is_noop() {
        *slot = ticket;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::counter::CounterComponents;

    fn components(initial: i64) -> CounterComponents {
        let mut config = Config::default();
        config.backend.initial_value = initial;
        CounterComponents::from_config(&config)
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_persists_final_value() {
        let components = components(5);
        let report = run(
            &components.view_model,
            &components.remote,
            &[Action::Inc, Action::Inc, Action::Dec],
        )
        .await
        .unwrap();
        assert_eq!(report, HeadlessReport { local: 6, remote: 6 });
        assert_eq!(report.to_string(), "local=6 remote=6");
    }

    #[tokio::test(start_paused = true)]
    async fn test_decrement_at_zero_changes_nothing() {
        let components = components(0);
        let report = run(&components.view_model, &components.remote, &[Action::Dec])
            .await
            .unwrap();
        assert_eq!(report, HeadlessReport { local: 0, remote: 0 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_after_increment_sees_persisted_value() {
        let components = components(5);
        let report = run(
            &components.view_model,
            &components.remote,
            &[Action::Inc, Action::Get, Action::Inc],
        )
        .await
        .unwrap();
        assert_eq!(report, HeadlessReport { local: 7, remote: 7 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_is_reported() {
        let components = components(1);
        components.remote.fail_next(1);
        let err = run(&components.view_model, &components.remote, &[Action::Inc])
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }
}
