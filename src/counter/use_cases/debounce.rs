//! Trailing-edge debouncer for remote persists.
//!
//! Every `schedule` call replaces the pending action and restarts the quiet
//! window. When the window elapses with no further calls, the latest action
//! runs once and its outcome is delivered to every caller of the burst.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::counter::domain::{Counter, CounterFuture};
use crate::counter::error::CounterError;

type PersistAction = Box<dyn FnOnce() -> CounterFuture + Send>;
type Waiter = oneshot::Sender<Result<Counter, CounterError>>;

/// Shared debouncer. Clones share the same timer and pending action.
#[derive(Clone)]
pub struct Debouncer {
    window: Duration,
    inner: Arc<Mutex<DebounceInner>>,
}

#[derive(Default)]
struct DebounceInner {
    /// Bumped on every schedule; a timer only fires for its own generation.
    generation: u64,
    action: Option<PersistAction>,
    waiters: Vec<Waiter>,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            inner: Arc::new(Mutex::new(DebounceInner::default())),
        }
    }

    /// True while a burst is waiting for its quiet window to elapse.
    pub fn is_pending(&self) -> bool {
        self.inner.lock().action.is_some()
    }

    /// Replace the pending action and restart the quiet window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F) -> PersistTicket
    where
        F: FnOnce() -> CounterFuture + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let mut inner = self.inner.lock();
        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;
        inner.action = Some(Box::new(action));
        inner.waiters.push(tx);
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }

        let shared = Arc::clone(&self.inner);
        let window = self.window;
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let (action, waiters) = {
                let mut inner = shared.lock();
                if inner.generation != generation {
                    return;
                }
                inner.timer = None;
                match inner.action.take() {
                    Some(action) => (action, std::mem::take(&mut inner.waiters)),
                    None => return,
                }
            };

            tracing::debug!(callers = waiters.len(), "Running coalesced persist");
            let outcome = action().await;
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "Coalesced persist failed");
            }
            for waiter in waiters {
                let _ = waiter.send(outcome.clone());
            }
        }));

        PersistTicket {
            receiver: Some(rx),
        }
    }
}

/// Completion handle for one pipeline call.
///
/// Dropping it does not cancel the persist.
#[derive(Debug)]
pub struct PersistTicket {
    receiver: Option<oneshot::Receiver<Result<Counter, CounterError>>>,
}

impl PersistTicket {
    /// A ticket for a call that scheduled nothing.
    pub fn noop() -> Self {
        Self { receiver: None }
    }

    pub fn is_noop(&self) -> bool {
        self.receiver.is_none()
    }

    /// Wait for the coalesced persist this call joined.
    ///
    /// Resolves immediately with `Ok(None)` for a no-op ticket.
    pub async fn settled(self) -> Result<Option<Counter>, CounterError> {
        match self.receiver {
            None => Ok(None),
            Some(receiver) => receiver
                .await
                .map_err(|_| CounterError::Cancelled)?
                .map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::domain::create;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ready(result: Result<Counter, CounterError>) -> CounterFuture {
        Box::pin(async move { result })
    }

    fn counting_action(
        calls: &Arc<AtomicUsize>,
        value: i64,
    ) -> impl FnOnce() -> CounterFuture + Send + 'static {
        let calls = Arc::clone(calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            ready(Ok(create(value)))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_latest_action_once() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = debouncer.schedule(counting_action(&calls, 1));
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = debouncer.schedule(counting_action(&calls, 2));
        tokio::time::sleep(Duration::from_millis(100)).await;
        let third = debouncer.schedule(counting_action(&calls, 3));
        assert!(debouncer.is_pending());

        assert_eq!(third.settled().await.unwrap(), Some(create(3)));
        assert_eq!(first.settled().await.unwrap(), Some(create(3)));
        assert_eq!(second.settled().await.unwrap(), Some(create(3)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_run_separately() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = debouncer.schedule(counting_action(&calls, 1));
        assert_eq!(first.settled().await.unwrap(), Some(create(1)));

        let second = debouncer.schedule(counting_action(&calls, 2));
        assert_eq!(second.settled().await.unwrap(), Some(create(2)));

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_waits_for_quiet_window() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let calls = Arc::new(AtomicUsize::new(0));

        let _ticket = debouncer.schedule(counting_action(&calls, 1));
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_reaches_every_waiter() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let first = debouncer.schedule(|| ready(Ok(create(1))));
        let second =
            debouncer.schedule(|| ready(Err(CounterError::transient("persist", "down"))));

        assert!(first.settled().await.unwrap_err().is_transient());
        assert!(second.settled().await.unwrap_err().is_transient());
    }

    #[tokio::test]
    async fn test_noop_ticket_resolves_immediately() {
        let ticket = PersistTicket::noop();
        assert!(ticket.is_noop());
        assert_eq!(ticket.settled().await.unwrap(), None);
    }
}
