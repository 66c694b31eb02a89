//! Simulated remote persistence for the counter.
//!
//! `RemoteCounter` plays the server: one integer shared by every clone.
//! `CounterService` reaches it through an artificial network delay.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::counter::domain::{create, Counter, CounterFuture};
use crate::counter::error::CounterError;

/// Remote persistence boundary for the counter.
pub trait CounterGateway: Send + Sync + 'static {
    /// Resolve with the currently stored value after the simulated delay.
    fn fetch(&self) -> CounterFuture;

    /// Overwrite the stored value after the simulated delay.
    fn persist(&self, counter: Counter) -> CounterFuture;
}

/// The "server-side" counter value.
///
/// Single-writer discipline: only `CounterService::persist` writes the
/// value, and only the update pipeline calls `persist`. Nothing here
/// serializes overlapping writers.
#[derive(Clone, Default)]
pub struct RemoteCounter {
    inner: Arc<Mutex<RemoteInner>>,
}

#[derive(Default)]
struct RemoteInner {
    value: i64,
    pending_failures: u32,
}

impl RemoteCounter {
    pub fn new(initial: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RemoteInner {
                value: initial,
                pending_failures: 0,
            })),
        }
    }

    /// Current stored value.
    pub fn value(&self) -> i64 {
        self.inner.lock().value
    }

    /// Make the next `count` gateway calls fail with a transient error.
    pub fn fail_next(&self, count: u32) {
        self.inner.lock().pending_failures = count;
    }

    fn take_failure(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.pending_failures > 0 {
            inner.pending_failures -= 1;
            true
        } else {
            false
        }
    }

    fn store(&self, value: i64) {
        self.inner.lock().value = value;
    }
}

/// In-process gateway with a fixed simulated latency.
#[derive(Clone)]
pub struct CounterService {
    remote: RemoteCounter,
    latency: Duration,
}

impl CounterService {
    pub fn new(remote: RemoteCounter, latency: Duration) -> Self {
        Self { remote, latency }
    }

    pub fn remote(&self) -> &RemoteCounter {
        &self.remote
    }
}

impl CounterGateway for CounterService {
    fn fetch(&self) -> CounterFuture {
        let remote = self.remote.clone();
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            if remote.take_failure() {
                tracing::warn!("Injected failure on fetch");
                return Err(CounterError::transient("fetch", "injected failure"));
            }
            let counter = create(remote.value());
            tracing::debug!(value = counter.value(), "Fetched remote counter");
            Ok(counter)
        })
    }

    fn persist(&self, counter: Counter) -> CounterFuture {
        let remote = self.remote.clone();
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            if remote.take_failure() {
                tracing::warn!(value = counter.value(), "Injected failure on persist");
                return Err(CounterError::transient("persist", "injected failure"));
            }
            remote.store(counter.value());
            tracing::info!(value = counter.value(), "Persisted remote counter");
            Ok(create(remote.value()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn service(initial: i64) -> CounterService {
        CounterService::new(RemoteCounter::new(initial), Duration::from_millis(1000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let service = service(5);
        let started = Instant::now();
        let counter = service.fetch().await.unwrap();
        assert_eq!(counter.value(), 5);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(1005));
    }

    #[tokio::test(start_paused = true)]
    async fn test_persist_overwrites_remote_value() {
        let service = service(0);
        let stored = service.persist(create(9)).await.unwrap();
        assert_eq!(stored.value(), 9);
        assert_eq!(service.remote().value(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_persist_of_fetched_value_is_unchanged() {
        let service = service(12);
        let fetched = service.fetch().await.unwrap();
        service.persist(fetched).await.unwrap();
        assert_eq!(service.remote().value(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_does_not_write() {
        let service = service(3);
        service.fetch().await.unwrap();
        assert_eq!(service.remote().value(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_injected_failure_leaves_value_untouched() {
        let service = service(4);
        service.remote().fail_next(1);

        let err = service.persist(create(8)).await.unwrap_err();
        assert!(err.is_transient());
        assert_eq!(service.remote().value(), 4);

        // Failure budget is spent; next call succeeds.
        service.persist(create(8)).await.unwrap();
        assert_eq!(service.remote().value(), 8);
    }

    #[test]
    fn test_clones_share_remote_state() {
        let remote = RemoteCounter::new(1);
        let other = remote.clone();
        other.store(2);
        assert_eq!(remote.value(), 2);
    }
}
