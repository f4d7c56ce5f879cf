//! Debounced write-back of the application snapshot.
//!
//! Every state change hands the new snapshot to [`AutoSaver::schedule`]. The
//! snapshot is written once no newer change has arrived for the quiescence
//! window; each schedule call aborts the previous timer. Once a write has
//! started it always runs to completion, and writes never overlap.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::error::Result;
use crate::model::AppState;
use crate::notify::{Notice, Notifier};
use crate::persistence;
use crate::storage::DiaryStore;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
struct Inner {
    store: Arc<dyn DiaryStore>,
    notifier: Arc<dyn Notifier>,
    pending: Mutex<Option<AppState>>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
    write_lock: tokio::sync::Mutex<()>,
    writes: AtomicUsize,
}

impl Inner {
    fn take_pending(&self) -> Option<AppState> {
        lock(&self.pending).take()
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut in_flight = lock(&self.in_flight);
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }

    async fn write(&self, state: &AppState) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        match persistence::save(self.store.as_ref(), state).await {
            Ok(()) => {
                let n = self.writes.fetch_add(1, Ordering::SeqCst) + 1;
                debug!("Autosave #{} written", n);
                Ok(())
            }
            Err(e) => {
                error!("Autosave failed: {}", e);
                self.notifier.notify(Notice::SaveFailed);
                Err(e)
            }
        }
    }
}

/// Debounced saver for [`AppState`] snapshots.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct AutoSaver {
    inner: Arc<Inner>,
    delay: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl AutoSaver {
    /// Create a saver writing to `store` after `delay` of quiescence.
    #[must_use]
    pub fn new(store: Arc<dyn DiaryStore>, notifier: Arc<dyn Notifier>, delay: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                notifier,
                pending: Mutex::new(None),
                in_flight: Mutex::new(Vec::new()),
                write_lock: tokio::sync::Mutex::new(()),
                writes: AtomicUsize::new(0),
            }),
            delay,
            timer: Mutex::new(None),
        }
    }

    /// Schedule `state` to be written, replacing any snapshot still waiting.
    pub fn schedule(&self, state: AppState) {
        *lock(&self.inner.pending) = Some(state);

        let inner = Arc::clone(&self.inner);
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(state) = inner.take_pending() else {
                return;
            };
            // The write runs as its own task so aborting this timer can't cut it short.
            let writer = Arc::clone(&inner);
            let handle = tokio::spawn(async move {
                let _ = writer.write(&state).await;
            });
            inner.track(handle);
        });

        if let Some(previous) = lock(&self.timer).replace(timer) {
            previous.abort();
        }
    }

    /// Write the waiting snapshot now and wait for every write in progress.
    ///
    /// # Errors
    ///
    /// Returns the storage error if writing the waiting snapshot fails. The
    /// failure has already been reported to the notifier.
    pub async fn flush(&self) -> Result<()> {
        self.stop_timer().await;

        let in_flight: Vec<_> = std::mem::take(&mut *lock(&self.inner.in_flight));
        for handle in in_flight {
            if let Err(e) = handle.await {
                warn!("Autosave task ended abnormally: {}", e);
            }
        }

        match self.inner.take_pending() {
            Some(state) => self.inner.write(&state).await,
            None => Ok(()),
        }
    }

    /// Drop the waiting snapshot without writing it.
    ///
    /// A write that has already started is not affected.
    pub async fn cancel(&self) {
        self.stop_timer().await;
        if self.inner.take_pending().is_some() {
            debug!("Pending autosave cancelled");
        }
    }

    /// Whether a snapshot is waiting to be written.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        lock(&self.inner.pending).is_some()
    }

    /// Number of snapshots written successfully.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    async fn stop_timer(&self) {
        let timer = lock(&self.timer).take();
        if let Some(timer) = timer {
            timer.abort();
            // Either cancelled while sleeping or already handed its write off.
            let _ = timer.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::DiaryEntry;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStore;

    const DELAY: Duration = Duration::from_millis(500);

    fn state_with(text: &str) -> AppState {
        let mut state = AppState::default();
        let mut entry = DiaryEntry::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        entry.content = text.to_string();
        state.upsert_entry(entry);
        state
    }

    fn saver() -> (AutoSaver, Arc<MemoryStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let saver = AutoSaver::new(store.clone(), notifier.clone(), DELAY);
        (saver, store, notifier)
    }

    fn stored_text(store: &MemoryStore) -> Option<String> {
        store
            .contents()
            .unwrap()
            .entries
            .values()
            .next()
            .map(|e| e.content.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_changes_coalesce_into_one_write() {
        let (saver, store, _) = saver();

        for i in 0..5 {
            saver.schedule(state_with(&format!("draft {i}")));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(saver.writes(), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        saver.flush().await.unwrap();

        assert_eq!(saver.writes(), 1);
        assert_eq!(stored_text(&store).as_deref(), Some("draft 4"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_changes_write_twice() {
        let (saver, store, _) = saver();

        saver.schedule(state_with("morning"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        saver.schedule(state_with("evening"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        saver.flush().await.unwrap();

        assert_eq!(saver.writes(), 2);
        assert_eq!(stored_text(&store).as_deref(), Some("evening"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_write() {
        let (saver, store, _) = saver();

        saver.schedule(state_with("never"));
        saver.cancel().await;
        assert!(!saver.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(saver.writes(), 0);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_writes_without_waiting() {
        let (saver, store, _) = saver();

        saver.schedule(state_with("now"));
        saver.flush().await.unwrap();

        assert_eq!(saver.writes(), 1);
        assert_eq!(stored_text(&store).as_deref(), Some("now"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(saver.writes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_write_notifies_without_retry() {
        let (saver, store, notifier) = saver();
        store.set_fail_writes(true);

        saver.schedule(state_with("lost"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        saver.flush().await.unwrap();

        assert_eq!(saver.writes(), 0);
        assert_eq!(notifier.notices(), vec![Notice::SaveFailed]);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(notifier.notices().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_reports_direct_write_failure() {
        let (saver, store, notifier) = saver();
        store.set_fail_writes(true);

        saver.schedule(state_with("lost"));
        let err = saver.flush().await.unwrap_err();

        assert!(err.is_storage_failure());
        assert_eq!(notifier.notices(), vec![Notice::SaveFailed]);
    }
}
