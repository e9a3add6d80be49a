//! Teardown registry for the engine's background tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Tracks the engine's spawned projection tasks so they can be stopped as a
/// unit.
///
/// Teardown is idempotent: the first call aborts everything, later calls do
/// nothing. Once torn down the registry stays torn down, and any handle
/// registered afterwards is aborted immediately instead of leaking.
#[derive(Default)]
pub struct Subscriptions {
    tasks: Mutex<Vec<JoinHandle<()>>>,
    torn_down: AtomicBool,
}

impl Subscriptions {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Track a task for teardown.
    pub(crate) fn register(&self, handle: JoinHandle<()>) {
        if self.torn_down.load(Ordering::SeqCst) {
            handle.abort();
            return;
        }
        self.tasks
            .lock()
            .expect("subscription registry lock poisoned")
            .push(handle);
    }

    /// Abort every registered task. Safe to call more than once.
    pub fn teardown(&self) {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            return;
        }
        let handles = std::mem::take(
            &mut *self
                .tasks
                .lock()
                .expect("subscription registry lock poisoned"),
        );
        debug!(tasks = handles.len(), "tearing down projections");
        for handle in handles {
            handle.abort();
        }
    }

    /// Whether teardown has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn task_count(&self) -> usize {
        self.tasks
            .lock()
            .expect("subscription registry lock poisoned")
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parked_task() -> JoinHandle<()> {
        tokio::spawn(async {
            std::future::pending::<()>().await;
        })
    }

    #[tokio::test]
    async fn teardown_aborts_registered_tasks() {
        let subs = Subscriptions::new();
        let handle = parked_task().await;
        let probe = parked_task().await;
        subs.register(handle);
        subs.register(probe);
        assert_eq!(subs.task_count(), 2);

        subs.teardown();
        assert!(subs.is_torn_down());
        assert_eq!(subs.task_count(), 0);
    }

    #[tokio::test]
    async fn teardown_is_idempotent() {
        let subs = Subscriptions::new();
        subs.register(parked_task().await);

        subs.teardown();
        subs.teardown();
        assert!(subs.is_torn_down());
    }

    #[tokio::test]
    async fn late_registration_is_aborted_immediately() {
        let subs = Subscriptions::new();
        subs.teardown();

        let handle = parked_task().await;
        subs.register(handle);
        assert_eq!(subs.task_count(), 0);
    }

    #[tokio::test]
    async fn fresh_registry_is_not_torn_down() {
        let subs = Subscriptions::new();
        assert!(!subs.is_torn_down());
    }
}
