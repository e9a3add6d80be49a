//! The canonical state store and its publication fan-out.

use crate::core::HexInput;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::trace;

/// Holds the single canonical [`HexInput`] and fans published states out to
/// the projection tasks.
///
/// Subscribing replays the current state immediately, so a projection that
/// attaches after events have already flowed still renders something
/// consistent instead of staying blank until the next keystroke.
pub struct StateStore {
    inner: Mutex<Inner>,
}

struct Inner {
    current: HexInput,
    subscribers: Vec<mpsc::UnboundedSender<HexInput>>,
}

impl StateStore {
    pub(crate) fn new(initial: HexInput) -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Snapshot of the current canonical state.
    pub fn current(&self) -> HexInput {
        self.inner
            .lock()
            .expect("state store lock poisoned")
            .current
            .clone()
    }

    /// Attach a subscriber. The current state is replayed into the channel
    /// before any future publication.
    pub(crate) fn subscribe(&self) -> mpsc::UnboundedReceiver<HexInput> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut guard = self.inner.lock().expect("state store lock poisoned");
        // Replay cannot fail: we still hold rx.
        let _ = tx.send(guard.current.clone());
        guard.subscribers.push(tx);
        rx
    }

    /// Apply a transition under the lock and publish the result.
    ///
    /// The closure sees the current state and decides whether anything is
    /// published: `None` leaves the state untouched and emits nothing.
    /// Subscribers whose receiving side has been dropped are pruned here.
    pub(crate) fn publish_with<F>(&self, f: F)
    where
        F: FnOnce(&HexInput) -> Option<HexInput>,
    {
        let mut guard = self.inner.lock().expect("state store lock poisoned");
        let Some(next) = f(&guard.current) else {
            return;
        };
        guard.current = next;
        trace!(state = %guard.current, "state published");
        let Inner {
            current,
            subscribers,
        } = &mut *guard;
        subscribers.retain(|tx| tx.send(current.clone()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("state store lock poisoned")
            .subscribers
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{transition, ColorEvent, HexDigit};

    fn digit(ch: char) -> ColorEvent {
        ColorEvent::Digit(HexDigit::new(ch).unwrap())
    }

    #[tokio::test]
    async fn subscribe_replays_the_current_state() {
        let store = StateStore::new("#ab".parse().unwrap());
        let mut rx = store.subscribe();
        assert_eq!(rx.recv().await.unwrap().as_str(), "#ab");
    }

    #[tokio::test]
    async fn publications_reach_every_subscriber_in_order() {
        let store = StateStore::new(HexInput::new());
        let mut first = store.subscribe();
        let mut second = store.subscribe();

        store.publish_with(|cur| transition(cur, digit('1')));
        store.publish_with(|cur| transition(cur, digit('2')));

        for rx in [&mut first, &mut second] {
            assert_eq!(rx.recv().await.unwrap().as_str(), "#");
            assert_eq!(rx.recv().await.unwrap().as_str(), "#1");
            assert_eq!(rx.recv().await.unwrap().as_str(), "#12");
        }
    }

    #[tokio::test]
    async fn suppressed_transition_publishes_nothing() {
        let store = StateStore::new(HexInput::new());
        let mut rx = store.subscribe();
        assert_eq!(rx.recv().await.unwrap().as_str(), "#");

        store.publish_with(|cur| transition(cur, ColorEvent::Back));
        store.publish_with(|cur| transition(cur, digit('a')));

        // The back event at the floor emitted nothing, so the next value is
        // the digit publication.
        assert_eq!(rx.recv().await.unwrap().as_str(), "#a");
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned_on_publish() {
        let store = StateStore::new(HexInput::new());
        let rx = store.subscribe();
        let _live = store.subscribe();
        assert_eq!(store.subscriber_count(), 2);

        drop(rx);
        store.publish_with(|cur| transition(cur, digit('f')));
        assert_eq!(store.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn current_tracks_publications() {
        let store = StateStore::new(HexInput::new());
        assert_eq!(store.current().as_str(), "#");

        store.publish_with(|cur| transition(cur, digit('0')));
        assert_eq!(store.current().as_str(), "#0");
    }
}
