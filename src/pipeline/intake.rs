//! The event intake boundary: raw widget input becomes canonical events.

use crate::core::{transition, ColorEvent, HexDigit, HexParseError};
use crate::pipeline::lifecycle::Subscriptions;
use crate::pipeline::store::StateStore;
use std::sync::Arc;
use tracing::debug;

/// Accepts raw input from the widget surface, validates it, and drives the
/// canonical state.
///
/// Intake is the only writer of the state store. Input arriving after
/// teardown is dropped silently, matching a keypad whose window has already
/// closed.
#[derive(Clone)]
pub struct EventIntake {
    store: Arc<StateStore>,
    subscriptions: Arc<Subscriptions>,
}

impl EventIntake {
    pub(crate) fn new(store: Arc<StateStore>, subscriptions: Arc<Subscriptions>) -> Self {
        Self {
            store,
            subscriptions,
        }
    }

    /// Feed a keypad character. Non-hex characters are rejected here and
    /// never reach the state.
    pub fn on_digit(&self, ch: char) -> Result<(), HexParseError> {
        let digit = HexDigit::new(ch).inspect_err(|err| {
            debug!(%err, "rejected keypad input");
        })?;
        self.dispatch(ColorEvent::Digit(digit));
        Ok(())
    }

    /// Feed a backspace press.
    pub fn on_back(&self) {
        self.dispatch(ColorEvent::Back);
    }

    /// Feed a clear press.
    pub fn on_clear(&self) {
        self.dispatch(ColorEvent::Clear);
    }

    fn dispatch(&self, event: ColorEvent) {
        if self.subscriptions.is_torn_down() {
            debug!(?event, "dropping event after teardown");
            return;
        }
        self.store.publish_with(|current| transition(current, event));
    }
}
