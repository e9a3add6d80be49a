//! The color engine: builder, projection tasks, and the public handle.
//!
//! [`EngineBuilder::build`] wires the store, the intake boundary, and four
//! projection tasks together, then hands back the engine handle plus the
//! merged update stream. Three projections are synchronous derivations; the
//! name projection runs lookups through the caller's resolver with
//! switch-latest semantics, so only the newest complete color can ever
//! surface a name.

use crate::core::{
    background, hex_text, name_request, rgb_string, HexInput, HexParseError, NameRequest,
};
use crate::pipeline::intake::EventIntake;
use crate::pipeline::lifecycle::Subscriptions;
use crate::pipeline::resolver::{ResolveFn, ResolveFuture};
use crate::pipeline::store::StateStore;
use crate::pipeline::update::{NameState, Update, UpdateReceiver, UpdateSender};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Errors produced when building an engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No resolver was supplied; the name projection cannot run without one.
    #[error("engine requires a name resolver")]
    MissingResolver,
}

/// Fluent builder for [`ColorEngine`].
///
/// A resolver is required; the initial state defaults to `"#"`.
///
/// # Example
///
/// ```rust
/// use hexpad::pipeline::{resolve_fn, ColorEngine};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (engine, mut updates) = ColorEngine::builder()
///     .resolver(resolve_fn(|hex| async move { Ok(format!("color {hex}")) }))
///     .build()
///     .unwrap();
///
/// engine.on_digit('f').unwrap();
/// # }
/// ```
pub struct EngineBuilder {
    resolver: Option<ResolveFn>,
    initial: HexInput,
}

impl EngineBuilder {
    /// Start a builder with no resolver and the default `"#"` state.
    pub fn new() -> Self {
        Self {
            resolver: None,
            initial: HexInput::new(),
        }
    }

    /// Set the name resolver (required).
    pub fn resolver(mut self, resolver: ResolveFn) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Start from a state other than `"#"`, e.g. when restoring a session.
    pub fn initial(mut self, initial: HexInput) -> Self {
        self.initial = initial;
        self
    }

    /// Validate the configuration, spawn the projection tasks, and return
    /// the engine handle with its update stream.
    ///
    /// Must be called from within a Tokio runtime; the projections are
    /// spawned onto it. The initial state is replayed through every channel
    /// before the first event, so the consumer can render immediately.
    pub fn build(self) -> Result<(ColorEngine, UpdateReceiver), BuildError> {
        let resolver = self.resolver.ok_or(BuildError::MissingResolver)?;

        let store = Arc::new(StateStore::new(self.initial));
        let subscriptions = Arc::new(Subscriptions::new());
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        spawn_projection(&store, &subscriptions, updates_tx.clone(), |state| {
            Update::HexText(hex_text(state))
        });
        spawn_projection(&store, &subscriptions, updates_tx.clone(), |state| {
            Update::Background(background(state))
        });
        spawn_projection(&store, &subscriptions, updates_tx.clone(), |state| {
            Update::RgbString(rgb_string(state))
        });

        let states = store.subscribe();
        let handle = tokio::spawn(run_name_projection(states, resolver, updates_tx));
        subscriptions.register(handle);

        let intake = EventIntake::new(Arc::clone(&store), Arc::clone(&subscriptions));
        debug!(initial = %store.current(), "engine started");

        Ok((
            ColorEngine {
                store,
                intake,
                subscriptions,
            },
            updates_rx,
        ))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running engine.
///
/// The handle accepts input, exposes the canonical state, and owns the
/// engine's lifetime: dropping it tears the projections down.
pub struct ColorEngine {
    store: Arc<StateStore>,
    intake: EventIntake,
    subscriptions: Arc<Subscriptions>,
}

impl ColorEngine {
    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Feed a keypad character. See [`EventIntake::on_digit`].
    pub fn on_digit(&self, ch: char) -> Result<(), HexParseError> {
        self.intake.on_digit(ch)
    }

    /// Feed a backspace press.
    pub fn on_back(&self) {
        self.intake.on_back();
    }

    /// Feed a clear press.
    pub fn on_clear(&self) {
        self.intake.on_clear();
    }

    /// Snapshot of the current canonical state.
    pub fn current(&self) -> HexInput {
        self.store.current()
    }

    /// A cheap, cloneable input handle for the widget layer.
    pub fn intake(&self) -> EventIntake {
        self.intake.clone()
    }

    /// Stop all projection tasks. Idempotent; input fed afterwards is
    /// dropped.
    pub fn teardown(&self) {
        self.subscriptions.teardown();
    }

    /// Whether [`teardown`](Self::teardown) has run.
    pub fn is_torn_down(&self) -> bool {
        self.subscriptions.is_torn_down()
    }
}

impl Drop for ColorEngine {
    fn drop(&mut self) {
        self.subscriptions.teardown();
    }
}

fn spawn_projection<F>(
    store: &Arc<StateStore>,
    subscriptions: &Arc<Subscriptions>,
    updates: UpdateSender,
    project: F,
) where
    F: Fn(&HexInput) -> Update + Send + 'static,
{
    let mut states = store.subscribe();
    let handle = tokio::spawn(async move {
        while let Some(state) = states.recv().await {
            if updates.send(project(&state)).is_err() {
                break;
            }
        }
    });
    subscriptions.register(handle);
}

/// Drives the name channel with switch-latest semantics.
///
/// At most one lookup is in flight. A new state always supersedes it: the
/// pending future is dropped before its result can be delivered, and a new
/// lookup starts only for a complete color.
async fn run_name_projection(
    mut states: mpsc::UnboundedReceiver<HexInput>,
    resolver: ResolveFn,
    updates: UpdateSender,
) {
    let mut inflight: Option<ResolveFuture> = None;
    loop {
        tokio::select! {
            // New states take priority over a finished lookup, so a queued
            // newer state discards the stale result instead of racing it.
            biased;

            state = states.recv() => {
                let Some(state) = state else { break };
                match name_request(&state) {
                    NameRequest::Placeholder => {
                        inflight = None;
                        if updates.send(Update::ColorName(NameState::Placeholder)).is_err() {
                            break;
                        }
                    }
                    NameRequest::Lookup(hex) => {
                        debug!(%hex, "starting name lookup");
                        inflight = Some(resolver(hex));
                    }
                }
            }

            result = async {
                inflight.as_mut().expect("branch gated on is_some").await
            }, if inflight.is_some() => {
                inflight = None;
                let name = match result {
                    Ok(name) => NameState::Resolved(name),
                    Err(err) => {
                        warn!(%err, "name lookup failed");
                        NameState::Failed(err)
                    }
                };
                if updates.send(Update::ColorName(name)).is_err() {
                    break;
                }
            }
        }
    }
}
