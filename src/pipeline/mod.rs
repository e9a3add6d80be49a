//! The imperative shell around the pure core.
//!
//! This module owns everything effectful: the canonical state store and its
//! fan-out, the intake boundary that validates raw input, the projection
//! tasks that turn states into display updates, the async name-resolution
//! seam, and the teardown registry that stops it all.
//!
//! The entry point is [`ColorEngine::builder`].

mod engine;
mod intake;
mod lifecycle;
mod resolver;
mod store;
mod update;

pub use engine::{BuildError, ColorEngine, EngineBuilder};
pub use intake::EventIntake;
pub use lifecycle::Subscriptions;
pub use resolver::{parse_lookup_response, resolve_fn, LookupError, ResolveFn, ResolveFuture};
pub use store::StateStore;
pub use update::{NameState, Update, UpdateReceiver, NAME_PLACEHOLDER};
