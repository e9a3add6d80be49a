//! Hexpad: a reactive state-derivation core for hex color input widgets
//!
//! Hexpad is built on the "pure core, imperative shell" philosophy. The
//! canonical state, its transitions, and every display projection are pure
//! functions; the pipeline module wraps them in an async engine that fans
//! published states out to projection tasks and resolves color names with
//! switch-latest semantics.
//!
//! # Core Concepts
//!
//! - **Canonical state**: a [`HexInput`], `"#"` plus zero to six lowercase
//!   hex digits, the single source every display value derives from
//! - **Events**: [`ColorEvent`] values (digit, back, clear) folded into the
//!   state by a pure transition function
//! - **Projections**: hex text, preview background, `R,G,B` caption, and an
//!   asynchronously resolved color name
//!
//! # Example
//!
//! ```rust
//! use hexpad::core::{apply, ColorEvent, HexDigit, HexInput};
//!
//! let mut state = HexInput::new();
//! for ch in "ff0000".chars() {
//!     let digit = HexDigit::new(ch).unwrap();
//!     state = apply(&state, ColorEvent::Digit(digit));
//! }
//!
//! assert_eq!(state.as_str(), "#ff0000");
//! assert!(state.is_complete());
//!
//! // Back at the floor and digits past saturation leave the state alone.
//! state = apply(&state, ColorEvent::Digit(HexDigit::new('a').unwrap()));
//! assert_eq!(state.as_str(), "#ff0000");
//! ```
//!
//! Driving the full engine requires a Tokio runtime and a name resolver;
//! see [`pipeline::ColorEngine`].

pub mod core;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{ColorEvent, CompleteHex, HexDigit, HexInput, HexParseError, Rgb};
pub use crate::pipeline::{
    resolve_fn, BuildError, ColorEngine, EngineBuilder, LookupError, NameState, Update,
    UpdateReceiver,
};
