//! Core color types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - The canonical hex state and its validated inputs
//! - The event vocabulary and transition function
//! - RGB decoding and the display projections
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod derive;
mod event;
mod hex;
mod rgb;

pub use derive::{background, hex_text, name_request, rgb_string, NameRequest};
pub use event::{apply, transition, ColorEvent};
pub use hex::{CompleteHex, HexDigit, HexInput, HexParseError, COMPLETE_LEN};
pub use rgb::Rgb;
