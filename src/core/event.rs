//! Input events and the pure transition function over the canonical state.

use crate::core::hex::{HexDigit, HexInput};
use serde::{Deserialize, Serialize};

/// An input event from the widget surface.
///
/// Events are plain values with no behavior of their own; [`transition`]
/// gives them meaning against the current canonical state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorEvent {
    /// A validated hex digit was entered.
    Digit(HexDigit),
    /// The last digit should be removed.
    Back,
    /// The state should reset to `"#"`.
    Clear,
}

/// Compute the state an event leads to, or `None` when the event publishes
/// nothing.
///
/// `Digit` and `Back` at their respective boundaries (state already complete,
/// state already `"#"`) leave the state untouched and suppress publication.
/// `Clear` always publishes `"#"`, even when the state is already `"#"`, so
/// downstream consumers observe every reset.
///
/// # Example
///
/// ```rust
/// use hexpad::core::{transition, ColorEvent, HexDigit, HexInput};
///
/// let state = HexInput::new();
/// let next = transition(&state, ColorEvent::Digit(HexDigit::new('a').unwrap()));
/// assert_eq!(next.unwrap().as_str(), "#a");
///
/// // Back at the floor changes nothing and publishes nothing.
/// assert_eq!(transition(&state, ColorEvent::Back), None);
///
/// // Clear publishes even when the state is already "#".
/// assert_eq!(transition(&state, ColorEvent::Clear).unwrap().as_str(), "#");
/// ```
pub fn transition(current: &HexInput, event: ColorEvent) -> Option<HexInput> {
    match event {
        ColorEvent::Digit(digit) => {
            let next = current.push(digit);
            (next != *current).then_some(next)
        }
        ColorEvent::Back => {
            let next = current.pop();
            (next != *current).then_some(next)
        }
        ColorEvent::Clear => Some(HexInput::new()),
    }
}

/// Total form of [`transition`]: events that publish nothing return the
/// current state unchanged.
pub fn apply(current: &HexInput, event: ColorEvent) -> HexInput {
    transition(current, event).unwrap_or_else(|| current.clone())
}
