//! Pure projections from the canonical state to display-facing values.
//!
//! Each function here answers "given this state, what should the widget
//! show?" for one output channel. None of them perform I/O; the name
//! projection returns a [`NameRequest`] describing what the pipeline should
//! do rather than doing it.

use crate::core::hex::{CompleteHex, HexInput};
use crate::core::rgb::Rgb;

/// The raw text shown in the input field: the canonical state itself.
pub fn hex_text(state: &HexInput) -> String {
    state.as_str().to_string()
}

/// The preview background for a state.
///
/// Incomplete input shows black; a complete color shows itself.
pub fn background(state: &HexInput) -> Rgb {
    match state.complete() {
        Some(hex) => Rgb::from_hex(&hex),
        None => Rgb::BLACK,
    }
}

/// The `R,G,B` caption for a state.
///
/// Incomplete input shows the white sentinel `"255,255,255"`; a complete
/// color shows its decoded channels.
pub fn rgb_string(state: &HexInput) -> String {
    match state.complete() {
        Some(hex) => Rgb::from_hex(&hex).to_string(),
        None => Rgb::WHITE.to_string(),
    }
}

/// What the name projection should do for a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameRequest {
    /// No complete color: show the placeholder, cancel any pending lookup.
    Placeholder,
    /// A complete color: resolve its name.
    Lookup(CompleteHex),
}

/// The name action for a state.
///
/// ```rust
/// use hexpad::core::{name_request, HexInput, NameRequest};
///
/// let partial: HexInput = "#ff00".parse().unwrap();
/// assert_eq!(name_request(&partial), NameRequest::Placeholder);
///
/// let full: HexInput = "#ff0000".parse().unwrap();
/// assert!(matches!(name_request(&full), NameRequest::Lookup(_)));
/// ```
pub fn name_request(state: &HexInput) -> NameRequest {
    match state.complete() {
        Some(hex) => NameRequest::Lookup(hex),
        None => NameRequest::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> HexInput {
        s.parse().unwrap()
    }

    #[test]
    fn hex_text_mirrors_the_state() {
        assert_eq!(hex_text(&state("#")), "#");
        assert_eq!(hex_text(&state("#a1")), "#a1");
        assert_eq!(hex_text(&state("#a1b2c3")), "#a1b2c3");
    }

    #[test]
    fn background_is_black_until_complete() {
        assert_eq!(background(&state("#")), Rgb::BLACK);
        assert_eq!(background(&state("#fffff")), Rgb::BLACK);
    }

    #[test]
    fn background_shows_the_complete_color() {
        assert_eq!(background(&state("#ff8000")), Rgb::new(255, 128, 0));
    }

    #[test]
    fn rgb_string_is_white_sentinel_until_complete() {
        assert_eq!(rgb_string(&state("#")), "255,255,255");
        assert_eq!(rgb_string(&state("#00000")), "255,255,255");
    }

    #[test]
    fn rgb_string_shows_decoded_channels() {
        assert_eq!(rgb_string(&state("#ff8000")), "255,128,0");
        assert_eq!(rgb_string(&state("#000000")), "0,0,0");
    }

    #[test]
    fn name_request_is_placeholder_until_complete() {
        assert_eq!(name_request(&state("#")), NameRequest::Placeholder);
        assert_eq!(name_request(&state("#abcde")), NameRequest::Placeholder);
    }

    #[test]
    fn name_request_carries_the_complete_color() {
        match name_request(&state("#ff0000")) {
            NameRequest::Lookup(hex) => assert_eq!(hex.as_str(), "#ff0000"),
            other => panic!("expected lookup, got {other:?}"),
        }
    }

    #[test]
    fn sentinels_differ_between_channels() {
        // Empty input paints a black background but captions white.
        let empty = state("#");
        assert_eq!(background(&empty), Rgb::BLACK);
        assert_eq!(rgb_string(&empty), Rgb::WHITE.to_string());
    }
}
