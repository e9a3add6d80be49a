//! Canonical hex-color state and validated digit input.
//!
//! All types in this module are immutable values. Operations that "change"
//! the canonical state return a new value instead of mutating in place,
//! keeping the core pure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a complete canonical value: `#` plus six hex digits.
pub const COMPLETE_LEN: usize = 7;

/// Errors produced when validating hex input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HexParseError {
    /// The value was empty; a canonical value is never shorter than `"#"`.
    #[error("empty hex value, expected a leading '#'")]
    Empty,

    /// The value did not start with `#`.
    #[error("hex value must start with '#'")]
    MissingHash,

    /// The value was longer than a complete color.
    #[error("hex value exceeds {COMPLETE_LEN} characters (got {len})")]
    TooLong { len: usize },

    /// A character outside `[0-9a-fA-F]` was encountered.
    #[error("invalid hex digit {ch:?}")]
    InvalidDigit { ch: char },

    /// A complete color was required but the value was still partial.
    #[error("hex value incomplete, expected {COMPLETE_LEN} characters (got {len})")]
    Incomplete { len: usize },
}

/// A single validated hex digit, normalized to lowercase.
///
/// `HexDigit` is the payload of a digit event. Constructing one is the
/// validation boundary: anything outside `[0-9a-fA-F]` is rejected before it
/// can reach the canonical state.
///
/// # Example
///
/// ```rust
/// use hexpad::core::HexDigit;
///
/// let digit = HexDigit::new('A').unwrap();
/// assert_eq!(digit.as_char(), 'a');
///
/// assert!(HexDigit::new('g').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct HexDigit(char);

impl HexDigit {
    /// Validate a character as a hex digit.
    ///
    /// Accepts `0-9`, `a-f` and `A-F`; uppercase input is normalized to
    /// lowercase so the canonical state has a fixed case.
    pub fn new(ch: char) -> Result<Self, HexParseError> {
        if ch.is_ascii_hexdigit() {
            Ok(Self(ch.to_ascii_lowercase()))
        } else {
            Err(HexParseError::InvalidDigit { ch })
        }
    }

    /// The digit as a lowercase character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for HexDigit {
    type Error = HexParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl From<HexDigit> for char {
    fn from(digit: HexDigit) -> Self {
        digit.as_char()
    }
}

impl fmt::Display for HexDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The canonical hex-color value: `"#"` followed by zero to six lowercase
/// hex digits.
///
/// This is the single authoritative value all projections derive from. It is
/// always well-formed: the constructors and transition operations cannot
/// produce anything outside the invariant, and deserialization goes through
/// the same validation as [`FromStr`].
///
/// A value shorter than seven characters means "no color yet"; exactly seven
/// characters is a complete color.
///
/// # Example
///
/// ```rust
/// use hexpad::core::{HexDigit, HexInput};
///
/// let state = HexInput::new();
/// assert_eq!(state.as_str(), "#");
/// assert!(!state.is_complete());
///
/// let state = state.push(HexDigit::new('f').unwrap());
/// assert_eq!(state.as_str(), "#f");
///
/// let back = state.pop();
/// assert_eq!(back.as_str(), "#");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexInput(String);

impl HexInput {
    /// Create the initial canonical value, `"#"`.
    pub fn new() -> Self {
        Self(String::from("#"))
    }

    /// The canonical value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits entered so far (0 to 6; the leading `#` is not a
    /// digit).
    pub fn digit_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether the value is a complete color (`#` plus six digits).
    pub fn is_complete(&self) -> bool {
        self.0.len() == COMPLETE_LEN
    }

    /// Append a digit, returning the next canonical value.
    ///
    /// Appending to a complete value is a no-op: the state cannot exceed
    /// seven characters, so the same value is returned.
    pub fn push(&self, digit: HexDigit) -> Self {
        if self.is_complete() {
            return self.clone();
        }
        let mut next = self.0.clone();
        next.push(digit.as_char());
        Self(next)
    }

    /// Remove the last digit, returning the next canonical value.
    ///
    /// Removing from `"#"` is a no-op: the leading `#` is never deleted, so
    /// the value can never get shorter than one character.
    pub fn pop(&self) -> Self {
        if self.0.len() < 2 {
            return self.clone();
        }
        Self(self.0[..self.0.len() - 1].to_string())
    }

    /// View the value as a complete color, if it is one.
    pub fn complete(&self) -> Option<CompleteHex> {
        self.is_complete().then(|| CompleteHex(self.0.clone()))
    }
}

impl Default for HexInput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HexInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate(value: &str) -> Result<(), HexParseError> {
    let mut chars = value.chars();
    match chars.next() {
        None => return Err(HexParseError::Empty),
        Some('#') => {}
        Some(_) => return Err(HexParseError::MissingHash),
    }
    let mut len = 1;
    for ch in chars {
        len += 1;
        if !ch.is_ascii_hexdigit() {
            return Err(HexParseError::InvalidDigit { ch });
        }
    }
    if len > COMPLETE_LEN {
        return Err(HexParseError::TooLong { len });
    }
    Ok(())
}

impl TryFrom<String> for HexInput {
    type Error = HexParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value.to_ascii_lowercase()))
    }
}

impl TryFrom<&str> for HexInput {
    type Error = HexParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl FromStr for HexInput {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<HexInput> for String {
    fn from(state: HexInput) -> Self {
        state.0
    }
}

/// A complete, well-formed hex color: exactly `#` plus six lowercase digits.
///
/// The name-resolver seam only accepts this type, so a lookup can never be
/// issued for a partial value.
///
/// # Example
///
/// ```rust
/// use hexpad::core::{CompleteHex, HexInput};
///
/// let partial: HexInput = "#ff00".parse().unwrap();
/// assert!(partial.complete().is_none());
///
/// let full: CompleteHex = "#FF0000".parse().unwrap();
/// assert_eq!(full.as_str(), "#ff0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompleteHex(String);

impl CompleteHex {
    /// The complete value as a string slice, e.g. `"#ff0000"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompleteHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CompleteHex {
    type Error = HexParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let input = HexInput::try_from(value)?;
        let len = input.as_str().len();
        input.complete().ok_or(HexParseError::Incomplete { len })
    }
}

impl TryFrom<&str> for CompleteHex {
    type Error = HexParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl FromStr for CompleteHex {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<CompleteHex> for String {
    fn from(hex: CompleteHex) -> Self {
        hex.0
    }
}

impl From<CompleteHex> for HexInput {
    fn from(hex: CompleteHex) -> Self {
        HexInput(hex.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_a_lone_hash() {
        let state = HexInput::new();
        assert_eq!(state.as_str(), "#");
        assert_eq!(state.digit_count(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn push_appends_digits_in_order() {
        let mut state = HexInput::new();
        for ch in ['1', '2', 'a'] {
            state = state.push(HexDigit::new(ch).unwrap());
        }
        assert_eq!(state.as_str(), "#12a");
        assert_eq!(state.digit_count(), 3);
    }

    #[test]
    fn push_normalizes_uppercase_digits() {
        let state = HexInput::new().push(HexDigit::new('F').unwrap());
        assert_eq!(state.as_str(), "#f");
    }

    #[test]
    fn push_at_saturation_is_identity() {
        let state: HexInput = "#abcdef".parse().unwrap();
        assert!(state.is_complete());

        let next = state.push(HexDigit::new('0').unwrap());
        assert_eq!(next, state);
    }

    #[test]
    fn pop_removes_the_last_digit() {
        let state: HexInput = "#ab".parse().unwrap();
        assert_eq!(state.pop().as_str(), "#a");
    }

    #[test]
    fn pop_never_deletes_the_hash() {
        let state = HexInput::new();
        assert_eq!(state.pop().as_str(), "#");
    }

    #[test]
    fn complete_requires_seven_characters() {
        let partial: HexInput = "#abcde".parse().unwrap();
        assert!(partial.complete().is_none());

        let full: HexInput = "#abcdef".parse().unwrap();
        let complete = full.complete().unwrap();
        assert_eq!(complete.as_str(), "#abcdef");
    }

    #[test]
    fn parse_accepts_and_normalizes_uppercase() {
        let state: HexInput = "#FF00Aa".parse().unwrap();
        assert_eq!(state.as_str(), "#ff00aa");
    }

    #[test]
    fn parse_rejects_empty_value() {
        assert_eq!("".parse::<HexInput>(), Err(HexParseError::Empty));
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert_eq!(
            "ff0000".parse::<HexInput>(),
            Err(HexParseError::MissingHash)
        );
    }

    #[test]
    fn parse_rejects_overlong_value() {
        assert_eq!(
            "#1234567".parse::<HexInput>(),
            Err(HexParseError::TooLong { len: 8 })
        );
    }

    #[test]
    fn parse_rejects_invalid_digit() {
        assert_eq!(
            "#12g".parse::<HexInput>(),
            Err(HexParseError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn complete_hex_rejects_partial_value() {
        assert_eq!(
            "#ff00".parse::<CompleteHex>(),
            Err(HexParseError::Incomplete { len: 5 })
        );
    }

    #[test]
    fn hex_digit_accepts_all_sixteen_values() {
        for ch in "0123456789abcdefABCDEF".chars() {
            assert!(HexDigit::new(ch).is_ok(), "expected {ch:?} to be valid");
        }
    }

    #[test]
    fn hex_digit_rejects_non_hex_characters() {
        for ch in ['g', 'z', '#', ' ', '-', 'é'] {
            assert_eq!(
                HexDigit::new(ch),
                Err(HexParseError::InvalidDigit { ch }),
                "expected {ch:?} to be rejected"
            );
        }
    }

    #[test]
    fn state_serializes_as_its_string_form() {
        let state: HexInput = "#1a2b".parse().unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"#1a2b\"");

        let back: HexInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn deserialization_cannot_bypass_the_invariant() {
        let result: Result<HexInput, _> = serde_json::from_str("\"not hex\"");
        assert!(result.is_err());

        let result: Result<CompleteHex, _> = serde_json::from_str("\"#ff\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_canonical_string() {
        let state: HexInput = "#c0ffee".parse().unwrap();
        assert_eq!(state.to_string(), "#c0ffee");

        let complete = state.complete().unwrap();
        assert_eq!(complete.to_string(), "#c0ffee");
    }
}
