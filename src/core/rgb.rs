//! RGB color values decoded from complete hex input.

use crate::core::hex::CompleteHex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel RGB color.
///
/// # Example
///
/// ```rust
/// use hexpad::core::{CompleteHex, Rgb};
///
/// let hex: CompleteHex = "#ff8000".parse().unwrap();
/// let color = Rgb::from_hex(&hex);
/// assert_eq!(color, Rgb::new(255, 128, 0));
/// assert_eq!(color.to_string(), "255,128,0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Pure white, the sentinel shown while no complete color exists.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Pure black, the background shown while no complete color exists.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Construct a color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Decode a complete hex value into its channels.
    ///
    /// The input is guaranteed well-formed by [`CompleteHex`], so decoding
    /// cannot fail.
    pub fn from_hex(hex: &CompleteHex) -> Self {
        let bytes = hex.as_str().as_bytes();
        Self {
            red: pair(bytes[1], bytes[2]),
            green: pair(bytes[3], bytes[4]),
            blue: pair(bytes[5], bytes[6]),
        }
    }

    /// The color packed as `0xRRGGBB`.
    pub fn packed(self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

fn pair(hi: u8, lo: u8) -> u8 {
    (nibble(hi) << 4) | nibble(lo)
}

fn nibble(byte: u8) -> u8 {
    // CompleteHex is normalized to lowercase, so only 0-9 and a-f occur.
    match byte {
        b'0'..=b'9' => byte - b'0',
        _ => byte - b'a' + 10,
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}
