//! Rounding direction control.
//!
//! The x87 rounding control field encodes the four IEEE 754 directions
//! (Intel SDM Vol. 1 §8.1.5.3):
//!
//! | Value | Mode        | Description             |
//! |-------|-------------|-------------------------|
//! | 0b00  | Nearest     | Round to nearest (even) |
//! | 0b01  | Down        | Round towards −∞        |
//! | 0b10  | Up          | Round towards +∞        |
//! | 0b11  | TowardZero  | Truncate                |

use core::fmt;

use serde::Serialize;

/// IEEE 754 rounding direction, in x87 rounding-control encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u16)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (the reset default).
    Nearest = 0b00,
    /// Round down, towards negative infinity.
    Down = 0b01,
    /// Round up, towards positive infinity.
    Up = 0b10,
    /// Round towards zero (truncate).
    TowardZero = 0b11,
}

impl RoundingMode {
    /// Decodes a 2-bit rounding control field value.
    ///
    /// Returns `None` for values outside the field's range; every in-range
    /// value is a legal direction.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Nearest),
            0b01 => Some(Self::Down),
            0b10 => Some(Self::Up),
            0b11 => Some(Self::TowardZero),
            _ => None,
        }
    }

    /// Returns the field encoding.
    pub const fn bits(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nearest => "nearest",
            Self::Down => "down",
            Self::Up => "up",
            Self::TowardZero => "toward-zero",
        };
        write!(f, "{name}")
    }
}
