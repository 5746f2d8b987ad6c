//! Intel precision control.
//!
//! The x87 computes at a configurable working precision regardless of
//! operand type (Intel SDM Vol. 1 §8.1.5.2):
//!
//! | Value | Mode     | Significand |
//! |-------|----------|-------------|
//! | 0b00  | Single   | 24 bits     |
//! | 0b01  | Reserved | —           |
//! | 0b10  | Double   | 53 bits     |
//! | 0b11  | Extended | 64 bits     |
//!
//! The reserved encoding is legal to *observe* (hardware may report it) but
//! illegal to *set*; the environment layer rejects it with a distinct error.
//!
//! Extended is the reset default. Note that narrowing to double does not
//! make results match a true 64-bit pipeline in every case: double rounding
//! through the 15-bit extended exponent range can still differ.

use core::fmt;

use serde::Serialize;

/// x87 working precision setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u16)]
pub enum PrecisionMode {
    /// 24-bit significand (IEEE single).
    Single = 0b00,
    /// Reserved encoding; observable but never settable.
    Reserved = 0b01,
    /// 53-bit significand (IEEE double).
    Double = 0b10,
    /// 64-bit significand (double extended, the reset default).
    Extended = 0b11,
}

impl PrecisionMode {
    /// Decodes a 2-bit precision control field value.
    ///
    /// Returns `None` for values outside the field's range. `Reserved`
    /// decodes successfully: it is a legal observation.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Single),
            0b01 => Some(Self::Reserved),
            0b10 => Some(Self::Double),
            0b11 => Some(Self::Extended),
            _ => None,
        }
    }

    /// Returns the field encoding.
    pub const fn bits(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for PrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::Reserved => "reserved",
            Self::Double => "double",
            Self::Extended => "extended",
        };
        write!(f, "{name}")
    }
}
