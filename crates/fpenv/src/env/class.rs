//! Floating-point value classification.
//!
//! `FXAM` reports a value's coarse category through the condition codes
//! C3/C2/C0, with C1 mirroring the sign bit:
//!
//! | C3 C2 C0 | Pattern  | Category    |
//! |----------|----------|-------------|
//! | 0  0  0  | `0x0000` | Unsupported |
//! | 0  0  1  | `0x0100` | NaN         |
//! | 0  1  0  | `0x0400` | Normal      |
//! | 0  1  1  | `0x0500` | Infinity    |
//! | 1  0  0  | `0x4000` | Zero        |
//! | 1  0  1  | `0x4100` | Empty       |
//! | 1  1  0  | `0x4400` | Denormal    |
//!
//! NaNs are further split into signaling and quiet by inspecting the most
//! significant significand bit of the raw IEEE 754 encoding; see
//! [`discriminate_nan`].

use serde::Serialize;

use crate::error::FpError;
use crate::word::status::StatusWord;

/// Condition code pattern: unsupported double-extended encoding.
const CC_UNSUPPORTED: u16 = 0x0000;
/// Condition code pattern: NaN (C0).
const CC_NAN: u16 = 0x0100;
/// Condition code pattern: normal finite number (C2).
const CC_NORMAL: u16 = 0x0400;
/// Condition code pattern: infinity (C2|C0).
const CC_INFINITY: u16 = 0x0500;
/// Condition code pattern: zero (C3).
const CC_ZERO: u16 = 0x4000;
/// Condition code pattern: empty operand register (C3|C0).
const CC_EMPTY: u16 = 0x4100;
/// Condition code pattern: denormal (C3|C2).
const CC_DENORMAL: u16 = 0x4400;

/// IEEE 754 category of a double-precision value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FpClass {
    /// NaN with the most significant significand bit clear.
    SignalingNan,
    /// NaN with the most significant significand bit set.
    QuietNan,
    /// Negative infinity.
    NegInfinity,
    /// Positive infinity.
    PosInfinity,
    /// Negative denormal (subnormal) number.
    NegDenormal,
    /// Positive denormal (subnormal) number.
    PosDenormal,
    /// Negative zero.
    NegZero,
    /// Positive zero.
    PosZero,
    /// Negative normal finite number.
    NegNormal,
    /// Positive normal finite number.
    PosNormal,
    /// A double-extended encoding with no IEEE 754 meaning (pseudo-NaN,
    /// pseudo-infinity, unnormal). Unreachable for operands that arrive as
    /// `f64`, which `FLD` always converts to a supported encoding.
    Unsupported,
}

impl FpClass {
    /// Returns true for the six finite categories (normals, denormals, and
    /// both zeros); false for infinities, both NaN kinds, and unsupported
    /// encodings.
    pub const fn is_finite(self) -> bool {
        matches!(
            self,
            Self::NegDenormal
                | Self::PosDenormal
                | Self::NegZero
                | Self::PosZero
                | Self::NegNormal
                | Self::PosNormal
        )
    }
}

/// Splits a NaN into its signaling and quiet kinds.
///
/// A signaling NaN carries a zero most-significant significand bit; a quiet
/// NaN carries a one. The test masks the value's raw IEEE 754 bits with the
/// bits of `1.5`: every NaN has an all-ones exponent and `1.5`'s exponent
/// field is the same run of ones, so the result keeps `1.5`'s sign and
/// exponent, the NaN's most-significant significand bit, and zeroes
/// elsewhere. That is exactly `1.0` when the bit is clear (signaling) and
/// exactly `1.5` when it is set (quiet).
///
/// Both operands are reinterpreted in native bit order and never byte
/// swapped; the trick depends only on relative bit position, so it holds on
/// any endianness as long as the two reinterpretations agree.
///
/// # Arguments
///
/// * `value` - A value already known to be a NaN.
pub(crate) fn discriminate_nan(value: f64) -> FpClass {
    let masked = f64::from_bits(value.to_bits() & 1.5_f64.to_bits());
    if masked == 1.0 {
        FpClass::SignalingNan
    } else {
        FpClass::QuietNan
    }
}

/// Decodes an `FXAM` status word into a value category.
///
/// # Arguments
///
/// * `status` - The status word produced by examining `value`.
/// * `value`  - The examined value, consulted only to split NaN kinds.
///
/// # Errors
///
/// [`FpError::EmptyOperand`] if the condition codes report an empty operand
/// register, and [`FpError::CorruptConditionCode`] for the one C3/C2/C0
/// combination with no defined meaning. Both are unreachable through a
/// conforming port.
pub(crate) fn decode(status: StatusWord, value: f64) -> Result<FpClass, FpError> {
    let negative = status.bits() & StatusWord::C1 != 0;
    let pattern = status.bits() & (StatusWord::C3 | StatusWord::C2 | StatusWord::C0);

    match pattern {
        CC_UNSUPPORTED => Ok(FpClass::Unsupported),
        CC_NAN => Ok(discriminate_nan(value)),
        CC_NORMAL => Ok(if negative {
            FpClass::NegNormal
        } else {
            FpClass::PosNormal
        }),
        CC_INFINITY => Ok(if negative {
            FpClass::NegInfinity
        } else {
            FpClass::PosInfinity
        }),
        CC_ZERO => Ok(if negative {
            FpClass::NegZero
        } else {
            FpClass::PosZero
        }),
        CC_EMPTY => Err(FpError::EmptyOperand),
        CC_DENORMAL => Ok(if negative {
            FpClass::NegDenormal
        } else {
            FpClass::PosDenormal
        }),
        other => Err(FpError::CorruptConditionCode(other)),
    }
}
