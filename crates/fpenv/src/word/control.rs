//! The x87 control word.
//!
//! Layout (Intel SDM Vol. 1 §8.1.5):
//!
//! | Bits  | Field             | Mask     |
//! |-------|-------------------|----------|
//! | 15-13 | (reserved)        | `0xE000` |
//! | 12    | Infinity control  | `0x1000` |
//! | 11-10 | Rounding control  | `0x0C00` |
//! | 9-8   | Precision control | `0x0300` |
//! | 7-6   | (reserved)        | `0x00C0` |
//! | 5     | Imprecise mask    | `0x0020` |
//! | 4     | Underflow mask    | `0x0010` |
//! | 3     | Overflow mask     | `0x0008` |
//! | 2     | Divide-by-zero mask | `0x0004` |
//! | 1     | Denormal mask     | `0x0002` |
//! | 0     | Invalid mask      | `0x0001` |
//!
//! A set mask bit *suppresses* the corresponding exception; the POSIX-facing
//! translation to "set = enabled" happens in the environment layer, not here.

use core::fmt;

use serde::Serialize;

use super::{extract, insert};

/// The 16-bit x87 FPU control word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlWord(u16);

impl ControlWord {
    /// Infinity control field (unused on 387 and later).
    pub const INFINITY_CONTROL: u16 = 0x1000;
    /// Rounding control field (2 bits).
    pub const ROUNDING_CONTROL: u16 = 0x0C00;
    /// Precision control field (2 bits).
    pub const PRECISION_CONTROL: u16 = 0x0300;
    /// Imprecise (precision) exception mask bit.
    pub const IMPRECISE_MASK: u16 = 0x0020;
    /// Underflow exception mask bit.
    pub const UNDERFLOW_MASK: u16 = 0x0010;
    /// Overflow exception mask bit.
    pub const OVERFLOW_MASK: u16 = 0x0008;
    /// Divide-by-zero exception mask bit.
    pub const DIVIDE_BY_ZERO_MASK: u16 = 0x0004;
    /// Denormal operand exception mask bit.
    pub const DENORMAL_MASK: u16 = 0x0002;
    /// Invalid operation exception mask bit.
    pub const INVALID_MASK: u16 = 0x0001;
    /// All six exception mask bits.
    pub const EXCEPTION_MASKS: u16 = 0x003F;

    /// The `FNINIT` reset value: round to nearest, extended precision, all
    /// exceptions masked.
    pub const RESET: Self = Self(0x037F);

    /// Wraps a raw 16-bit control word.
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw 16-bit word.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Extracts a right-aligned field value.
    ///
    /// # Arguments
    ///
    /// * `mask` - One of the field masks defined on this type.
    pub const fn field(self, mask: u16) -> u16 {
        extract(self.0, mask)
    }

    /// Returns a copy with the masked field replaced by `value`.
    ///
    /// # Arguments
    ///
    /// * `mask`  - One of the field masks defined on this type.
    /// * `value` - The right-aligned value to store.
    pub const fn with_field(self, mask: u16, value: u16) -> Self {
        Self(insert(self.0, mask, value))
    }
}

impl fmt::Display for ControlWord {
    /// Renders every control word field, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x87 FPU Control Word:")?;
        writeln!(
            f,
            "\tInfinity Control: {}",
            self.field(Self::INFINITY_CONTROL)
        )?;
        writeln!(
            f,
            "\tRounding Control: {}",
            self.field(Self::ROUNDING_CONTROL)
        )?;
        writeln!(
            f,
            "\tPrecision Control: {}",
            self.field(Self::PRECISION_CONTROL)
        )?;
        write!(
            f,
            "\tException Masks: IMP[{}] UF[{}] OF[{}] DZ[{}] DNML[{}] INV[{}]",
            self.field(Self::IMPRECISE_MASK),
            self.field(Self::UNDERFLOW_MASK),
            self.field(Self::OVERFLOW_MASK),
            self.field(Self::DIVIDE_BY_ZERO_MASK),
            self.field(Self::DENORMAL_MASK),
            self.field(Self::INVALID_MASK),
        )
    }
}
