//! The x87 status word.
//!
//! Layout (Intel SDM Vol. 1 §8.1.3):
//!
//! | Bits  | Field          | Mask     |
//! |-------|----------------|----------|
//! | 15    | FPU busy       | `0x8000` |
//! | 14    | Condition C3   | `0x4000` |
//! | 13-11 | Top of stack   | `0x3800` |
//! | 10    | Condition C2   | `0x0400` |
//! | 9     | Condition C1   | `0x0200` |
//! | 8     | Condition C0   | `0x0100` |
//! | 7     | Error summary  | `0x0080` |
//! | 6     | Stack fault    | `0x0040` |
//! | 5     | Imprecise flag | `0x0020` |
//! | 4     | Underflow flag | `0x0010` |
//! | 3     | Overflow flag  | `0x0008` |
//! | 2     | Divide-by-zero flag | `0x0004` |
//! | 1     | Denormal flag  | `0x0002` |
//! | 0     | Invalid flag   | `0x0001` |
//!
//! Software never writes this word directly; the only mutation paths are the
//! flag-clearing side effects of `FLDCW` and `FNCLEX`, and the condition
//! codes set by `FXAM`.

use core::fmt;

use serde::Serialize;

use super::extract;

/// The 16-bit x87 FPU status word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusWord(u16);

impl StatusWord {
    /// FPU busy bit.
    pub const BUSY: u16 = 0x8000;
    /// Condition code bit C3 (most significant).
    pub const C3: u16 = 0x4000;
    /// Top-of-stack pointer field (3 bits).
    pub const TOP_OF_STACK: u16 = 0x3800;
    /// Condition code bit C2.
    pub const C2: u16 = 0x0400;
    /// Condition code bit C1 (sign of the examined operand).
    pub const C1: u16 = 0x0200;
    /// Condition code bit C0 (least significant).
    pub const C0: u16 = 0x0100;
    /// Error summary status bit.
    pub const ERROR_SUMMARY: u16 = 0x0080;
    /// Stack fault bit.
    pub const STACK_FAULT: u16 = 0x0040;
    /// Imprecise (precision) exception flag.
    pub const IMPRECISE: u16 = 0x0020;
    /// Underflow exception flag.
    pub const UNDERFLOW: u16 = 0x0010;
    /// Overflow exception flag.
    pub const OVERFLOW: u16 = 0x0008;
    /// Divide-by-zero exception flag.
    pub const DIVIDE_BY_ZERO: u16 = 0x0004;
    /// Denormal operand exception flag.
    pub const DENORMAL: u16 = 0x0002;
    /// Invalid operation exception flag.
    pub const INVALID: u16 = 0x0001;
    /// All four condition code bits.
    pub const CONDITION_CODES: u16 = 0x4700;
    /// All six exception flags.
    pub const EXCEPTION_FLAGS: u16 = 0x003F;

    /// Wraps a raw 16-bit status word.
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

    /// Returns the six exception flag bits, right-aligned.
    pub const fn exception_flags(self) -> u16 {
        extract(self.0, Self::EXCEPTION_FLAGS)
    }
}

impl fmt::Display for StatusWord {
    /// Renders every status word field, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x87 FPU Status Word:")?;
        writeln!(f, "\tFPU Busy: {}", self.field(Self::BUSY))?;
        writeln!(
            f,
            "\tCondition Code: C3[{}] C2[{}] C1[{}] C0[{}]",
            self.field(Self::C3),
            self.field(Self::C2),
            self.field(Self::C1),
            self.field(Self::C0),
        )?;
        writeln!(
            f,
            "\tTop of Stack Pointer: {}",
            self.field(Self::TOP_OF_STACK)
        )?;
        writeln!(
            f,
            "\tError Summary Status: {}",
            self.field(Self::ERROR_SUMMARY)
        )?;
        writeln!(f, "\tStack Fault: {}", self.field(Self::STACK_FAULT))?;
        write!(
            f,
            "\tException Flags: IMP[{}] UF[{}] OF[{}] DZ[{}] DNML[{}] INV[{}]",
            self.field(Self::IMPRECISE),
            self.field(Self::UNDERFLOW),
            self.field(Self::OVERFLOW),
            self.field(Self::DIVIDE_BY_ZERO),
            self.field(Self::DENORMAL),
            self.field(Self::INVALID),
        )
    }
}
