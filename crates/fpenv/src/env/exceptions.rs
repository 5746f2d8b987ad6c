//! Floating-point exception flag sets.
//!
//! The six x87 exceptions occupy the low six bits of both hardware words:
//!
//! | Bit | Flag | Description        |
//! |-----|------|--------------------|
//! |  5  | IMP  | Imprecise (inexact)|
//! |  4  | UFL  | Underflow          |
//! |  3  | OFL  | Overflow           |
//! |  2  | DZ   | Divide by zero     |
//! |  1  | DNML | Denormal operand   |
//! |  0  | INV  | Invalid operation  |
//!
//! [`Exceptions`] is the POSIX-facing combinable set used for both sticky
//! flags and trap masks. In mask position a set member means "exception
//! enabled"; the inversion against the hardware's "set = suppressed"
//! convention lives in the environment layer.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, BitXor};

use serde::Serialize;

/// A combinable set of floating-point exception kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Exceptions(u16);

impl Exceptions {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// Invalid operation.
    pub const INVALID: Self = Self(0x0001);
    /// Denormal operand.
    pub const DENORMAL: Self = Self(0x0002);
    /// Divide by zero.
    pub const DIVIDE_BY_ZERO: Self = Self(0x0004);
    /// Overflow.
    pub const OVERFLOW: Self = Self(0x0008);
    /// Underflow.
    pub const UNDERFLOW: Self = Self(0x0010);
    /// Imprecise (inexact) result.
    pub const IMPRECISE: Self = Self(0x0020);
    /// All six exception kinds.
    pub const ALL: Self = Self(0x003F);

    /// Builds a set from raw bits, discarding anything outside the six
    /// exception positions.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Returns the raw 6-bit value.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Exceptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Exceptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Exceptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for Exceptions {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl fmt::Display for Exceptions {
    /// Lists the set members separated by `|`, or `none` for the empty set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names = [
            (Self::INVALID, "invalid"),
            (Self::DENORMAL, "denormal"),
            (Self::DIVIDE_BY_ZERO, "divide-by-zero"),
            (Self::OVERFLOW, "overflow"),
            (Self::UNDERFLOW, "underflow"),
            (Self::IMPRECISE, "imprecise"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}
