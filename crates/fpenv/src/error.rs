//! Error definitions for floating-point environment operations.
//!
//! Two kinds of failure exist and the distinction matters for diagnostics:
//! 1. **Invariant violations:** A hardware register holds a code outside the
//!    legal enumeration for its field, or `FXAM` reported an empty operand
//!    register. These signal platform corruption and cannot occur through
//!    any correct use of this crate.
//! 2. **Caller misuse:** A setter was invoked with a value that is legal to
//!    observe but illegal to write (the reserved precision control setting).
//!
//! Both surface as typed [`FpError`] values so an embedding application can
//! choose its own termination policy; [`FpError::kind`] preserves the
//! two-way split.

use thiserror::Error;

/// Errors raised by floating-point environment operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FpError {
    /// A register field holds a bit pattern outside its legal enumeration.
    ///
    /// Signals hardware or platform corruption, never caller error.
    #[error("{register} word field '{field}' holds invalid code {bits:#06x}")]
    CorruptField {
        /// Which hardware word was read (`"control"` or `"status"`).
        register: &'static str,
        /// The field within the word.
        field: &'static str,
        /// The out-of-range code that was extracted.
        bits: u16,
    },

    /// `FXAM` reported a condition-code combination with no defined meaning.
    #[error("invalid condition code flag status: {0:#06x}")]
    CorruptConditionCode(u16),

    /// `FXAM` examined an empty operand register.
    ///
    /// The classify operation always loads its operand first, so this is
    /// unreachable in correct use.
    #[error("classify examined an empty operand register")]
    EmptyOperand,

    /// A precision-control write was attempted with the reserved setting.
    ///
    /// `PrecisionMode::Reserved` is legal only as an observed value.
    #[error("precision control set to the reserved setting")]
    ReservedPrecision,
}

/// The two failure categories, kept distinct for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// "Can't happen": hardware state outside its legal enumeration.
    InvariantViolation,
    /// A programming error in the caller.
    CallerMisuse,
}

impl FpError {
    /// Returns which failure category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CorruptField { .. } | Self::CorruptConditionCode(_) | Self::EmptyOperand => {
                ErrorKind::InvariantViolation
            }
            Self::ReservedPrecision => ErrorKind::CallerMisuse,
        }
    }
}
