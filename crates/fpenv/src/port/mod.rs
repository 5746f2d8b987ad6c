//! Raw register access to the x87 FPU.
//!
//! This module defines the hardware access contract and its implementations:
//! 1. **Contract:** [`RegisterPort`], five primitive operations whose
//!    documented side effects (flag clearing on control-word load and on
//!    explicit clear) are part of the interface.
//! 2. **Hardware:** [`x87::X87Port`], inline assembly against the real FPU
//!    (x86/x86_64 only).
//! 3. **Model:** [`soft::SoftPort`], an in-memory register pair implementing
//!    the same contract including the side effects, for tests and non-x86
//!    hosts.

/// Software register model.
pub mod soft;
/// Real x87 hardware port (inline assembly).
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x87;

use crate::word::control::ControlWord;
use crate::word::status::StatusWord;

/// Primitive register operations on an x87-class FPU.
///
/// Implementations must honor the clearing side effects exactly as
/// documented: the environment layer sequences read-fold-then-write around
/// them and silently loses exception history if an implementation deviates.
pub trait RegisterPort {
    /// Reads the control word (`FNSTCW`).
    fn read_control(&mut self) -> ControlWord;

    /// Loads a new control word (`FLDCW`).
    ///
    /// **Side effect:** zeroes the status word's exception flags. Callers
    /// must save any live flags they care about before invoking this.
    fn load_control(&mut self, word: ControlWord);

    /// Reads the status word (`FNSTSW`). No side effects.
    fn read_status(&mut self) -> StatusWord;

    /// Clears the status word's exception flags (`FNCLEX`).
    ///
    /// This is the only way to zero the flags without also touching the
    /// control word.
    fn clear_exceptions(&mut self);

    /// Examines a value (`FXAM`) and returns the resulting status word with
    /// its condition codes describing the value's category.
    ///
    /// # Arguments
    ///
    /// * `value` - The double-precision value to examine.
    fn examine(&mut self, value: f64) -> StatusWord;
}
