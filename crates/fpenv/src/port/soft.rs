//! Software model of the x87 register pair.
//!
//! [`SoftPort`] holds a control and status word in memory and implements the
//! [`RegisterPort`] contract over them, including the flag-clearing side
//! effects of `FLDCW` and `FNCLEX` and the condition-code results of `FXAM`.
//! It models the registers only: it performs no floating-point arithmetic
//! and never raises flags on its own. Tests stand in for hardware operations
//! with [`SoftPort::raise`].

use super::RegisterPort;
use crate::env::exceptions::Exceptions;
use crate::word::control::ControlWord;
use crate::word::status::StatusWord;

/// In-memory register pair honoring the `RegisterPort` side-effect contract.
///
/// Starts in the `FNINIT` reset state: control word `0x037F`, status word
/// zero.
#[derive(Clone, Copy, Debug)]
pub struct SoftPort {
    control: ControlWord,
    status: StatusWord,
}

impl SoftPort {
    /// Creates a register model in the `FNINIT` reset state.
    pub const fn new() -> Self {
        Self {
            control: ControlWord::RESET,
            status: StatusWord::new(0),
        }
    }

    /// Sets exception flags in the modeled status word, standing in for a
    /// floating-point operation that raised them.
    ///
    /// # Arguments
    ///
    /// * `flags` - The exception flags to raise (ORed into the status word).
    pub fn raise(&mut self, flags: Exceptions) {
        self.status = StatusWord::new(self.status.bits() | flags.bits());
    }
}

impl Default for SoftPort {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterPort for SoftPort {
    fn read_control(&mut self) -> ControlWord {
        self.control
    }

    fn load_control(&mut self, word: ControlWord) {
        self.control = word;
        // FLDCW side effect: the status word's exception flags are zeroed.
        self.status = StatusWord::new(self.status.bits() & !StatusWord::EXCEPTION_FLAGS);
    }

    fn read_status(&mut self) -> StatusWord {
        self.status
    }

    fn clear_exceptions(&mut self) {
        self.status = StatusWord::new(self.status.bits() & !StatusWord::EXCEPTION_FLAGS);
    }

    fn examine(&mut self, value: f64) -> StatusWord {
        let bits = value.to_bits();
        let exponent = (bits >> 52) & 0x7FF;
        let significand = bits & 0x000F_FFFF_FFFF_FFFF;

        // FXAM condition codes (Intel SDM Vol. 2A): C3/C2/C0 select the
        // category, C1 mirrors the sign bit. Every f64 bit pattern is a
        // valid double-extended operand after FLD, so the unsupported and
        // empty encodings cannot arise from this model.
        let mut cc = match (exponent, significand) {
            (0, 0) => StatusWord::C3,
            (0, _) => StatusWord::C3 | StatusWord::C2,
            (0x7FF, 0) => StatusWord::C2 | StatusWord::C0,
            (0x7FF, _) => StatusWord::C0,
            _ => StatusWord::C2,
        };
        if bits >> 63 == 1 {
            cc |= StatusWord::C1;
        }

        self.status =
            StatusWord::new((self.status.bits() & !StatusWord::CONDITION_CODES) | cc);
        self.status
    }
}
