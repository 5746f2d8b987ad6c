//! Real x87 register access via inline assembly.
//!
//! Each [`RegisterPort`] primitive maps to a single x87 instruction. The
//! no-wait forms (`FNSTCW`, `FNSTSW`, `FNCLEX`) are used throughout so no
//! pending unmasked exception is serviced as a side effect of inspection.
//!
//! The x87 register file is per-thread under every mainstream threading
//! model, so an [`X87Port`] manipulates only the calling thread's FPU state.

use core::arch::asm;

use super::RegisterPort;
use crate::word::control::ControlWord;
use crate::word::status::StatusWord;

/// Register port backed by the calling thread's physical x87 FPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct X87Port;

impl X87Port {
    /// Creates a port over the calling thread's FPU.
    pub const fn new() -> Self {
        Self
    }
}

impl RegisterPort for X87Port {
    fn read_control(&mut self) -> ControlWord {
        let mut bits: u16 = 0;
        // SAFETY: FNSTCW stores the 16-bit control word to the given memory
        // operand and has no other architectural effects.
        unsafe {
            asm!(
                "fnstcw [{ptr}]",
                ptr = in(reg) &raw mut bits,
                options(nostack, preserves_flags),
            );
        }
        ControlWord::new(bits)
    }

    fn load_control(&mut self, word: ControlWord) {
        let bits = word.bits();
        // SAFETY: FLDCW loads the control word from the given memory
        // operand. Its documented side effect of clearing the status word's
        // exception flags is part of the RegisterPort contract.
        unsafe {
            asm!(
                "fldcw [{ptr}]",
                ptr = in(reg) &raw const bits,
                options(nostack, readonly, preserves_flags),
            );
        }
    }

    fn read_status(&mut self) -> StatusWord {
        let bits: u16;
        // SAFETY: FNSTSW AX stores the status word into AX with no other
        // architectural effects; the register is declared as an output.
        unsafe {
            asm!(
                "fnstsw ax",
                out("ax") bits,
                options(nomem, nostack, preserves_flags),
            );
        }
        StatusWord::new(bits)
    }

    fn clear_exceptions(&mut self) {
        // SAFETY: FNCLEX clears the exception flags, the error summary, the
        // stack fault bit, and the busy bit. This clearing is exactly the
        // contract of this method.
        unsafe {
            asm!("fnclex", options(nomem, nostack, preserves_flags));
        }
    }

    fn examine(&mut self, value: f64) -> StatusWord {
        let bits: u16;
        // SAFETY: FLD pushes the operand onto the x87 stack, FXAM sets the
        // condition codes from ST(0), FNSTSW captures them, and FSTP pops
        // the operand again, leaving the stack depth unchanged.
        unsafe {
            asm!(
                "fld qword ptr [{ptr}]",
                "fxam",
                "fnstsw ax",
                "fstp st(0)",
                ptr = in(reg) &raw const value,
                out("ax") bits,
                options(nostack),
            );
        }
        StatusWord::new(bits)
    }
}
