//! x87 floating-point environment control library.
//!
//! This crate implements a POSIX `ieeefp.h`-style control layer over the x87
//! FPU control and status words. It provides:
//! 1. **Words:** Bit-field access to the 16-bit control and status registers.
//! 2. **Port:** The raw register access contract (`FNSTCW`/`FLDCW`/`FNSTSW`/
//!    `FNCLEX`/`FXAM`), with a real inline-assembly implementation on x86 and
//!    a software register model for tests and non-x86 hosts.
//! 3. **Environment:** Rounding direction, precision control, exception
//!    masks, sticky exception flags, and value classification.
//!
//! The central subtlety is that loading the control word (and clearing the
//! exception flags) zeroes the status word's exception bits as a hardware
//! side effect. [`env::FpEnv`] therefore folds the live flags into a
//! software accumulator before every control-word write, so exception
//! history survives rounding, precision, and mask changes.
//!
//! All state lives in an explicit [`env::FpEnv`] context; there are no
//! process-wide statics. The physical x87 registers are per-thread on every
//! mainstream threading model, so one context per thread gives coherent
//! semantics; sharing a context across threads is not supported.

/// Typed error values for register corruption and caller misuse.
pub mod error;
/// Floating-point environment context (rounding, precision, masks, sticky
/// flags, classification).
pub mod env;
/// Raw register access: the port trait, the x87 implementation, and the
/// software register model.
pub mod port;
/// Control and status word types and bit-field operations.
pub mod word;

/// Environment context; construct with [`env::FpEnv::new`] over a port.
pub use crate::env::FpEnv;
/// Floating-point value categories returned by classification.
pub use crate::env::class::FpClass;
/// Combinable exception flag set (invalid, denormal, divide-by-zero,
/// overflow, underflow, imprecise).
pub use crate::env::exceptions::Exceptions;
/// Intel precision control setting (single/double/extended working precision).
pub use crate::env::precision::PrecisionMode;
/// IEEE 754 rounding direction.
pub use crate::env::rounding::RoundingMode;
/// Error type distinguishing hardware corruption from caller misuse.
pub use crate::error::FpError;
/// Raw register access contract with documented clearing side effects.
pub use crate::port::RegisterPort;
