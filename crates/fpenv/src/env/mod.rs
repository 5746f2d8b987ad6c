//! The floating-point environment context.
//!
//! This module implements the POSIX `ieeefp.h`-style operation surface over
//! a [`RegisterPort`]. It provides:
//! 1. **Rounding:** [`FpEnv::rounding`] / [`FpEnv::set_rounding`].
//! 2. **Precision:** [`FpEnv::precision`] / [`FpEnv::set_precision`]
//!    (Intel-specific).
//! 3. **Sticky flags:** [`FpEnv::sticky`] / [`FpEnv::set_sticky`].
//! 4. **Trap masks:** [`FpEnv::mask`] / [`FpEnv::set_mask`].
//! 5. **Classification:** [`FpEnv::classify`] / [`FpEnv::is_finite`].
//!
//! # Sticky flag emulation
//!
//! Loading the control word clears the status word's exception flags as a
//! hardware side effect, so the flags alone cannot serve as sticky state.
//! The context keeps a software accumulator and folds the live hardware
//! flags into it before every control-word write. Losing that fold would
//! silently discard exception history; every mutating operation here
//! sequences read-fold-then-write explicitly.
//!
//! # Threading
//!
//! An `FpEnv` owns its port and accumulator; nothing is process-global. The
//! physical x87 registers are per-thread, so use one context per thread and
//! do not share one across threads.

/// Value categories and condition-code decoding.
pub mod class;
/// Exception flag sets.
pub mod exceptions;
/// Precision control modes.
pub mod precision;
/// Rounding direction modes.
pub mod rounding;
/// Serializable environment snapshot.
pub mod snapshot;

use tracing::trace;

use self::class::FpClass;
use self::exceptions::Exceptions;
use self::precision::PrecisionMode;
use self::rounding::RoundingMode;
use self::snapshot::EnvSnapshot;
use crate::error::FpError;
use crate::port::RegisterPort;
use crate::word;
use crate::word::control::ControlWord;
use crate::word::status::StatusWord;

/// Floating-point environment over a register port.
///
/// Holds the port and the sticky-flag accumulator. The accumulator starts
/// empty and is never reset except through [`FpEnv::set_sticky`].
#[derive(Debug)]
pub struct FpEnv<P: RegisterPort> {
    port: P,
    sticky: Exceptions,
}

impl<P: RegisterPort> FpEnv<P> {
    /// Creates an environment over a port, with an empty accumulator.
    pub const fn new(port: P) -> Self {
        Self {
            port,
            sticky: Exceptions::NONE,
        }
    }

    /// Returns a mutable reference to the underlying port.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consumes the environment and returns the port.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Returns the current rounding direction from the control word.
    ///
    /// # Errors
    ///
    /// [`FpError::CorruptField`] if the field decodes to no legal direction.
    /// The field is two bits wide and all four codes are legal, so this can
    /// only signal a malfunctioning port.
    pub fn rounding(&mut self) -> Result<RoundingMode, FpError> {
        let bits = self.port.read_control().field(ControlWord::ROUNDING_CONTROL);
        RoundingMode::from_bits(bits).ok_or(FpError::CorruptField {
            register: "control",
            field: "rounding control",
            bits,
        })
    }

    /// Sets the rounding direction, returning the previous one.
    ///
    /// Folds the live exception flags into the sticky accumulator before
    /// loading the new control word, because the load clears them.
    ///
    /// # Arguments
    ///
    /// * `mode` - The new rounding direction.
    ///
    /// # Errors
    ///
    /// [`FpError::CorruptField`] if the previous field value decodes to no
    /// legal direction (malfunctioning port only).
    pub fn set_rounding(&mut self, mode: RoundingMode) -> Result<RoundingMode, FpError> {
        self.fold_live_flags();

        let control = self.port.read_control();
        let bits = control.field(ControlWord::ROUNDING_CONTROL);
        let previous = RoundingMode::from_bits(bits).ok_or(FpError::CorruptField {
            register: "control",
            field: "rounding control",
            bits,
        })?;

        trace!(%previous, new = %mode, "set rounding direction");
        self.port
            .load_control(control.with_field(ControlWord::ROUNDING_CONTROL, mode.bits()));
        Ok(previous)
    }

    /// Returns the current precision control setting from the control word.
    ///
    /// The reserved encoding is a legal observation and decodes to
    /// [`PrecisionMode::Reserved`].
    ///
    /// # Errors
    ///
    /// [`FpError::CorruptField`] if the field decodes to no legal setting
    /// (malfunctioning port only).
    pub fn precision(&mut self) -> Result<PrecisionMode, FpError> {
        let bits = self
            .port
            .read_control()
            .field(ControlWord::PRECISION_CONTROL);
        PrecisionMode::from_bits(bits).ok_or(FpError::CorruptField {
            register: "control",
            field: "precision control",
            bits,
        })
    }

    /// Sets the precision control, returning the previous setting.
    ///
    /// Folds the live exception flags into the sticky accumulator before
    /// loading the new control word, because the load clears them.
    ///
    /// # Arguments
    ///
    /// * `mode` - The new working precision. Must not be `Reserved`.
    ///
    /// # Errors
    ///
    /// [`FpError::ReservedPrecision`] when called with the reserved setting
    /// (caller misuse; the hardware is left untouched), or
    /// [`FpError::CorruptField`] if the previous field value decodes to no
    /// legal setting.
    pub fn set_precision(&mut self, mode: PrecisionMode) -> Result<PrecisionMode, FpError> {
        if mode == PrecisionMode::Reserved {
            return Err(FpError::ReservedPrecision);
        }

        self.fold_live_flags();

        let control = self.port.read_control();
        let bits = control.field(ControlWord::PRECISION_CONTROL);
        let previous = PrecisionMode::from_bits(bits).ok_or(FpError::CorruptField {
            register: "control",
            field: "precision control",
            bits,
        })?;

        trace!(%previous, new = %mode, "set precision control");
        self.port
            .load_control(control.with_field(ControlWord::PRECISION_CONTROL, mode.bits()));
        Ok(previous)
    }

    /// Returns the accumulated sticky exception flags.
    ///
    /// The live hardware flags are folded into the accumulator (without
    /// clearing them) and the updated accumulator is returned. Repeated
    /// calls with no intervening floating-point operation return the same
    /// set.
    pub fn sticky(&mut self) -> Exceptions {
        self.fold_live_flags();
        self.sticky
    }

    /// Replaces the sticky exception flags, returning the previous set.
    ///
    /// The previous set is the accumulator ORed with the live hardware
    /// flags. The new value is realigned against the exception-flag field
    /// and stored as the new accumulator, then the hardware flags are
    /// cleared. This is the one register mutation that leaves the control
    /// word alone.
    ///
    /// # Arguments
    ///
    /// * `value` - The new sticky flag set.
    pub fn set_sticky(&mut self, value: Exceptions) -> Exceptions {
        let live = Exceptions::from_bits(self.port.read_status().exception_flags());
        let previous = self.sticky | live;

        let realigned = word::extract(
            word::insert(0, StatusWord::EXCEPTION_FLAGS, value.bits()),
            StatusWord::EXCEPTION_FLAGS,
        );
        self.sticky = Exceptions::from_bits(realigned);

        trace!(%previous, new = %self.sticky, "set sticky flags, clearing hardware");
        self.port.clear_exceptions();
        previous
    }

    /// Returns the currently enabled exceptions.
    ///
    /// The raw mask field uses "bit set = exception suppressed"; the
    /// returned set uses the POSIX-facing "member = exception enabled", so
    /// the field is XORed with the full six-bit mask on the way out.
    pub fn mask(&mut self) -> Exceptions {
        let raw = self
            .port
            .read_control()
            .field(ControlWord::EXCEPTION_MASKS);
        Exceptions::from_bits(raw) ^ Exceptions::ALL
    }

    /// Replaces the set of enabled exceptions, returning the previous set.
    ///
    /// Applies the same polarity inversion as [`FpEnv::mask`] on the way
    /// in, and folds the live exception flags into the sticky accumulator
    /// before loading the new control word, because the load clears them.
    ///
    /// # Arguments
    ///
    /// * `value` - The exceptions to enable; all others are suppressed.
    pub fn set_mask(&mut self, value: Exceptions) -> Exceptions {
        let control = self.port.read_control();
        let previous = Exceptions::from_bits(control.field(ControlWord::EXCEPTION_MASKS))
            ^ Exceptions::ALL;

        self.fold_live_flags();

        trace!(%previous, new = %value, "set exception mask");
        self.port.load_control(control.with_field(
            ControlWord::EXCEPTION_MASKS,
            (value ^ Exceptions::ALL).bits(),
        ));
        previous
    }

    /// Classifies a double-precision value into its IEEE 754 category.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to classify.
    ///
    /// # Errors
    ///
    /// [`FpError::EmptyOperand`] or [`FpError::CorruptConditionCode`] if the
    /// port reports a condition-code combination no conforming examine can
    /// produce.
    pub fn classify(&mut self, value: f64) -> Result<FpClass, FpError> {
        let status = self.port.examine(value);
        class::decode(status, value)
    }

    /// Returns true iff `value` classifies as finite (normal, denormal, or
    /// zero of either sign).
    ///
    /// # Arguments
    ///
    /// * `value` - The value to test.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`FpEnv::classify`].
    pub fn is_finite(&mut self, value: f64) -> Result<bool, FpError> {
        Ok(self.classify(value)?.is_finite())
    }

    /// Captures a snapshot of both hardware words and their decoded fields.
    ///
    /// Folds the live flags into the accumulator (as [`FpEnv::sticky`]
    /// does) so the reported sticky set is current.
    ///
    /// # Errors
    ///
    /// [`FpError::CorruptField`] if either 2-bit control field decodes to no
    /// legal value (malfunctioning port only).
    pub fn snapshot(&mut self) -> Result<EnvSnapshot, FpError> {
        let control = self.port.read_control();
        let status = self.port.read_status();
        Ok(EnvSnapshot {
            control,
            status,
            rounding: self.rounding()?,
            precision: self.precision()?,
            mask: self.mask(),
            sticky: self.sticky(),
        })
    }

    /// Folds the live hardware exception flags into the sticky accumulator.
    ///
    /// Must run before every control-word load: the load zeroes the flags
    /// and this fold is what keeps them logically sticky.
    fn fold_live_flags(&mut self) {
        let live = Exceptions::from_bits(self.port.read_status().exception_flags());
        if !live.is_empty() {
            trace!(%live, "folding live exception flags into sticky accumulator");
        }
        self.sticky |= live;
    }
}
