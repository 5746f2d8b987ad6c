//! Serializable snapshot of the floating-point environment.
//!
//! A snapshot captures both raw hardware words together with their decoded
//! fields at one point in time, for diagnostics and for the CLI's JSON dump.

use serde::Serialize;

use super::exceptions::Exceptions;
use super::precision::PrecisionMode;
use super::rounding::RoundingMode;
use crate::word::control::ControlWord;
use crate::word::status::StatusWord;

/// Point-in-time view of the environment: raw words plus decoded fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EnvSnapshot {
    /// Raw control word.
    pub control: ControlWord,
    /// Raw status word.
    pub status: StatusWord,
    /// Decoded rounding direction.
    pub rounding: RoundingMode,
    /// Decoded precision control setting.
    pub precision: PrecisionMode,
    /// Currently enabled exceptions (POSIX polarity, not the raw mask bits).
    pub mask: Exceptions,
    /// Accumulated sticky exception flags, live hardware flags included.
    pub sticky: Exceptions,
}
