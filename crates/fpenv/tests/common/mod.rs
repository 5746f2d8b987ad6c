//! Shared helpers for the environment tests.

use fpenv_core::FpEnv;
use fpenv_core::port::soft::SoftPort;

/// Builds an environment over a fresh software register model in its
/// `FNINIT` reset state.
pub fn env() -> FpEnv<SoftPort> {
    FpEnv::new(SoftPort::new())
}
