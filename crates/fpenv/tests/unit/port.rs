//! Port contract tests.
//!
//! Three layers: the software register model's side effects, mock-based
//! verification that the environment sequences read-fold-then-write, and a
//! handful of tests against the real FPU on x86 hosts.

use mockall::{Sequence, mock};

use fpenv_core::word::control::ControlWord;
use fpenv_core::word::status::StatusWord;
use fpenv_core::{Exceptions, FpClass, FpEnv, FpError, RegisterPort, RoundingMode};

use crate::common;

mock! {
    Port {}
    impl RegisterPort for Port {
        fn read_control(&mut self) -> ControlWord;
        fn load_control(&mut self, word: ControlWord);
        fn read_status(&mut self) -> StatusWord;
        fn clear_exceptions(&mut self);
        fn examine(&mut self, value: f64) -> StatusWord;
    }
}

// ── Software register model ────────────────────────────────────────

#[test]
fn test_soft_load_control_clears_exception_flags() {
    let mut env = common::env();
    env.port_mut().raise(Exceptions::ALL);
    env.port_mut().load_control(ControlWord::RESET);
    assert_eq!(env.port_mut().read_status().exception_flags(), 0);
}

#[test]
fn test_soft_clear_exceptions_clears_only_flags() {
    let mut env = common::env();
    env.port_mut().raise(Exceptions::ALL);
    let _ = env.port_mut().examine(-1.0); // sets condition codes too
    env.port_mut().clear_exceptions();

    let status = env.port_mut().read_status();
    assert_eq!(status.exception_flags(), 0);
    // Condition codes survive the clear.
    assert_ne!(status.bits() & StatusWord::CONDITION_CODES, 0);
}

#[test]
fn test_soft_examine_preserves_exception_flags() {
    let mut env = common::env();
    env.port_mut().raise(Exceptions::IMPRECISE);
    let status = env.port_mut().examine(1.0);
    assert_eq!(
        Exceptions::from_bits(status.exception_flags()),
        Exceptions::IMPRECISE
    );
}

#[test]
fn test_soft_examine_sets_sign_condition_code() {
    let mut env = common::env();
    let negative = env.port_mut().examine(-1.0);
    assert_ne!(negative.bits() & StatusWord::C1, 0);
    let positive = env.port_mut().examine(1.0);
    assert_eq!(positive.bits() & StatusWord::C1, 0);
}

// ── Mock-verified ordering: read-fold-then-write ───────────────────

#[test]
fn test_set_rounding_reads_status_before_loading_control() {
    let mut port = MockPort::new();
    let mut seq = Sequence::new();

    // The live INVALID flag must be read (and folded) before the load
    // clears it.
    let _ = port
        .expect_read_status()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| StatusWord::new(StatusWord::INVALID));
    let _ = port
        .expect_read_control()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| ControlWord::RESET);
    let _ = port
        .expect_load_control()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|w| w.field(ControlWord::ROUNDING_CONTROL) == RoundingMode::TowardZero.bits())
        .return_const(());
    // The later sticky query re-reads the (now cleared) hardware flags.
    let _ = port
        .expect_read_status()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| StatusWord::new(0));

    let mut env = FpEnv::new(port);
    assert_eq!(
        env.set_rounding(RoundingMode::TowardZero).unwrap(),
        RoundingMode::Nearest
    );
    assert!(env.sticky().contains(Exceptions::INVALID));
}

#[test]
fn test_set_mask_reads_status_before_loading_control() {
    let mut port = MockPort::new();
    let mut seq = Sequence::new();

    let _ = port
        .expect_read_control()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| ControlWord::RESET);
    let _ = port
        .expect_read_status()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| StatusWord::new(StatusWord::UNDERFLOW));
    let _ = port
        .expect_load_control()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|w| {
            // Enabling OVERFLOW means clearing exactly its suppress bit.
            w.field(ControlWord::EXCEPTION_MASKS) == (0x3F ^ 0x08)
        })
        .return_const(());
    let _ = port
        .expect_read_status()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| StatusWord::new(0));

    let mut env = FpEnv::new(port);
    assert_eq!(env.set_mask(Exceptions::OVERFLOW), Exceptions::NONE);
    assert!(env.sticky().contains(Exceptions::UNDERFLOW));
}

#[test]
fn test_set_sticky_clears_through_fnclex_not_fldcw() {
    let mut port = MockPort::new();

    let _ = port
        .expect_read_status()
        .times(1)
        .returning(|| StatusWord::new(StatusWord::DIVIDE_BY_ZERO));
    let _ = port.expect_clear_exceptions().times(1).return_const(());
    // No load_control expectation: touching the control word here would be
    // a contract violation and fails the test.

    let mut env = FpEnv::new(port);
    let previous = env.set_sticky(Exceptions::NONE);
    assert!(previous.contains(Exceptions::DIVIDE_BY_ZERO));
}

// ── Decode errors from a non-conforming port ───────────────────────

#[test]
fn test_classify_reports_empty_operand_register() {
    let mut port = MockPort::new();
    let _ = port
        .expect_examine()
        .times(1)
        .returning(|_| StatusWord::new(StatusWord::C3 | StatusWord::C0));

    let mut env = FpEnv::new(port);
    assert_eq!(env.classify(1.0).unwrap_err(), FpError::EmptyOperand);
}

#[test]
fn test_classify_reports_undefined_condition_codes() {
    let mut port = MockPort::new();
    // C3|C2|C0 is the one combination with no defined meaning.
    let bits = StatusWord::C3 | StatusWord::C2 | StatusWord::C0;
    let _ = port
        .expect_examine()
        .times(1)
        .returning(move |_| StatusWord::new(bits));

    let mut env = FpEnv::new(port);
    assert_eq!(
        env.classify(1.0).unwrap_err(),
        FpError::CorruptConditionCode(bits)
    );
}

#[test]
fn test_classify_decodes_unsupported_encoding() {
    let mut port = MockPort::new();
    let _ = port
        .expect_examine()
        .times(1)
        .returning(|_| StatusWord::new(0));

    let mut env = FpEnv::new(port);
    assert_eq!(env.classify(1.0).unwrap(), FpClass::Unsupported);
}

// ── Real hardware (x86 only) ───────────────────────────────────────

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod hardware {
    use fpenv_core::port::x87::X87Port;
    use fpenv_core::{FpClass, FpEnv, RoundingMode};

    #[test]
    fn test_real_fpu_rounding_round_trips() {
        let mut env = FpEnv::new(X87Port::new());
        let initial = env.rounding().unwrap();

        let previous = env.set_rounding(RoundingMode::TowardZero).unwrap();
        assert_eq!(previous, initial);
        assert_eq!(env.rounding().unwrap(), RoundingMode::TowardZero);

        // Restore: test threads share nothing, but leave the FPU as found.
        let _ = env.set_rounding(initial).unwrap();
    }

    #[test]
    fn test_real_fxam_classifies_basic_values() {
        let mut env = FpEnv::new(X87Port::new());
        assert_eq!(env.classify(0.0).unwrap(), FpClass::PosZero);
        assert_eq!(env.classify(-0.0).unwrap(), FpClass::NegZero);
        assert_eq!(env.classify(1.0).unwrap(), FpClass::PosNormal);
        assert_eq!(env.classify(f64::NEG_INFINITY).unwrap(), FpClass::NegInfinity);
        assert_eq!(env.classify(f64::NAN).unwrap(), FpClass::QuietNan);
    }
}
