//! Rounding direction tests.
//!
//! These verify the round-trip property for all four directions, the
//! returned-previous contract, and the reset default.

use rstest::rstest;

use fpenv_core::{RegisterPort, RoundingMode};

use crate::common;

#[test]
fn test_reset_default_is_nearest() {
    let mut env = common::env();
    assert_eq!(env.rounding().unwrap(), RoundingMode::Nearest);
}

#[rstest]
#[case(RoundingMode::Nearest)]
#[case(RoundingMode::Down)]
#[case(RoundingMode::Up)]
#[case(RoundingMode::TowardZero)]
fn test_rounding_round_trips(#[case] mode: RoundingMode) {
    let mut env = common::env();
    let _ = env.set_rounding(mode).unwrap();
    assert_eq!(env.rounding().unwrap(), mode);
}

#[test]
fn test_set_rounding_returns_previous() {
    let mut env = common::env();
    assert_eq!(
        env.set_rounding(RoundingMode::Up).unwrap(),
        RoundingMode::Nearest
    );
    assert_eq!(
        env.set_rounding(RoundingMode::Down).unwrap(),
        RoundingMode::Up
    );
    assert_eq!(
        env.set_rounding(RoundingMode::TowardZero).unwrap(),
        RoundingMode::Down
    );
}

#[test]
fn test_set_rounding_leaves_other_fields_alone() {
    use fpenv_core::word::control::ControlWord;

    let mut env = common::env();
    let _ = env.set_rounding(RoundingMode::TowardZero).unwrap();
    let cw = env.port_mut().read_control();
    assert_eq!(cw.field(ControlWord::PRECISION_CONTROL), 0b11);
    assert_eq!(cw.field(ControlWord::EXCEPTION_MASKS), 0x3F);
}

#[test]
fn test_from_bits_rejects_out_of_range() {
    assert_eq!(RoundingMode::from_bits(0b10), Some(RoundingMode::Up));
    assert_eq!(RoundingMode::from_bits(0b100), None);
}
