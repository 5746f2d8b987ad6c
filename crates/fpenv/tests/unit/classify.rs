//! Classification tests.
//!
//! These pin the FXAM decode table, the signaling/quiet NaN discrimination,
//! and the `is_finite` partition of the eleven categories.

use pretty_assertions::assert_eq;
use rstest::rstest;

use fpenv_core::FpClass;

use crate::common;

/// A NaN with the most significant significand bit clear (signaling).
const SNAN_BITS: u64 = 0x7FF0_0000_0000_0001;
/// A negative NaN with the most significant significand bit set (quiet).
const NEG_QNAN_BITS: u64 = 0xFFF8_0000_0000_0000;
/// The smallest positive denormal.
const POS_DENORMAL_BITS: u64 = 0x0000_0000_0000_0001;
/// A negative denormal.
const NEG_DENORMAL_BITS: u64 = 0x8000_0000_0000_0001;

#[rstest]
#[case(0.0, FpClass::PosZero)]
#[case(-0.0, FpClass::NegZero)]
#[case(1.0, FpClass::PosNormal)]
#[case(-1.0, FpClass::NegNormal)]
#[case(f64::MAX, FpClass::PosNormal)]
#[case(f64::INFINITY, FpClass::PosInfinity)]
#[case(f64::NEG_INFINITY, FpClass::NegInfinity)]
#[case(f64::from_bits(POS_DENORMAL_BITS), FpClass::PosDenormal)]
#[case(f64::from_bits(NEG_DENORMAL_BITS), FpClass::NegDenormal)]
#[case(f64::from_bits(SNAN_BITS), FpClass::SignalingNan)]
#[case(f64::from_bits(NEG_QNAN_BITS), FpClass::QuietNan)]
fn test_classify_table(#[case] value: f64, #[case] expected: FpClass) {
    let mut env = common::env();
    assert_eq!(env.classify(value).unwrap(), expected);
}

#[test]
fn test_invalid_operation_yields_quiet_nan() {
    let mut env = common::env();
    let nan = (-1.0_f64).sqrt();
    assert_eq!(env.classify(nan).unwrap(), FpClass::QuietNan);
}

#[test]
fn test_overflowing_product_yields_positive_infinity() {
    let mut env = common::env();
    let huge = f64::MAX;
    assert_eq!(env.classify(huge * 2.0).unwrap(), FpClass::PosInfinity);
}

#[test]
fn test_negative_signaling_nan_is_still_signaling() {
    // Discrimination depends on the significand bit only, not the sign.
    let mut env = common::env();
    let value = f64::from_bits(SNAN_BITS | (1 << 63));
    assert_eq!(env.classify(value).unwrap(), FpClass::SignalingNan);
}

#[rstest]
#[case(FpClass::NegDenormal, true)]
#[case(FpClass::PosDenormal, true)]
#[case(FpClass::NegZero, true)]
#[case(FpClass::PosZero, true)]
#[case(FpClass::NegNormal, true)]
#[case(FpClass::PosNormal, true)]
#[case(FpClass::SignalingNan, false)]
#[case(FpClass::QuietNan, false)]
#[case(FpClass::NegInfinity, false)]
#[case(FpClass::PosInfinity, false)]
#[case(FpClass::Unsupported, false)]
fn test_is_finite_partition(#[case] class: FpClass, #[case] finite: bool) {
    assert_eq!(class.is_finite(), finite);
}

#[test]
fn test_env_is_finite_agrees_with_classification() {
    let mut env = common::env();
    assert!(env.is_finite(1.0).unwrap());
    assert!(env.is_finite(-0.0).unwrap());
    assert!(env.is_finite(f64::from_bits(POS_DENORMAL_BITS)).unwrap());
    assert!(!env.is_finite(f64::INFINITY).unwrap());
    assert!(!env.is_finite(f64::NAN).unwrap());
    assert!(!env.is_finite(f64::from_bits(SNAN_BITS)).unwrap());
}
