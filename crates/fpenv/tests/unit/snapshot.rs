//! Environment snapshot tests.

use fpenv_core::{Exceptions, PrecisionMode, RegisterPort, RoundingMode};

use crate::common;

#[test]
fn test_snapshot_reflects_decoded_state() {
    let mut env = common::env();
    let _ = env.set_rounding(RoundingMode::Down).unwrap();
    let _ = env.set_mask(Exceptions::INVALID);
    env.port_mut().raise(Exceptions::IMPRECISE);

    let snapshot = env.snapshot().unwrap();
    assert_eq!(snapshot.rounding, RoundingMode::Down);
    assert_eq!(snapshot.precision, PrecisionMode::Extended);
    assert_eq!(snapshot.mask, Exceptions::INVALID);
    assert!(snapshot.sticky.contains(Exceptions::IMPRECISE));
    assert_eq!(snapshot.control, env.port_mut().read_control());
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut env = common::env();
    let snapshot = env.snapshot().unwrap();
    let json = serde_json::to_value(snapshot).unwrap();

    assert_eq!(json["rounding"], "Nearest");
    assert_eq!(json["precision"], "Extended");
    assert_eq!(json["control"], 0x037F);
}
