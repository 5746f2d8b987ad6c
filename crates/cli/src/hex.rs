//! Deterministic hex codec for double-precision values.
//!
//! Values are rendered as sixteen hex digits, most significant byte first,
//! so a value prints identically on every platform regardless of how the
//! host lays the double out in memory. All NaNs collapse to a single
//! sentinel string: NaN payloads differ across platforms for the same
//! operation, and cross-run comparison needs one stable spelling.

/// Sentinel printed and accepted for every NaN payload.
pub const STR_NAN: &str = "**not-a-number**";

/// Encodes a value as sixteen MSB-first hex digits, or the NaN sentinel.
pub fn encode(value: f64) -> String {
    if value.is_nan() {
        STR_NAN.to_string()
    } else {
        format!("{:016x}", value.to_bits())
    }
}

/// Decodes a value produced by [`encode`].
///
/// Accepts the NaN sentinel, an optional `0x` prefix, and up to sixteen hex
/// digits (shorter strings are zero-extended from the left, matching the
/// MSB-first rendering).
///
/// # Arguments
///
/// * `text` - The hex rendering to decode.
///
/// # Returns
///
/// The decoded value, or `None` if `text` is not valid hex.
pub fn decode(text: &str) -> Option<f64> {
    if text == STR_NAN {
        return Some(f64::from_bits(0xffff_ffff_ffff_ffff));
    }
    let digits = text.strip_prefix("0x").unwrap_or(text);
    if digits.is_empty() || digits.len() > 16 {
        return None;
    }
    u64::from_str_radix(digits, 16).ok().map(f64::from_bits)
}
