//! Bit-field access to the 16-bit x87 hardware words.
//!
//! This module provides the generic masked-field operations and the typed
//! word wrappers built on them:
//! 1. **Operations:** [`extract`] and [`insert`], a pure shift-align
//!    extract/insert pair over any non-zero field mask.
//! 2. **Control word:** [`control::ControlWord`] covering rounding,
//!    precision, infinity control, and the six exception mask bits.
//! 3. **Status word:** [`status::StatusWord`] covering busy, condition
//!    codes, stack pointer, error summary, and the six exception flag bits.

/// Control word type and field masks.
pub mod control;
/// Status word type and field masks.
pub mod status;

/// Extracts a masked field from a 16-bit word, right-aligned.
///
/// The word is ANDed with the mask to drop all foreign bits, then both are
/// shifted right together until the mask's least-significant set bit reaches
/// position 0, leaving the field value in the low bits.
///
/// # Arguments
///
/// * `word` - The 16-bit register word.
/// * `mask` - The field mask. Must be non-zero.
///
/// # Returns
///
/// The right-aligned field value.
pub const fn extract(word: u16, mask: u16) -> u16 {
    debug_assert!(mask != 0, "field mask must be non-zero");
    let mut value = word & mask;
    let mut mask = mask;
    while mask & 0x0001 == 0 {
        value >>= 1;
        mask >>= 1;
    }
    value
}

/// Inserts a right-aligned value into a masked field of a 16-bit word.
///
/// The target bits are cleared first, the value is shifted left until it
/// lines up with the field (counting how far the mask's least-significant
/// set bit sits from position 0), then ANDed with the mask so an oversized
/// value cannot spill into neighboring fields, and finally ORed in.
///
/// # Arguments
///
/// * `word`  - The 16-bit register word to modify.
/// * `mask`  - The field mask. Must be non-zero.
/// * `value` - The right-aligned value to store in the field.
///
/// # Returns
///
/// The word with the field replaced.
pub const fn insert(word: u16, mask: u16, value: u16) -> u16 {
    debug_assert!(mask != 0, "field mask must be non-zero");
    let cleared = word & !mask;
    let mut aligned = value;
    let mut probe = mask;
    while probe & 0x0001 == 0 {
        aligned <<= 1;
        probe >>= 1;
    }
    cleared | (aligned & mask)
}
