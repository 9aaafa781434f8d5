//! Rounding and ratio helpers shared by the services.

use serde::Serializer;

/// Round `value` to `places` decimal places, half away from zero.
///
/// Non-finite input is returned as `0.0` so NaN/Infinity never reaches a
/// serialized view. Negative zero is folded into positive zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    rounded + 0.0
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// `part / whole × 100`, or `0.0` when `whole` is zero.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Serde `serialize_with` helper that writes an `f64` rounded to 2 decimals.
pub fn serialize_round2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}

