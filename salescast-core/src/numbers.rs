//! Numeric formatting helpers shared by echo text and chart hover labels.

/// Round to `places` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Shortest decimal rendering that always keeps a fractional part,
/// so `19.99` stays `19.99` and `0` reads `0.0`.
#[must_use]
pub fn display_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let text = format!("{value}");
    if text.contains('.') || text.contains('e') {
        text
    } else {
        format!("{text}.0")
    }
}
