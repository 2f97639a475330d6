//! Decimal text helpers for operands and results
//!
//! Operands live as text on the display. These helpers convert between that
//! text and `f64` the way a pocket calculator does: lenient parsing, fixed
//! rounding of computed results, and shortest plain-decimal rendering.

/// Number of decimal places computed results are rounded to
pub const RESULT_PLACES: usize = 8;

/// Extra digits expanded past the rounding position. Enough to see past the
/// binary representation error of any finite `f64` at that position.
const GUARD_DIGITS: usize = 40;

/// Parses operand text, treating anything unparsable (such as a lone `-`) as 0
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Rounds to `places` decimal places, halves away from zero.
///
/// Works on the exact decimal expansion of the value rather than scaling by a
/// power of ten, so `0.001953125` rounds up to `0.00195313` instead of being
/// pulled down by the scaling error.
#[must_use]
pub fn round_to_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let expanded = format!("{:.*}", places + GUARD_DIGITS, value.abs());
    let (kept, dropped) = expanded.split_at(expanded.len() - GUARD_DIGITS);

    let mut magnitude: f64 = kept.parse().unwrap_or(0.0);
    if dropped.as_bytes().first().is_some_and(|d| *d >= b'5') {
        magnitude += 10f64.powi(-(places as i32));
    }

    // Snap the carry back onto the decimal grid
    let snapped: f64 = format!("{:.*}", places, magnitude).parse().unwrap_or(0.0);

    if value.is_sign_negative() {
        -snapped
    } else {
        snapped
    }
}

/// Renders a value as the shortest plain decimal text.
///
/// Never produces an exponent, never produces `-0`. Non-finite values have no
/// decimal form and render as `"0"`.
#[must_use]
pub fn render(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Rounds a computed result to [`RESULT_PLACES`] and renders it
#[must_use]
pub fn render_result(value: f64) -> String {
    render(round_to_places(value, RESULT_PLACES))
}
