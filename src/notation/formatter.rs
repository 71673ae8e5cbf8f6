use crate::algebra::HypercomplexNumber;
use std::fmt;

/// Render a number as `c0 + c1u1 - c2u2 ...`.
///
/// With `decimals` set, every coefficient is rounded to that many places and
/// zero-padded to exactly that width; without it, coefficients use their
/// shortest round-trip representation.
pub fn format(number: &HypercomplexNumber, decimals: Option<usize>) -> String {
    let mut out = String::new();

    for (index, term) in number.terms().iter().enumerate() {
        let (negative, magnitude) = format_coefficient(term.coefficient, decimals);
        match (index, negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&magnitude);
        out.push_str(&term.unit);
    }

    out
}

/// Split a coefficient into its sign and rendered magnitude.
/// Values that are, or round to, zero are never negative.
pub fn format_coefficient(value: f64, decimals: Option<usize>) -> (bool, String) {
    match decimals {
        None => {
            let value = if value == 0.0 { 0.0 } else { value };
            (value < 0.0, format!("{}", value.abs()))
        }
        Some(places) => {
            let rounded = round_to(value, places);
            (rounded < 0.0, format!("{:.*}", places, rounded.abs()))
        }
    }
}

/// Largest number of fractional digits among the coefficients.
pub fn precision_of(number: &HypercomplexNumber) -> usize {
    number
        .terms()
        .iter()
        .map(|t| count_decimals(t.coefficient))
        .max()
        .unwrap_or(0)
}

/// Fractional digits in the shortest round-trip representation of `value`.
pub fn count_decimals(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let rendered = format!("{}", value.abs());
    rendered
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

// Half away from zero. Falls back to the raw value when scaling overflows.
fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places.min(i32::MAX as usize) as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() && factor.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for HypercomplexNumber {
    /// `{}` prints at full precision, `{:.N}` at `N` fixed decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, f.precision()))
    }
}
