use crate::algebra::{AlgebraError, HypercomplexNumber};
use crate::notation::detector::{is_real_notation, split_term};
use std::str::FromStr;

/// Coefficients and unit labels read from a notation string, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedNotation {
    pub coefficients: Vec<f64>,
    pub units: Vec<String>,
}

impl ParsedNotation {
    pub fn into_number(self) -> Result<HypercomplexNumber, AlgebraError> {
        HypercomplexNumber::new(self.coefficients, self.units)
    }
}

/// Parse notation such as `"3+2i-1j"`, `"-0.5 + 2e_1"` or `"7"`.
pub fn parse(text: &str) -> Result<ParsedNotation, AlgebraError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AlgebraError::MalformedNotation(
            "empty input".to_string(),
        ));
    }

    if is_real_notation(trimmed) {
        let value = parse_coefficient(trimmed, trimmed)?;
        return Ok(ParsedNotation {
            coefficients: vec![value],
            units: vec![String::new()],
        });
    }

    let mut parsed = ParsedNotation::default();
    for (negative, segment) in signed_segments(trimmed)? {
        let (numeric, unit) = split_term(segment).ok_or_else(|| {
            AlgebraError::MalformedNotation(format!("cannot read term '{}'", segment.trim()))
        })?;
        if numeric.is_empty() {
            return Err(AlgebraError::MalformedNotation(format!(
                "term '{}' has no numeric coefficient",
                segment.trim()
            )));
        }

        let magnitude = parse_coefficient(numeric, segment)?;
        parsed
            .coefficients
            .push(if negative { -magnitude } else { magnitude });
        parsed.units.push(unit.to_string());
    }

    Ok(parsed)
}

/// Parse and build in one step.
pub fn parse_and_build(text: &str) -> Result<HypercomplexNumber, AlgebraError> {
    parse(text)?.into_number()
}

impl FromStr for HypercomplexNumber {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_and_build(s)
    }
}

/// Split on '+'/'-' keeping each segment's sign. Segments without an
/// explicit sign are positive; runs of signs combine ("--" is "+").
fn signed_segments(text: &str) -> Result<Vec<(bool, &str)>, AlgebraError> {
    let mut segments = Vec::new();
    let mut negative = false;
    let mut sign_pending = false;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        if ch != '+' && ch != '-' {
            continue;
        }

        let segment = &text[start..index];
        if !segment.trim().is_empty() {
            segments.push((negative, segment));
            negative = false;
        }
        if ch == '-' {
            negative = !negative;
        }
        sign_pending = true;
        start = index + ch.len_utf8();
    }

    let tail = &text[start..];
    if !tail.trim().is_empty() {
        segments.push((negative, tail));
    } else if sign_pending {
        return Err(AlgebraError::MalformedNotation(format!(
            "'{}' ends with a sign but no term",
            text
        )));
    }

    Ok(segments)
}

fn parse_coefficient(numeric: &str, context: &str) -> Result<f64, AlgebraError> {
    numeric.trim().parse::<f64>().map_err(|e| {
        AlgebraError::MalformedNotation(format!(
            "cannot read '{}' in '{}' as a number: {}",
            numeric.trim(),
            context.trim(),
            e
        ))
    })
}
