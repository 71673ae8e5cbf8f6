use crate::algebra::error::AlgebraError;
use crate::algebra::product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One basis term: a coefficient attached to a unit label.
/// The empty label is the real unit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Term {
    pub unit: String,
    pub coefficient: f64,
}

/// An element of a Cayley-Dickson algebra.
///
/// Terms keep the order they were built with; that order is the basis order
/// used by every arithmetic operation. Labels are never realigned by name.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Term>", into = "Vec<Term>")]
pub struct HypercomplexNumber {
    terms: Vec<Term>,
}

impl HypercomplexNumber {
    /// Build a number from parallel coefficient and unit-label lists.
    pub fn new(coefficients: Vec<f64>, units: Vec<String>) -> Result<Self, AlgebraError> {
        if coefficients.len() != units.len() {
            return Err(AlgebraError::DimensionMismatch {
                left: coefficients.len(),
                right: units.len(),
            });
        }

        let terms = units
            .into_iter()
            .zip(coefficients)
            .map(|(unit, coefficient)| Term { unit, coefficient })
            .collect();
        Self::from_terms(terms)
    }

    pub fn from_terms(terms: Vec<Term>) -> Result<Self, AlgebraError> {
        if terms.is_empty() {
            return Err(AlgebraError::InvalidDimension(0));
        }

        let mut seen = HashSet::new();
        for term in &terms {
            if !seen.insert(term.unit.as_str()) {
                return Err(AlgebraError::MalformedNotation(format!(
                    "unit '{}' appears more than once",
                    term.unit
                )));
            }
        }

        Ok(Self { terms })
    }

    /// Build a number with the standard labels for its dimension.
    pub fn from_coefficients(coefficients: Vec<f64>) -> Result<Self, AlgebraError> {
        let units = standard_units(coefficients.len());
        Self::new(coefficients, units)
    }

    /// Multiplicative identity of the given dimension.
    pub fn with_dimension(dimension: usize) -> Result<Self, AlgebraError> {
        let mut coefficients = vec![0.0; dimension];
        if let Some(first) = coefficients.first_mut() {
            *first = 1.0;
        }
        Self::from_coefficients(coefficients)
    }

    pub fn zero(dimension: usize) -> Result<Self, AlgebraError> {
        Self::from_coefficients(vec![0.0; dimension])
    }

    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.iter().map(|t| t.coefficient).collect()
    }

    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.unit.as_str())
    }

    pub fn scalar_part(&self) -> f64 {
        self.terms[0].coefficient
    }

    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient == 0.0)
    }

    pub fn is_valid_dimension(&self) -> bool {
        product::is_valid_dimension(self.dimension())
    }

    pub fn conjugate(&self) -> Self {
        self.with_coefficients(product::conjugate(&self.coefficients()))
    }

    pub fn norm_squared(&self) -> f64 {
        product::norm_squared(&self.coefficients())
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn invert(&self) -> Result<Self, AlgebraError> {
        let inverse = product::invert(&self.coefficients())?;
        Ok(self.with_coefficients(inverse))
    }

    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(other, |x, y| x + y)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(other, |x, y| x - y)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, AlgebraError> {
        let coefficients = product::multiply(&self.coefficients(), &other.coefficients())?;
        Ok(self.with_coefficients(coefficients))
    }

    /// `self * other⁻¹`.
    pub fn divide(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_dimension(other)?;
        let inverse = product::invert(&other.coefficients())?;
        let coefficients = product::multiply(&self.coefficients(), &inverse)?;
        Ok(self.with_coefficients(coefficients))
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self, AlgebraError> {
        self.check_same_dimension(other)?;
        let coefficients = self
            .terms
            .iter()
            .zip(&other.terms)
            .map(|(x, y)| op(x.coefficient, y.coefficient))
            .collect();
        Ok(self.with_coefficients(coefficients))
    }

    fn check_same_dimension(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.dimension() != other.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    // Labels come from `self`, positionally.
    fn with_coefficients(&self, coefficients: Vec<f64>) -> Self {
        let terms = self
            .terms
            .iter()
            .zip(coefficients)
            .map(|(term, coefficient)| Term {
                unit: term.unit.clone(),
                coefficient,
            })
            .collect();
        Self { terms }
    }
}

impl Default for HypercomplexNumber {
    fn default() -> Self {
        Self {
            terms: vec![Term {
                unit: String::new(),
                coefficient: 1.0,
            }],
        }
    }
}

impl TryFrom<Vec<Term>> for HypercomplexNumber {
    type Error = AlgebraError;

    fn try_from(terms: Vec<Term>) -> Result<Self, Self::Error> {
        Self::from_terms(terms)
    }
}

impl From<HypercomplexNumber> for Vec<Term> {
    fn from(number: HypercomplexNumber) -> Self {
        number.terms
    }
}

/// Default unit labels: the real unit, then `i, j, k` up to the
/// quaternions and `e_1, e_2, ...` beyond.
pub fn standard_units(dimension: usize) -> Vec<String> {
    (0..dimension)
        .map(|index| match (dimension, index) {
            (_, 0) => String::new(),
            (2..=4, 1) => "i".to_string(),
            (3..=4, 2) => "j".to_string(),
            (4, 3) => "k".to_string(),
            _ => format!("e_{}", index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_real_identity() {
        let one = HypercomplexNumber::default();
        assert_eq!(one.dimension(), 1);
        assert_eq!(one.coefficients(), vec![1.0]);
        assert_eq!(one.units().collect::<Vec<_>>(), vec![""]);
        assert_eq!(one, HypercomplexNumber::with_dimension(1).unwrap());
    }

    #[test]
    fn test_with_dimension() {
        let one = HypercomplexNumber::with_dimension(4).unwrap();
        assert_eq!(one.coefficients(), vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(one.units().collect::<Vec<_>>(), vec!["", "i", "j", "k"]);

        assert_eq!(
            HypercomplexNumber::with_dimension(0),
            Err(AlgebraError::InvalidDimension(0))
        );
    }

    #[test]
    fn test_standard_units() {
        assert_eq!(standard_units(2), vec!["", "i"]);
        assert_eq!(
            standard_units(8),
            vec!["", "e_1", "e_2", "e_3", "e_4", "e_5", "e_6", "e_7"]
        );
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            HypercomplexNumber::new(vec![1.0, 2.0], vec!["".to_string()]),
            Err(AlgebraError::DimensionMismatch { left: 2, right: 1 })
        );

        let duplicate = HypercomplexNumber::new(
            vec![1.0, 2.0, 3.0],
            vec!["".to_string(), "i".to_string(), "i".to_string()],
        );
        assert!(matches!(duplicate, Err(AlgebraError::MalformedNotation(msg)) if msg.contains("'i'")));
    }

    #[test]
    fn test_result_keeps_left_labels() {
        let p = HypercomplexNumber::new(vec![1.0, 2.0], vec!["".into(), "u".into()]).unwrap();
        let q = HypercomplexNumber::new(vec![3.0, 4.0], vec!["".into(), "v".into()]).unwrap();

        let sum = p.add(&q).unwrap();
        assert_eq!(sum.units().collect::<Vec<_>>(), vec!["", "u"]);
        assert_eq!(sum.coefficients(), vec![4.0, 6.0]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let p = HypercomplexNumber::from_coefficients(vec![1.0, 2.0]).unwrap();
        let q = HypercomplexNumber::from_coefficients(vec![1.0]).unwrap();
        assert_eq!(
            p.subtract(&q),
            Err(AlgebraError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_divide_by_zero() {
        let p = HypercomplexNumber::from_coefficients(vec![1.0, 2.0]).unwrap();
        let zero = HypercomplexNumber::zero(2).unwrap();
        assert_eq!(p.divide(&zero), Err(AlgebraError::DivisionByZero));
        assert_eq!(zero.invert(), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_norm() {
        let q = HypercomplexNumber::from_coefficients(vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(q.norm_squared(), 25.0);
        assert_eq!(q.norm(), 5.0);
    }

    #[test]
    fn test_json_round_trip_is_validated() {
        let q = HypercomplexNumber::from_coefficients(vec![1.5, -2.0]).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(
            json,
            r#"[{"unit":"","coefficient":1.5},{"unit":"i","coefficient":-2.0}]"#
        );
        let back: HypercomplexNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);

        let empty: Result<HypercomplexNumber, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
