use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AlgebraError {
    MalformedNotation(String),
    DimensionMismatch { left: usize, right: usize },
    InvalidDimension(usize),
    DivisionByZero,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::MalformedNotation(msg) => write!(f, "Malformed notation: {}", msg),
            AlgebraError::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: left operand has {} terms, right operand has {}",
                left, right
            ),
            AlgebraError::InvalidDimension(dim) => {
                write!(f, "Invalid dimension: {} is not a power of two", dim)
            }
            AlgebraError::DivisionByZero => write!(f, "Division by zero: operand has zero norm"),
        }
    }
}

impl std::error::Error for AlgebraError {}
