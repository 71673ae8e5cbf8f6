use crate::algebra::{AlgebraError, HypercomplexNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four binary operations a caller can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown operation '{}' (expected add, subtract, multiply or divide)",
            self.0
        )
    }
}

impl std::error::Error for UnknownOperation {}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// How the result is labelled for operands `p` and `q`.
    pub fn expression(&self) -> &'static str {
        match self {
            Operation::Add => "p + q",
            Operation::Subtract => "p - q",
            Operation::Multiply => "pq",
            Operation::Divide => "pq^{-1}",
        }
    }

    pub fn apply(
        &self,
        p: &HypercomplexNumber,
        q: &HypercomplexNumber,
    ) -> Result<HypercomplexNumber, AlgebraError> {
        operate(*self, p, q)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// Apply `op` to `p` and `q`.
///
/// Both operands must have a power-of-two dimension (checked first), then
/// the same dimension. Division also fails on a zero divisor.
pub fn operate(
    op: Operation,
    p: &HypercomplexNumber,
    q: &HypercomplexNumber,
) -> Result<HypercomplexNumber, AlgebraError> {
    for operand in [p, q] {
        if !operand.is_valid_dimension() {
            return Err(AlgebraError::InvalidDimension(operand.dimension()));
        }
    }
    if p.dimension() != q.dimension() {
        return Err(AlgebraError::DimensionMismatch {
            left: p.dimension(),
            right: q.dimension(),
        });
    }

    log::trace!("{} on dimension {}", op, p.dimension());

    match op {
        Operation::Add => p.add(q),
        Operation::Subtract => p.subtract(q),
        Operation::Multiply => p.multiply(q),
        Operation::Divide => p.divide(q),
    }
}
