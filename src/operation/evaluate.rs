use crate::algebra::{AlgebraError, HypercomplexNumber};
use crate::display::DisplayConfig;
use crate::notation;
use crate::operation::dispatch::{operate, Operation};
use serde::Serialize;

/// Everything a front end needs to show one `p op q` computation.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub expression: String,
    pub left: HypercomplexNumber,
    pub right: HypercomplexNumber,
    pub result: HypercomplexNumber,
    pub decimals: Option<usize>,
    pub formatted: String,
}

impl Evaluation {
    /// `"pq = 5 + 1i"`
    pub fn summary(&self) -> String {
        format!("{} = {}", self.expression, self.formatted)
    }
}

/// Parse both operands, apply `op` and format the result.
///
/// The printed precision comes from `display`; under the default policy it
/// is the larger of the two operands' precisions.
pub fn evaluate(
    op: Operation,
    p_text: &str,
    q_text: &str,
    display: &DisplayConfig,
) -> Result<Evaluation, AlgebraError> {
    let left = notation::parse_and_build(p_text)?;
    let right = notation::parse_and_build(q_text)?;
    log::debug!(
        "parsed p = {} (dimension {}), q = {} (dimension {})",
        left,
        left.dimension(),
        right,
        right.dimension()
    );

    let result = operate(op, &left, &right)?;
    let decimals = display.decimals_for(&[&left, &right]);
    let formatted = notation::format(&result, decimals);

    Ok(Evaluation {
        operation: op,
        expression: op.expression().to_string(),
        left,
        right,
        result,
        decimals,
        formatted,
    })
}
