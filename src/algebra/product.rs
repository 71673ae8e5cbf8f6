//! Coefficient-level Cayley-Dickson arithmetic.
//!
//! Everything here works on plain `f64` slices in basis order. Unit labels
//! are reattached by [`HypercomplexNumber`](super::HypercomplexNumber).

use crate::algebra::error::AlgebraError;

/// True when `n` terms can be built by repeated doubling from the reals.
pub fn is_valid_dimension(n: usize) -> bool {
    n.is_power_of_two()
}

/// Negate every coefficient except the scalar one.
pub fn conjugate(z: &[f64]) -> Vec<f64> {
    z.iter()
        .enumerate()
        .map(|(i, &c)| if i == 0 { c } else { -c })
        .collect()
}

pub fn norm_squared(z: &[f64]) -> f64 {
    z.iter().map(|c| c * c).sum()
}

/// Multiplicative inverse: the conjugate scaled by `1 / |z|²`.
pub fn invert(z: &[f64]) -> Result<Vec<f64>, AlgebraError> {
    if !is_valid_dimension(z.len()) {
        return Err(AlgebraError::InvalidDimension(z.len()));
    }

    let norm = norm_squared(z);
    if norm == 0.0 {
        return Err(AlgebraError::DivisionByZero);
    }

    Ok(conjugate(z).into_iter().map(|c| c / norm).collect())
}

/// Multiply two coefficient sequences with the doubling product.
///
/// Both preconditions are checked here so the recursion never sees an odd
/// split.
pub fn multiply(w: &[f64], z: &[f64]) -> Result<Vec<f64>, AlgebraError> {
    if !is_valid_dimension(w.len()) {
        return Err(AlgebraError::InvalidDimension(w.len()));
    }
    if !is_valid_dimension(z.len()) {
        return Err(AlgebraError::InvalidDimension(z.len()));
    }
    if w.len() != z.len() {
        return Err(AlgebraError::DimensionMismatch {
            left: w.len(),
            right: z.len(),
        });
    }

    Ok(doubling_product(w, z))
}

// (a, b)(c, d) = (ac - d*b, da + bc*)
// Halves are borrowed read-only, so the four sub-products never observe each
// other's intermediate buffers. Operand order inside each term matters from
// the quaternions onwards.
fn doubling_product(w: &[f64], z: &[f64]) -> Vec<f64> {
    let n = w.len();
    if n == 1 {
        return vec![w[0] * z[0]];
    }

    let m = n / 2;
    let (a, b) = w.split_at(m);
    let (c, d) = z.split_at(m);

    let ac = doubling_product(a, c);
    let d_star_b = doubling_product(&conjugate(d), b);
    let da = doubling_product(d, a);
    let b_c_star = doubling_product(b, &conjugate(c));

    let mut product = Vec::with_capacity(n);
    product.extend(ac.iter().zip(&d_star_b).map(|(x, y)| x - y));
    product.extend(da.iter().zip(&b_c_star).map(|(x, y)| x + y));
    product
}
