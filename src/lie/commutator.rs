use crate::lie::errors::BCHError;
use log::info;
use nalgebra::DMatrix;

/// Returns the commutator relation for the given operands,
/// comm(a, b) = a*b - b*a. For commuting operands the result is the zero
/// matrix.
pub fn commutator(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    a * b - b * a
}

/// Evaluates the full ordered list of basis element matrices: the
/// generators X and Y first, then one weighted commutator per pair. Pair
/// (k, j) at position p appends coeff[p] * comm(element[k], element[j]),
/// the 1-based indices k, j addressing positions k-1, j-1 of the growing
/// list. On success the list holds 2 + pairs.len() matrices.
///
/// Cross-references are bounds-checked even though the pair generator
/// never emits a forward reference; a reference outside the populated
/// prefix fails with [`BCHError::IndexRange`], and running past the end of
/// the coefficient sequence fails with [`BCHError::LengthMismatch`] at the
/// first missing position.
pub fn evaluate_elements(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    pairs: &[(usize, usize)],
    coeff: &[f64],
) -> Result<Vec<DMatrix<f64>>, BCHError> {
    let mut elements: Vec<DMatrix<f64>> = Vec::with_capacity(2 + pairs.len());
    elements.push(x.clone());
    elements.push(y.clone());
    for (position, &(k, j)) in pairs.iter().enumerate() {
        if position >= coeff.len() {
            return Err(BCHError::LengthMismatch {
                position,
                pairs: pairs.len(),
                coefficients: coeff.len(),
            });
        }
        for index in [k, j] {
            if index < 1 || index > elements.len() {
                return Err(BCHError::IndexRange {
                    position,
                    index,
                    len: elements.len(),
                });
            }
        }
        let element = commutator(&elements[k - 1], &elements[j - 1]) * coeff[position];
        elements.push(element);
    }
    info!("evaluated {} basis element matrices", elements.len());
    Ok(elements)
}
