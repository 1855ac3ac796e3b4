use crate::lie::errors::BCHError;
use nalgebra::DMatrix;
use rayon::prelude::*;

/// Sums every basis element matrix into the final result, starting from
/// the zero matrix of the given shape. All elements must share that shape,
/// otherwise the call fails with [`BCHError::ShapeMismatch`]. Matrix
/// addition over the reals is commutative and associative, so the
/// reduction is run as a rayon parallel reduce - the one place of the
/// pipeline where parallelism is safe.
pub fn sum_elements(
    elements: &[DMatrix<f64>],
    shape: (usize, usize),
) -> Result<DMatrix<f64>, BCHError> {
    let (rows, cols) = shape;
    for element in elements {
        if element.shape() != shape {
            return Err(BCHError::ShapeMismatch {
                expected: shape,
                found: element.shape(),
            });
        }
    }
    let z = elements
        .par_iter()
        .cloned()
        .reduce(|| DMatrix::zeros(rows, cols), |acc, element| acc + element);
    Ok(z)
}
