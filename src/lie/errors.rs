use thiserror::Error;

/// Failures of the BCH pipeline. There is no retry and no partial-result
/// mode: either a complete Z is produced or the run fails with one of
/// these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BCHError {
    #[error("failed to read matrix from '{path}': {detail}")]
    InputMalformed { path: String, detail: String },

    #[error(
        "matrices must be square and of the same dimensions: X is {x_rows}x{x_cols}, Y is {y_rows}x{y_cols}"
    )]
    DimensionMismatch {
        x_rows: usize,
        x_cols: usize,
        y_rows: usize,
        y_cols: usize,
    },

    /// a generated pair references an element outside the populated prefix
    /// of the element list
    #[error("pair #{position} references element {index} but only {len} elements are built")]
    IndexRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// the coefficient sequence is shorter than the generated pair list
    #[error(
        "coefficient table exhausted at pair #{position}: {pairs} pairs generated, {coefficients} coefficients supplied"
    )]
    LengthMismatch {
        position: usize,
        pairs: usize,
        coefficients: usize,
    },

    #[error("element has shape {found:?} but the summation expects {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// lookup outside the hand-derived order table
    #[error("index {index} is outside the order table range 1..={max}")]
    TableRange { index: usize, max: usize },
}
