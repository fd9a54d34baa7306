use thiserror::Error;

/// Everything a matrix operation can fail with. All variants are terminal:
/// they are raised at the point of detection and never caught internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid matrix size {height}x{width}: exactly one dimension is zero")]
    InvalidSize { height: usize, width: usize },

    #[error("index ({row}, {col}) out of bounds for a {height}x{width} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("size mismatch: {left_height}x{left_width} against {right_height}x{right_width}")]
    SizeMismatch {
        left_height: usize,
        left_width: usize,
        right_height: usize,
        right_width: usize,
    },

    #[error("operation requires a square matrix, got {height}x{width}")]
    NonSquareMatrix { height: usize, width: usize },

    #[error("matrix is singular")]
    NonRegularMatrix,
}
