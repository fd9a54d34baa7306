use itertools::Itertools;
use num_traits::{One, Zero};
use std::fmt;
use std::ops;

use crate::matrix::element::{Element, Tolerance};
use crate::matrix::error::MatrixError;

/// Dense row-major matrix over a generic ring element.
///
/// A matrix is either fully allocated or the canonical 0x0 empty matrix;
/// a shape with exactly one zero dimension is rejected as `InvalidSize`.
/// Storage is exclusively owned, `Clone` deep-copies.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) cells: Vec<T>,
}

/// Storage, lifecycle and element access need no arithmetic at all, so they
/// only ask for `Clone + Default`. For every numeric element the default
/// value is the additive identity; this also lets a `Matrix<bool>` serve as
/// plain 2D grid storage.
impl<T: Clone + Default> Matrix<T> {
    /// Default-filled `height` x `width` matrix.
    pub fn new(height: usize, width: usize) -> Result<Self, MatrixError> {
        Self::check_shape(height, width)?;
        Ok(Matrix {
            height,
            width,
            cells: vec![T::default(); height * width],
        })
    }

    /// Default-filled `size` x `size` matrix.
    pub fn square(size: usize) -> Self {
        Matrix {
            height: size,
            width: size,
            cells: vec![T::default(); size * size],
        }
    }

    /// The canonical 0x0 matrix.
    pub fn empty() -> Self {
        Matrix {
            height: 0,
            width: 0,
            cells: vec![],
        }
    }

    /// Builds a matrix from rows, padding short rows to the longest one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self::check_shape(height, width)?;

        Ok(Matrix {
            height,
            width,
            cells: rows
                .into_iter()
                .flat_map(|r| {
                    let pad = width - r.len();
                    r.into_iter()
                        .chain(std::iter::repeat(T::default()).take(pad))
                })
                .collect(),
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.width == 0 {
            return vec![];
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.into())
            .collect()
    }

    /// Reallocates to a fresh default-filled buffer, discarding prior
    /// contents. `0, 0` deallocates.
    pub fn resize(&mut self, height: usize, width: usize) -> Result<(), MatrixError> {
        Self::check_shape(height, width)?;
        self.height = height;
        self.width = width;
        self.cells = vec![T::default(); height * width];
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Bounds-checked element read. Every higher-level operation goes
    /// through this check or `at_mut`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        self.check_index(row, col)?;
        Ok(&self.cells[row * self.width + col])
    }

    /// Bounds-checked element write access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        self.check_index(row, col)?;
        let width = self.width;
        Ok(&mut self.cells[row * width + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Extracts row `row` as a 1 x width matrix.
    pub fn row(&self, row: usize) -> Result<Self, MatrixError> {
        self.at(row, 0)?;
        Ok(Matrix {
            height: 1,
            width: self.width,
            cells: self.cells[row * self.width..(row + 1) * self.width].into(),
        })
    }

    /// Extracts column `col` as a height x 1 matrix.
    pub fn column(&self, col: usize) -> Result<Self, MatrixError> {
        self.at(0, col)?;
        let mut cells = Vec::with_capacity(self.height);
        for i in 0..self.height {
            cells.push(self.at(i, col)?.clone());
        }
        Ok(Matrix {
            height: self.height,
            width: 1,
            cells,
        })
    }

    pub fn transpose(&self) -> Self {
        Matrix {
            height: self.width,
            width: self.height,
            cells: (0..self.width)
                .flat_map(|c| (0..self.height).map(move |r| self.cells[r * self.width + c].clone()))
                .collect(),
        }
    }

    /* shape and error helpers */

    fn check_shape(height: usize, width: usize) -> Result<(), MatrixError> {
        // no "strip" matrices: a dimension is zero only if both are
        if (height == 0) != (width == 0) {
            return Err(MatrixError::InvalidSize { height, width });
        }
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.height || col >= self.width {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    pub(crate) fn non_square(&self) -> MatrixError {
        MatrixError::NonSquareMatrix {
            height: self.height,
            width: self.width,
        }
    }

    pub(crate) fn size_mismatch(&self, other: &Matrix<T>) -> MatrixError {
        MatrixError::SizeMismatch {
            left_height: self.height,
            left_width: self.width,
            right_height: other.height,
            right_width: other.width,
        }
    }
}

impl<T: Element> Matrix<T> {
    /// The matrix with row `row` and column `col` removed, preserving the
    /// relative order of the remaining rows and columns.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(self.non_square());
        }
        self.at(row, col)?;

        let mut cells = Vec::with_capacity((self.height - 1) * (self.width - 1));
        for i in 0..self.height {
            if i == row {
                continue;
            }
            for j in 0..self.width {
                if j == col {
                    continue;
                }
                cells.push(self.at(i, j)?.clone());
            }
        }
        Ok(Matrix {
            height: self.height - 1,
            width: self.width - 1,
            cells,
        })
    }

    /// Sum of the diagonal entries of a square matrix.
    pub fn trace(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(self.non_square());
        }
        (0..self.height)
            .map(|i| self.at(i, i).map(|v| v.clone()))
            .sum()
    }

    /// Tolerance-based comparison. Comparing mismatched shapes is an error,
    /// not `false`.
    pub fn try_eq(&self, other: &Matrix<T>) -> Result<bool, MatrixError> {
        if std::ptr::eq(self, other) {
            return Ok(true);
        }
        if self.height != other.height || self.width != other.width {
            return Err(self.size_mismatch(other));
        }
        for (a, b) in self.cells.iter().zip(other.cells.iter()) {
            if !a.near(b) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn try_ne(&self, other: &Matrix<T>) -> Result<bool, MatrixError> {
        Ok(!self.try_eq(other)?)
    }

    /// Compares against `s` times the identity of matching size.
    pub fn try_eq_scalar(&self, s: &T) -> Result<bool, MatrixError> {
        self.try_eq(&Self::scalar(self.width, s.clone()))
    }

    /// In-place `self += other`. The receiver is untouched on error.
    pub fn add_in_place(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        if self.height != other.height || self.width != other.width {
            return Err(self.size_mismatch(other));
        }
        for (a, b) in self.cells.iter_mut().zip(other.cells.iter()) {
            *a = a.clone() + b.clone();
        }
        Ok(())
    }

    /// In-place `self -= other`.
    pub fn sub_in_place(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        if self.height != other.height || self.width != other.width {
            return Err(self.size_mismatch(other));
        }
        for (a, b) in self.cells.iter_mut().zip(other.cells.iter()) {
            *a = a.clone() - b.clone();
        }
        Ok(())
    }

    /// In-place elementwise scaling.
    pub fn scale_in_place(&mut self, s: &T) {
        for a in self.cells.iter_mut() {
            *a = a.clone() * s.clone();
        }
    }

    /* factories */

    /// The `size` x `size` identity.
    pub fn identity(size: usize) -> Self {
        Self::scalar(size, T::one())
    }

    /// `s` on the diagonal, zero elsewhere.
    pub fn scalar(size: usize, s: T) -> Self {
        Matrix {
            height: size,
            width: size,
            cells: (0..size)
                .flat_map(|i| {
                    let s = s.clone();
                    (0..size).map(move |j| if i == j { s.clone() } else { T::zero() })
                })
                .collect(),
        }
    }

    /// `s` on the diagonal, one on the super-diagonal, zero elsewhere.
    pub fn jordan_block(size: usize, s: T) -> Self {
        Matrix {
            height: size,
            width: size,
            cells: (0..size)
                .flat_map(|i| {
                    let s = s.clone();
                    (0..size).map(move |j| {
                        if i == j {
                            s.clone()
                        } else if j == i + 1 {
                            T::one()
                        } else {
                            T::zero()
                        }
                    })
                })
                .collect(),
        }
    }

    /// Every cell set to `s`.
    pub fn full(height: usize, width: usize, s: T) -> Result<Self, MatrixError> {
        Self::check_shape(height, width)?;
        Ok(Matrix {
            height,
            width,
            cells: vec![s; height * width],
        })
    }
}

impl<T: Clone + Default> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One row per line, values separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.height != rhs.height || self.width != rhs.width {
            return Err(self.size_mismatch(rhs));
        }
        Ok(Matrix {
            height: self.height,
            width: self.width,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        })
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.height != rhs.height || self.width != rhs.width {
            return Err(self.size_mismatch(rhs));
        }
        Ok(Matrix {
            height: self.height,
            width: self.width,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        })
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.width != rhs.height {
            return Err(self.size_mismatch(rhs));
        }
        let mut cells = Vec::with_capacity(self.height * rhs.width);
        for i in 0..self.height {
            for j in 0..rhs.width {
                cells.push(
                    (0..self.width)
                        .map(|k| Ok(self.at(i, k)?.clone() * rhs.at(k, j)?.clone()))
                        .sum::<Result<T, MatrixError>>()?,
                );
            }
        }
        Ok(Matrix {
            height: self.height,
            width: rhs.width,
            cells,
        })
    }
}

/// `m + s` treats the scalar as `s` times the identity, so it only succeeds
/// for square matrices.
impl<T: Element> ops::Add<&T> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, s: &T) -> Result<Matrix<T>, MatrixError> {
        let scalar = Matrix::scalar(self.width, s.clone());
        self + &scalar
    }
}

impl<T: Element> ops::Sub<&T> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, s: &T) -> Result<Matrix<T>, MatrixError> {
        let scalar = Matrix::scalar(self.width, s.clone());
        self - &scalar
    }
}

/// `m * s` is plain elementwise scaling.
impl<T: Element> ops::Mul<&T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, s: &T) -> Matrix<T> {
        Matrix {
            height: self.height,
            width: self.width,
            cells: self.cells.iter().map(|a| a.clone() * s.clone()).collect(),
        }
    }
}

impl<T: Element> ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            height: self.height,
            width: self.width,
            cells: self.cells.iter().map(|a| -a.clone()).collect(),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_construction() {
        let m = Matrix::<i64>::new(2, 3).unwrap();
        assert_eq!(m.height(), 2);
        assert_eq!(m.width(), 3);
        assert!(!m.is_square());

        let m = Matrix::<i64>::square(3);
        assert!(m.is_square());
        assert_eq!(*m.at(2, 2).unwrap(), 0);

        let m = Matrix::<i64>::empty();
        assert_eq!((m.height(), m.width()), (0, 0));
        assert_eq!(Matrix::<i64>::default().height(), 0);

        assert_eq!(
            Matrix::<i64>::new(3, 0).unwrap_err(),
            MatrixError::InvalidSize {
                height: 3,
                width: 0
            }
        );
        assert!(Matrix::<i64>::new(0, 4).is_err());
        assert!(Matrix::<i64>::new(0, 0).is_ok());
    }

    #[test]
    fn test_from_rows_padding() {
        let m = Matrix::<i64>::from_rows(vec![vec![1, 2, 3], vec![4]]).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 0, 0]]);

        // all-empty rows would make a 2x0 strip
        assert!(Matrix::<i64>::from_rows(vec![vec![], vec![]]).is_err());
        assert_eq!(Matrix::<i64>::from_rows(vec![]).unwrap().height(), 0);
    }

    #[test]
    fn test_resize() {
        let mut m = Matrix::<i64>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        m.resize(1, 3).unwrap();
        assert_eq!(m.to_rows(), vec![vec![0, 0, 0]]);

        m.resize(0, 0).unwrap();
        assert_eq!(m.height(), 0);

        assert!(m.resize(2, 0).is_err());
    }

    #[test]
    fn test_access_bounds() {
        let mut m = Matrix::<i64>::square(3);
        m.set(1, 2, 7).unwrap();
        assert_eq!(*m.at(1, 2).unwrap(), 7);

        assert_eq!(
            m.at(5, 5).unwrap_err(),
            MatrixError::OutOfBounds {
                row: 5,
                col: 5,
                height: 3,
                width: 3
            }
        );
        assert!(m.at(3, 0).is_err());
        assert!(m.at(0, 3).is_err());
        assert!(m.clone().set(0, 3, 1).is_err());
    }

    #[test]
    fn test_row_column_extraction() {
        let m = Matrix::<i64>::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.row(1).unwrap().to_rows(), vec![vec![4, 5, 6]]);
        assert_eq!(m.column(2).unwrap().to_rows(), vec![vec![3], vec![6]]);
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
    }

    #[test]
    fn test_transpose_involution() {
        let m = Matrix::<i64>::from_rows(vec![vec![1, 2, 5, 77], vec![3, 4, 7, 11]]).unwrap();
        assert_eq!(
            m.transpose().to_rows(),
            vec![vec![1, 3], vec![2, 4], vec![5, 7], vec![77, 11]]
        );
        assert!(m.transpose().transpose().try_eq(&m).unwrap());
    }

    #[test]
    fn test_minor() {
        let m =
            Matrix::<i64>::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(
            m.minor(1, 1).unwrap().to_rows(),
            vec![vec![1, 3], vec![7, 9]]
        );
        assert_eq!(
            m.minor(0, 2).unwrap().to_rows(),
            vec![vec![4, 5], vec![7, 8]]
        );

        let rect = Matrix::<i64>::new(2, 3).unwrap();
        assert_eq!(
            rect.minor(0, 0).unwrap_err(),
            MatrixError::NonSquareMatrix {
                height: 2,
                width: 3
            }
        );
        assert!(m.minor(3, 0).is_err());
    }

    #[test]
    fn test_trace() {
        let m = Matrix::<BigInt>::from_rows(vec![
            vec![BigInt::from(1), BigInt::from(9)],
            vec![BigInt::from(-4), BigInt::from(5)],
        ])
        .unwrap();
        assert_eq!(m.trace().unwrap(), BigInt::from(6));
        assert!(Matrix::<i64>::new(2, 3).unwrap().trace().is_err());
        assert_eq!(Matrix::<i64>::empty().trace().unwrap(), 0);
    }

    #[test]
    fn test_equality() {
        let a = Matrix::<f64>::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::<f64>::from_rows(vec![
            vec![1.0 + f64::EPSILON / 4.0, 2.0],
            vec![3.0, 4.0],
        ])
        .unwrap();
        assert!(a.try_eq(&b).unwrap());
        assert!(a.try_eq(&a).unwrap());

        let c = Matrix::<f64>::from_rows(vec![vec![1.1, 2.0], vec![3.0, 4.0]]).unwrap();
        assert!(!a.try_eq(&c).unwrap());
        assert!(a.try_ne(&c).unwrap());

        let d = Matrix::<f64>::new(2, 3).unwrap();
        assert!(a.try_eq(&d).is_err());
    }

    #[test]
    fn test_scalar_equality() {
        let m = Matrix::<i64>::scalar(3, 5);
        assert!(m.try_eq_scalar(&5).unwrap());
        assert!(!m.try_eq_scalar(&4).unwrap());

        // a non-square matrix cannot equal s * identity
        let rect = Matrix::<i64>::new(2, 3).unwrap();
        assert!(rect.try_eq_scalar(&0).is_err());
    }

    #[test]
    fn test_addition_subtraction() {
        let a = Matrix::<i64>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::<i64>::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
        assert_eq!(
            (&a + &b).unwrap().to_rows(),
            vec![vec![11, 22], vec![33, 44]]
        );
        assert_eq!(
            (&b - &a).unwrap().to_rows(),
            vec![vec![9, 18], vec![27, 36]]
        );

        let wide = Matrix::<i64>::new(2, 3).unwrap();
        let tall = Matrix::<i64>::new(3, 2).unwrap();
        assert_eq!(
            (&wide + &tall).unwrap_err(),
            MatrixError::SizeMismatch {
                left_height: 2,
                left_width: 3,
                right_height: 3,
                right_width: 2
            }
        );
        assert!((&wide - &tall).is_err());
    }

    #[test]
    fn test_multiplication() {
        let a = Matrix::<i64>::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::<i64>::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
        assert_eq!(
            (&a * &b).unwrap().to_rows(),
            vec![vec![58, 64], vec![139, 154]]
        );

        let bad = Matrix::<i64>::new(4, 2).unwrap();
        assert!((&a * &bad).is_err());

        let big = Matrix::<BigInt>::from_rows(vec![
            vec![
                BigInt::parse_bytes(b"100000000000000000000000000000000", 10).unwrap(),
                BigInt::from(1),
            ],
            vec![BigInt::from(0), BigInt::from(1)],
        ])
        .unwrap();
        let sq = (&big * &big).unwrap();
        assert_eq!(
            *sq.at(0, 0).unwrap(),
            BigInt::parse_bytes(
                b"10000000000000000000000000000000000000000000000000000000000000000",
                10
            )
            .unwrap()
        );
    }

    #[test]
    fn test_scalar_forms() {
        let m = Matrix::<i64>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();

        // scalar add/sub act as s * identity
        assert_eq!(
            (&m + &10).unwrap().to_rows(),
            vec![vec![11, 2], vec![3, 14]]
        );
        assert_eq!((&m - &1).unwrap().to_rows(), vec![vec![0, 2], vec![3, 3]]);

        // scalar multiply scales every cell
        assert_eq!((&m * &3).to_rows(), vec![vec![3, 6], vec![9, 12]]);

        let rect = Matrix::<i64>::new(2, 3).unwrap();
        assert!((&rect + &1).is_err());
        assert!((&rect - &1).is_err());

        assert_eq!((-&m).to_rows(), vec![vec![-1, -2], vec![-3, -4]]);
    }

    #[test]
    fn test_in_place_ops() {
        let mut a = Matrix::<i64>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::<i64>::identity(2);
        a.add_in_place(&b).unwrap();
        assert_eq!(a.to_rows(), vec![vec![2, 2], vec![3, 5]]);

        a.sub_in_place(&b).unwrap();
        assert_eq!(a.to_rows(), vec![vec![1, 2], vec![3, 4]]);

        a.scale_in_place(&2);
        assert_eq!(a.to_rows(), vec![vec![2, 4], vec![6, 8]]);

        let rect = Matrix::<i64>::new(2, 3).unwrap();
        assert!(a.add_in_place(&rect).is_err());
    }

    #[test]
    fn test_factories() {
        assert_eq!(
            Matrix::<i64>::identity(3).to_rows(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
        assert_eq!(
            Matrix::<i64>::scalar(2, 7).to_rows(),
            vec![vec![7, 0], vec![0, 7]]
        );
        assert_eq!(
            Matrix::<i64>::jordan_block(3, 2).to_rows(),
            vec![vec![2, 1, 0], vec![0, 2, 1], vec![0, 0, 2]]
        );
        assert_eq!(
            Matrix::<i64>::full(2, 3, 5).unwrap().to_rows(),
            vec![vec![5, 5, 5], vec![5, 5, 5]]
        );
        assert!(Matrix::<i64>::full(0, 3, 5).is_err());
    }

    #[test]
    fn test_display() {
        let m = Matrix::<i64>::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.to_string(), "1 2 3\n4 5 6\n");
        assert_eq!(Matrix::<i64>::empty().to_string(), "");
    }

    #[test]
    fn test_boolean_grid_storage() {
        // the storage and access layer works for any Clone + Default
        // element, so a bool matrix can serve as a plain 2D grid
        let mut grid = Matrix::<bool>::new(3, 4).unwrap();
        assert!(!*grid.at(2, 3).unwrap());

        grid.set(1, 2, true).unwrap();
        assert!(*grid.at(1, 2).unwrap());
        let cell = grid.at_mut(1, 2).unwrap();
        *cell = !*cell;
        assert!(!*grid.at(1, 2).unwrap());

        assert_eq!((grid.height(), grid.width()), (3, 4));
        assert!(grid.at(3, 0).is_err());
        assert_eq!(grid.to_string(), "false false false false\n".repeat(3));
    }

    #[test]
    fn test_deep_copy() {
        let a = Matrix::<i64>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut b = a.clone();
        b.set(0, 0, 99).unwrap();
        assert_eq!(*a.at(0, 0).unwrap(), 1);
        assert_eq!(*b.at(0, 0).unwrap(), 99);
    }
}
