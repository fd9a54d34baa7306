use num_traits::{One, Zero};

use crate::matrix::element::{Element, Tolerance};
use crate::matrix::error::MatrixError;
use crate::matrix::matrix::Matrix;

/// Outcome of a Gaussian elimination pass.
#[derive(Debug, Clone)]
pub struct Elimination<T> {
    /// The triangular (or fully reduced) matrix.
    pub matrix: Matrix<T>,
    /// Number of row swaps performed; the determinant sign flips once per
    /// swap. Column swaps are not counted.
    pub swap_count: usize,
    /// The accumulated inverse when canonical elimination of a square matrix
    /// ran to completion. `None` when not requested, or when a zero pivot
    /// forced a column swap: a column permutation is not a row-equivalent
    /// transform of the original matrix, so tracking is abandoned.
    pub inverse: Option<Matrix<T>>,
}

impl<T: Element> Matrix<T> {
    /// Reduces a copy of the matrix to triangular form, or to canonical
    /// (reduced row-echelon) form when `canonical` is set.
    ///
    /// Pivot selection falls back from the diagonal entry to a row swap
    /// (searching below in the pivot column), then to a column swap
    /// (searching right in the pivot row). A pivot that stays zero after
    /// both fallbacks is skipped silently; rank and determinant read the
    /// deficiency off the result instead of failing here.
    pub fn gaussian_elimination(&self, canonical: bool) -> Result<Elimination<T>, MatrixError> {
        let mut work = self.clone();
        let mut swap_count = 0;
        let rows = self.height().min(self.width());

        let mut inverse = if canonical && self.is_square() {
            Some(Self::identity(self.width()))
        } else {
            None
        };

        for i in 0..rows {
            let mut pivot = work.at(i, i)?.clone();

            // zero on the diagonal: find a non-zero below and swap rows
            if pivot.near_zero() {
                for j in i + 1..work.height() {
                    if !work.at(j, i)?.near_zero() {
                        work = work.row_swap(i, j)?;
                        if let Some(inv) = inverse.take() {
                            inverse = Some(inv.row_swap(i, j)?);
                        }
                        swap_count += 1;
                        break;
                    }
                }
                pivot = work.at(i, i)?.clone();
            }

            // still zero: the matrix is not row-regular, so inverse tracking
            // is over; try a column swap to keep reducing
            if pivot.near_zero() {
                inverse = None;
                for j in i + 1..work.width() {
                    if !work.at(i, j)?.near_zero() {
                        work = work.col_swap(i, j)?;
                        break;
                    }
                }
                pivot = work.at(i, i)?.clone();
            }

            // still zero: singular at this pivot, skip it
            if pivot.near_zero() {
                continue;
            }

            for j in i + 1..work.height() {
                let b = work.at(j, i)?.clone();
                if b.near_zero() {
                    continue;
                }
                let s = -b / pivot.clone();
                work = work.row_add_multiply(j, i, s.clone())?;
                if let Some(inv) = inverse.take() {
                    inverse = Some(inv.row_add_multiply(j, i, s)?);
                }
            }

            if canonical {
                let normalize = T::one() / pivot.clone();
                work = work.row_multiply(i, normalize.clone())?;
                if let Some(inv) = inverse.take() {
                    inverse = Some(inv.row_multiply(i, normalize)?);
                }
                for j in 0..i {
                    let b = work.at(j, i)?.clone();
                    if b.near_zero() {
                        continue;
                    }
                    work = work.row_add_multiply(j, i, -b.clone())?;
                    if let Some(inv) = inverse.take() {
                        inverse = Some(inv.row_add_multiply(j, i, -b)?);
                    }
                }
            }
        }

        Ok(Elimination {
            matrix: work,
            swap_count,
            inverse,
        })
    }

    /// Determinant of a square matrix: diagonal product of the triangular
    /// form, sign-flipped on odd swap parity.
    pub fn det(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(self.non_square());
        }
        let elimination = self.gaussian_elimination(false)?;

        let mut product = T::one();
        for i in 0..self.width() {
            product = product * elimination.matrix.at(i, i)?.clone();
            if product.near_zero() {
                return Ok(T::zero());
            }
        }
        if elimination.swap_count % 2 == 1 {
            product = -product;
        }
        Ok(product)
    }

    /// Inverse of a regular square matrix, via canonical elimination with
    /// augmented tracking.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(self.non_square());
        }
        self.gaussian_elimination(true)?
            .inverse
            .ok_or(MatrixError::NonRegularMatrix)
    }

    /// Number of non-zero diagonal entries of the triangular form.
    pub fn rank(&self) -> Result<usize, MatrixError> {
        let elimination = self.gaussian_elimination(false)?;
        let size = self.height().min(self.width());

        let mut rank = 0;
        for i in 0..size {
            if !elimination.matrix.at(i, i)?.near_zero() {
                rank += 1;
            }
        }
        Ok(rank)
    }

    /// `self` raised to an integer power. Non-positive exponents require a
    /// regular matrix and go through the inverse; an exponent of zero yields
    /// the identity.
    pub fn power(&self, r: i32) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(self.non_square());
        }
        if r <= 0 && self.rank()? < self.width() {
            return Err(MatrixError::NonRegularMatrix);
        }

        let multiplier = if r <= 0 { self.inverse()? } else { self.clone() };
        let mut steps = r.unsigned_abs();
        let mut ret = Self::identity(self.width());
        while steps > 0 {
            // once the accumulator hits the zero matrix it stays there
            if ret.try_eq_scalar(&T::zero())? {
                break;
            }
            ret = (&ret * &multiplier)?;
            steps -= 1;
        }
        Ok(ret)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
