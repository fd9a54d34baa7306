use num_traits::{One, Zero};

use crate::matrix::element::{Element, Tolerance};
use crate::matrix::error::MatrixError;
use crate::matrix::matrix::Matrix;

/// Elementary row and column operations. Each returns a new matrix and
/// leaves the receiver untouched; these are the atomic moves of the
/// elimination engine.
///
/// Column operations are routed through `transpose` so the row-operation
/// logic stays the single source of truth.
impl<T: Element> Matrix<T> {
    /// Exchanges rows `r1` and `r2`; identity when they are equal.
    pub fn row_swap(&self, r1: usize, r2: usize) -> Result<Self, MatrixError> {
        self.at(r1, 0)?;
        self.at(r2, 0)?;

        let mut ret = self.clone();
        if r1 != r2 {
            for i in 0..ret.width() {
                let a = ret.at(r1, i)?.clone();
                let b = ret.at(r2, i)?.clone();
                ret.set(r1, i, b)?;
                ret.set(r2, i, a)?;
            }
        }
        Ok(ret)
    }

    /// `row[dst] += s * row[src]`. Results that land within tolerance of
    /// zero are snapped to the exact additive identity so rounding noise
    /// does not accumulate across repeated eliminations.
    pub fn row_add_multiply(&self, dst: usize, src: usize, s: T) -> Result<Self, MatrixError> {
        self.at(dst, 0)?;
        self.at(src, 0)?;

        let mut ret = self.clone();
        for i in 0..ret.width() {
            let source = ret.at(src, i)?.clone();
            if !source.near_zero() && !s.near_zero() {
                let value = ret.at(dst, i)?.clone() + source * s.clone();
                ret.set(dst, i, value)?;
            }
            if ret.at(dst, i)?.near_zero() {
                ret.set(dst, i, T::zero())?;
            }
        }
        Ok(ret)
    }

    /// `row[dst] += row[src]`.
    pub fn row_add(&self, dst: usize, src: usize) -> Result<Self, MatrixError> {
        self.row_add_multiply(dst, src, T::one())
    }

    /// Scales row `r` by `s`, expressed through the addition primitive so
    /// the snapping behavior stays uniform.
    pub fn row_multiply(&self, r: usize, s: T) -> Result<Self, MatrixError> {
        self.row_add_multiply(r, r, s - T::one())
    }

    /// Exchanges columns `c1` and `c2`; identity when they are equal.
    pub fn col_swap(&self, c1: usize, c2: usize) -> Result<Self, MatrixError> {
        self.at(0, c1)?;
        self.at(0, c2)?;
        Ok(self.transpose().row_swap(c1, c2)?.transpose())
    }

    /// `col[dst] += s * col[src]`, with the same zero snapping as the row
    /// form.
    pub fn col_add_multiply(&self, dst: usize, src: usize, s: T) -> Result<Self, MatrixError> {
        self.at(0, dst)?;
        self.at(0, src)?;
        Ok(self.transpose().row_add_multiply(dst, src, s)?.transpose())
    }

    /// Scales column `c` by `s`.
    pub fn col_multiply(&self, c: usize, s: T) -> Result<Self, MatrixError> {
        self.col_add_multiply(c, c, s - T::one())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
