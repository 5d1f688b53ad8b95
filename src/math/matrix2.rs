use super::square_matrix::square_matrix;
use crate::error::{Error, Result};

square_matrix!(Matrix2, 2);

impl Matrix2 {
    pub fn determinant(&self) -> f64 {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// The 1x1 submatrix left after removing `row` and `col` is a single cell.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self[(1 - row, 1 - col)])
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 1 { -minor } else { minor })
    }

    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0. {
            return Err(Error::SingularMatrix);
        }
        Ok(Self::new([
            self[(1, 1)] / det,
            -self[(0, 1)] / det,
            -self[(1, 0)] / det,
            self[(0, 0)] / det,
        ]))
    }
}
