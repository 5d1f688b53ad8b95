/// Row-major storage, checked access, transposition and approximate equality
/// shared by the fixed-size matrices.
macro_rules! square_matrix {
    ($name:ident, $size:expr) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            data: [f64; $size * $size],
        }

        impl $name {
            pub const SIZE: usize = $size;

            pub fn new(data: [f64; $size * $size]) -> Self {
                Self { data }
            }

            /// Fails unless `data` holds exactly `SIZE * SIZE` elements.
            pub fn from_slice(data: &[f64]) -> $crate::error::Result<Self> {
                let data: [f64; $size * $size] =
                    data.try_into()
                        .map_err(|_| $crate::error::Error::InvalidMatrixData {
                            expected: $size * $size,
                            actual: data.len(),
                        })?;
                Ok(Self::new(data))
            }

            pub fn empty() -> Self {
                Self::new([0.; $size * $size])
            }

            pub fn identity() -> Self {
                let mut res = Self::empty();
                for i in 0..$size {
                    res.data[i * $size + i] = 1.;
                }
                res
            }

            fn check_bounds(&self, row: usize, col: usize) -> $crate::error::Result<()> {
                if row >= $size || col >= $size {
                    return Err($crate::error::Error::MatrixIndexOutOfBounds {
                        row,
                        col,
                        size: $size,
                    });
                }
                Ok(())
            }

            pub fn get(&self, row: usize, col: usize) -> $crate::error::Result<f64> {
                self.check_bounds(row, col)?;
                Ok(self.data[row * $size + col])
            }

            pub fn transpose(&self) -> Self {
                let mut res = Self::empty();
                for row in 0..$size {
                    for col in 0..$size {
                        res.data[col * $size + row] = self.data[row * $size + col];
                    }
                }
                res
            }
        }

        impl $crate::approx_eq::ApproxEq for $name {
            fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| $crate::approx_eq::ApproxEq::approx_eq_epsilon(a, b, epsilon))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::approx_eq::ApproxEq::approx_eq(self, other)
            }
        }

        impl std::ops::Index<(usize, usize)> for $name {
            type Output = f64;

            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                assert!(
                    row < $size && col < $size,
                    "cell ({row}, {col}) is out of bounds for {0}x{0} matrix",
                    $size
                );
                &self.data[row * $size + col]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $name {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                assert!(
                    row < $size && col < $size,
                    "cell ({row}, {col}) is out of bounds for {0}x{0} matrix",
                    $size
                );
                &mut self.data[row * $size + col]
            }
        }
    };
}

/// Determinant by cofactor expansion along row 0, recursing through the
/// submatrix type, and inverse as adjugate divided by determinant.
macro_rules! cofactor_expansion {
    ($name:ident, $size:expr, $sub:ident) => {
        impl $name {
            fn submatrix_unchecked(&self, row_to_del: usize, col_to_del: usize) -> $sub {
                let mut res = $sub::empty();
                let mut id = 0;

                for row in (0..$size).filter(|&row| row != row_to_del) {
                    for col in (0..$size).filter(|&col| col != col_to_del) {
                        res[(id / $sub::SIZE, id % $sub::SIZE)] = self.data[row * $size + col];
                        id += 1;
                    }
                }
                res
            }

            fn cofactor_unchecked(&self, row: usize, col: usize) -> f64 {
                let minor = self.submatrix_unchecked(row, col).determinant();
                if (row + col) % 2 == 1 { -minor } else { minor }
            }

            /// Matrix with `row` and `col` removed.
            pub fn submatrix(&self, row: usize, col: usize) -> $crate::error::Result<$sub> {
                self.check_bounds(row, col)?;
                Ok(self.submatrix_unchecked(row, col))
            }

            pub fn minor(&self, row: usize, col: usize) -> $crate::error::Result<f64> {
                Ok(self.submatrix(row, col)?.determinant())
            }

            pub fn cofactor(&self, row: usize, col: usize) -> $crate::error::Result<f64> {
                self.check_bounds(row, col)?;
                Ok(self.cofactor_unchecked(row, col))
            }

            pub fn determinant(&self) -> f64 {
                (0..$size)
                    .map(|col| self.data[col] * self.cofactor_unchecked(0, col))
                    .sum()
            }

            /// Only an exactly zero determinant is treated as singular.
            pub fn inverse(&self) -> $crate::error::Result<Self> {
                let det = self.determinant();
                if det == 0. {
                    return Err($crate::error::Error::SingularMatrix);
                }

                let mut res = Self::empty();
                for row in 0..$size {
                    for col in 0..$size {
                        res.data[col * $size + row] = self.cofactor_unchecked(row, col) / det;
                    }
                }
                Ok(res)
            }
        }
    };
}

pub(crate) use cofactor_expansion;
pub(crate) use square_matrix;
