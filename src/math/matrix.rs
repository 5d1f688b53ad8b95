use std::ops;

use super::{
    matrix3::Matrix3,
    point::Point,
    square_matrix::{cofactor_expansion, square_matrix},
    transform::Transform,
    tuple::Tuple,
    vector::Vector,
};

square_matrix!(Matrix, 4);
cofactor_expansion!(Matrix, 4, Matrix3);

impl Transform for Matrix {
    fn transform(&mut self, matrix: &Matrix) {
        *self = self.transform_new(matrix);
    }

    fn transform_new(&self, matrix: &Matrix) -> Self {
        matrix * self
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            1., 0., 0., x,
            0., 1., 0., y,
            0., 0., 1., z,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            x, 0., 0., 0.,
            0., y, 0., 0.,
            0., 0., z, 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn scaling_uniform(f: f64) -> Matrix {
        Self::scaling(f, f, f)
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            1., 0., 0., 0.,
            0., cos_r, -sin_r, 0.,
            0., sin_r, cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, 0., sin_r, 0.,
            0., 1., 0., 0.,
            -sin_r, 0., cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, -sin_r, 0., 0.,
            sin_r, cos_r, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn shearing(
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Matrix {
        Matrix::new([
            1., x_prop_y, x_prop_z, 0.,
            y_prop_x, 1., y_prop_z, 0.,
            z_prop_x, z_prop_y, 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Orients the world so that an eye at `from` looks toward `to`.
    pub fn view_transformation(from: Point, to: Point, up_v: Vector) -> Matrix {
        let forward_v = (to - from).normalize();
        let left_v = forward_v.cross(up_v.normalize());
        let true_up_v = left_v.cross(forward_v);

        #[rustfmt::skip]
        let orientation = Matrix::new([
            left_v.x(), left_v.y(), left_v.z(), 0.,
            true_up_v.x(), true_up_v.y(), true_up_v.z(), 0.,
            -forward_v.x(), -forward_v.y(), -forward_v.z(), 0.,
            0., 0., 0., 1.,
        ]);

        orientation * Matrix::translation(-from.x(), -from.y(), -from.z())
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;
    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Self::Output {
        let mut output = Self::Output::empty();
        for row in 0..4 {
            for col in 0..4 {
                output[(row, col)] = self[(row, 0)] * rhs[(0, col)]
                    + self[(row, 1)] * rhs[(1, col)]
                    + self[(row, 2)] * rhs[(2, col)]
                    + self[(row, 3)] * rhs[(3, col)];
            }
        }
        output
    }
}

/// Points pick up the translation column through `w = 1`, vectors don't.
impl<T> ops::Mul<T> for &Matrix
where
    T: Tuple,
{
    type Output = T;
    fn mul(self, rhs: T) -> Self::Output {
        T::new(
            self[(0, 0)] * rhs.x()
                + self[(0, 1)] * rhs.y()
                + self[(0, 2)] * rhs.z()
                + self[(0, 3)] * rhs.w(),
            self[(1, 0)] * rhs.x()
                + self[(1, 1)] * rhs.y()
                + self[(1, 2)] * rhs.z()
                + self[(1, 3)] * rhs.w(),
            self[(2, 0)] * rhs.x()
                + self[(2, 1)] * rhs.y()
                + self[(2, 2)] * rhs.z()
                + self[(2, 3)] * rhs.w(),
        )
    }
}

impl<T> ops::Mul<T> for Matrix
where
    T: Tuple,
{
    type Output = T;
    #[allow(clippy::op_ref)]
    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;

    use super::*;
    use crate::{assert_approx_eq_low_prec, error::Error};

    #[test]
    #[rustfmt::skip]
    fn create_and_index() {
        let matrix = Matrix::new([
            1.0, 2.0, 3.0, 4.0,
            5.5, 6.5, 7.5, 8.5,
            9.0, 10.0, 11.0, 12.0,
            13.5, 14.5, 15.5, 16.5,
        ]);

        assert_approx_eq_low_prec!(matrix[(0, 0)], 1.0);
        assert_approx_eq_low_prec!(matrix[(0, 3)], 4.0);
        assert_approx_eq_low_prec!(matrix[(1, 0)], 5.5);
        assert_approx_eq_low_prec!(matrix[(1, 2)], 7.5);
        assert_approx_eq_low_prec!(matrix[(2, 2)], 11.0);
        assert_approx_eq_low_prec!(matrix[(3, 0)], 13.5);
        assert_approx_eq_low_prec!(matrix[(3, 2)], 15.5);
        assert!(matrix.get(4, 0).is_err());
    }

    #[test]
    #[rustfmt::skip]
    fn equality() {
        let m1 = Matrix::new([
            1., 2., 3., 4.,
            5., 6., 7., 8.,
            9., 8., 7., 6.,
            5., 4., 3., 2.,
        ]);
        let m2 = m1;
        let other = Matrix::new([
            0., 2., 3., 4.,
            5., 6., 7., 8.,
            1., 2., 3., 4.,
            5., 6., 7., 8.,
        ]);

        assert_eq!(m1, m2);
        assert_ne!(m1, other);
    }

    #[test]
    #[rustfmt::skip]
    fn multiply() {
        let m1 = Matrix::new([
            1., 2., 3., 4.,
            5., 6., 7., 8.,
            9., 8., 7., 6.,
            5., 4., 3., 2.,
        ]);
        let m2 = Matrix::new([
            -2., 1., 2., 3.,
            3., 2., 1., -1.,
            4., 3., 6., 5.,
            1., 2., 7., 8.,
        ]);
        let expected = Matrix::new([
            20., 22., 50., 48.,
            44., 54., 114., 108.,
            40., 58., 110., 102.,
            16., 26., 46., 42.,
        ]);

        assert_eq!(m1 * m2, expected);
    }

    #[test]
    #[rustfmt::skip]
    fn multiply_by_point() {
        let m = Matrix::new([
            1., 2., 3., 4.,
            2., 4., 4., 2.,
            8., 6., 4., 1.,
            0., 0., 0., 1.,
        ]);

        assert_eq!(m * Point::new(1., 2., 3.), Point::new(18., 24., 33.));
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::rotation_x(0.3) * Matrix::translation(1., 2., 3.);
        assert_eq!(m * Matrix::identity(), m);
        assert_eq!(Matrix::identity() * Point::new(1., 2., 3.), Point::new(1., 2., 3.));
    }

    #[test]
    #[rustfmt::skip]
    fn transpose() {
        let m = Matrix::new([
            0., 9., 3., 0.,
            9., 8., 0., 8.,
            1., 8., 5., 3.,
            0., 0., 5., 8.,
        ]);
        let expected = Matrix::new([
            0., 9., 1., 0.,
            9., 8., 8., 0.,
            3., 0., 5., 5.,
            0., 8., 3., 8.,
        ]);

        assert_eq!(m.transpose(), expected);
        assert_eq!(Matrix::identity().transpose(), Matrix::identity());
    }

    #[test]
    #[rustfmt::skip]
    fn submatrix() {
        let m = Matrix::new([
            -6., 1., 1., 6.,
            -8., 5., 8., 6.,
            -1., 0., 8., 2.,
            -7., 1., -1., 1.,
        ]);
        let expected = Matrix3::new([
            -6., 1., 6.,
            -8., 8., 6.,
            -7., -1., 1.,
        ]);

        assert_eq!(m.submatrix(2, 1).unwrap(), expected);
    }

    #[test]
    #[rustfmt::skip]
    fn determinant() {
        let m = Matrix::new([
            -2., -8., 3., 5.,
            -3., 1., 7., 3.,
            1., 2., -9., 6.,
            -6., 7., 7., -9.,
        ]);

        assert_eq!(m.cofactor(0, 0).unwrap(), 690.);
        assert_eq!(m.cofactor(0, 1).unwrap(), 447.);
        assert_eq!(m.cofactor(0, 2).unwrap(), 210.);
        assert_eq!(m.cofactor(0, 3).unwrap(), 51.);
        assert_eq!(m.determinant(), -4071.);
    }

    #[test]
    #[rustfmt::skip]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix::new([
            -4., 2., -2., -3.,
            9., 6., 2., 6.,
            0., -5., 1., -5.,
            0., 0., 0., 0.,
        ]);

        assert_eq!(m.determinant(), 0.);
        assert!(matches!(m.inverse(), Err(Error::SingularMatrix)));
        assert!(matches!(
            Matrix::scaling(1., 0., 1.).inverse(),
            Err(Error::SingularMatrix)
        ));
    }

    #[test]
    #[rustfmt::skip]
    fn inverse() {
        let m = Matrix::new([
            -5., 2., 6., -8.,
            1., -5., 1., 8.,
            7., 7., -6., -7.,
            1., -3., 7., 4.,
        ]);
        let expected = Matrix::new([
            0.21805, 0.45113, 0.24060, -0.04511,
            -0.80827, -1.45677, -0.44361, 0.52068,
            -0.07895, -0.22368, -0.05263, 0.19737,
            -0.52256, -0.81391, -0.30075, 0.30639,
        ]);
        let inv = m.inverse().unwrap();

        assert_eq!(m.determinant(), 532.);
        assert_eq!(m.cofactor(2, 3).unwrap(), -160.);
        assert_approx_eq_low_prec!(inv[(3, 2)], -160. / 532.);
        assert_approx_eq_low_prec!(inv, expected);
    }

    #[test]
    fn matrix_times_inverse_is_identity() {
        let samples = [
            Matrix::translation(5., -3., 2.) * Matrix::rotation_y(consts::FRAC_PI_3),
            Matrix::scaling(2., 0.5, -4.) * Matrix::shearing(1., 0., 0.5, 0., 0., 2.),
            Matrix::view_transformation(
                Point::new(1., 3., 2.),
                Point::new(4., -2., 8.),
                Vector::new(1., 1., 0.),
            ),
        ];
        for m in samples {
            assert_approx_eq_low_prec!(m * m.inverse().unwrap(), Matrix::identity());
        }
    }

    #[test]
    #[rustfmt::skip]
    fn product_times_inverse_recovers_factor() {
        let a = Matrix::new([
            3., -9., 7., 3.,
            3., -8., 2., -9.,
            -4., 4., 4., 1.,
            -6., 5., -1., 1.,
        ]);
        let b = Matrix::new([
            8., 2., 2., 2.,
            3., -1., 7., 0.,
            7., 0., 5., 4.,
            6., -2., 0., 5.,
        ]);

        assert_approx_eq_low_prec!((a * b) * b.inverse().unwrap(), a);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let transform = Matrix::translation(5., -3., 2.);
        assert_eq!(transform * Point::new(-3., 4., 5.), Point::new(2., 1., 7.));
        assert_eq!(
            transform.inverse().unwrap() * Point::new(-3., 4., 5.),
            Point::new(-8., 7., 3.)
        );
        assert_eq!(transform * Vector::new(-3., 4., 5.), Vector::new(-3., 4., 5.));
    }

    #[test]
    fn scaling_applies_to_vectors() {
        let transform = Matrix::scaling(2., 3., 4.);
        assert_eq!(transform * Point::new(-4., 6., 8.), Point::new(-8., 18., 32.));
        assert_eq!(transform * Vector::new(-4., 6., 8.), Vector::new(-8., 18., 32.));
        assert_eq!(
            Matrix::scaling(-1., 1., 1.) * Point::new(2., 3., 4.),
            Point::new(-2., 3., 4.)
        );
    }

    #[test]
    fn rotations() {
        let p = Point::new(0., 1., 0.);
        assert_eq!(
            Matrix::rotation_x(consts::FRAC_PI_4) * p,
            Point::new(0., consts::FRAC_1_SQRT_2, consts::FRAC_1_SQRT_2)
        );
        assert_eq!(Matrix::rotation_x(consts::FRAC_PI_2) * p, Point::new(0., 0., 1.));

        let p = Point::new(0., 0., 1.);
        assert_eq!(Matrix::rotation_y(consts::FRAC_PI_2) * p, Point::new(1., 0., 0.));

        let p = Point::new(0., 1., 0.);
        assert_eq!(Matrix::rotation_z(consts::FRAC_PI_2) * p, Point::new(-1., 0., 0.));
    }

    #[test]
    fn shearing() {
        let p = Point::new(2., 3., 4.);
        assert_eq!(
            Matrix::shearing(1., 0., 0., 0., 0., 0.) * p,
            Point::new(5., 3., 4.)
        );
        assert_eq!(
            Matrix::shearing(0., 0., 0., 0., 0., 1.) * p,
            Point::new(2., 3., 7.)
        );
    }

    #[test]
    fn chained_multiplication_applies_right_to_left() {
        let p = Point::new(1., 0., 1.);
        let a = Matrix::rotation_x(consts::FRAC_PI_2);
        let b = Matrix::scaling(5., 5., 5.);
        let c = Matrix::translation(10., 5., 7.);

        assert_eq!((c * b * a) * p, Point::new(15., 0., 7.));
    }

    #[test]
    fn view_transformation_default_orientation_is_identity() {
        let from = Point::zero();
        let to = Point::new(0., 0., -1.);
        let up = Vector::new(0., 1., 0.);

        assert_eq!(Matrix::view_transformation(from, to, up), Matrix::identity());
    }

    #[test]
    fn view_transformation_moves_world() {
        let from = Point::new(0., 0., 8.);
        let to = Point::zero();
        let up = Vector::new(0., 1., 0.);

        assert_eq!(
            Matrix::view_transformation(from, to, up),
            Matrix::translation(0., 0., -8.)
        );
    }

    #[test]
    #[rustfmt::skip]
    fn arbitrary_view_transformation() {
        let from = Point::new(1., 3., 2.);
        let to = Point::new(4., -2., 8.);
        let up = Vector::new(1., 1., 0.);

        let expected = Matrix::new([
            -0.50709, 0.50709, 0.67612, -2.36643,
            0.76772, 0.60609, 0.12122, -2.82843,
            -0.35857, 0.59761, -0.71714, 0.,
            0., 0., 0., 1.,
        ]);

        assert_approx_eq_low_prec!(Matrix::view_transformation(from, to, up), expected);
    }
}
