use super::{matrix::Matrix, point::Point, vector::Vector};
use crate::{error::Result, render::ray::Ray};

/// Fluent chaining of transformations. Unlike plain `Matrix * Matrix`,
/// each call is applied after the ones before it.
pub trait Transform: Sized + Clone {
    fn transform(&mut self, matrix: &Matrix);

    fn transform_new(&self, matrix: &Matrix) -> Self {
        let mut copy = self.clone();
        copy.transform(matrix);
        copy
    }

    fn transformed(&self) -> Self {
        self.clone()
    }

    fn transform_chain(&mut self, transformation: &Matrix) -> &mut Self {
        self.transform(transformation);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling(x, y, z))
    }

    fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.transform_chain(&Matrix::scaling_uniform(factor))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix::rotation_z(radians))
    }

    fn shear(
        &mut self,
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> &mut Self {
        self.transform_chain(&Matrix::shearing(
            x_prop_y, x_prop_z, y_prop_x, y_prop_z, z_prop_x, z_prop_y,
        ))
    }
}

/// A transformation matrix together with its inverse and the transpose of
/// the inverse. Both are computed once, when the matrix is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedTransform {
    matrix: Matrix,
    inverse: Matrix,
    inverse_transpose: Matrix,
}

impl CachedTransform {
    /// Fails with `SingularMatrix` when `matrix` can't be inverted.
    pub fn new(matrix: Matrix) -> Result<Self> {
        let inverse = matrix.inverse()?;
        Ok(Self {
            matrix,
            inverse,
            inverse_transpose: inverse.transpose(),
        })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    pub fn inverse_transpose(&self) -> &Matrix {
        &self.inverse_transpose
    }
}

impl Default for CachedTransform {
    fn default() -> Self {
        Self {
            matrix: Matrix::identity(),
            inverse: Matrix::identity(),
            inverse_transpose: Matrix::identity(),
        }
    }
}

impl TryFrom<Matrix> for CachedTransform {
    type Error = crate::error::Error;

    fn try_from(matrix: Matrix) -> Result<Self> {
        Self::new(matrix)
    }
}

/// Anything placed in the world by a transformation: objects, patterns and
/// the camera. Conversions between world and local space go through the
/// cached matrices only.
pub trait Transformable {
    fn cached_transform(&self) -> &CachedTransform;

    fn transformation(&self) -> &Matrix {
        self.cached_transform().matrix()
    }

    fn transformation_inverse(&self) -> &Matrix {
        self.cached_transform().inverse()
    }

    fn world_to_local_point(&self, point: Point) -> Point {
        self.transformation_inverse() * point
    }

    fn world_to_local_ray(&self, ray: &Ray) -> Ray {
        ray.transform_new(self.transformation_inverse())
    }

    fn local_to_world_normal(&self, normal: Vector) -> Vector {
        self.cached_transform().inverse_transpose() * normal
    }

    fn local_to_world_point(&self, point: Point) -> Point {
        self.transformation() * point
    }
}

impl Transformable for CachedTransform {
    fn cached_transform(&self) -> &CachedTransform {
        self
    }
}
