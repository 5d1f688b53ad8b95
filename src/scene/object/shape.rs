use super::{plane::InfinitePlane, sphere::UnitSphere};
use crate::{
    math::{point::Point, tuple::Tuple, vector::Vector},
    render::ray::Ray,
};

/// Geometry of an object in its own local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere,
    Plane { normal: Vector },
}

impl Shape {
    /// Plane through the origin facing +Y.
    pub fn plane() -> Self {
        Self::Plane {
            normal: Vector::new(0., 1., 0.),
        }
    }

    pub fn plane_with_normal(normal: Vector) -> Self {
        Self::Plane {
            normal: normal.normalize(),
        }
    }

    /// Times at which `object_ray` meets the shape, in discovery order.
    pub fn local_intersect(&self, object_ray: &Ray) -> Vec<f64> {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(object_ray),
            Shape::Plane { normal } => InfinitePlane::local_intersect(*normal, object_ray),
        }
    }

    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        match self {
            Shape::Sphere => UnitSphere::local_normal_at(object_point),
            Shape::Plane { normal } => InfinitePlane::local_normal_at(*normal),
        }
    }
}
