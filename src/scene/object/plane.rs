use crate::{
    approx_eq::ApproxEq,
    math::{point::Point, vector::Vector},
    render::ray::Ray,
};

/// Infinite plane through the local origin, oriented by its normal.
pub struct InfinitePlane {}

impl InfinitePlane {
    pub fn local_normal_at(normal: Vector) -> Vector {
        normal
    }

    /// A single time, or nothing when the ray runs parallel to the plane.
    pub fn local_intersect(normal: Vector, object_ray: &Ray) -> Vec<f64> {
        let normal_dot_dir = normal.dot(*object_ray.direction());
        if normal_dot_dir.approx_eq(&0.) {
            return Vec::new();
        }
        let normal_dot_origin = normal.dot(*object_ray.origin() - Point::zero());
        vec![-normal_dot_origin / normal_dot_dir]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{matrix::Matrix, tuple::Tuple},
        scene::object::{Object, ObjectBuilder, shape::Shape},
    };

    fn times(object: &Object, ray: &Ray) -> Vec<f64> {
        object.intersect(ray).iter().map(|i| i.time()).collect()
    }

    #[test]
    fn ray_parallel_to_plane() {
        let plane = Object::with_shape(Shape::plane());
        let ray = Ray::new(Point::new(0., 10., 0.), Vector::new(0., 0., 1.));

        assert!(times(&plane, &ray).is_empty());
    }

    #[test]
    fn coplanar_ray() {
        let plane = Object::with_shape(Shape::plane());
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));

        assert!(times(&plane, &ray).is_empty());
    }

    #[test]
    fn ray_intersecting_plane_from_above() {
        let plane = Object::with_shape(Shape::plane());
        let ray = Ray::new(Point::new(0., 1., 0.), Vector::new(0., -1., 0.));

        assert_eq!(times(&plane, &ray), vec![1.]);
    }

    #[test]
    fn ray_intersecting_plane_from_below() {
        let plane = Object::with_shape(Shape::plane());
        let ray = Ray::new(Point::new(0., -1., 0.), Vector::new(0., 1., 0.));

        assert_eq!(times(&plane, &ray), vec![1.]);
    }

    #[test]
    fn custom_normal() {
        let plane = Object::with_shape(Shape::plane_with_normal(Vector::new(0., 0., -2.)));
        let ray = Ray::new(Point::new(1., 1., -4.), Vector::new(0., 0., 2.));

        assert_eq!(times(&plane, &ray), vec![2.]);
        assert_eq!(plane.normal_at(Point::new(3., 4., 0.)), Vector::new(0., 0., -1.));
    }

    #[test]
    fn normal_of_plane_is_const_everywhere() {
        let plane = Object::with_shape(Shape::plane());
        let expected = Vector::new(0., 1., 0.);

        assert_eq!(plane.normal_at(Point::new(0., 0., 0.)), expected);
        assert_eq!(plane.normal_at(Point::new(10., 0., -10.)), expected);
        assert_eq!(plane.normal_at(Point::new(-5., 0., 150.)), expected);
    }

    #[test]
    fn translated_plane() {
        let plane = ObjectBuilder::default()
            .shape(Shape::plane())
            .transformation(Matrix::translation(0., -1., 0.))
            .unwrap()
            .build()
            .unwrap();
        let ray = Ray::new(Point::new(0., 1., 0.), Vector::new(0., -1., 0.));

        assert_eq!(times(&plane, &ray), vec![2.]);
    }
}
