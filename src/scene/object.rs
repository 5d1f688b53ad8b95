pub mod material;
pub mod pattern;
pub mod plane;
pub mod shape;
pub mod sphere;

use derive_builder::Builder;

use crate::{
    error::{Error, Result},
    math::{
        matrix::Matrix,
        point::Point,
        transform::{CachedTransform, Transformable},
        vector::Vector,
    },
    render::{intersection::Intersection, ray::Ray},
};

use material::Material;
use shape::Shape;

/// A shape placed in the world with a material. The transformation and its
/// derived matrices are fixed once the object is built.
#[derive(PartialEq, Debug, Clone, Builder)]
#[builder(build_fn(error = "Error"))]
pub struct Object {
    shape: Shape,
    #[builder(default)]
    material: Material,
    #[builder(setter(custom), default)]
    transform: CachedTransform,
}

impl ObjectBuilder {
    /// Fails with `SingularMatrix` when `matrix` has no inverse.
    pub fn transformation(&mut self, matrix: Matrix) -> Result<&mut Self> {
        self.transform = Some(CachedTransform::new(matrix)?);
        Ok(self)
    }
}

impl Transformable for Object {
    fn cached_transform(&self) -> &CachedTransform {
        &self.transform
    }
}

impl Object {
    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            material: Material::default(),
            transform: CachedTransform::default(),
        }
    }

    pub fn with_shape_material(shape: Shape, material: Material) -> Self {
        Self {
            material,
            ..Self::with_shape(shape)
        }
    }

    pub fn with_transformation(shape: Shape, matrix: Matrix) -> Result<Self> {
        Ok(Self {
            transform: CachedTransform::new(matrix)?,
            ..Self::with_shape(shape)
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersections of a world-space ray with this object, in the order the
    /// shape found them.
    pub fn intersect<'a>(&'a self, world_ray: &Ray) -> Vec<Intersection<'a>> {
        let object_ray = self.world_to_local_ray(world_ray);
        self.shape
            .local_intersect(&object_ray)
            .into_iter()
            .map(|time| Intersection::new(time, self))
            .collect()
    }

    /// Unit surface normal at a world-space point on the object.
    pub fn normal_at(&self, world_point: Point) -> Vector {
        let object_point = self.world_to_local_point(world_point);
        let object_normal = self.shape.local_normal_at(object_point);
        self.local_to_world_normal(object_normal).normalize()
    }
}
