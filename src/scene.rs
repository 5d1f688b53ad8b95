pub mod camera;
pub mod demo;
pub mod light;
pub mod object;

use derive_builder::Builder;

use crate::{
    approx_eq::ApproxEq,
    error::Error,
    math::{color::Color, matrix::Matrix, point::Point, tuple::Tuple},
    render::{
        intersection::{IntersecComputations, IntersectionCollection},
        ray::Ray,
    },
};

use light::PointLightSource;
use object::{Object, material::Material, pattern::Pattern, shape::Shape};

/// The world: every object and light of a render. Read only once built.
#[derive(PartialEq, Debug, Clone, Default, Builder)]
#[builder(default, build_fn(error = "Error"))]
pub struct Scene {
    objects: Vec<Object>,
    light_sources: Vec<PointLightSource>,
    /// Test shadow rays toward each light while shading.
    /// Off by default, every light then fully reaches every surface.
    cast_shadows: bool,
}

impl SceneBuilder {
    pub fn object(&mut self, object: Object) -> &mut Self {
        self.objects.get_or_insert_with(Vec::new).push(object);
        self
    }

    pub fn light_source(&mut self, light_source: PointLightSource) -> &mut Self {
        self.light_sources
            .get_or_insert_with(Vec::new)
            .push(light_source);
        self
    }
}

impl Scene {
    pub fn new(objects: Vec<Object>, light_sources: Vec<PointLightSource>) -> Self {
        Self {
            objects,
            light_sources,
            cast_shadows: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn light_sources(&self) -> &[PointLightSource] {
        &self.light_sources
    }

    pub fn cast_shadows(&self) -> bool {
        self.cast_shadows
    }

    /// Intersections of `ray` with every object, sorted by ascending time.
    pub fn intersect(&self, ray: Ray) -> IntersectionCollection<'_> {
        let intersections = self
            .objects
            .iter()
            .flat_map(|object| object.intersect(&ray))
            .collect();

        IntersectionCollection::new(ray, intersections).sorted()
    }

    /// Whether something stands between `point` and the light.
    pub fn is_shadowed(&self, light_source: &PointLightSource, point: Point) -> bool {
        let v = light_source.position() - point;
        let distance = v.magnitude();
        let ray = Ray::new(point, v.normalize());

        match self.intersect(ray).hit() {
            Some(inter) => inter.time() < distance && !inter.time().approx_eq(&distance),
            None => false,
        }
    }

    /// Sum of the contributions of every light at the hit.
    pub fn shade_hit(&self, hit_comps: &IntersecComputations) -> Color {
        let object = hit_comps.object();
        self.light_sources
            .iter()
            .map(|light_source| {
                let in_shadow =
                    self.cast_shadows && self.is_shadowed(light_source, hit_comps.over_point());
                object.material().lighting(
                    light_source,
                    object,
                    hit_comps.world_point(),
                    hit_comps.eye_v(),
                    hit_comps.normal_v(),
                    in_shadow,
                )
            })
            .sum()
    }

    /// Color seen along `ray`, black when nothing is hit.
    pub fn color_at(&self, ray: Ray) -> Color {
        self.intersect(ray)
            .hit_computations()
            .map_or(Color::black(), |hit_comps| self.shade_hit(&hit_comps))
    }
}

impl Scene {
    /// Two concentric spheres lit by a single white light.
    pub fn default_testing() -> Self {
        let sphere1 = Object::with_shape_material(
            Shape::Sphere,
            Material {
                pattern: Pattern::solid(Color::new(0.8, 1.0, 0.6)),
                ambient: 0.1,
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            },
        );
        let sphere2 = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(0.5))
            .expect("uniform scaling by 0.5 is invertible");

        Self::new(
            vec![sphere1, sphere2],
            vec![PointLightSource::new(
                Point::new(-10., 10., -10.),
                Color::white(),
            )],
        )
    }
}
