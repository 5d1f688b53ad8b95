use crate::{
    approx_eq::EPSILON,
    math::{point::Point, vector::Vector},
    scene::object::Object,
};

use super::ray::Ray;

#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Object) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }
}

/// All intersections of one ray, in the order they were collected.
pub struct IntersectionCollection<'a> {
    ray: Ray,
    vec: Vec<Intersection<'a>>,
}

impl<'a> IntersectionCollection<'a> {
    pub fn new(ray: Ray, vec: Vec<Intersection<'a>>) -> Self {
        Self { ray, vec }
    }

    pub fn from_times_and_obj(ray: Ray, times: Vec<f64>, object: &'a Object) -> Self {
        Self::new(
            ray,
            times
                .into_iter()
                .map(|time| Intersection::new(time, object))
                .collect(),
        )
    }

    pub fn from_ray_and_obj(ray: Ray, object: &'a Object) -> Self {
        let vec = object.intersect(&ray);
        Self::new(ray, vec)
    }

    /// Sorts by ascending time. Equal times keep their relative order.
    pub fn sort(&mut self) {
        self.vec.sort_by(|i1, i2| i1.time().total_cmp(&i2.time()));
    }

    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// The visible intersection: smallest non-negative time, first one wins
    /// on ties. Doesn't rely on the collection being sorted.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.vec
            .iter()
            .filter(|inter| inter.time() >= 0.)
            .fold(None, |best: Option<&Intersection<'a>>, inter| match best {
                Some(best) if best.time() <= inter.time() => Some(best),
                _ => Some(inter),
            })
    }

    pub fn hit_computations(&self) -> Option<IntersecComputations<'a>> {
        self.hit().map(|hit| IntersecComputations::new(&self.ray, hit))
    }

    pub fn computations_at_id(&self, id: usize) -> Option<IntersecComputations<'a>> {
        self.vec
            .get(id)
            .map(|inter| IntersecComputations::new(&self.ray, inter))
    }

    pub fn times(&self) -> Vec<f64> {
        self.vec.iter().map(Intersection::time).collect()
    }
}

/// Everything shading needs to know about a hit.
#[derive(Debug, Clone, Copy)]
pub struct IntersecComputations<'a> {
    time: f64,
    object: &'a Object,
    world_point: Point,
    over_point: Point,
    eye_v: Vector,
    normal_v: Vector,
    inside: bool,
}

impl<'a> IntersecComputations<'a> {
    pub fn new(ray: &Ray, intersection: &Intersection<'a>) -> Self {
        let time = intersection.time();
        let object = intersection.object();
        let world_point = ray.position(time);
        let eye_v = -*ray.direction();
        let mut normal_v = object.normal_at(world_point);

        // normal points away from the eye, the ray starts inside the object
        let inside = normal_v.dot(eye_v) < 0.;
        if inside {
            normal_v = -normal_v;
        }
        let over_point = world_point + normal_v * EPSILON;

        Self {
            time,
            object,
            world_point,
            over_point,
            eye_v,
            normal_v,
            inside,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }
    pub fn world_point(&self) -> Point {
        self.world_point
    }
    /// World point nudged along the normal, the origin for shadow rays.
    pub fn over_point(&self) -> Point {
        self.over_point
    }
    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }
    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }
    pub fn inside(&self) -> bool {
        self.inside
    }
}
