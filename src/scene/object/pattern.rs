use super::Object;
use crate::{
    error::Result,
    math::{
        color::Color,
        matrix::Matrix,
        noise::perlin,
        point::Point,
        transform::{CachedTransform, Transformable},
        tuple::Tuple,
        vector::Vector,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum PatternKind {
    Solid(Color),
    /// Bands alternating as x changes
    Stripe(Vec<Pattern>),
    /// Rings extending in x and z
    Ring(Vec<Pattern>),
    /// 3D checkerboard
    Checkers(Vec<Pattern>),
    /// Linear blend along x, restarting at every integer
    Gradient { start: Color, end: Color },
    /// Inner pattern sampled at a point jittered by noise
    Perturbed { inner: Box<Pattern>, scale: f64 },
    /// Returns the pattern-space point as a color
    Test,
}

/// A surface color function with its own transformation.
///
/// The parent's transformation only picks which child is used. Children are
/// positioned relative to the object, like any top level pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transform: CachedTransform,
}

impl Transformable for Pattern {
    fn cached_transform(&self) -> &CachedTransform {
        &self.transform
    }
}

impl Pattern {
    pub const DEFAULT_PERTURBATION: f64 = 0.2;

    pub fn new(kind: PatternKind) -> Self {
        if let PatternKind::Stripe(children)
        | PatternKind::Ring(children)
        | PatternKind::Checkers(children) = &kind
        {
            assert!(
                !children.is_empty(),
                "composite pattern needs at least one child"
            );
        }
        Self {
            kind,
            transform: CachedTransform::default(),
        }
    }

    /// Fails with `SingularMatrix` when `matrix` has no inverse.
    pub fn with_transformation(self, matrix: Matrix) -> Result<Self> {
        Ok(Self {
            transform: CachedTransform::new(matrix)?,
            ..self
        })
    }

    pub fn solid(color: Color) -> Self {
        Self::new(PatternKind::Solid(color))
    }

    fn solids(colors: &[Color]) -> Vec<Pattern> {
        colors.iter().copied().map(Self::solid).collect()
    }

    pub fn stripe(colors: &[Color]) -> Self {
        Self::stripe_of(Self::solids(colors))
    }

    pub fn stripe_of(children: Vec<Pattern>) -> Self {
        Self::new(PatternKind::Stripe(children))
    }

    pub fn ring(colors: &[Color]) -> Self {
        Self::ring_of(Self::solids(colors))
    }

    pub fn ring_of(children: Vec<Pattern>) -> Self {
        Self::new(PatternKind::Ring(children))
    }

    pub fn checkers(colors: &[Color]) -> Self {
        Self::checkers_of(Self::solids(colors))
    }

    pub fn checkers_of(children: Vec<Pattern>) -> Self {
        Self::new(PatternKind::Checkers(children))
    }

    pub fn gradient(start: Color, end: Color) -> Self {
        Self::new(PatternKind::Gradient { start, end })
    }

    pub fn perturbed(inner: Pattern, scale: f64) -> Self {
        Self::new(PatternKind::Perturbed {
            inner: Box::new(inner),
            scale,
        })
    }

    pub fn test_pattern() -> Self {
        Self::new(PatternKind::Test)
    }

    /// Index of the band `value` falls in. Values are truncated toward zero,
    /// negative indices wrap around from the end.
    fn band(value: f64, count: usize) -> usize {
        (value.trunc() as i64).rem_euclid(count as i64) as usize
    }

    /// Color at a point in the object's local space. Every pattern applies
    /// only its own inverse to it, children of composites included.
    pub fn color_at(&self, object_point: Point) -> Color {
        let point = self.world_to_local_point(object_point);
        match &self.kind {
            PatternKind::Solid(color) => *color,
            PatternKind::Stripe(children) => {
                children[Self::band(point.x(), children.len())].color_at(object_point)
            }
            PatternKind::Ring(children) => {
                let distance = (point.x().powi(2) + point.z().powi(2)).sqrt();
                children[Self::band(distance, children.len())].color_at(object_point)
            }
            PatternKind::Checkers(children) => {
                let sum = point.x().trunc() + point.y().trunc() + point.z().trunc();
                children[Self::band(sum, children.len())].color_at(object_point)
            }
            PatternKind::Gradient { start, end } => {
                *start + (*end - *start) * (point.x() - point.x().floor())
            }
            PatternKind::Perturbed { inner, scale } => {
                // noise is sampled in this pattern's space, the jitter moves the object point
                let (x, y, z) = (point.x(), point.y(), point.z());
                let jitter = Vector::new(
                    perlin(x, y, z),
                    perlin(x, y, z + 1.),
                    perlin(x, y, z + 2.),
                );
                inner.color_at(object_point + jitter * *scale)
            }
            PatternKind::Test => Color::new(point.x(), point.y(), point.z()),
        }
    }

    /// Color of `object` at a world-space point on its surface.
    pub fn color_at_object(&self, object: &Object, world_point: Point) -> Color {
        self.color_at(object.world_to_local_point(world_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, scene::object::shape::Shape};

    fn rwb() -> Pattern {
        Pattern::stripe(&[Color::red(), Color::white(), Color::blue()])
    }

    #[test]
    fn stripe_is_const_in_y_and_z() {
        let stripe = Pattern::stripe(&[Color::white(), Color::black()]);

        for (y, z) in [(0., 0.), (1., 0.), (2., 0.), (0., 1.), (0., 2.)] {
            assert_eq!(stripe.color_at(Point::new(0., y, z)), Color::white());
        }
    }

    #[test]
    fn stripe_alternates_in_x() {
        let stripe = Pattern::stripe(&[Color::white(), Color::black()]);

        assert_eq!(stripe.color_at(Point::new(0., 0., 0.)), Color::white());
        assert_eq!(stripe.color_at(Point::new(0.9, 0., 0.)), Color::white());
        assert_eq!(stripe.color_at(Point::new(1., 0., 0.)), Color::black());
        assert_eq!(stripe.color_at(Point::new(2., 0., 0.)), Color::white());
    }

    #[test]
    fn stripe_with_three_colors_wraps_negative_x() {
        let stripe = rwb();

        assert_eq!(stripe.color_at(Point::new(-1.1, 0., 0.)), Color::blue());
        assert_eq!(stripe.color_at(Point::new(0.9, 0., 0.)), Color::red());
        assert_eq!(stripe.color_at(Point::new(1., 0., 0.)), Color::white());
        assert_eq!(stripe.color_at(Point::new(2.5, 0., 0.)), Color::blue());
        assert_eq!(stripe.color_at(Point::new(3., 0., 0.)), Color::red());
    }

    #[test]
    #[should_panic]
    fn empty_composite_panics() {
        let _ = Pattern::stripe(&[]);
    }

    #[test]
    fn stripe_with_object_transformation() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let pattern = Pattern::stripe(&[Color::white(), Color::black()]);

        assert_eq!(
            pattern.color_at_object(&obj, Point::new(1.5, 0., 0.)),
            Color::white()
        );
    }

    #[test]
    fn stripe_with_pattern_transformation() {
        let obj = Object::with_shape(Shape::Sphere);
        let pattern = Pattern::stripe(&[Color::white(), Color::black()])
            .with_transformation(Matrix::scaling_uniform(2.))
            .unwrap();

        assert_eq!(
            pattern.color_at_object(&obj, Point::new(1.5, 0., 0.)),
            Color::white()
        );
    }

    #[test]
    fn stripe_with_both_transformations() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let pattern = Pattern::stripe(&[Color::white(), Color::black()])
            .with_transformation(Matrix::translation(0.5, 0., 0.))
            .unwrap();

        assert_eq!(
            pattern.color_at_object(&obj, Point::new(2.5, 0., 0.)),
            Color::white()
        );
    }

    #[test]
    fn test_pattern_reports_the_transform_chain() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let pattern = Pattern::test_pattern()
            .with_transformation(Matrix::translation(0.5, 1., 1.5))
            .unwrap();

        assert_eq!(
            pattern.color_at_object(&obj, Point::new(2.5, 3., 3.5)),
            Color::new(0.75, 0.5, 0.25)
        );
    }

    #[test]
    fn singular_pattern_transformation_is_rejected() {
        assert!(
            Pattern::test_pattern()
                .with_transformation(Matrix::scaling(0., 1., 1.))
                .is_err()
        );
    }

    #[test]
    fn gradient_interpolates_and_wraps() {
        let pattern = Pattern::gradient(Color::white(), Color::black());

        assert_eq!(pattern.color_at(Point::new(0., 0., 0.)), Color::white());
        assert_eq!(
            pattern.color_at(Point::new(0.25, 0., 0.)),
            Color::new(0.75, 0.75, 0.75)
        );
        assert_eq!(
            pattern.color_at(Point::new(0.75, 0., 0.)),
            Color::new(0.25, 0.25, 0.25)
        );
        assert_eq!(
            pattern.color_at(Point::new(1.25, 0., 0.)),
            Color::new(0.75, 0.75, 0.75)
        );
        assert_eq!(
            pattern.color_at(Point::new(-0.25, 0., 0.)),
            Color::new(0.25, 0.25, 0.25)
        );
    }

    #[test]
    fn ring_extends_in_x_and_z() {
        let pattern = Pattern::ring(&[Color::white(), Color::black()]);

        assert_eq!(pattern.color_at(Point::new(0., 0., 0.)), Color::white());
        assert_eq!(pattern.color_at(Point::new(1., 0., 0.)), Color::black());
        assert_eq!(pattern.color_at(Point::new(0., 0., 1.)), Color::black());
        assert_eq!(pattern.color_at(Point::new(0.708, 0., 0.708)), Color::black());
        assert_eq!(pattern.color_at(Point::new(0., 5., 2.)), Color::white());
    }

    #[test]
    fn checkers_repeat_in_each_dimension() {
        let pattern = Pattern::checkers(&[Color::white(), Color::black()]);

        assert_eq!(pattern.color_at(Point::new(0., 0., 0.)), Color::white());
        assert_eq!(pattern.color_at(Point::new(0.99, 0., 0.)), Color::white());
        assert_eq!(pattern.color_at(Point::new(1.01, 0., 0.)), Color::black());
        assert_eq!(pattern.color_at(Point::new(0., 0.99, 0.)), Color::white());
        assert_eq!(pattern.color_at(Point::new(0., 1.01, 0.)), Color::black());
        assert_eq!(pattern.color_at(Point::new(0., 0., 0.99)), Color::white());
        assert_eq!(pattern.color_at(Point::new(0., 0., 1.01)), Color::black());
        assert_eq!(pattern.color_at(Point::new(1.5, 1.5, 0.)), Color::white());
    }

    #[test]
    fn child_of_transformed_composite_sees_object_space() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let pattern = Pattern::stripe_of(vec![Pattern::test_pattern()])
            .with_transformation(Matrix::translation(10., 0., 0.))
            .unwrap();

        assert_eq!(
            pattern.color_at_object(&obj, Point::new(20.5, 0., 0.)),
            Color::new(10.25, 0., 0.)
        );
    }

    #[test]
    fn child_applies_only_its_own_transformation() {
        let obj = Object::with_transformation(Shape::Sphere, Matrix::scaling_uniform(2.)).unwrap();
        let child = Pattern::test_pattern()
            .with_transformation(Matrix::translation(1., 0., 0.))
            .unwrap();
        let pattern = Pattern::stripe_of(vec![child, Pattern::solid(Color::blue())])
            .with_transformation(Matrix::translation(10., 0., 0.))
            .unwrap();

        // object x = 10.25, parent x = 0.25 -> first child at 10.25 - 1
        assert_eq!(
            pattern.color_at_object(&obj, Point::new(20.5, 0., 0.)),
            Color::new(9.25, 0., 0.)
        );
        // object x = 11.25, parent x = 1.25 -> second child
        assert_eq!(
            pattern.color_at_object(&obj, Point::new(22.5, 0., 0.)),
            Color::blue()
        );
    }

    #[test]
    fn nested_composites_pick_bands_in_their_own_space() {
        let inner = Pattern::stripe(&[Color::red(), Color::green()])
            .with_transformation(Matrix::scaling(0.5, 1., 1.))
            .unwrap();
        let outer = Pattern::checkers_of(vec![inner, Pattern::solid(Color::blue())])
            .with_transformation(Matrix::translation(10., 0., 0.))
            .unwrap();
        let obj = Object::with_shape(Shape::plane());

        // outer x = 0.25, inner x = 10.25 / 0.5 = 20.5
        assert_eq!(
            outer.color_at_object(&obj, Point::new(10.25, 0., 0.)),
            Color::red()
        );
        // outer x = 0.6, inner x = 21.2
        assert_eq!(
            outer.color_at_object(&obj, Point::new(10.6, 0., 0.)),
            Color::green()
        );
        assert_eq!(
            outer.color_at_object(&obj, Point::new(11.5, 0., 0.)),
            Color::blue()
        );
    }

    #[test]
    fn perturbed_inner_applies_only_its_own_transformation() {
        let inner = Pattern::test_pattern()
            .with_transformation(Matrix::translation(0.5, 0., 0.))
            .unwrap();
        let pattern = Pattern::perturbed(inner, Pattern::DEFAULT_PERTURBATION)
            .with_transformation(Matrix::translation(10., 0., 0.))
            .unwrap();

        // (-9, 2, 3) is a lattice point in the perturbed space, so nothing moves
        assert_approx_eq_low_prec!(
            pattern.color_at(Point::new(1., 2., 3.)),
            Color::new(0.5, 2., 3.)
        );
    }

    #[test]
    fn perturbed_keeps_lattice_points() {
        let inner = Pattern::test_pattern();
        let pattern = Pattern::perturbed(inner.clone(), Pattern::DEFAULT_PERTURBATION);

        // noise vanishes on integer lattice points
        let p = Point::new(1., 2., 3.);
        assert_approx_eq_low_prec!(pattern.color_at(p), inner.color_at(p));
    }

    #[test]
    fn perturbed_jitter_is_bounded_by_scale() {
        let scale = 0.2;
        let pattern = Pattern::perturbed(Pattern::test_pattern(), scale);

        for i in 0..50 {
            let t = i as f64 * 0.37 + 0.11;
            let p = Point::new(t, -t * 0.5, t * 0.25 + 0.3);
            let c = pattern.color_at(p);
            assert!((c.r() - p.x()).abs() <= scale * 1.1);
            assert!((c.g() - p.y()).abs() <= scale * 1.1);
            assert!((c.b() - p.z()).abs() <= scale * 1.1);
        }
    }

    #[test]
    fn perturbed_moves_off_lattice_points() {
        let pattern = Pattern::perturbed(Pattern::test_pattern(), 1.);
        let moved = (0..20).any(|i| {
            let p = Point::new(0.3 + i as f64 * 0.41, 0.7, 0.2);
            pattern.color_at(p) != Color::new(p.x(), p.y(), p.z())
        });
        assert!(moved);
    }
}
