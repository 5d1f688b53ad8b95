//! Ready made scenes for the command line renderer.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use clap::ValueEnum;

use super::{
    Scene, SceneBuilder,
    camera::Camera,
    light::PointLightSource,
    object::{Object, ObjectBuilder, material::Material, pattern::Pattern, shape::Shape},
};
use crate::{
    error::Result,
    math::{
        color::Color,
        matrix::Matrix,
        point::Point,
        transform::Transform,
        tuple::Tuple,
        vector::Vector,
    },
};

/// Field of view of the demo cameras when none is given.
pub const DEFAULT_FOV: f64 = FRAC_PI_3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// Three spheres in a room made of flattened spheres
    Spheres,
    /// Planes and spheres showing every pattern kind
    Patterns,
    /// Two concentric spheres used throughout the tests
    DefaultWorld,
}

impl DemoScene {
    pub fn scene(&self, cast_shadows: bool) -> Result<Scene> {
        let (objects, light_sources) = match self {
            DemoScene::Spheres => spheres()?,
            DemoScene::Patterns => patterns()?,
            DemoScene::DefaultWorld => {
                let world = Scene::default_testing();
                (world.objects().to_vec(), world.light_sources().to_vec())
            }
        };
        log::debug!(
            "assembled {self:?} scene: {} objects, {} light sources",
            objects.len(),
            light_sources.len()
        );

        SceneBuilder::default()
            .objects(objects)
            .light_sources(light_sources)
            .cast_shadows(cast_shadows)
            .build()
    }

    pub fn camera(&self, width: usize, height: usize, field_of_view: f64) -> Result<Camera> {
        let (from, to) = match self {
            DemoScene::Spheres | DemoScene::Patterns => {
                (Point::new(0., 1.5, -5.), Point::new(0., 1., 0.))
            }
            DemoScene::DefaultWorld => (Point::new(0., 0., -5.), Point::zero()),
        };
        let up_v = Vector::new(0., 1., 0.);

        Camera::with_transformation(
            width,
            height,
            field_of_view,
            Matrix::view_transformation(from, to, up_v),
        )
    }
}

fn white_light() -> Vec<PointLightSource> {
    vec![PointLightSource::new(
        Point::new(-10., 10., -10.),
        Color::white(),
    )]
}

fn spheres() -> Result<(Vec<Object>, Vec<PointLightSource>)> {
    let wall_material = Material {
        specular: 0.,
        ..Material::with_color(Color::new(1., 0.9, 0.9))
    };
    let wall = |y_rotation: f64| -> Result<Object> {
        ObjectBuilder::default()
            .shape(Shape::Sphere)
            .material(wall_material.clone())
            .transformation(
                Matrix::scaling(10., 0.01, 10.)
                    .rotate_x(FRAC_PI_2)
                    .rotate_y(y_rotation)
                    .translate(0., 0., 5.)
                    .transformed(),
            )?
            .build()
    };

    let floor = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(wall_material.clone())
        .transformation(Matrix::scaling(10., 0.01, 10.))?
        .build()?;

    let sphere_material = |color: Color| Material {
        diffuse: 0.7,
        specular: 0.3,
        ..Material::with_color(color)
    };
    let middle = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(sphere_material(Color::new(0.1, 1., 0.5)))
        .transformation(Matrix::translation(-0.5, 1., 0.5))?
        .build()?;
    let right = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(sphere_material(Color::new(0.5, 1., 0.1)))
        .transformation(
            Matrix::scaling_uniform(0.5)
                .translate(1.5, 0.5, -0.5)
                .transformed(),
        )?
        .build()?;
    let left = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(sphere_material(Color::new(1., 0.8, 0.1)))
        .transformation(
            Matrix::scaling_uniform(0.33)
                .translate(-1.5, 0.33, -0.75)
                .transformed(),
        )?
        .build()?;

    Ok((
        vec![
            floor,
            wall(-FRAC_PI_4)?,
            wall(FRAC_PI_4)?,
            middle,
            right,
            left,
        ],
        white_light(),
    ))
}

fn patterns() -> Result<(Vec<Object>, Vec<PointLightSource>)> {
    let floor = Object::with_shape_material(
        Shape::plane(),
        Material::with_pattern(
            Pattern::checkers_of(vec![
                Pattern::solid(Color::new(0.9, 0.9, 0.9)),
                Pattern::stripe(&[Color::new(0.15, 0.6, 0.7), Color::new(0.5, 0.1, 0.4)])
                    .with_transformation(
                        Matrix::scaling_uniform(0.25)
                            .rotate_y(FRAC_PI_4)
                            .transformed(),
                    )?,
            ]),
        ),
    );

    let back_wall = ObjectBuilder::default()
        .shape(Shape::plane_with_normal(Vector::new(0., 0., -1.)))
        .material(Material::with_pattern(
            Pattern::ring(&[Color::new(0.8, 0.3, 0.2), Color::new(0.95, 0.85, 0.6)])
                .with_transformation(Matrix::scaling_uniform(0.5))?,
        ))
        .transformation(Matrix::translation(0., 0., 8.))?
        .build()?;

    let middle = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(Material::with_pattern(
            Pattern::perturbed(
                Pattern::stripe(&[Color::red(), Color::white(), Color::blue()])
                    .with_transformation(Matrix::scaling_uniform(0.2))?,
                Pattern::DEFAULT_PERTURBATION,
            ),
        ))
        .transformation(Matrix::translation(-0.5, 1., 0.5))?
        .build()?;

    let right = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(Material::with_pattern(
            Pattern::gradient(Color::new(0.1, 0.2, 0.9), Color::new(0.9, 0.9, 0.2))
                .with_transformation(
                    Matrix::scaling_uniform(2.)
                        .translate(-1., 0., 0.)
                        .transformed(),
                )?,
        ))
        .transformation(
            Matrix::scaling_uniform(0.5)
                .translate(1.5, 0.5, -0.5)
                .transformed(),
        )?
        .build()?;

    let left = ObjectBuilder::default()
        .shape(Shape::Sphere)
        .material(Material::matte_with_color(Color::new(1., 0.8, 0.1)))
        .transformation(
            Matrix::scaling_uniform(0.33)
                .translate(-1.5, 0.33, -0.75)
                .transformed(),
        )?
        .build()?;

    let mut light_sources = white_light();
    light_sources.push(PointLightSource::new(
        Point::new(5., 3., -6.),
        Color::new(0.2, 0.2, 0.3),
    ));

    Ok((vec![floor, back_wall, middle, right, left], light_sources))
}
