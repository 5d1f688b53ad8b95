use super::{Object, pattern::Pattern};
use crate::{
    math::{color::Color, point::Point, vector::Vector},
    scene::light::PointLightSource,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub pattern: Pattern,
    pub ambient: f64,   // [0;1]
    pub diffuse: f64,   // [0;1]
    pub specular: f64,  // [0;1]
    pub shininess: f64, // [10;+inf) (typically up to 200.0)
}

impl Material {
    pub fn with_pattern(pattern: Pattern) -> Self {
        Self {
            pattern,
            ..Default::default()
        }
    }

    pub fn with_color(color: Color) -> Self {
        Self::with_pattern(Pattern::solid(color))
    }

    pub fn matte_with_color(color: Color) -> Self {
        Self {
            pattern: Pattern::solid(color),
            specular: 0.05,
            shininess: 15.,
            ..Default::default()
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Phong shading of `point` on `object` as seen from `eye_v`.
    /// A point in shadow only gets the ambient term.
    pub fn lighting(
        &self,
        light: &PointLightSource,
        object: &Object,
        point: Point,
        eye_v: Vector,
        normal_v: Vector,
        in_shadow: bool,
    ) -> Color {
        // combine surface color with the light's intensity
        let effective_color = self.pattern.color_at_object(object, point) * light.intensity();
        let ambient = effective_color * self.ambient;
        if in_shadow {
            return ambient;
        }

        let light_v = (light.position() - point).normalize();
        let light_dot_normal = light_v.dot(normal_v);

        // light is on the other side of the surface
        if light_dot_normal < 0. {
            return ambient;
        }
        let diffuse = effective_color * self.diffuse * light_dot_normal;

        let reflect_v = (-light_v).reflect(normal_v);
        let reflect_dot_eye = reflect_v.dot(eye_v);

        // light reflects away from the eye
        if reflect_dot_eye <= 0. {
            return ambient + diffuse;
        }
        let specular = light.intensity() * self.specular * reflect_dot_eye.powf(self.shininess);

        ambient + diffuse + specular
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            pattern: Pattern::solid(Color::white()),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}
