use crate::{
    error::{Error, Result},
    math::{
        matrix::Matrix,
        point::Point,
        transform::{CachedTransform, Transformable},
        tuple::Tuple,
    },
    render::{canvas::Canvas, ray::Ray},
};

// camera looks toward -z direction from point zero
// this makes +x to be on the left
#[derive(PartialEq, Debug, Clone)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    transform: CachedTransform,

    pixel_size: f64,
    half_width: f64,
    half_height: f64,
    field_of_view: f64,
}

impl Transformable for Camera {
    fn cached_transform(&self) -> &CachedTransform {
        &self.transform
    }
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Result<Self> {
        Self::with_transformation(
            target_width,
            target_height,
            field_of_view,
            Matrix::identity(),
        )
    }

    /// Fails on a zero sized target or a transformation with no inverse.
    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        transformation: Matrix,
    ) -> Result<Self> {
        if target_width == 0 || target_height == 0 {
            return Err(Error::InvalidDimensions {
                width: target_width,
                height: target_height,
            });
        }
        let transform = CachedTransform::new(transformation)?;

        let half_view = (field_of_view / 2.).tan();
        let h_v_aspect = target_width as f64 / target_height as f64;

        let (half_width, half_height) = match h_v_aspect >= 1. {
            true => (half_view, half_view / h_v_aspect),
            false => (half_view * h_v_aspect, half_view),
        };

        let pixel_size = 2. * half_width / target_width as f64;

        log::debug!(
            "camera {target_width}x{target_height}, fov {field_of_view:.4} rad, pixel size {pixel_size:.6}"
        );

        Ok(Self {
            target_width,
            target_height,
            transform,

            pixel_size,
            half_width,
            half_height,
            field_of_view,
        })
    }

    /// Ray from the camera through the center of pixel (`x`, `y`).
    pub fn ray_for_pixel(&self, x: f64, y: f64) -> Ray {
        let x_offset_to_center = (x + 0.5) * self.pixel_size;
        let y_offset_to_center = (y + 0.5) * self.pixel_size;

        let scene_x = self.half_width - x_offset_to_center;
        let scene_y = self.half_height - y_offset_to_center;

        let pixel = self.transformation_inverse() * Point::new(scene_x, scene_y, -1.);
        let origin = self.transformation_inverse() * Point::zero();
        let direction = pixel - origin;

        Ray::new(origin, direction.normalize())
    }

    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.target_width, self.target_height)
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }
}
