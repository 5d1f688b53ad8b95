use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use derive_builder::Builder;

use crate::{
    error::{Error, Result},
    math::color::Color,
    scene::{Scene, camera::Camera},
};

use super::canvas::Canvas;

#[derive(Debug, Clone, Builder)]
#[builder(build_fn(error = "Error"))]
/// The renderer shades every pixel of the camera's image against the scene.
pub struct Renderer {
    scene: Scene,
    camera: Camera,
    #[builder(default = "false")]
    use_progress_bar: bool,
    /// Once set, pixels not yet shaded are left black.
    #[builder(setter(strip_option), default)]
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Renderer {
    const PROGRESS_TEMPLATE: &'static str = "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})";

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn color_at_pixel(&self, x: usize, y: usize) -> Color {
        if self.is_cancelled() {
            return Color::black();
        }
        self.scene
            .color_at(self.camera.ray_for_pixel(x as f64, y as f64))
    }

    fn progress_bar(&self, len: u64) -> Option<indicatif::ProgressBar> {
        if !self.use_progress_bar {
            return None;
        }
        let pb = indicatif::ProgressBar::new(len);
        match indicatif::ProgressStyle::with_template(Self::PROGRESS_TEMPLATE) {
            Ok(style) => Some(pb.with_style(style)),
            Err(err) => {
                log::warn!("invalid progress bar template: {err}");
                Some(pb)
            }
        }
    }

    /// Renders the scene into a new canvas, one ray per pixel.
    pub fn render(&self) -> Result<Canvas> {
        let mut image = self.camera.canvas()?;
        let pixel_count = image.width() * image.height();

        log::info!(
            "rendering image with {}x{} resolution",
            image.width(),
            image.height()
        );
        log::info!(
            "rendering {} objects with {} light sources",
            self.scene.objects().len(),
            self.scene.light_sources().len()
        );

        let now = std::time::Instant::now();
        let pb = self.progress_bar(pixel_count as u64);
        image.set_each_pixel(|x: usize, y: usize| self.color_at_pixel(x, y), pb);

        let elapsed = now.elapsed();
        if self.is_cancelled() {
            log::warn!("render cancelled after {elapsed:?}, unfinished pixels are black");
        } else {
            log::info!("render time: {elapsed:?}");
            let rays_per_sec = pixel_count as f64 / elapsed.as_secs_f64();
            log::debug!("rays per second: {}", rays_per_sec.round());
        }
        Ok(image)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn use_progress_bar(&self) -> bool {
        self.use_progress_bar
    }
}
