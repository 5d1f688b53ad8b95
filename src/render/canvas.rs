use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    math::color::Color,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Row-major grid of colors, the sink every render writes into.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Fails with `InvalidDimensions` unless both sides are positive.
    pub fn with_color(width: usize, height: usize, color: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![color; height * width],
        })
    }

    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width * y + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Color> {
        Ok(self.pixels[self.index(x, y)?])
    }
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) -> Result<()> {
        let id = self.index(x, y)?;
        self.pixels[id] = new_color;
        Ok(())
    }

    /// Every pixel once, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.pixels.iter()
    }

    /// Computes every pixel in parallel. Each worker writes only the cell it
    /// was handed, so no locking is involved.
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: Option<indicatif::ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;
        let shade = |(id, pixel_color): (usize, &mut Color)| {
            let x = id % width;
            let y = id / width;
            *pixel_color = fun(x, y);
        };

        match progressbar {
            Some(pb) => self
                .pixels
                .par_iter_mut()
                .enumerate()
                .progress_with(pb)
                .for_each(shade),
            None => self.pixels.par_iter_mut().enumerate().for_each(shade),
        }
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        match format {
            ImageFormat::Ppm => self.save_to_ppm(file),
            ImageFormat::Png => self.save_to_png(file),
        }
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// Each row starts on a new line, lines never exceed `MAX_LINE_LEN`.
    fn ppm_data(&self) -> String {
        let mut data = String::new();

        for row in self.pixels.chunks(self.width) {
            let mut line_len = 0;
            for val in row.iter().flat_map(|color| color.as_scaled_values()) {
                let val_str = val.to_string();
                if line_len > 0 && line_len + 1 + val_str.len() > Self::MAX_LINE_LEN {
                    data.push('\n');
                    line_len = 0;
                }
                if line_len > 0 {
                    data.push(' ');
                    line_len += 1;
                }
                data.push_str(&val_str);
                line_len += val_str.len();
            }
            data.push('\n');
        }
        data
    }

    pub fn to_ppm(&self) -> String {
        self.ppm_header() + &self.ppm_data()
    }

    pub fn save_to_ppm<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_ppm().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.as_u8_rgb())?;
        writer.finish()?;
        Ok(())
    }
}
