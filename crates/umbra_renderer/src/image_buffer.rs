//! Radiance buffer and file output.

use crate::{color_to_rgb, tga, Color};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing an image to disk.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Linear radiance per pixel, row 0 at the bottom of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// 8-bit RGB bytes with the top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgb(self.get(x, y)));
            }
        }
        bytes
    }

    /// Write the image as an uncompressed Targa file.
    pub fn save_tga(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let file = File::create(path.as_ref())?;
        tga::write_tga(self, BufWriter::new(file))?;
        Ok(())
    }

    /// Write the image as an 8-bit RGB PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        image::save_buffer_with_format(
            path.as_ref(),
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;
        Ok(())
    }

    /// Write the image in the format named by the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("tga") => self.save_tga(path)?,
            Some("png") => self.save_png(path)?,
            other => {
                return Err(OutputError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> ImageBuffer {
        let mut image = ImageBuffer::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                image.set(x, y, Color::new(x as f64 / 3.0, y as f64 / 2.0, 0.25));
            }
        }
        image
    }

    #[test]
    fn test_get_set() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 6);
        assert_eq!(image.get(2, 1), Color::ZERO);

        image.set(2, 1, Color::ONE);
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.pixels[5], Color::ONE);
    }

    #[test]
    fn test_to_rgb8_top_row_first() {
        let bytes = gradient().to_rgb8();
        assert_eq!(bytes.len(), 4 * 3 * 3);
        // First pixel is (0, height - 1)
        assert_eq!(&bytes[0..3], &[0, 255, 64]);
        // Last pixel is (width - 1, 0)
        assert_eq!(&bytes[bytes.len() - 3..], &[255, 0, 64]);
    }

    #[test]
    fn test_save_tga_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tga");
        gradient().save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), tga::HEADER_LEN + 4 * 3 * 3);
        assert_eq!(&bytes[12..17], &[4, 0, 3, 0, 24]);
    }

    #[test]
    fn test_save_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = gradient();
        image.save(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.into_raw(), image.to_rgb8());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = gradient().save(dir.path().join("out.bmp")).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(ref ext) if ext == "bmp"));
    }

    #[test]
    fn test_unwritable_path() {
        let err = gradient()
            .save("/nonexistent-dir/umbra/out.tga")
            .unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
