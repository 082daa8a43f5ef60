//! Uncompressed truecolor Targa encoding.
//!
//! Layout: an 18-byte header (image type 2, 24 bits per pixel, descriptor
//! bit 5 set), then rows from the top of the image down, each pixel stored
//! as blue, green, red.

use crate::{color_to_rgb, ImageBuffer};
use std::io::{self, Write};

/// Size of the fixed Targa header in bytes.
pub const HEADER_LEN: usize = 18;

/// Uncompressed truecolor image type.
const IMAGE_TYPE_TRUECOLOR: u8 = 2;
const BITS_PER_PIXEL: u8 = 24;
/// Image descriptor with the top-left origin bit set.
const DESCRIPTOR_TOP_LEFT: u8 = 0x20;

/// Build the 18-byte header for a `width` x `height` image.
pub fn header(width: u16, height: u16) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[2] = IMAGE_TYPE_TRUECOLOR;
    header[12..14].copy_from_slice(&width.to_le_bytes());
    header[14..16].copy_from_slice(&height.to_le_bytes());
    header[16] = BITS_PER_PIXEL;
    header[17] = DESCRIPTOR_TOP_LEFT;
    header
}

/// Encode `image` as a Targa stream.
///
/// Image row `height - 1` (the top) is written first.
pub fn write_tga<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    let (width, height) = match (u16::try_from(image.width), u16::try_from(image.height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{}x{} exceeds the Targa size limit",
                    image.width, image.height
                ),
            ))
        }
    };

    writer.write_all(&header(width, height))?;

    let mut row = Vec::with_capacity(image.width as usize * 3);
    for y in (0..image.height).rev() {
        row.clear();
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            row.extend_from_slice(&[b, g, r]);
        }
        writer.write_all(&row)?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_header_layout() {
        let h = header(600, 300);
        assert_eq!(&h[..3], &[0, 0, 2]);
        assert!(h[3..12].iter().all(|&b| b == 0));
        assert_eq!(&h[12..14], &[88, 2]); // 600 little-endian
        assert_eq!(&h[14..16], &[44, 1]); // 300 little-endian
        assert_eq!(h[16], 24);
        assert_eq!(h[17], 32);
    }

    #[test]
    fn test_pixel_order_and_rows() {
        let mut image = ImageBuffer::new(2, 2);
        // Bottom row
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        // Top row
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));
        image.set(1, 1, Color::new(2.0, -1.0, 0.5));

        let mut bytes = Vec::new();
        write_tga(&image, &mut bytes).unwrap();

        assert_eq!(bytes.len(), HEADER_LEN + 2 * 2 * 3);
        let pixels = &bytes[HEADER_LEN..];
        // Top row first, BGR
        assert_eq!(&pixels[0..3], &[255, 0, 0]);
        assert_eq!(&pixels[3..6], &[128, 0, 255]);
        // Then the bottom row
        assert_eq!(&pixels[6..9], &[0, 0, 255]);
        assert_eq!(&pixels[9..12], &[0, 255, 0]);
    }

    #[test]
    fn test_oversized_image_rejected() {
        let image = ImageBuffer {
            width: 70_000,
            height: 1,
            pixels: Vec::new(),
        };
        let err = write_tga(&image, Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
