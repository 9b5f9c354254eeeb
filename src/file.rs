// Canvas persistence through the `image` crate.
// Save converts the 0x00RRGGBB buffer to an RGB image and writes it; the
// output format comes from the path's extension. Load decodes a file,
// resizes it to the canvas dimensions when they differ (the canvas itself
// is never resized) and replaces the canvas contents wholesale.

use image::{RgbImage, imageops::FilterType};

use crate::error::Error;
use crate::types::{Canvas, Color};

/// Write the canvas to `path`. The canvas is not touched; a failed write is
/// reported and nothing else changes.
pub fn save(canvas: &Canvas, path: &str) -> Result<(), Error> {
    let mut img = RgbImage::new(canvas.width as u32, canvas.height as u32);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let c = Color::unpack(canvas.pixels[y as usize * canvas.width + x as usize]);
        *px = image::Rgb([c.r, c.g, c.b]);
    }
    img.save(path)
        .map_err(|e| Error::ImageSave(format!("{path}: {e}")))
}

/// Replace the canvas contents with the image at `path`. On any failure the
/// canvas is left exactly as it was.
pub fn load(canvas: &mut Canvas, path: &str) -> Result<(), Error> {
    let img = image::open(path).map_err(|e| Error::ImageLoad(format!("{path}: {e}")))?;

    let (w, h) = (canvas.width as u32, canvas.height as u32);
    let img = if img.width() == w && img.height() == h {
        img
    } else {
        img.resize_exact(w, h, FilterType::Nearest)
    };

    for (x, y, px) in img.to_rgb8().enumerate_pixels() {
        let c = Color::new(px[0], px[1], px[2]);
        canvas.pixels[y as usize * canvas.width + x as usize] = c.pack();
    }
    Ok(())
}
