//! Picture decoding behind a small trait, plus the conversion into a Slint image.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::error::{AppError, Result};
use crate::image_cache::ImageCache;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;
use std::rc::Rc;

/// A decoded RGBA8 picture. Cloning shares the pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub pixels: Rc<[u8]>,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels: pixels.into(),
            width,
            height,
        }
    }
}

/// Turns a file into a displayable picture.
pub trait ImageDecoder {
    fn decode(&mut self, path: &Path) -> Result<DecodedImage>;
}

/// Decodes files from disk with the `image` crate, caching recent results.
pub struct FsImageDecoder {
    cache: ImageCache,
}

impl FsImageDecoder {
    pub fn new() -> Self {
        Self::with_capacity(IMAGE_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: ImageCache::new(capacity),
        }
    }
}

impl Default for FsImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for FsImageDecoder {
    fn decode(&mut self, path: &Path) -> Result<DecodedImage> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(cached);
        }

        let start = std::time::Instant::now();
        let decoded = load_image_blocking(path)?;
        log::debug!(
            "Decoded {} ({}x{}) in {:?}",
            path.display(),
            decoded.width,
            decoded.height,
            start.elapsed()
        );

        self.cache.put(path.to_path_buf(), decoded.clone());
        Ok(decoded)
    }
}

/// Load a picture synchronously and convert it to RGBA8.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let image = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .decode()?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage::new(rgba.into_raw(), width, height))
}

/// Create a Slint image from a decoded picture.
pub fn create_slint_image(image: &DecodedImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        &image.pixels[..],
        image.width,
        image.height,
    );
    Image::from_rgba8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]))
            .save(path)
            .expect("failed to write test png");
    }

    #[test]
    fn decodes_png_to_rgba() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("small.png");
        write_png(&path, 3, 2);

        let decoded = load_image_blocking(&path).expect("png should decode");
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&decoded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn guesses_format_from_content() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png = temp_dir.path().join("real.png");
        write_png(&png, 1, 1);
        let misnamed = temp_dir.path().join("misnamed.jpg");
        fs::copy(&png, &misnamed).expect("failed to copy png");

        assert!(load_image_blocking(&misnamed).is_ok());
    }

    #[test]
    fn garbage_fails_with_image_load_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("failed to write file");

        let result = load_image_blocking(&path);
        assert!(matches!(result, Err(AppError::ImageLoad(_))));
    }

    #[test]
    fn missing_file_fails_with_image_load_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image_blocking(&temp_dir.path().join("missing.png"));
        assert!(matches!(result, Err(AppError::ImageLoad(_))));
    }

    #[test]
    fn load_error_does_not_repeat_the_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.png");

        let err = load_image_blocking(&path).expect_err("missing file should fail");
        let message = err.to_string();
        assert!(message.starts_with("image load error: "), "{}", message);
        assert!(!message.contains("missing.png"), "{}", message);
    }

    #[test]
    fn decoder_serves_repeated_requests_from_cache() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("cached.png");
        write_png(&path, 4, 4);

        let mut decoder = FsImageDecoder::with_capacity(2);
        decoder.decode(&path).expect("png should decode");
        fs::remove_file(&path).expect("failed to remove file");

        let again = decoder.decode(&path).expect("second decode should hit the cache");
        assert_eq!((again.width, again.height), (4, 4));
    }
}
