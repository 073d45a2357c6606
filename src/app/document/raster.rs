// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::fs;
use std::path::Path;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, RgbaImage};

use super::orientation::{self, Orientation};
use crate::domain::document::DocResult;

/// A captured receipt frame (camera still or loaded photo).
pub struct RasterDocument {
    /// Upright RGBA pixels, read-only to the crop selector.
    pixels: RgbaImage,
    /// Orientation that was applied while loading.
    orientation: Orientation,
}

impl RasterDocument {
    /// Load a raster document from disk, upright per its EXIF orientation.
    pub fn open(path: &Path) -> DocResult<Self> {
        let decoded = ImageReader::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        let orientation = orientation::read_orientation(path);
        let pixels = orientation.apply(decoded).into_rgba8();

        log::info!(
            "Opened {} ({}x{}, {:?})",
            path.display(),
            pixels.width(),
            pixels.height(),
            orientation
        );

        Ok(Self {
            pixels,
            orientation,
        })
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

/// Encode `image` as baseline JPEG. Alpha is dropped.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> DocResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    let mut bytes = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))
        .context("Failed to encode JPEG")?;
    Ok(bytes)
}

/// Write encoded bytes to `path`, creating parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> DocResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("receipt-crop-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_jpeg_has_magic_and_dimensions() {
        let image = RgbaImage::from_pixel(40, 30, Rgba([200, 100, 50, 128]));
        let bytes = encode_jpeg(&image, 90).unwrap();

        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }

    #[test]
    fn test_open_png_without_exif() {
        let path = temp_path("frame.png");
        let image = RgbaImage::from_fn(16, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        image.save(&path).unwrap();

        let doc = RasterDocument::open(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(doc.dimensions(), (16, 8));
        assert_eq!(doc.orientation(), Orientation::Normal);
        assert_eq!(doc.pixels(), &image);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let err = RasterDocument::open(&temp_path("missing.jpg")).err().unwrap();
        assert!(err.to_string().contains("Failed to open"));
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = temp_path("out");
        let path = dir.join("nested").join("receipt.jpg");

        write_file(&path, b"data").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"data");
        fs::remove_dir_all(&dir).ok();
    }
}
