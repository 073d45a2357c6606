// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/orientation.rs
//
// EXIF orientation: phone cameras store frames sideways and tag them.

use std::path::Path;

use image::{DynamicImage, imageops};

/// EXIF orientation tag values 1-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90,
    Transverse,
    Rotate270,
}

impl Orientation {
    /// Map an EXIF orientation value. Unknown values mean no transform.
    pub fn from_exif(value: u32) -> Self {
        match value {
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::Transverse,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// Turn a stored frame upright.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => image,
            Self::FlipHorizontal => DynamicImage::ImageRgba8(imageops::flip_horizontal(&image)),
            Self::Rotate180 => DynamicImage::ImageRgba8(imageops::rotate180(&image)),
            Self::FlipVertical => DynamicImage::ImageRgba8(imageops::flip_vertical(&image)),
            Self::Transpose => {
                let rotated = imageops::rotate90(&image);
                DynamicImage::ImageRgba8(imageops::flip_horizontal(&rotated))
            }
            Self::Rotate90 => DynamicImage::ImageRgba8(imageops::rotate90(&image)),
            Self::Transverse => {
                let rotated = imageops::rotate270(&image);
                DynamicImage::ImageRgba8(imageops::flip_horizontal(&rotated))
            }
            Self::Rotate270 => DynamicImage::ImageRgba8(imageops::rotate270(&image)),
        }
    }
}

/// Read the orientation tag of the file at `path`.
///
/// Files without EXIF data (PNG screenshots, stripped JPEGs) are `Normal`.
#[cfg(feature = "exif")]
pub fn read_orientation(path: &Path) -> Orientation {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Cannot read EXIF from {}: {e}", path.display());
            return Orientation::Normal;
        }
    };

    let mut reader = std::io::BufReader::new(file);
    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(e) => {
            log::debug!("No EXIF data in {}: {e}", path.display());
            return Orientation::Normal;
        }
    };

    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from_exif)
        .unwrap_or_default()
}

#[cfg(not(feature = "exif"))]
pub fn read_orientation(_path: &Path) -> Orientation {
    Orientation::Normal
}
