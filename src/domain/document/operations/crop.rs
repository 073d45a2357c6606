// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model and region blit.

use image::{RgbaImage, imageops};

use crate::domain::document::DocResult;
use crate::domain::geometry::Rect;

/// Crop region in pixel coordinates.
///
/// Pure domain model - represents an in-bounds rectangular region to crop.
/// No UI concerns, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Round a live rectangle to whole pixels and clip it to the image.
    ///
    /// Each edge is rounded on its own, then clamped to `[0, img_width]` and
    /// `[0, img_height]`. Returns `None` if nothing of the rectangle is left.
    pub fn from_rect_clamped(rect: Rect, img_width: u32, img_height: u32) -> Option<Self> {
        let clamp = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;

        let left = clamp(rect.x, img_width);
        let top = clamp(rect.y, img_height);
        let right = clamp(rect.right(), img_width);
        let bottom = clamp(rect.bottom(), img_height);

        let region = Self::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        );
        region.is_valid().then_some(region)
    }
}

/// Copy `region` of `source` into a new buffer at origin (0, 0).
///
/// `out(i, j) == source(region.x + i, region.y + j)`. No resampling.
pub fn crop_pixels(source: &RgbaImage, region: CropRegion) -> DocResult<RgbaImage> {
    let (img_width, img_height) = source.dimensions();
    if !region.is_valid() {
        anyhow::bail!("Crop region {region:?} has no area");
    }
    let exceeds =
        |start: u32, len: u32, max: u32| start.checked_add(len).is_none_or(|end| end > max);
    if exceeds(region.x, region.width, img_width) || exceeds(region.y, region.height, img_height) {
        anyhow::bail!("Crop region {region:?} exceeds image bounds {img_width}x{img_height}");
    }

    let (x, y, width, height) = region.as_tuple();
    Ok(imageops::crop_imm(source, x, y, width, height).to_image())
}

/// Clamp `rect` to `source` and blit the remaining region.
pub fn crop_rect(source: &RgbaImage, rect: Rect) -> DocResult<RgbaImage> {
    let (img_width, img_height) = source.dimensions();
    let region = CropRegion::from_rect_clamped(rect, img_width, img_height).ok_or_else(|| {
        anyhow::anyhow!("Crop rectangle {rect} lies outside the {img_width}x{img_height} image")
    })?;

    if (region.width as f32, region.height as f32) != (rect.width.round(), rect.height.round()) {
        log::debug!("Crop rectangle {rect} clamped to {region:?}");
    }

    crop_pixels(source, region)
}
