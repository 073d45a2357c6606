// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/detect.rs
//
// Bright-region detector: coarse receipt-on-dark-background heuristic.

use image::RgbaImage;

use crate::config::DetectionParams;
use crate::domain::geometry::Rect;

/// Bounding box over sampled pixels, inclusive on all sides.
#[derive(Debug, Clone, Copy)]
struct BrightBounds {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl BrightBounds {
    fn at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

/// Estimate the document region of `image`.
///
/// Samples every `params.stride` pixels and bounds those brighter than
/// `params.threshold`. Returns `None` when nothing is bright or the bright box
/// is not larger than `params.min_extent` on both axes; callers then fall back
/// to [`default_region`].
pub fn detect_bright_region(image: &RgbaImage, params: &DetectionParams) -> Option<Rect> {
    let (width, height) = image.dimensions();
    let stride = params.stride.max(1) as usize;
    let limit = u16::from(params.threshold) * 3;

    let mut bounds: Option<BrightBounds> = None;

    for y in (0..height).step_by(stride) {
        for x in (0..width).step_by(stride) {
            let [r, g, b, _] = image.get_pixel(x, y).0;
            if u16::from(r) + u16::from(g) + u16::from(b) <= limit {
                continue;
            }
            match bounds.as_mut() {
                Some(b) => b.include(x, y),
                None => bounds = Some(BrightBounds::at(x, y)),
            }
        }
    }

    let bounds = bounds?;
    if bounds.max_x - bounds.min_x <= params.min_extent
        || bounds.max_y - bounds.min_y <= params.min_extent
    {
        return None;
    }

    let left = bounds.min_x.saturating_sub(params.margin);
    let top = bounds.min_y.saturating_sub(params.margin);
    let right = bounds.max_x.saturating_add(params.margin).min(width);
    let bottom = bounds.max_y.saturating_add(params.margin).min(height);

    Some(Rect::new(
        left as f32,
        top as f32,
        (right - left) as f32,
        (bottom - top) as f32,
    ))
}

/// Centered rectangle covering `ratio` of each dimension.
pub fn default_region(width: u32, height: u32, ratio: f32) -> Rect {
    let w = width as f32 * ratio;
    let h = height as f32 * ratio;
    Rect::new((width as f32 - w) / 2.0, (height as f32 - h) / 2.0, w, h)
}

/// Initial crop rectangle and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proposal {
    Detected(Rect),
    Fallback(Rect),
}

impl Proposal {
    pub fn rect(&self) -> Rect {
        match self {
            Self::Detected(rect) | Self::Fallback(rect) => *rect,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected(_))
    }
}

/// Detected region, or the centered default when detection is inconclusive.
pub fn propose_region(image: &RgbaImage, params: &DetectionParams, ratio: f32) -> Proposal {
    match detect_bright_region(image, params) {
        Some(rect) => {
            log::debug!("Detected bright region {rect}");
            Proposal::Detected(rect)
        }
        None => {
            let (width, height) = image.dimensions();
            let rect = default_region(width, height, ratio);
            log::debug!("Detection inconclusive, using default region {rect}");
            Proposal::Fallback(rect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const DARK: Rgba<u8> = Rgba([30, 30, 30, 255]);
    const PAPER: Rgba<u8> = Rgba([240, 240, 235, 255]);

    /// Dark image with a bright block covering `x0..=x1` x `y0..=y1`.
    fn with_block(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x0..=x1).contains(&x) && (y0..=y1).contains(&y) {
                PAPER
            } else {
                DARK
            }
        })
    }

    #[test]
    fn test_dark_image_is_inconclusive() {
        let image = RgbaImage::from_pixel(500, 500, DARK);
        assert_eq!(detect_bright_region(&image, &DetectionParams::default()), None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Mean exactly 180 does not count as bright.
        let image = RgbaImage::from_pixel(300, 300, Rgba([180, 180, 180, 255]));
        assert_eq!(detect_bright_region(&image, &DetectionParams::default()), None);

        let image = RgbaImage::from_pixel(300, 300, Rgba([181, 180, 180, 255]));
        assert!(detect_bright_region(&image, &DetectionParams::default()).is_some());
    }

    #[test]
    fn test_dark_image_falls_back_to_centered_default() {
        let image = RgbaImage::from_pixel(500, 500, DARK);
        let proposal = propose_region(&image, &DetectionParams::default(), 0.8);

        assert_eq!(proposal, Proposal::Fallback(Rect::new(50.0, 50.0, 400.0, 400.0)));
    }

    #[test]
    fn test_receipt_block_with_margin() {
        let image = with_block(1000, 800, 200, 150, 700, 650);
        let proposal = propose_region(&image, &DetectionParams::default(), 0.8);

        assert_eq!(proposal, Proposal::Detected(Rect::new(180.0, 130.0, 540.0, 540.0)));
    }

    #[test]
    fn test_small_block_is_inconclusive() {
        // Sampled extent is 90 on each axis.
        let image = with_block(400, 400, 100, 100, 195, 195);
        assert_eq!(detect_bright_region(&image, &DetectionParams::default()), None);
    }

    #[test]
    fn test_narrow_block_is_inconclusive() {
        let image = with_block(400, 400, 100, 50, 150, 350);
        assert_eq!(detect_bright_region(&image, &DetectionParams::default()), None);
    }

    #[test]
    fn test_block_of_120_contains_sampled_extent() {
        for offset in 0..10 {
            let (x0, y0) = (37 + offset, 61 + offset);
            let image = with_block(400, 300, x0, y0, x0 + 119, y0 + 119);
            let rect = detect_bright_region(&image, &DetectionParams::default())
                .unwrap_or_else(|| panic!("no region for offset {offset}"));

            let first_x = x0.div_ceil(10) * 10;
            let first_y = y0.div_ceil(10) * 10;
            let last_x = (x0 + 119) / 10 * 10;
            let last_y = (y0 + 119) / 10 * 10;

            assert!(rect.x + 20.0 <= first_x as f32);
            assert!(rect.y + 20.0 <= first_y as f32);
            assert!(rect.right() - 20.0 >= last_x as f32);
            assert!(rect.bottom() - 20.0 >= last_y as f32);
        }
    }

    #[test]
    fn test_margin_is_clamped_to_image() {
        let image = with_block(300, 200, 0, 0, 299, 199);
        let rect = detect_bright_region(&image, &DetectionParams::default()).unwrap();

        assert_eq!(rect, Rect::new(0.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn test_custom_params() {
        let image = with_block(200, 200, 40, 40, 100, 100);
        let params = DetectionParams {
            stride: 5,
            threshold: 200,
            min_extent: 50,
            margin: 0,
        };

        assert_eq!(
            detect_bright_region(&image, &params),
            Some(Rect::new(40.0, 40.0, 60.0, 60.0))
        );
    }
}
