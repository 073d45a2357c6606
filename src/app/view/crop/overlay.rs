// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay geometry: hit testing, handle squares, dimming bands and
// screen/image coordinate mapping for a presentation layer.

use crate::app::view::crop::selection::{DragHandle, DragMode};
use crate::constant::HANDLE_SIZE;
use crate::domain::geometry::{Point, Rect};

/// Maps between screen coordinates and image pixels.
///
/// `screen = offset + image * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    /// Fit an image into a view of `view_width` x `view_height`, centered.
    pub fn fit(img_width: u32, img_height: u32, view_width: f32, view_height: f32) -> Self {
        if img_width == 0 || img_height == 0 {
            return Self::default();
        }
        let scale_x = view_width / img_width as f32;
        let scale_y = view_height / img_height as f32;
        let scale = scale_x.min(scale_y);

        Self {
            scale,
            offset_x: (view_width - img_width as f32 * scale) / 2.0,
            offset_y: (view_height - img_height as f32 * scale) / 2.0,
        }
    }

    pub fn screen_to_image(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.offset_x) / self.scale,
            (point.y - self.offset_y) / self.scale,
        )
    }

    pub fn image_to_screen(&self, point: Point) -> Point {
        Point::new(
            self.offset_x + point.x * self.scale,
            self.offset_y + point.y * self.scale,
        )
    }

    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        let origin = self.image_to_screen(Point::new(rect.x, rect.y));
        Rect::new(
            origin.x,
            origin.y,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }
}

/// Classify a pointer-down against the crop rectangle.
///
/// Corner zones win over the body so that a press right on a corner
/// resizes. Returns `None` when the press misses the rectangle entirely.
pub fn hit_test(region: Rect, point: Point, hit_size: f32) -> Option<DragMode> {
    let handle = DragHandle::ALL
        .into_iter()
        .zip(region.corners())
        .find(|(_, corner)| Rect::centered_square(*corner, hit_size).contains(point))
        .map(|(handle, _)| handle);

    match handle {
        Some(handle) => Some(DragMode::Resize(handle)),
        None if region.contains(point) => Some(DragMode::Move),
        None => None,
    }
}

/// Drawn handle squares, in `DragHandle::ALL` order.
pub fn handle_rects(region: Rect) -> [(DragHandle, Rect); 4] {
    let corners = region.corners();
    let mut out = [(DragHandle::TopLeft, Rect::default()); 4];
    for (slot, (handle, corner)) in out.iter_mut().zip(DragHandle::ALL.into_iter().zip(corners)) {
        *slot = (handle, Rect::centered_square(corner, HANDLE_SIZE));
    }
    out
}

/// Dimming bands around the selection inside `bounds`: top, bottom, left, right.
///
/// Empty bands are omitted.
pub fn shade_rects(bounds: Rect, region: Rect) -> Vec<Rect> {
    let top = region.y.clamp(bounds.y, bounds.bottom());
    let bottom = region.bottom().clamp(top, bounds.bottom());
    let left = region.x.clamp(bounds.x, bounds.right());
    let right = region.right().clamp(left, bounds.right());

    [
        Rect::new(bounds.x, bounds.y, bounds.width, top - bounds.y),
        Rect::new(bounds.x, bottom, bounds.width, bounds.bottom() - bottom),
        Rect::new(bounds.x, top, left - bounds.x, bottom - top),
        Rect::new(right, top, bounds.right() - right, bottom - top),
    ]
    .into_iter()
    .filter(|r| r.width > 0.0 && r.height > 0.0)
    .collect()
}
