// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop selection state and drag handle types.

use crate::constant::MIN_CROP_SIZE;
use crate::domain::geometry::{Point, Rect};

/// Corner handle used to start a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl DragHandle {
    /// Handles in hit-test order, matching `Rect::corners`.
    pub const ALL: [DragHandle; 4] = [
        DragHandle::TopLeft,
        DragHandle::TopRight,
        DragHandle::BottomLeft,
        DragHandle::BottomRight,
    ];
}

/// What a drag session does to the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize(DragHandle),
}

/// State of one pointer-down to pointer-up interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub mode: DragMode,
    pub pointer_start: Point,
    pub rect_at_start: Rect,
}

/// The current crop rectangle plus the active drag session, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSelection {
    region: Rect,
    session: Option<DragSession>,
    min_size: f32,
}

impl CropSelection {
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            session: None,
            min_size: MIN_CROP_SIZE,
        }
    }

    /// Smallest width/height a resize may produce.
    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size.max(MIN_CROP_SIZE);
        self
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a drag at `at`. Ignored while another session is active.
    pub fn begin_drag(&mut self, mode: DragMode, at: Point) -> bool {
        if self.session.is_some() {
            return false;
        }

        self.session = Some(DragSession {
            mode,
            pointer_start: at,
            rect_at_start: self.region,
        });
        true
    }

    /// Apply the pointer position `at` to the active session.
    ///
    /// Always computed from the rectangle at drag start, so repeated moves do
    /// not accumulate rounding. Returns the live rectangle, or `None` if idle.
    pub fn update_drag(&mut self, at: Point) -> Option<Rect> {
        let session = self.session?;
        let (dx, dy) = at.delta_from(session.pointer_start);

        self.region = match session.mode {
            DragMode::Move => session.rect_at_start.translated(dx, dy),
            DragMode::Resize(handle) => {
                resize_region(session.rect_at_start, handle, dx, dy, self.min_size)
            }
        };
        Some(self.region)
    }

    /// End the active session. Release and cancel behave the same.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Replace the rectangle and drop any session.
    pub fn reset(&mut self, region: Rect) {
        self.region = region;
        self.session = None;
    }
}

/// Corner resize relative to the rectangle at drag start.
///
/// Width and height never drop below `min_size`; the edges opposite the
/// dragged corner stay where they were.
fn resize_region(start: Rect, handle: DragHandle, dx: f32, dy: f32, min_size: f32) -> Rect {
    let right = start.right();
    let bottom = start.bottom();

    match handle {
        DragHandle::TopLeft => {
            let x = (start.x + dx).min(right - min_size);
            let y = (start.y + dy).min(bottom - min_size);
            Rect::new(x, y, right - x, bottom - y)
        }
        DragHandle::TopRight => {
            let y = (start.y + dy).min(bottom - min_size);
            let width = (start.width + dx).max(min_size);
            Rect::new(start.x, y, width, bottom - y)
        }
        DragHandle::BottomLeft => {
            let x = (start.x + dx).min(right - min_size);
            let height = (start.height + dy).max(min_size);
            Rect::new(x, start.y, right - x, height)
        }
        DragHandle::BottomRight => {
            let width = (start.width + dx).max(min_size);
            let height = (start.height + dy).max(min_size);
            Rect::new(start.x, start.y, width, height)
        }
    }
}
