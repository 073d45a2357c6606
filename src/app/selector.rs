// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/selector.rs
//
// Interactive crop selector: owns the frame, the proposal and the drag state.

use image::RgbaImage;

use crate::app::view::crop::{CropSelection, DragMode, InputEvent, PointerEvent, hit_test};
use crate::config::{AppConfig, DetectionParams};
use crate::domain::document::DocResult;
use crate::domain::document::operations::{crop_rect, propose_region};
use crate::domain::geometry::Rect;

/// What a single input event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Nothing changed.
    Ignored,
    /// A drag session started.
    Started(DragMode),
    /// The live rectangle changed.
    Updated(Rect),
    /// The drag session ended (release or cancel).
    Ended,
}

/// Outcome plus whether the host should suppress its default scroll/zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerResponse {
    pub outcome: PointerOutcome,
    pub prevent_default: bool,
}

impl PointerResponse {
    fn ignored() -> Self {
        Self {
            outcome: PointerOutcome::Ignored,
            prevent_default: false,
        }
    }

    fn consumed(outcome: PointerOutcome) -> Self {
        Self {
            outcome,
            prevent_default: true,
        }
    }
}

/// Crop selector for one captured frame.
///
/// All state lives here; hosts that dispatch input from several threads
/// wrap the selector in their own lock.
pub struct CropSelector {
    source: RgbaImage,
    selection: CropSelection,
    detection: DetectionParams,
    default_ratio: f32,
    hit_size: f32,
    detected: bool,
}

impl CropSelector {
    /// Start a selector on `source` with the proposed initial rectangle.
    pub fn new(source: RgbaImage, config: &AppConfig) -> Self {
        let mut selector = Self {
            selection: CropSelection::new(Rect::default()).with_min_size(config.min_crop_size),
            source,
            detection: config.detection,
            default_ratio: config.default_crop_ratio,
            hit_size: config.handle_hit_size,
            detected: false,
        };
        selector.redetect();
        selector
    }

    /// Re-run the proposal and drop any drag in progress.
    pub fn redetect(&mut self) -> Rect {
        let proposal = propose_region(&self.source, &self.detection, self.default_ratio);
        self.detected = proposal.is_detected();
        self.selection.reset(proposal.rect());
        proposal.rect()
    }

    /// Whether the current proposal came from detection rather than the fallback.
    pub fn was_detected(&self) -> bool {
        self.detected
    }

    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    /// Current (live) crop rectangle.
    pub fn region(&self) -> Rect {
        self.selection.region()
    }

    pub fn selection(&self) -> &CropSelection {
        &self.selection
    }

    /// Replace the rectangle, e.g. from a typed-in value.
    pub fn set_region(&mut self, region: Rect) {
        self.selection.reset(region);
    }

    /// Feed one host input event through the controller.
    pub fn handle_input(&mut self, input: &InputEvent) -> PointerResponse {
        let dragging = self.selection.is_dragging();

        let Some(event) = input.normalize() else {
            // Touch event without touch points: still ours while dragging.
            return PointerResponse {
                outcome: PointerOutcome::Ignored,
                prevent_default: dragging,
            };
        };

        match event {
            PointerEvent::Down(_) if dragging => PointerResponse::ignored(),
            PointerEvent::Down(at) => match hit_test(self.selection.region(), at, self.hit_size) {
                Some(mode) if self.selection.begin_drag(mode, at) => {
                    log::debug!("Drag started: {mode:?} at ({}, {})", at.x, at.y);
                    PointerResponse::consumed(PointerOutcome::Started(mode))
                }
                _ => PointerResponse::ignored(),
            },
            PointerEvent::Move(at) => match self.selection.update_drag(at) {
                Some(rect) => PointerResponse::consumed(PointerOutcome::Updated(rect)),
                None => PointerResponse::ignored(),
            },
            PointerEvent::Up | PointerEvent::Cancel => match self.selection.end_drag() {
                Some(_) => {
                    log::debug!("Drag ended ({event:?}): {}", self.selection.region());
                    PointerResponse {
                        outcome: PointerOutcome::Ended,
                        prevent_default: false,
                    }
                }
                None => PointerResponse::ignored(),
            },
        }
    }

    /// Crop the source to the current rectangle, clamped to the image.
    pub fn commit(&self) -> DocResult<RgbaImage> {
        let cropped = crop_rect(&self.source, self.selection.region())?;
        log::info!(
            "Crop committed: {} -> {}x{}",
            self.selection.region(),
            cropped.width(),
            cropped.height()
        );
        Ok(cropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::crop::DragHandle;
    use crate::domain::geometry::Point;
    use image::Rgba;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    fn dark(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([20, 20, 20, 255]))
    }

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseDown { x, y }
    }

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMove { x, y }
    }

    fn touch(x: f32, y: f32) -> Vec<Point> {
        vec![Point::new(x, y)]
    }

    #[test]
    fn test_dark_frame_uses_default_region() {
        let selector = CropSelector::new(dark(500, 500), &config());

        assert!(!selector.was_detected());
        assert_eq!(selector.region(), Rect::new(50.0, 50.0, 400.0, 400.0));
    }

    #[test]
    fn test_detected_region_is_proposed() {
        let frame = RgbaImage::from_fn(1000, 800, |x, y| {
            if (200..=700).contains(&x) && (150..=650).contains(&y) {
                Rgba([250, 250, 250, 255])
            } else {
                Rgba([10, 10, 10, 255])
            }
        });
        let selector = CropSelector::new(frame, &config());

        assert!(selector.was_detected());
        assert_eq!(selector.region(), Rect::new(180.0, 130.0, 540.0, 540.0));
    }

    #[test]
    fn test_mouse_move_session() {
        let mut selector = CropSelector::new(dark(500, 500), &config());

        let response = selector.handle_input(&down(200.0, 200.0));
        assert_eq!(response.outcome, PointerOutcome::Started(DragMode::Move));
        assert!(response.prevent_default);

        let response = selector.handle_input(&mouse_move(230.0, 215.0));
        assert_eq!(
            response.outcome,
            PointerOutcome::Updated(Rect::new(80.0, 65.0, 400.0, 400.0))
        );

        let response = selector.handle_input(&InputEvent::MouseUp);
        assert_eq!(response.outcome, PointerOutcome::Ended);
        assert!(!selector.selection().is_dragging());
    }

    #[test]
    fn test_touch_resize_suppresses_default() {
        let mut selector = CropSelector::new(dark(500, 500), &config());

        let response = selector.handle_input(&InputEvent::TouchStart {
            touches: touch(450.0, 450.0),
        });
        assert_eq!(
            response.outcome,
            PointerOutcome::Started(DragMode::Resize(DragHandle::BottomRight))
        );

        let response = selector.handle_input(&InputEvent::TouchMove {
            touches: touch(430.0, 400.0),
        });
        assert!(response.prevent_default);
        assert_eq!(selector.region(), Rect::new(50.0, 50.0, 380.0, 350.0));

        // Empty touch list mid-drag keeps the default suppressed.
        let response = selector.handle_input(&InputEvent::TouchMove { touches: vec![] });
        assert_eq!(response.outcome, PointerOutcome::Ignored);
        assert!(response.prevent_default);
    }

    #[test]
    fn test_touch_cancel_resets_like_release() {
        let mut selector = CropSelector::new(dark(500, 500), &config());
        selector.handle_input(&InputEvent::TouchStart {
            touches: touch(250.0, 250.0),
        });
        selector.handle_input(&InputEvent::TouchMove {
            touches: touch(260.0, 250.0),
        });

        let response = selector.handle_input(&InputEvent::TouchCancel);
        assert_eq!(response.outcome, PointerOutcome::Ended);
        assert!(!selector.selection().is_dragging());

        // Later moves do not leak into the next gesture.
        let response = selector.handle_input(&InputEvent::TouchMove {
            touches: touch(400.0, 400.0),
        });
        assert_eq!(response.outcome, PointerOutcome::Ignored);
        assert!(!response.prevent_default);
        assert_eq!(selector.region(), Rect::new(60.0, 50.0, 400.0, 400.0));
    }

    #[test]
    fn test_second_down_is_ignored() {
        let mut selector = CropSelector::new(dark(500, 500), &config());
        selector.handle_input(&down(250.0, 250.0));

        let response = selector.handle_input(&InputEvent::TouchStart {
            touches: touch(50.0, 50.0),
        });
        assert_eq!(response.outcome, PointerOutcome::Ignored);
        assert_eq!(
            selector.selection().session().map(|s| s.mode),
            Some(DragMode::Move)
        );
    }

    #[test]
    fn test_down_outside_region_is_ignored() {
        let mut selector = CropSelector::new(dark(500, 500), &config());

        let response = selector.handle_input(&down(5.0, 5.0));
        assert_eq!(response, PointerResponse::ignored());
        assert_eq!(
            selector.handle_input(&mouse_move(50.0, 50.0)).outcome,
            PointerOutcome::Ignored
        );
    }

    #[test]
    fn test_commit_full_frame_roundtrip() {
        let frame = RgbaImage::from_fn(64, 32, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let mut selector = CropSelector::new(frame.clone(), &config());
        selector.set_region(Rect::new(0.0, 0.0, 64.0, 32.0));

        assert_eq!(selector.commit().unwrap(), frame);
    }

    #[test]
    fn test_commit_after_dragging_off_image_is_clamped() {
        let mut selector = CropSelector::new(dark(500, 500), &config());
        selector.handle_input(&down(250.0, 250.0));
        selector.handle_input(&mouse_move(450.0, 250.0));
        selector.handle_input(&InputEvent::MouseUp);

        assert_eq!(selector.region(), Rect::new(250.0, 50.0, 400.0, 400.0));
        assert_eq!(selector.commit().unwrap().dimensions(), (250, 400));
    }

    #[test]
    fn test_commit_entirely_off_image_fails() {
        let mut selector = CropSelector::new(dark(100, 100), &config());
        selector.set_region(Rect::new(200.0, 200.0, 50.0, 50.0));

        assert!(selector.commit().is_err());
    }

    #[test]
    fn test_redetect_discards_adjustments() {
        let mut selector = CropSelector::new(dark(500, 500), &config());
        selector.handle_input(&down(250.0, 250.0));
        selector.handle_input(&mouse_move(300.0, 300.0));

        let region = selector.redetect();
        assert_eq!(region, Rect::new(50.0, 50.0, 400.0, 400.0));
        assert!(!selector.selection().is_dragging());
    }
}
