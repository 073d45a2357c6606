// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: applies an `AppMessage` to the `AppModel`.

use std::path::Path;

use image::RgbaImage;

use crate::app::document::{RasterDocument, encode_jpeg, write_file};
use crate::app::message::AppMessage;
use crate::app::model::{AppModel, CapturedReceipt};
use crate::app::selector::{CropSelector, PointerOutcome};
use crate::app::view::crop::InputEvent;
use crate::domain::document::DocResult;

/// What the host should do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Crop view or preview changed and needs repainting.
    pub redraw: bool,
    /// Suppress the platform's default handling of the input event.
    pub prevent_default: bool,
}

impl UpdateOutcome {
    fn redraw() -> Self {
        Self {
            redraw: true,
            prevent_default: false,
        }
    }
}

/// Handle one message. Failures are logged and stored in `model.error`.
pub fn update(model: &mut AppModel, message: AppMessage) -> UpdateOutcome {
    let result = match message {
        AppMessage::OpenPath(path) => open_path(model, &path),
        AppMessage::FrameCaptured(frame) => {
            start_crop(model, frame);
            Ok(UpdateOutcome::redraw())
        }
        AppMessage::Input(input) => Ok(handle_input(model, &input)),
        AppMessage::ResetCrop => reset_crop(model),
        AppMessage::Retake => {
            // Back to capture; the host sends a fresh `FrameCaptured`.
            model.selector = None;
            model.clear_error();
            Ok(UpdateOutcome::redraw())
        }
        AppMessage::ApplyCrop => apply_crop(model),
        AppMessage::CancelCrop => {
            model.selector = None;
            Ok(UpdateOutcome::redraw())
        }
        AppMessage::ClearCaptured => {
            model.captured = None;
            Ok(UpdateOutcome::redraw())
        }
        AppMessage::SaveAs(path) => save_as(model, &path),
        AppMessage::ClearError => {
            model.clear_error();
            Ok(UpdateOutcome::redraw())
        }
    };

    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("{e:#}");
            model.set_error(format!("{e:#}"));
            UpdateOutcome::redraw()
        }
    }
}

fn open_path(model: &mut AppModel, path: &Path) -> DocResult<UpdateOutcome> {
    let document = RasterDocument::open(path)?;
    start_crop(model, document.into_pixels());
    Ok(UpdateOutcome::redraw())
}

fn start_crop(model: &mut AppModel, frame: RgbaImage) {
    let selector = CropSelector::new(frame, &model.config);
    if !selector.was_detected() {
        log::info!("No receipt found, starting with the default crop");
    }
    model.selector = Some(selector);
    model.clear_error();
}

fn handle_input(model: &mut AppModel, input: &InputEvent) -> UpdateOutcome {
    let Some(selector) = model.selector.as_mut() else {
        return UpdateOutcome::default();
    };

    let response = selector.handle_input(input);
    UpdateOutcome {
        redraw: response.outcome != PointerOutcome::Ignored,
        prevent_default: response.prevent_default,
    }
}

fn reset_crop(model: &mut AppModel) -> DocResult<UpdateOutcome> {
    let selector = model
        .selector
        .as_mut()
        .ok_or_else(|| anyhow::anyhow!("No crop in progress"))?;
    selector.redetect();
    Ok(UpdateOutcome::redraw())
}

fn apply_crop(model: &mut AppModel) -> DocResult<UpdateOutcome> {
    let selector = model
        .selector
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("No crop in progress"))?;

    let image = selector.commit()?;
    let jpeg = encode_jpeg(&image, model.config.jpeg_quality)?;

    model.captured = Some(CapturedReceipt {
        image,
        jpeg,
        file_name: model.config.output_file_name.clone(),
    });
    model.selector = None;
    model.clear_error();
    Ok(UpdateOutcome::redraw())
}

fn save_as(model: &mut AppModel, path: &Path) -> DocResult<UpdateOutcome> {
    let captured = model
        .captured
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Nothing captured to save"))?;
    write_file(path, &captured.jpeg)?;
    Ok(UpdateOutcome::default())
}
