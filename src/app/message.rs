// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use image::RgbaImage;

use crate::app::view::crop::InputEvent;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Frame sources.
    OpenPath(PathBuf),
    FrameCaptured(RgbaImage),

    // Crop interaction.
    Input(InputEvent),
    ResetCrop,
    Retake,
    ApplyCrop,
    CancelCrop,

    // Captured result.
    ClearCaptured,
    SaveAs(PathBuf),

    // Errors.
    ClearError,
}
