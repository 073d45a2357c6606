// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use image::RgbaImage;

use crate::app::selector::CropSelector;
use crate::config::AppConfig;

/// A committed crop, ready for preview and upload.
#[derive(Debug, Clone)]
pub struct CapturedReceipt {
    pub image: RgbaImage,
    pub jpeg: Vec<u8>,
    pub file_name: String,
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    pub config: AppConfig,

    // Crop view, open while a frame is being adjusted.
    pub selector: Option<CropSelector>,

    // Committed result shown in the form preview.
    pub captured: Option<CapturedReceipt>,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            selector: None,
            captured: None,
            error: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_cropping(&self) -> bool {
        self.selector.is_some()
    }
}
